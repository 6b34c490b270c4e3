//! PNG rendering and logging setup shared by the example binaries.
use anyhow::{bail, Context};
use crowd_layout::prelude::*;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber honoring `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image output settings. The placement area is stretched over the whole image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    pub area: PlacementBounds,
    pub background: [u8; 3],
    pub dot_color: [u8; 3],
    pub dot_radius: i32,
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), area: PlacementBounds) -> Self {
        Self {
            image_size,
            area,
            background: [24, 26, 32],
            dot_color: [245, 240, 220],
            dot_radius: 6,
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn to_pixel(&self, p: Vec2) -> (i32, i32) {
        let u = (p.x - self.area.x_min) / self.area.width();
        let v = (p.y - self.area.y_min) / self.area.height();
        (
            (u * self.image_size.0 as f32) as i32,
            (v * self.image_size.1 as f32) as i32,
        )
    }
}

/// Parse `#rrggbb` into RGB bytes.
pub fn parse_hex_color(s: &str) -> anyhow::Result<[u8; 3]> {
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        bail!("expected #rrggbb, got '{s}'");
    }
    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("bad color '{s}'"))
    };
    Ok([channel(0)?, channel(2)?, channel(4)?])
}

/// Fill color of an outcome's zone. Outcomes without a usable color fall
/// back to the background.
pub fn zone_color(outcome: &Outcome, config: &RenderConfig) -> [u8; 3] {
    if outcome.color.is_empty() {
        return config.background;
    }
    match parse_hex_color(&outcome.color) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!("Outcome '{}': {err:#}; using background.", outcome.id);
            config.background
        }
    }
}

/// Render zone crowds: each zone filled with its outcome's color, each entity
/// as a dot.
pub fn render_zone_crowds_to_png<E>(
    zones: &[ZoneCrowd<E>],
    outcomes: &[Outcome],
    config: &RenderConfig,
    out_path: &str,
) -> anyhow::Result<()> {
    let (w, h) = config.image_size;
    let mut img = RgbImage::from_pixel(w, h, Rgb(config.background));

    for zone in zones {
        let color = outcomes
            .iter()
            .find(|o| o.id == zone.outcome_id)
            .map_or(config.background, |o| zone_color(o, config));
        let (x0, y0) = config.to_pixel(zone.bounds.min());
        let (x1, y1) = config.to_pixel(zone.bounds.max());
        fill_rect(&mut img, (x0, y0), (x1, y1), darken(color));

        for placed in &zone.placed {
            let (cx, cy) = config.to_pixel(placed.position);
            fill_circle(&mut img, cx, cy, config.dot_radius, config.dot_color);
        }
    }

    img.save(out_path)
        .with_context(|| format!("failed to write {out_path}"))?;
    tracing::info!("Wrote {}.", out_path);
    Ok(())
}

fn darken(c: [u8; 3]) -> [u8; 3] {
    [c[0] / 3, c[1] / 3, c[2] / 3]
}

fn put(img: &mut RgbImage, x: i32, y: i32, color: [u8; 3]) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, Rgb(color));
    }
}

fn fill_rect(img: &mut RgbImage, min: (i32, i32), max: (i32, i32), color: [u8; 3]) {
    for y in min.1..max.1 {
        for x in min.0..max.0 {
            put(img, x, y, color);
        }
    }
}

fn fill_circle(img: &mut RgbImage, cx: i32, cy: i32, r: i32, color: [u8; 3]) {
    let r2 = r * r;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r2 {
                put(img, cx + dx, cy + dy, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_color_accepts_rrggbb() {
        assert_eq!(parse_hex_color("#22c55e").unwrap(), [0x22, 0xc5, 0x5e]);
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#zzzzzz").is_err());
    }

    #[test]
    fn parse_hex_color_rejects_multibyte_input() {
        assert!(parse_hex_color("a€bc").is_err());
        assert!(parse_hex_color("#a€bc").is_err());
    }

    #[test]
    fn zone_color_falls_back_to_background() {
        let rc = RenderConfig::new((10, 10), PlacementBounds::new(0.0, 10.0, 0.0, 10.0))
            .with_background([1, 2, 3]);
        assert_eq!(zone_color(&Outcome::new("yes", 1.0), &rc), [1, 2, 3]);
        let bad = Outcome::new("no", 1.0).with_color("a€bc");
        assert_eq!(zone_color(&bad, &rc), [1, 2, 3]);
        let good = Outcome::new("no", 1.0).with_color("#22c55e");
        assert_eq!(zone_color(&good, &rc), [0x22, 0xc5, 0x5e]);
    }

    #[test]
    fn renders_outcomes_without_color() {
        let area = PlacementBounds::new(0.0, 100.0, 0.0, 100.0);
        let outcomes = vec![Outcome::new("yes", 1.0), Outcome::new("no", 1.0)];
        let ranges = partition_columns(&outcomes, 24);
        let crowds = vec![(
            "yes".to_string(),
            vec![Entity::new("a", "a"), Entity::new("b", "b")],
        )];
        let opts = PlacementOptions::new(10.0, "s");
        let zones = place_in_zones(&crowds, &ranges, 24, &area, 1.0, &opts);
        let file = format!("crowd_layout_render_{}.png", std::process::id());
        let out = std::env::temp_dir().join(file).to_string_lossy().into_owned();
        let rc = RenderConfig::new((64, 64), area);
        render_zone_crowds_to_png(&zones, &outcomes, &rc, &out).unwrap();
        let _ = std::fs::remove_file(&out);
    }

    #[test]
    fn to_pixel_maps_area_corners() {
        let rc = RenderConfig::new((200, 100), PlacementBounds::new(0.0, 100.0, 0.0, 50.0));
        assert_eq!(rc.to_pixel(Vec2::new(0.0, 0.0)), (0, 0));
        assert_eq!(rc.to_pixel(Vec2::new(50.0, 25.0)), (100, 50));
    }
}
