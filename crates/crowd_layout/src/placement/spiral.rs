//! Golden-angle spiral placement for very small crowds.
use glam::Vec2;

use crate::placement::bounds::PlacementBounds;

/// Crowds up to this size are placed on the spiral without any search.
pub const SPIRAL_MAX_COUNT: usize = 3;

/// Angle step between consecutive spiral positions, in radians.
pub const GOLDEN_ANGLE_STEP: f32 = 2.4;

/// Fraction of the half extents the spiral may reach.
pub const SPIRAL_DAMPING: f32 = 0.6;

/// Position of entity `index` out of `count` on a golden-angle spiral centered
/// in `area`.
///
/// The radius grows linearly with `index / count`, so the first entity sits
/// exactly at the center.
pub fn spiral_position(index: usize, count: usize, area: &PlacementBounds) -> Vec2 {
    let angle = index as f32 * GOLDEN_ANGLE_STEP;
    let r = index as f32 / count.max(1) as f32;
    let center = area.center();
    let half_w = area.width() * 0.5;
    let half_h = area.height() * 0.5;
    Vec2::new(
        center.x + angle.cos() * r * half_w * SPIRAL_DAMPING,
        center.y + angle.sin() * r * half_h * SPIRAL_DAMPING,
    )
}

/// Spiral positions for `count` entities.
pub fn spiral_positions(count: usize, area: &PlacementBounds) -> Vec<Vec2> {
    (0..count)
        .map(|i| spiral_position(i, count, area))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_position_is_center() {
        let area = PlacementBounds::new(0.0, 100.0, 0.0, 50.0);
        assert_eq!(spiral_position(0, 3, &area), Vec2::new(50.0, 25.0));
    }

    #[test]
    fn positions_follow_golden_angle() {
        let area = PlacementBounds::new(0.0, 100.0, 0.0, 100.0);
        let pts = spiral_positions(3, &area);
        assert_eq!(pts.len(), 3);
        for (i, p) in pts.iter().enumerate() {
            let angle = i as f32 * 2.4;
            let r = i as f32 / 3.0;
            let expected = Vec2::new(
                50.0 + angle.cos() * r * 50.0 * 0.6,
                50.0 + angle.sin() * r * 50.0 * 0.6,
            );
            assert_eq!(*p, expected);
        }
    }

    #[test]
    fn positions_stay_inside_area() {
        let area = PlacementBounds::new(-3.0, 7.0, 2.0, 4.0);
        for count in 1..=SPIRAL_MAX_COUNT {
            for p in spiral_positions(count, &area) {
                assert!(area.contains(p), "{p:?} outside {area:?}");
            }
        }
    }
}
