//! Rectangular placement bounds in normalized coordinates.
use glam::Vec2;
use tracing::warn;

use crate::error::{Error, Result};

/// Smallest width or height a bound is clamped up to.
pub const MIN_BOUNDS_EXTENT: f32 = 1.0;

/// Axis-aligned rectangle that placed positions must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementBounds {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl PlacementBounds {
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Bounds spanning `min..max` on both axes.
    pub fn from_corners(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, max.x, min.y, max.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.x_min + self.x_max) * 0.5,
            (self.y_min + self.y_max) * 0.5,
        )
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x_min, self.y_min)
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x_max, self.y_max)
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x_min && p.x <= self.x_max && p.y >= self.y_min && p.y <= self.y_max
    }

    /// Clamp a point into the bounds.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }

    /// Map unit coordinates `(u, v)` in `[0, 1]` onto the bounds.
    pub fn map_unit(&self, u: f32, v: f32) -> Vec2 {
        Vec2::new(
            self.x_min + u * self.width(),
            self.y_min + v * self.height(),
        )
    }

    /// Returns bounds whose width and height are at least [`MIN_BOUNDS_EXTENT`],
    /// growing degenerate axes symmetrically around their center.
    pub fn sanitized(&self) -> Self {
        let (x_min, x_max, x_clamped) = sanitize_axis(self.x_min, self.x_max);
        let (y_min, y_max, y_clamped) = sanitize_axis(self.y_min, self.y_max);
        if x_clamped || y_clamped {
            warn!(
                "Degenerate placement bounds ({}..{}, {}..{}); clamped to ({}..{}, {}..{}).",
                self.x_min, self.x_max, self.y_min, self.y_max, x_min, x_max, y_min, y_max
            );
        }
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// Inset the bounds by `padding` on every side.
    ///
    /// The inset per axis is limited to a quarter of that axis' extent, so the
    /// padded area keeps at least half of the original width and height.
    pub fn padded(&self, padding: f32) -> Self {
        let padding = padding.max(0.0);
        let pad_x = padding.min(self.width() * 0.25);
        let pad_y = padding.min(self.height() * 0.25);
        Self::new(
            self.x_min + pad_x,
            self.x_max - pad_x,
            self.y_min + pad_y,
            self.y_max - pad_y,
        )
    }

    /// Validates the bounds, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        let all_finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(Error::InvalidConfig("bounds must be finite".into()));
        }
        if self.x_min >= self.x_max || self.y_min >= self.y_max {
            return Err(Error::InvalidConfig(
                "bounds require x_min < x_max and y_min < y_max".into(),
            ));
        }
        Ok(())
    }
}

fn sanitize_axis(min: f32, max: f32) -> (f32, f32, bool) {
    if min.is_finite() && max.is_finite() && max - min >= MIN_BOUNDS_EXTENT {
        return (min, max, false);
    }
    let mut center = (min + max) * 0.5;
    if !center.is_finite() {
        center = if min.is_finite() { min } else { 0.0 };
    }
    let half = MIN_BOUNDS_EXTENT * 0.5;
    (center - half, center + half, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_and_center() {
        let b = PlacementBounds::new(5.0, 92.0, 15.0, 85.0);
        assert_eq!(b.width(), 87.0);
        assert_eq!(b.height(), 70.0);
        assert_eq!(b.center(), Vec2::new(48.5, 50.0));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn contains_is_edge_inclusive() {
        let b = PlacementBounds::new(0.0, 10.0, 0.0, 5.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(10.0, 5.0)));
        assert!(!b.contains(Vec2::new(10.01, 2.0)));
    }

    #[test]
    fn padded_insets_each_side() {
        let b = PlacementBounds::new(0.0, 100.0, 0.0, 50.0).padded(2.0);
        assert_eq!(b, PlacementBounds::new(2.0, 98.0, 2.0, 48.0));
    }

    #[test]
    fn padded_never_collapses_small_bounds() {
        let b = PlacementBounds::new(0.0, 4.0, 0.0, 100.0).padded(10.0);
        assert_eq!(b.x_min, 1.0);
        assert_eq!(b.x_max, 3.0);
        assert_eq!(b.y_min, 10.0);
    }

    #[test]
    fn sanitized_grows_degenerate_axes() {
        let b = PlacementBounds::new(10.0, 10.0, 20.0, 5.0).sanitized();
        assert_eq!(b.width(), MIN_BOUNDS_EXTENT);
        assert_eq!(b.height(), MIN_BOUNDS_EXTENT);
        assert_eq!(b.center(), Vec2::new(10.0, 12.5));

        let ok = PlacementBounds::new(0.0, 10.0, 0.0, 10.0);
        assert_eq!(ok.sanitized(), ok);
    }

    #[test]
    fn sanitized_handles_non_finite_input() {
        let b = PlacementBounds::new(f32::NAN, 10.0, 0.0, f32::INFINITY).sanitized();
        assert!(b.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        let err = PlacementBounds::new(10.0, 0.0, 0.0, 10.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn map_unit_spans_bounds() {
        let b = PlacementBounds::new(10.0, 20.0, 0.0, 4.0);
        assert_eq!(b.map_unit(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(b.map_unit(0.5, 1.0), Vec2::new(15.0, 4.0));
    }
}
