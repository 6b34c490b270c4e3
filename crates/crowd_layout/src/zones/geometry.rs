//! Zone geometry: mapping column ranges into container and placement space.
//!
//! Zone rectangles are derived from [`ColumnRange`]s and the current container
//! geometry every time they are needed. Nothing here caches, since the
//! container may be resized or scrolled between pointer events.
use glam::Vec2;

use crate::placement::bounds::{PlacementBounds, MIN_BOUNDS_EXTENT};
use crate::zones::partition::ColumnRange;
use crate::zones::OutcomeId;

/// Current container geometry in the caller's screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerRect {
    /// Top-left corner.
    pub origin: Vec2,
    pub size: Vec2,
}

impl ContainerRect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::new(Vec2::new(x, y), Vec2::new(width, height))
    }
}

/// Rectangle of one outcome's zone in container space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneRect {
    pub outcome_id: OutcomeId,
    pub min: Vec2,
    pub max: Vec2,
}

impl ZoneRect {
    pub fn new(outcome_id: impl Into<OutcomeId>, min: Vec2, max: Vec2) -> Self {
        Self {
            outcome_id: outcome_id.into(),
            min,
            max,
        }
    }

    /// Edge-inclusive containment test.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Horizontal fraction of the grid at which column boundary `col` lies.
#[inline]
fn column_fraction(col: usize, columns: usize) -> f32 {
    col as f32 / columns.max(1) as f32
}

/// Container-space rectangle of one column range, spanning the full height.
pub fn zone_rect(range: &ColumnRange, columns: usize, container: &ContainerRect) -> ZoneRect {
    let x0 = container.origin.x + column_fraction(range.col_start, columns) * container.size.x;
    let x1 = container.origin.x + column_fraction(range.col_end, columns) * container.size.x;
    ZoneRect::new(
        range.outcome_id.clone(),
        Vec2::new(x0, container.origin.y),
        Vec2::new(x1, container.origin.y + container.size.y),
    )
}

/// Container-space rectangles for all ranges, in range order.
pub fn zone_rects(
    ranges: &[ColumnRange],
    columns: usize,
    container: &ContainerRect,
) -> Vec<ZoneRect> {
    ranges
        .iter()
        .map(|r| zone_rect(r, columns, container))
        .collect()
}

/// Placement bounds of a zone inside an overall placement `area`.
///
/// The zone spans its columns' share of the area's width and the full height,
/// inset horizontally by `gutter` on each side. The gutter shrinks as needed
/// so the zone stays at least [`MIN_BOUNDS_EXTENT`] wide.
pub fn zone_bounds(
    range: &ColumnRange,
    columns: usize,
    area: &PlacementBounds,
    gutter: f32,
) -> PlacementBounds {
    let width = area.width();
    let x0 = area.x_min + column_fraction(range.col_start, columns) * width;
    let x1 = area.x_min + column_fraction(range.col_end, columns) * width;
    let max_gutter = ((x1 - x0 - MIN_BOUNDS_EXTENT) * 0.5).max(0.0);
    let g = gutter.max(0.0).min(max_gutter);
    PlacementBounds::new(x0 + g, x1 - g, area.y_min, area.y_max)
}
