//! Zone resolution: which zone, if any, contains a point.
use glam::Vec2;

use crate::zones::geometry::ZoneRect;
use crate::zones::OutcomeId;

/// Returns the id of the first rectangle containing `point`.
///
/// Containment is edge-inclusive. Overlapping rectangles resolve to the first
/// match in slice order.
pub fn resolve_zone(point: Vec2, rects: &[ZoneRect]) -> Option<&OutcomeId> {
    rects
        .iter()
        .find(|r| r.contains(point))
        .map(|r| &r.outcome_id)
}

/// Registry of the current zone rectangles.
///
/// The rendering layer pushes fresh rectangles with [`ZoneResolver::update`]
/// after every layout pass; lookups scan them linearly.
#[derive(Debug, Clone, Default)]
pub struct ZoneResolver {
    rects: Vec<ZoneRect>,
}

impl ZoneResolver {
    pub fn new() -> Self {
        Self { rects: Vec::new() }
    }

    pub fn with_rects(rects: Vec<ZoneRect>) -> Self {
        Self { rects }
    }

    /// Replace the registered rectangles.
    pub fn update(&mut self, rects: Vec<ZoneRect>) {
        self.rects = rects;
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn rects(&self) -> &[ZoneRect] {
        &self.rects
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Outcome id of the zone containing `point`, if any.
    pub fn resolve(&self, point: impl Into<Vec2>) -> Option<&OutcomeId> {
        resolve_zone(point.into(), &self.rects)
    }
}
