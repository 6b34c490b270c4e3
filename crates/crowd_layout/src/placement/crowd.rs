//! Deterministic crowd placement.
//!
//! Small crowds (up to [`SPIRAL_MAX_COUNT`]) sit on a golden-angle spiral.
//! Larger crowds run a best-candidate search per entity: a seeded series of
//! trial positions is drawn and the one farthest from everything placed so far
//! wins, stopping early once the spacing target is met.
//!
//! Processing order is part of the determinism contract. Each entity's search
//! only sees entities placed before it in the same call, so reordering the
//! input may move every entity but the first.
use glam::Vec2;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::placement::bounds::PlacementBounds;
use crate::placement::spiral::{spiral_positions, SPIRAL_MAX_COUNT};
use crate::placement::{Identified, PlacedEntity, PlacementOptions};
use crate::seed::{draw, entity_seed, trial_seed};
use crate::zones::geometry::zone_bounds;
use crate::zones::partition::ColumnRange;
use crate::zones::OutcomeId;

/// Total width of the per-trial jitter on each axis, in bound units.
pub const JITTER_SPAN: f32 = 2.0;

/// Trial budget of the first entity.
pub const MAX_ATTEMPTS: usize = 50;

/// Trial budget floor for late entities.
pub const MIN_ATTEMPTS: usize = 20;

/// Trial budget of the entity at `index`: later entities get fewer tries.
#[inline]
pub fn attempts_for(index: usize) -> usize {
    MAX_ATTEMPTS
        .saturating_sub(index.saturating_mul(2))
        .max(MIN_ATTEMPTS)
}

/// Places entities inside bounds according to [`PlacementOptions`].
#[derive(Debug, Clone)]
pub struct CrowdPlacer {
    pub options: PlacementOptions,
}

impl CrowdPlacer {
    pub fn try_new(options: PlacementOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn new(options: PlacementOptions) -> Self {
        debug_assert!(options.min_spacing > 0.0, "min_spacing must be > 0");
        debug_assert!(options.edge_padding >= 0.0, "edge_padding must be >= 0");
        Self { options }
    }

    /// Places every entity, returning them in input order with positions.
    pub fn place<E: Identified + Clone>(
        &self,
        entities: &[E],
        bounds: &PlacementBounds,
    ) -> Vec<PlacedEntity<E>> {
        self.positions(entities, bounds)
            .into_iter()
            .zip(entities)
            .map(|(position, entity)| PlacedEntity::new(entity.clone(), position))
            .collect()
    }

    /// Computes positions only, one per entity in input order.
    pub fn positions<E: Identified>(&self, entities: &[E], bounds: &PlacementBounds) -> Vec<Vec2> {
        if entities.is_empty() {
            return Vec::new();
        }

        let area = self.placement_area(bounds);
        if entities.len() <= SPIRAL_MAX_COUNT {
            return spiral_positions(entities.len(), &area);
        }

        best_candidate_positions(entities, &area, &self.options)
    }

    /// The padded area positions are confined to for `bounds`.
    pub fn placement_area(&self, bounds: &PlacementBounds) -> PlacementBounds {
        bounds.sanitized().padded(self.options.edge_padding)
    }
}

/// Places `entities` inside `bounds` with the given options.
pub fn place_crowd<E: Identified + Clone>(
    entities: &[E],
    bounds: &PlacementBounds,
    options: &PlacementOptions,
) -> Vec<PlacedEntity<E>> {
    CrowdPlacer::new(options.clone()).place(entities, bounds)
}

/// One outcome's crowd, placed inside that outcome's zone.
#[derive(Debug, Clone)]
pub struct ZoneCrowd<E> {
    pub outcome_id: OutcomeId,
    /// Zone bounds the crowd was placed in.
    pub bounds: PlacementBounds,
    pub placed: Vec<PlacedEntity<E>>,
}

/// Places each outcome's entities inside its zone.
///
/// Zones come from `ranges` mapped into `area` (see [`zone_bounds`]). Each
/// crowd is seeded with `"{outcome_id}-zone"`, overriding `options.seed`.
/// Crowds whose outcome has no range are skipped.
pub fn place_in_zones<E: Identified + Clone>(
    crowds: &[(OutcomeId, Vec<E>)],
    ranges: &[ColumnRange],
    columns: usize,
    area: &PlacementBounds,
    gutter: f32,
    options: &PlacementOptions,
) -> Vec<ZoneCrowd<E>> {
    let mut out = Vec::with_capacity(crowds.len());
    for (outcome_id, entities) in crowds {
        let Some(range) = ranges.iter().find(|r| &r.outcome_id == outcome_id) else {
            warn!("No column range for outcome '{}'; skipping its crowd.", outcome_id);
            continue;
        };
        let bounds = zone_bounds(range, columns, area, gutter);
        let zone_options = options.clone().with_seed(format!("{outcome_id}-zone"));
        let placer = CrowdPlacer::new(zone_options);
        out.push(ZoneCrowd {
            outcome_id: outcome_id.clone(),
            bounds,
            placed: placer.place(entities, &bounds),
        });
    }
    out
}

fn best_candidate_positions<E: Identified>(
    entities: &[E],
    area: &PlacementBounds,
    options: &PlacementOptions,
) -> Vec<Vec2> {
    let target = options.target_spacing(entities.len());
    let mut placed: Vec<Vec2> = Vec::with_capacity(entities.len());
    let mut shortfalls = 0usize;

    for (i, entity) in entities.iter().enumerate() {
        let seed = entity_seed(&options.seed, entity.id(), entity.label());

        let mut best = area.center();
        let mut best_d = f32::NEG_INFINITY;
        for attempt in 0..attempts_for(i) {
            let p = trial_position(trial_seed(seed, attempt), area);
            let d = nearest_distance(p, &placed);
            if d > best_d {
                best_d = d;
                best = p;
            }
            if best_d >= target {
                break;
            }
        }

        if best_d < target {
            shortfalls += 1;
            trace!(
                "Entity '{}' placed at distance {:.2} (target {:.2}).",
                entity.id(),
                best_d,
                target
            );
        }
        placed.push(best);
    }

    debug!(
        "Placed {} entities with seed '{}'; {} below spacing target {:.2}.",
        placed.len(),
        options.seed,
        shortfalls,
        target
    );
    placed
}

/// One trial position: two decorrelated draws plus jitter, clamped into `area`.
fn trial_position(seed: u64, area: &PlacementBounds) -> Vec2 {
    let u = draw(seed);
    let v = draw(seed.wrapping_add(1));
    let jitter = Vec2::new(
        (draw(seed.wrapping_add(2)) - 0.5) * JITTER_SPAN,
        (draw(seed.wrapping_add(3)) - 0.5) * JITTER_SPAN,
    );
    area.clamp(area.map_unit(u, v) + jitter)
}

/// Distance from `p` to the nearest point in `placed`, or infinity if empty.
fn nearest_distance(p: Vec2, placed: &[Vec2]) -> f32 {
    let mut best = f32::INFINITY;
    for &q in placed {
        let dsq = p.distance_squared(q);
        if dsq < best {
            best = dsq;
        }
    }
    best.sqrt()
}
