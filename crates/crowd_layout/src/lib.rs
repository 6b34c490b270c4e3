#![forbid(unsafe_code)]
//! crowd_layout: deterministic crowd placement and weighted zone partitioning.
//!
//! Modules:
//! - seed: identity hashing and stateless seeded draws
//! - placement: bounds, options, and the crowd placer (spiral and best-candidate search)
//! - zones: column partitioning, zone geometry, hit-testing, drag sessions and events
//!
//! Every layout function is a pure function of its inputs; the only stateful
//! piece is [`zones::drag::DragSession`], driven one pointer event at a time.
pub mod error;
pub mod placement;
pub mod seed;
pub mod zones;

/// Convenient re-exports for common types. Import with `use crowd_layout::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::placement::bounds::PlacementBounds;
    pub use crate::placement::crowd::{place_crowd, place_in_zones, CrowdPlacer, ZoneCrowd};
    pub use crate::placement::{Entity, Identified, PlacedEntity, PlacementOptions};
    pub use crate::seed::{draw, entity_seed, identity_hash};
    pub use crate::zones::drag::{DragSession, DragState};
    pub use crate::zones::events::{
        DragEvent, DragEventKind, DragEventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::zones::geometry::{zone_bounds, zone_rects, ContainerRect, ZoneRect};
    pub use crate::zones::partition::{
        absorb_remainder, normalize_weights, option_for_column, partition_columns, ColumnRange,
    };
    pub use crate::zones::resolver::{resolve_zone, ZoneResolver};
    pub use crate::zones::{Outcome, OutcomeId};
}
