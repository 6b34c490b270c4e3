//! Crowd placement: entities, options, bounds and the placer itself.
//!
//! A placement call maps a list of [`Identified`] entities to positions inside
//! a [`bounds::PlacementBounds`] rectangle. Results depend only on the seed,
//! each entity's identity, and the order of the input list.
use glam::Vec2;

use crate::error::{Error, Result};

pub mod bounds;
pub mod crowd;
pub mod spiral;

/// Default inset between the placement bounds and any placed position.
pub const DEFAULT_EDGE_PADDING: f32 = 2.0;

/// Lower limit of the relaxed spacing target.
pub const MIN_TARGET_SPACING: f32 = 6.0;

/// Anything that can be placed: it needs a stable id and a display label.
pub trait Identified {
    fn id(&self) -> &str;
    fn label(&self) -> &str;
}

/// Minimal placeable entity. Callers with richer records implement
/// [`Identified`] on their own type instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: String,
    pub label: String,
}

impl Entity {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

impl Identified for Entity {
    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl<T: Identified + ?Sized> Identified for &T {
    fn id(&self) -> &str {
        (**self).id()
    }

    fn label(&self) -> &str {
        (**self).label()
    }
}

/// An entity together with its assigned position.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedEntity<E> {
    pub entity: E,
    pub position: Vec2,
}

impl<E> PlacedEntity<E> {
    pub fn new(entity: E, position: Vec2) -> Self {
        Self { entity, position }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.position.y
    }
}

/// Options for a placement call.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacementOptions {
    /// Desired distance between placed centers, before crowd-size relaxation.
    pub min_spacing: f32,
    /// Caller-supplied seed string mixed into every entity seed.
    pub seed: String,
    /// Inset from the bounds edges. Limited to a quarter of each axis extent.
    pub edge_padding: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            min_spacing: 12.0,
            seed: String::new(),
            edge_padding: DEFAULT_EDGE_PADDING,
        }
    }
}

impl PlacementOptions {
    /// Creates options with the given spacing and seed and the default padding.
    pub fn new(min_spacing: f32, seed: impl Into<String>) -> Self {
        Self {
            min_spacing,
            seed: seed.into(),
            ..Default::default()
        }
    }

    /// Sets the edge padding.
    pub fn with_edge_padding(mut self, edge_padding: f32) -> Self {
        self.edge_padding = edge_padding;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Spacing target for a crowd of `count` entities.
    ///
    /// Relaxes by half a unit per entity beyond ten and never drops below
    /// [`MIN_TARGET_SPACING`].
    pub fn target_spacing(&self, count: usize) -> f32 {
        let relaxed = self.min_spacing - (count as f32 - 10.0) * 0.5;
        relaxed.max(MIN_TARGET_SPACING)
    }

    /// Validates the options, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.min_spacing.is_finite() && self.min_spacing > 0.0) {
            return Err(Error::InvalidConfig(
                "min_spacing must be finite and > 0".into(),
            ));
        }
        if !(self.edge_padding.is_finite() && self.edge_padding >= 0.0) {
            return Err(Error::InvalidConfig(
                "edge_padding must be finite and >= 0".into(),
            ));
        }
        Ok(())
    }
}
