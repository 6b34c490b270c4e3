//! Weighted outcome zones: column partitioning, zone geometry, hit-testing and
//! drag interaction.
pub mod drag;
pub mod events;
pub mod geometry;
pub mod partition;
pub mod resolver;

pub type OutcomeId = String;

/// A selectable option with a relative weight.
///
/// The order of outcomes in a list is meaningful: it fixes their left-to-right
/// column assignment.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    pub id: OutcomeId,
    /// Relative weight. Need not sum to anything across outcomes; negative or
    /// non-finite values count as zero.
    pub weight: f64,
    pub label: String,
    /// Display color, opaque to the engine.
    pub color: String,
}

impl Outcome {
    /// Creates an outcome labelled with its id and no color.
    pub fn new(id: impl Into<OutcomeId>, weight: f64) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
            weight,
            color: String::new(),
        }
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_builder_sets_fields() {
        let o = Outcome::new("yes", 38.0)
            .with_label("Yes")
            .with_color("#22c55e");
        assert_eq!(o.id, "yes");
        assert_eq!(o.weight, 38.0);
        assert_eq!(o.label, "Yes");
        assert_eq!(o.color, "#22c55e");
    }

    #[test]
    fn outcome_label_defaults_to_id() {
        assert_eq!(Outcome::new("no", 1.0).label, "no");
    }
}
