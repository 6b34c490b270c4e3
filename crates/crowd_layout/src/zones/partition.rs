//! Proportional partitioning of grid columns among weighted outcomes.
//!
//! Every outcome receives one reserved column plus a rounded share of the
//! remaining columns proportional to its weight. Rounding each share
//! independently can overshoot or undershoot the grid; [`absorb_remainder`]
//! then settles the difference on the last outcome. Only the last outcome's
//! share may therefore deviate from its proportional weight, which is the
//! intended policy rather than an error.
use tracing::{debug, warn};

use crate::zones::{Outcome, OutcomeId};

/// Column count of the default zone grid.
pub const DEFAULT_COLUMNS: usize = 24;

/// A contiguous span `[col_start, col_end)` of grid columns owned by one outcome.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnRange {
    pub outcome_id: OutcomeId,
    pub col_start: usize,
    pub col_end: usize,
}

impl ColumnRange {
    pub fn new(outcome_id: impl Into<OutcomeId>, col_start: usize, col_end: usize) -> Self {
        Self {
            outcome_id: outcome_id.into(),
            col_start,
            col_end,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    #[inline]
    pub fn contains(&self, col: usize) -> bool {
        col >= self.col_start && col < self.col_end
    }
}

/// Normalize weights to percentages summing to 100.
///
/// Negative and non-finite weights count as zero. If nothing positive remains,
/// every weight gets an equal share.
pub fn normalize_weights(weights: &[f64]) -> Vec<f64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let clean: Vec<f64> = weights
        .iter()
        .map(|&w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
        .collect();
    let total: f64 = clean.iter().sum();

    if total <= 0.0 || !total.is_finite() {
        let equal = 100.0 / weights.len() as f64;
        return vec![equal; weights.len()];
    }

    clean.iter().map(|w| w / total * 100.0).collect()
}

/// Column width per outcome before remainder absorption: one reserved column
/// plus the rounded proportional share of `columns - K`.
pub fn proportional_widths(percentages: &[f64], columns: usize) -> Vec<usize> {
    let available = columns.saturating_sub(percentages.len()) as f64;
    percentages
        .iter()
        .map(|pct| 1 + (pct / 100.0 * available).round() as usize)
        .collect()
}

/// Adjust `widths` so they sum to exactly `columns`, keeping each at least 1.
///
/// The last width absorbs the difference. When it cannot shrink further, the
/// remaining surplus is trimmed one column at a time from the widest earlier
/// width, the rightmost one on ties. Requires `columns >= widths.len()` to
/// reach the exact total.
pub fn absorb_remainder(widths: &mut [usize], columns: usize) {
    if widths.is_empty() {
        return;
    }
    for w in widths.iter_mut() {
        *w = (*w).max(1);
    }

    let last = widths.len() - 1;
    let total: usize = widths.iter().sum();
    if total <= columns {
        widths[last] += columns - total;
        return;
    }

    let mut surplus = total - columns;
    let give = surplus.min(widths[last] - 1);
    widths[last] -= give;
    surplus -= give;

    while surplus > 0 {
        let widest = (0..last)
            .filter(|&i| widths[i] > 1)
            .max_by_key(|&i| (widths[i], i));
        let Some(i) = widest else {
            break;
        };
        widths[i] -= 1;
        surplus -= 1;
    }
}

/// Partition `columns` grid columns among `outcomes`, in order.
///
/// Ranges are contiguous, non-overlapping, each at least one column wide,
/// and jointly cover `[0, columns)`. If `columns` is smaller than the number
/// of outcomes the grid is widened to one column per outcome.
pub fn partition_columns(outcomes: &[Outcome], columns: usize) -> Vec<ColumnRange> {
    if outcomes.is_empty() {
        return Vec::new();
    }

    let columns = if columns < outcomes.len() {
        warn!(
            "Grid of {} columns cannot fit {} outcomes; widening to {}.",
            columns,
            outcomes.len(),
            outcomes.len()
        );
        outcomes.len()
    } else {
        columns
    };

    let weights: Vec<f64> = outcomes.iter().map(|o| o.weight).collect();
    let percentages = normalize_weights(&weights);
    let mut widths = proportional_widths(&percentages, columns);
    absorb_remainder(&mut widths, columns);

    let mut ranges = Vec::with_capacity(outcomes.len());
    let mut cursor = 0;
    for (i, (outcome, width)) in outcomes.iter().zip(&widths).enumerate() {
        let end = if i == outcomes.len() - 1 {
            columns
        } else {
            cursor + width
        };
        ranges.push(ColumnRange::new(outcome.id.clone(), cursor, end));
        cursor = end;
    }

    debug!(
        "Partitioned {} columns among {} outcomes: {:?}.",
        columns,
        outcomes.len(),
        widths
    );
    ranges
}

/// Find the range containing `col`.
///
/// Falls back to the last range when none contains it; returns `None` only
/// for an empty slice.
pub fn option_for_column(col: usize, ranges: &[ColumnRange]) -> Option<&ColumnRange> {
    ranges
        .iter()
        .find(|r| r.contains(col))
        .or_else(|| ranges.last())
}
