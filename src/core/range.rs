use serde::{Deserialize, Serialize};

use crate::core::series::{LineSeries, Rounding};

/// Half-open window `[min_index, max_index)` of sample array positions that
/// take part in a draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleRange {
    pub min_index: usize,
    pub max_index: usize,
}

impl VisibleRange {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            min_index: 0,
            max_index: 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.max_index.saturating_sub(self.min_index)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_index <= self.min_index
    }

    #[must_use]
    pub fn contains(&self, position: usize) -> bool {
        position >= self.min_index && position < self.max_index
    }

    /// Exclusive end position after applying the horizontal reveal phase.
    ///
    /// The animated window always starts at `min_index`; a partial phase
    /// rounds up so a fractional sample still draws.
    #[must_use]
    pub fn animated_end(&self, phase_x: f64) -> usize {
        let advanced = (self.len() as f64 * phase_x).ceil() as usize;
        (self.min_index + advanced).min(self.max_index)
    }
}

/// Resolves which sample positions participate in drawing for the x-window
/// `[x_min, x_max]`.
///
/// The window edges snap outward (down on the left, up on the right) and the
/// result is padded by one extra sample on each side so partially visible
/// segments still reach the viewport edge. When both edges snap to the same
/// sample the left side is widened by one more so at least one segment
/// survives. Negative window starts clamp to zero before snapping.
#[must_use]
pub fn resolve_visible_range(series: &LineSeries, x_min: f64, x_max: f64) -> VisibleRange {
    let (Some(from), Some(to)) = (
        series.nearest_sample_index(x_min.max(0.0), Rounding::Down),
        series.nearest_sample_index(x_max, Rounding::Up),
    ) else {
        return VisibleRange::empty();
    };

    let widen = usize::from(from == to);
    VisibleRange {
        min_index: from.saturating_sub(1 + widen),
        max_index: (to + 2).min(series.len()),
    }
}
