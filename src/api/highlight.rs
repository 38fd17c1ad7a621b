use serde::{Deserialize, Serialize};

/// Reference to one selected sample: a series position in the chart data and
/// a logical x index within it.
///
/// The highlight pass snaps `x_index` to the nearest sample actually present
/// in the series before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Highlight {
    pub series_position: usize,
    pub x_index: usize,
}

impl Highlight {
    #[must_use]
    pub fn new(series_position: usize, x_index: usize) -> Self {
        Self {
            series_position,
            x_index,
        }
    }
}
