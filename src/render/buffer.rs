use crate::core::range::VisibleRange;
use crate::core::series::LineSeries;
use crate::core::types::RenderPhase;

/// Reusable coordinate arena for the straight-line fast path.
///
/// Each consecutive sample pair in the animated window contributes one
/// segment as an x1,y1,x2,y2 quad, in data space with the vertical phase
/// already applied. The backing storage only ever grows, so a buffer kept
/// per series stays allocation-stable across frames.
#[derive(Debug, Default)]
pub struct LineBuffer {
    buffer: Vec<f64>,
    used: usize,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, series: &LineSeries, range: VisibleRange, phase: RenderPhase) {
        let end = range.animated_end(phase.x);
        let count = end.saturating_sub(range.min_index);
        let needed = count.saturating_sub(1) * 4;
        self.reserve(needed);

        let mut cursor = 0;
        for position in (range.min_index + 1)..end {
            let prev = series.sample_at(position - 1);
            let cur = series.sample_at(position);
            self.buffer[cursor] = prev.x();
            self.buffer[cursor + 1] = prev.value * phase.y;
            self.buffer[cursor + 2] = cur.x();
            self.buffer[cursor + 3] = cur.value * phase.y;
            cursor += 4;
        }
        self.used = needed;
    }

    /// Coordinates written by the last feed, mutable for in-place transform.
    #[must_use]
    pub fn coordinates_mut(&mut self) -> &mut [f64] {
        &mut self.buffer[..self.used]
    }

    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.buffer[..self.used]
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.used / 4
    }

    fn reserve(&mut self, needed: usize) {
        if self.buffer.len() < needed {
            self.buffer.resize(needed, 0.0);
        }
    }
}

/// Reusable coordinate arena for the marker pass: one x,y pair per sample in
/// the animated window, in data space with the vertical phase applied.
#[derive(Debug, Default)]
pub struct CircleBuffer {
    buffer: Vec<f64>,
    used: usize,
}

impl CircleBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, series: &LineSeries, range: VisibleRange, phase: RenderPhase) {
        let end = range.animated_end(phase.x);
        let count = end.saturating_sub(range.min_index);
        let needed = count * 2;
        if self.buffer.len() < needed {
            self.buffer.resize(needed, 0.0);
        }

        let mut cursor = 0;
        for position in range.min_index..end {
            let sample = series.sample_at(position);
            self.buffer[cursor] = sample.x();
            self.buffer[cursor + 1] = sample.value * phase.y;
            cursor += 2;
        }
        self.used = needed;
    }

    #[must_use]
    pub fn coordinates_mut(&mut self) -> &mut [f64] {
        &mut self.buffer[..self.used]
    }

    #[must_use]
    pub fn coordinates(&self) -> &[f64] {
        &self.buffer[..self.used]
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.used / 2
    }
}
