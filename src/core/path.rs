use smallvec::SmallVec;

/// One drawing command of a [`Path`].
///
/// Coordinates live in whichever space the path currently occupies: data
/// space when built, pixel space after an in-place transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    CubicTo { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64 },
    Close,
}

/// Ordered command sequence describing one stroked or filled outline.
///
/// Built fresh each draw pass and discarded afterwards; the renderer never
/// keeps a path across frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::QuadTo { cx, cy, x, y });
    }

    pub fn cubic_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::CubicTo {
            c1x,
            c1y,
            c2x,
            c2y,
            x,
            y,
        });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Starting point of the outline (the first move-to), if any.
    #[must_use]
    pub fn first_point(&self) -> Option<(f64, f64)> {
        self.commands.iter().find_map(|command| match *command {
            PathCommand::MoveTo { x, y } => Some((x, y)),
            _ => None,
        })
    }

    /// Endpoint of the most recent drawing command, if any.
    #[must_use]
    pub fn last_point(&self) -> Option<(f64, f64)> {
        self.commands.iter().rev().find_map(|command| match *command {
            PathCommand::MoveTo { x, y }
            | PathCommand::LineTo { x, y }
            | PathCommand::QuadTo { x, y, .. }
            | PathCommand::CubicTo { x, y, .. } => Some((x, y)),
            PathCommand::Close => None,
        })
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    #[must_use]
    pub fn line_segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::LineTo { .. }))
            .count()
    }

    #[must_use]
    pub fn quad_segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::QuadTo { .. }))
            .count()
    }

    #[must_use]
    pub fn cubic_segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::CubicTo { .. }))
            .count()
    }

    /// Applies `map` to every coordinate pair in place, control points included.
    pub fn map_points(&mut self, mut map: impl FnMut(f64, f64) -> (f64, f64)) {
        for command in &mut self.commands {
            match command {
                PathCommand::MoveTo { x, y } | PathCommand::LineTo { x, y } => {
                    (*x, *y) = map(*x, *y);
                }
                PathCommand::QuadTo { cx, cy, x, y } => {
                    (*cx, *cy) = map(*cx, *cy);
                    (*x, *y) = map(*x, *y);
                }
                PathCommand::CubicTo {
                    c1x,
                    c1y,
                    c2x,
                    c2y,
                    x,
                    y,
                } => {
                    (*c1x, *c1y) = map(*c1x, *c1y);
                    (*c2x, *c2y) = map(*c2x, *c2y);
                    (*x, *y) = map(*x, *y);
                }
                PathCommand::Close => {}
            }
        }
    }
}
