use serde::{Deserialize, Serialize};

use crate::Point;

/// One-step ko marker: the point of the previous placement.
///
/// The next move may not capture exactly one stone sitting on this point.
/// A pass clears the marker, and nothing older than one move is
/// remembered, so longer repetition cycles are not detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ko {
    pub pos: Point,
}

impl Ko {
    pub fn at(pos: Point) -> Self {
        Ko { pos }
    }

    /// Whether capturing `dead` on the following move would retake the ko.
    pub fn forbids(&self, dead: &[Point]) -> bool {
        matches!(dead, [only] if *only == self.pos)
    }
}
