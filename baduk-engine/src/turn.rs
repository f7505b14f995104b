use serde::{Deserialize, Serialize};

use crate::Point;
use crate::stone::Stone;

/// One successful placement, kept for display and auditing. The engine
/// never replays these to decide legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub row: u8,
    pub col: u8,
    pub stone: Stone,
}

impl MoveRecord {
    pub fn new(stone: Stone, (row, col): Point) -> Self {
        MoveRecord { row, col, stone }
    }

    pub fn point(&self) -> Point {
        (self.row, self.col)
    }
}
