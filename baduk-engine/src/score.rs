use serde::{Deserialize, Serialize};

use crate::goban::Captures;
use crate::stone::Stone;

/// Points added to White's score.
pub const KOMI: f64 = 6.5;

/// Captures-plus-komi tally. There is no territory count, and the half
/// point of komi means there is never a tie.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub black: f64,
    pub white: f64,
    #[serde(with = "crate::wire::token")]
    pub winner: Stone,
}

impl Score {
    pub fn from_captures(captures: &Captures) -> Self {
        let black = f64::from(captures.black);
        let white = f64::from(captures.white) + KOMI;
        let winner = if black > white {
            Stone::Black
        } else {
            Stone::White
        };
        Score {
            black,
            white,
            winner,
        }
    }

    /// Winner as a turn token, the form the result broadcast carries.
    pub fn token(&self) -> &'static str {
        self.winner.token()
    }

    /// Difference in the winner's favour.
    pub fn margin(&self) -> f64 {
        (self.black - self.white).abs()
    }
}
