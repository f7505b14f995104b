use std::fmt;

use serde::{Deserialize, Serialize};

use crate::score::Score;
use crate::stone::Stone;

/// Game outcome from one player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Win,
    Loss,
    Draw,
}

impl Outcome {
    pub fn for_player(winner: Stone, player: Stone) -> Self {
        if winner == player {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    /// Decode a broadcast winner token (`"b"`, `"w"` or `"draw"`). `None`
    /// for anything else, including a game with no winner yet.
    pub fn from_winner_token(token: &str, player: Stone) -> Option<Self> {
        if token == "draw" {
            return Some(Outcome::Draw);
        }
        Stone::from_token(token).map(|winner| Self::for_player(winner, player))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => write!(f, "WIN"),
            Outcome::Loss => write!(f, "LOSS"),
            Outcome::Draw => write!(f, "DRAW"),
        }
    }
}

/// Finished-game summary handed to the history store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub result: Outcome,
    pub moves_count: usize,
    pub opponent_name: String,
}

impl GameRecord {
    pub fn for_player(score: &Score, player: Stone, moves_count: usize, opponent: &str) -> Self {
        GameRecord {
            result: Outcome::for_player(score.winner, player),
            moves_count,
            opponent_name: opponent.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goban::Captures;

    #[test]
    fn outcome_from_winner() {
        assert_eq!(Outcome::for_player(Stone::White, Stone::White), Outcome::Win);
        assert_eq!(Outcome::for_player(Stone::White, Stone::Black), Outcome::Loss);
    }

    #[test]
    fn outcome_from_token() {
        assert_eq!(
            Outcome::from_winner_token("b", Stone::Black),
            Some(Outcome::Win)
        );
        assert_eq!(
            Outcome::from_winner_token("w", Stone::Black),
            Some(Outcome::Loss)
        );
        assert_eq!(
            Outcome::from_winner_token("draw", Stone::White),
            Some(Outcome::Draw)
        );
        assert_eq!(Outcome::from_winner_token("", Stone::White), None);
    }

    #[test]
    fn record_json_shape() {
        let score = Score::from_captures(&Captures::new());
        let record = GameRecord::for_player(&score, Stone::Black, 42, "AI");
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"result": "LOSS", "movesCount": 42, "opponentName": "AI"})
        );
        assert_eq!(record.result.to_string(), "LOSS");
    }
}
