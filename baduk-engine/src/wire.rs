//! Text formats shared with the rendering and networking collaborators.
//!
//! The board travels as a JSON array of 19 rows of 19 integers, `0` for an
//! empty point, `1` for Black and `-1` for White, with no whitespace:
//! `[[0,0,...],[0,1,...],...]`. The side to move travels as `"b"` or `"w"`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BOARD_SIZE;
use crate::engine::Engine;
use crate::goban::Goban;
use crate::stone::Stone;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    Json(String),
    Rows(usize),
    Columns { row: usize, len: usize },
    Cell { row: usize, col: usize, value: i8 },
    Turn(String),
}

impl fmt::Display for WireError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireError::Json(e) => write!(f, "malformed board json: {e}"),
            WireError::Rows(n) => write!(f, "expected {BOARD_SIZE} rows, found {n}"),
            WireError::Columns { row, len } => {
                write!(f, "row {row} has {len} points, expected {BOARD_SIZE}")
            }
            WireError::Cell { row, col, value } => {
                write!(f, "invalid value {value} at ({row}, {col})")
            }
            WireError::Turn(t) => write!(f, "invalid turn token '{t}'"),
        }
    }
}

impl std::error::Error for WireError {}

impl From<serde_json::Error> for WireError {
    fn from(e: serde_json::Error) -> Self {
        WireError::Json(e.to_string())
    }
}

/// Serialize the grid. Only the cells are exported.
pub fn export_board(goban: &Goban) -> String {
    serde_json::to_string(&goban.rows()).expect("integer grid always serializes")
}

/// Parse and validate a board payload into row-major cells. Nothing is
/// returned unless every row and cell is valid.
pub fn import_board(payload: &str) -> Result<Vec<i8>, WireError> {
    let rows: Vec<Vec<i8>> = serde_json::from_str(payload)?;

    if rows.len() != BOARD_SIZE as usize {
        return Err(WireError::Rows(rows.len()));
    }

    let mut cells = Vec::with_capacity(rows.len() * rows.len());
    for (r, row) in rows.iter().enumerate() {
        if row.len() != BOARD_SIZE as usize {
            return Err(WireError::Columns {
                row: r,
                len: row.len(),
            });
        }
        for (c, &value) in row.iter().enumerate() {
            if value != 0 && Stone::from_cell(value).is_none() {
                return Err(WireError::Cell {
                    row: r,
                    col: c,
                    value,
                });
            }
            cells.push(value);
        }
    }

    Ok(cells)
}

/// The payload of a fresh, empty board.
pub fn initial_board() -> String {
    export_board(&Goban::new())
}

/// Whether `payload` is exactly the fresh-board payload, which rooms use to
/// announce a new game.
pub fn is_initial(payload: &str) -> bool {
    payload == initial_board()
}

pub fn turn_token(stone: Stone) -> &'static str {
    stone.token()
}

pub fn parse_turn(token: &str) -> Result<Stone, WireError> {
    Stone::from_token(token).ok_or_else(|| WireError::Turn(token.to_string()))
}

/// Serde adapter writing a [`Stone`] as its turn token.
pub mod token {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::stone::Stone;

    pub fn serialize<S: Serializer>(stone: &Stone, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(stone.token())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Stone, D::Error> {
        let raw = String::deserialize(d)?;
        Stone::from_token(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid turn token '{raw}'")))
    }
}

/// Room state broadcast between the two players of a multiplayer game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatePayload {
    pub board_state: String,
    #[serde(with = "token")]
    pub turn: Stone,
    #[serde(default)]
    pub is_game_over: bool,
    /// `"b"`, `"w"`, `"draw"`, or absent while the game runs.
    #[serde(default)]
    pub winner: Option<String>,
    #[serde(default)]
    pub captured_black: u32,
    #[serde(default)]
    pub captured_white: u32,
}

impl GameStatePayload {
    pub fn from_engine(engine: &Engine) -> Self {
        let is_game_over = engine.check_game_over();
        let winner = is_game_over.then(|| engine.calculate_score().token().to_string());
        GameStatePayload {
            board_state: engine.export_board(),
            turn: engine.current_turn_stone(),
            is_game_over,
            winner,
            captured_black: engine.captured_black(),
            captured_white: engine.captured_white(),
        }
    }
}
