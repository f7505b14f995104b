use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::GoError;
use crate::goban::{Captures, Goban};
use crate::score::Score;
use crate::stone::Stone;
use crate::turn::MoveRecord;
use crate::wire::{self, WireError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    InProgress,
    Over,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::InProgress => write!(f, "in_progress"),
            Stage::Over => write!(f, "over"),
        }
    }
}

/// State of a single game: grid, side to move, pass bookkeeping and the
/// move history.
///
/// Not safe for concurrent mutation; each game session owns its engine.
/// Once [`Stage::Over`] is reached the engine refuses further moves and a
/// new game needs [`Engine::reset`] or a fresh instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    goban: Goban,
    turn: Stone,
    passes: u32,
    moves: Vec<MoveRecord>,
    over: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            goban: Goban::new(),
            turn: Stone::Black,
            passes: 0,
            moves: Vec::new(),
            over: false,
        }
    }

    /// Start over on an empty board with Black to move.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    // -- Accessors --

    pub fn goban(&self) -> &Goban {
        &self.goban
    }

    pub fn board(&self) -> &[i8] {
        self.goban.board()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.goban.stone_at(point)
    }

    pub fn current_turn_stone(&self) -> Stone {
        self.turn
    }

    /// Point of the previous placement, the only point a single-stone
    /// capture may not land on this move. `None` after a pass.
    pub fn last_move(&self) -> Option<Point> {
        self.goban.ko().map(|ko| ko.pos)
    }

    pub fn captures(&self) -> &Captures {
        self.goban.captures()
    }

    pub fn stone_captures(&self, stone: Stone) -> u32 {
        self.goban.captures().get(stone)
    }

    /// Black stones removed from the board so far.
    pub fn captured_black(&self) -> u32 {
        self.goban.captures().white
    }

    /// White stones removed from the board so far.
    pub fn captured_white(&self) -> u32 {
        self.goban.captures().black
    }

    pub fn pass_count(&self) -> u32 {
        self.passes
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The terminal flag alone, without the pass-count fallback.
    pub fn is_flagged_over(&self) -> bool {
        self.over
    }

    pub fn stage(&self) -> Stage {
        if self.check_game_over() {
            Stage::Over
        } else {
            Stage::InProgress
        }
    }

    // -- Game actions --

    /// Place `stone` at `point`, returning the captured points.
    ///
    /// Checked in order: game not over, on board, vacant, `stone` to move,
    /// then suicide and ko. A rejected move leaves the engine unchanged.
    pub fn try_play(&mut self, stone: Stone, point: Point) -> Result<Vec<Point>, GoError> {
        let result = self.apply(stone, point);
        if let Err(e) = &result {
            tracing::debug!(?point, %stone, "rejected move: {e}");
        }
        result
    }

    fn apply(&mut self, stone: Stone, point: Point) -> Result<Vec<Point>, GoError> {
        if self.check_game_over() {
            return Err(GoError::GameOver);
        }
        self.goban.check_vacant(point)?;
        if stone != self.turn {
            return Err(GoError::OutOfTurn);
        }

        let (goban, dead) = self.goban.place_stone(point, stone)?;
        self.goban = goban;
        self.turn = stone.opp();
        self.passes = 0;
        self.moves.push(MoveRecord::new(stone, point));
        Ok(dead)
    }

    /// Boolean form of [`Engine::try_play`] taking `(row, col)` separately.
    pub fn place_stone(&mut self, row: u8, col: u8, stone: Stone) -> bool {
        self.try_play(stone, (row, col)).is_ok()
    }

    /// The side to move passes. Ignored once the game is over.
    pub fn pass(&mut self) -> Stage {
        if self.check_game_over() {
            return Stage::Over;
        }

        self.goban.pass();
        self.passes += 1;
        self.turn = self.turn.opp();
        if self.passes >= 2 {
            self.over = true;
            tracing::info!(moves = self.moves.len(), "game over after two passes");
        }
        self.stage()
    }

    /// Pass on behalf of `stone`, refusing if it is not that side's turn.
    pub fn try_pass(&mut self, stone: Stone) -> Result<Stage, GoError> {
        if self.check_game_over() {
            return Err(GoError::GameOver);
        }
        if stone != self.turn {
            return Err(GoError::OutOfTurn);
        }
        Ok(self.pass())
    }

    /// End the game from outside, e.g. when the opponent disconnects.
    pub fn mark_over(&mut self) {
        if !self.over {
            tracing::info!(moves = self.moves.len(), "game flagged over");
        }
        self.over = true;
    }

    pub fn check_game_over(&self) -> bool {
        self.over || self.passes >= 2
    }

    pub fn calculate_score(&self) -> Score {
        Score::from_captures(self.goban.captures())
    }

    /// Dry run of a placement on a copy; `self` is not touched.
    pub fn is_legal(&self, point: Point, stone: Stone) -> bool {
        self.clone().apply(stone, point).is_ok()
    }

    /// Whether the group at `point` has at least one liberty.
    pub fn has_liberties(&self, point: Point) -> bool {
        self.goban.has_liberties(point)
    }

    /// Override the side to move, used when resynchronising from a remote
    /// board that carries its own turn token.
    pub fn set_turn(&mut self, stone: Stone) {
        self.turn = stone;
    }

    // -- Serialization --

    /// The grid in wire form. Turn, counters and history are not included.
    pub fn export_board(&self) -> String {
        wire::export_board(&self.goban)
    }

    /// Replace the grid from wire form, keeping every other field. On error
    /// the current grid is left as it was.
    pub fn import_board(&mut self, payload: &str) -> Result<(), WireError> {
        let board = wire::import_board(payload)?;
        self.goban.replace_board(board);
        Ok(())
    }
}
