//! Board resynchronisation for two-player rooms.
//!
//! Each client applies its own moves locally, broadcasts the resulting
//! board, and receives every broadcast in the room, its own included. A
//! received board is applied only when it is neither the echo of the last
//! board this client sent nor identical to the local board. Import is a full
//! overwrite, so applying the same board twice changes nothing.

use crate::engine::Engine;
use crate::wire::{self, GameStatePayload, WireError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The room announced a fresh game; the local engine was reset.
    NewGame,
    /// The remote board replaced the local one.
    Applied,
    /// Echo or already up to date.
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct RoomSync {
    last_sent: Option<String>,
}

impl RoomSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Build the broadcast for the local state and remember its board so the
    /// echo can be recognised.
    pub fn outgoing(&mut self, engine: &Engine) -> GameStatePayload {
        let payload = GameStatePayload::from_engine(engine);
        self.last_sent = Some(payload.board_state.clone());
        payload
    }

    pub fn incoming_json(
        &mut self,
        engine: &mut Engine,
        json: &str,
    ) -> Result<SyncAction, WireError> {
        let payload: GameStatePayload = serde_json::from_str(json)?;
        self.incoming(engine, &payload)
    }

    /// Apply a received broadcast. A malformed board is reported and the
    /// engine is left untouched.
    pub fn incoming(
        &mut self,
        engine: &mut Engine,
        payload: &GameStatePayload,
    ) -> Result<SyncAction, WireError> {
        let board = payload.board_state.as_str();

        if wire::is_initial(board) && !payload.is_game_over {
            engine.reset();
            self.last_sent = None;
            tracing::info!("room started a new game");
            return Ok(SyncAction::NewGame);
        }

        let is_echo = self.last_sent.as_deref() == Some(board);
        let action = if !is_echo && board != engine.export_board() {
            engine.import_board(board)?;
            engine.set_turn(payload.turn);
            tracing::debug!(turn = %payload.turn, "applied remote board");
            SyncAction::Applied
        } else {
            SyncAction::Ignored
        };

        if payload.is_game_over {
            engine.mark_over();
        }

        Ok(action)
    }
}
