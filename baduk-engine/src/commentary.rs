use serde::{Deserialize, Serialize};

use crate::engine::Engine;
use crate::goban::Captures;

/// Capture counters taken before a move, to diff against afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureSnapshot(Captures);

impl CaptureSnapshot {
    pub fn of(engine: &Engine) -> Self {
        CaptureSnapshot(*engine.captures())
    }

    /// Stones removed since the snapshot.
    pub fn delta(&self, engine: &Engine) -> u32 {
        engine.captures().total().saturating_sub(self.0.total())
    }
}

/// Request body for the external narration service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentaryRequest {
    pub board_state: String,
    pub turn: String,
    pub user_name: String,
    pub has_capture: bool,
    pub is_game_start: bool,
    pub is_game_end: bool,
    pub is_important_move: bool,
}

impl CommentaryRequest {
    /// Moves that still count as the opening.
    pub const OPENING_MOVES: usize = 2;

    /// Stones a single move must take to count as notable.
    pub const NOTABLE_CAPTURE: u32 = 2;

    pub fn after_move(before: CaptureSnapshot, engine: &Engine, user_name: &str) -> Self {
        let taken = before.delta(engine);
        CommentaryRequest {
            board_state: engine.export_board(),
            turn: engine.current_turn_stone().token().to_string(),
            user_name: user_name.to_string(),
            has_capture: taken > 0,
            is_game_start: engine.move_count() <= Self::OPENING_MOVES,
            is_game_end: engine.check_game_over(),
            is_important_move: taken >= Self::NOTABLE_CAPTURE,
        }
    }

    /// Whether the narrator should address the player by name.
    pub fn is_special(&self) -> bool {
        self.has_capture || self.is_game_start || self.is_game_end || self.is_important_move
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stone::Stone;

    #[test]
    fn opening_move_without_capture() {
        let mut engine = Engine::new();
        let before = CaptureSnapshot::of(&engine);
        engine.try_play(Stone::Black, (3, 3)).unwrap();

        let req = CommentaryRequest::after_move(before, &engine, "Mina");
        assert!(req.is_game_start);
        assert!(!req.has_capture);
        assert!(!req.is_important_move);
        assert!(!req.is_game_end);
        assert_eq!(req.turn, "w");
        assert_eq!(req.user_name, "Mina");
        assert!(req.is_special());
    }

    #[test]
    fn capture_is_flagged() {
        let mut engine = Engine::new();
        engine.try_play(Stone::Black, (1, 0)).unwrap();
        engine.try_play(Stone::White, (0, 0)).unwrap();
        engine.try_play(Stone::Black, (10, 10)).unwrap();
        engine.try_play(Stone::White, (10, 12)).unwrap();
        let before = CaptureSnapshot::of(&engine);
        engine.try_play(Stone::Black, (0, 1)).unwrap();

        assert_eq!(before.delta(&engine), 1);
        let req = CommentaryRequest::after_move(before, &engine, "Mina");
        assert!(req.has_capture);
        assert!(!req.is_important_move);
        assert!(!req.is_game_start);
    }

    #[test]
    fn quiet_midgame_move_is_not_special() {
        let mut engine = Engine::new();
        engine.try_play(Stone::Black, (3, 3)).unwrap();
        engine.try_play(Stone::White, (15, 15)).unwrap();
        let before = CaptureSnapshot::of(&engine);
        engine.try_play(Stone::Black, (3, 15)).unwrap();

        let req = CommentaryRequest::after_move(before, &engine, "Mina");
        assert!(!req.is_special());
    }

    #[test]
    fn json_shape() {
        let engine = Engine::new();
        let req = CommentaryRequest::after_move(CaptureSnapshot::of(&engine), &engine, "Mina");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["userName"], "Mina");
        assert_eq!(json["turn"], "b");
        assert_eq!(json["isGameStart"], true);
        assert!(json["boardState"].as_str().unwrap().starts_with("[[0,"));
    }
}
