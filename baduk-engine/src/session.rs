//! A human playing the heuristic opponent.

use std::time::Duration;

use rand::RngExt;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::engine::{Engine, Stage};
use crate::error::GoError;
use crate::record::GameRecord;
use crate::selector::{self, Difficulty, Selection};
use crate::stone::Stone;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    /// Cosmetic pause before the opponent answers.
    pub think_delay_ms: u64,
    /// Selections tried when the engine refuses a proposed point.
    pub max_retries: u32,
    #[serde(with = "crate::wire::token")]
    pub human: Stone,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            difficulty: Difficulty(5),
            think_delay_ms: 500,
            max_retries: 8,
            human: Stone::Black,
        }
    }
}

/// What the computer did on its turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Played { point: Point, captured: Vec<Point> },
    Passed,
}

pub struct SinglePlayer<R = ThreadRng> {
    engine: Engine,
    config: SessionConfig,
    rng: R,
}

impl SinglePlayer<ThreadRng> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: RngExt> SinglePlayer<R> {
    pub fn with_rng(config: SessionConfig, rng: R) -> Self {
        SinglePlayer {
            engine: Engine::new(),
            config,
            rng,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn human(&self) -> Stone {
        self.config.human
    }

    pub fn is_over(&self) -> bool {
        self.engine.check_game_over()
    }

    pub fn is_computer_turn(&self) -> bool {
        !self.is_over() && self.engine.current_turn_stone() != self.config.human
    }

    /// Start a new game with the same settings.
    pub fn restart(&mut self) {
        self.engine.reset();
    }

    /// Apply the human's stone, returning the captured points.
    pub fn play_human(&mut self, point: Point) -> Result<Vec<Point>, GoError> {
        self.engine.try_play(self.config.human, point)
    }

    pub fn pass_human(&mut self) -> Result<Stage, GoError> {
        self.engine.try_pass(self.config.human)
    }

    /// Play the computer's move. `None` when it is not the computer's turn.
    ///
    /// A proposal the engine refuses is logged and selection runs again. If
    /// every attempt is refused the computer passes.
    pub fn computer_turn(&mut self) -> Option<Reply> {
        if !self.is_computer_turn() {
            return None;
        }

        let stone = self.engine.current_turn_stone();
        for attempt in 0..=self.config.max_retries {
            let selection =
                selector::select_move_with(&mut self.engine, self.config.difficulty, &mut self.rng);
            match selection {
                Selection::Pass => return Some(Reply::Passed),
                Selection::Play(point) => match self.engine.try_play(stone, point) {
                    Ok(captured) => return Some(Reply::Played { point, captured }),
                    Err(e) => {
                        tracing::warn!(?point, attempt, "engine refused selected move: {e}");
                    }
                },
            }
        }

        self.engine.pass();
        Some(Reply::Passed)
    }

    /// Wait out the configured thinking delay, then play.
    pub async fn respond(&mut self) -> Option<Reply> {
        if !self.is_computer_turn() {
            return None;
        }
        tokio::time::sleep(Duration::from_millis(self.config.think_delay_ms)).await;
        self.computer_turn()
    }

    /// Result for the human once the game is over.
    pub fn record(&self, opponent: &str) -> Option<GameRecord> {
        self.is_over().then(|| {
            GameRecord::for_player(
                &self.engine.calculate_score(),
                self.config.human,
                self.engine.move_count(),
                opponent,
            )
        })
    }
}
