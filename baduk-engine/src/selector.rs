//! Heuristic move selection for the computer side.
//!
//! Every empty point is tried on a copy of the engine; the legal ones are
//! scored by distance to the centre, adjacent friendly stones, adjacent
//! enemy stones (stronger levels only) and a random term, then one is drawn
//! from the best-scoring slice. There is no lookahead.

use rand::RngExt;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::engine::Engine;

const CENTER: Point = (9, 9);

/// Player-facing difficulty. `0` plays uniformly at random; higher values
/// map onto three strategy bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Difficulty(pub u32);

impl Difficulty {
    pub fn is_random(self) -> bool {
        self.0 == 0
    }

    /// Strategy level in `[0, 1]`.
    pub fn strategy_level(self) -> f64 {
        match self.0 {
            0 => 0.0,
            1..=8 => 0.3,
            9..=15 => 0.6,
            _ => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Play(Point),
    Pass,
}

/// Points where the side to move may legally play.
pub fn candidates(engine: &Engine) -> Vec<Point> {
    let stone = engine.current_turn_stone();
    engine
        .goban()
        .empty_points()
        .filter(|&p| engine.is_legal(p, stone))
        .collect()
}

/// Pick a move for the side to move without touching the engine. `None`
/// when there is no legal point.
pub fn propose<R: RngExt + ?Sized>(
    engine: &Engine,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Point> {
    let moves = candidates(engine);
    if moves.is_empty() {
        return None;
    }

    let pick = if difficulty.is_random() {
        moves[rng.random_range(0..moves.len())]
    } else {
        strategic_move(engine, &moves, difficulty.strategy_level(), rng)
    };

    tracing::debug!(
        candidates = moves.len(),
        difficulty = difficulty.0,
        ?pick,
        "selected move"
    );
    Some(pick)
}

/// Choose a move, or pass on the real engine when nothing is legal.
///
/// The returned point is not played; the caller applies it and, should
/// the placement fail, asks again.
pub fn select_move_with<R: RngExt + ?Sized>(
    engine: &mut Engine,
    difficulty: Difficulty,
    rng: &mut R,
) -> Selection {
    match propose(engine, difficulty, rng) {
        Some(point) => Selection::Play(point),
        None => {
            tracing::debug!(stone = %engine.current_turn_stone(), "no legal move, passing");
            engine.pass();
            Selection::Pass
        }
    }
}

/// [`select_move_with`] using the thread-local generator.
pub fn select_move(engine: &mut Engine, difficulty: Difficulty) -> Selection {
    select_move_with(engine, difficulty, &mut rand::rng())
}

fn strategic_move<R: RngExt + ?Sized>(
    engine: &Engine,
    moves: &[Point],
    level: f64,
    rng: &mut R,
) -> Point {
    let scored = ranked(engine, moves, level, || noise(rng, level));
    let top = top_slice_len(scored.len(), level);
    scored[rng.random_range(0..top)].0
}

/// Candidates with their noisy scores, best first.
fn ranked(
    engine: &Engine,
    moves: &[Point],
    level: f64,
    mut noise: impl FnMut() -> f64,
) -> Vec<(Point, f64)> {
    let mut scored: Vec<(Point, f64)> = moves
        .iter()
        .map(|&p| (p, heuristic(engine, p, level) + noise()))
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Random bonus in `[0, level * 10)`.
fn noise<R: RngExt + ?Sized>(rng: &mut R, level: f64) -> f64 {
    rng.random::<f64>() * level * 10.0
}

/// Score of `point` before noise.
pub fn heuristic(engine: &Engine, point: Point, level: f64) -> f64 {
    let stone = engine.current_turn_stone();
    let goban = engine.goban();

    let (mut friends, mut enemies) = (0u32, 0u32);
    for n in goban.neighbors(point) {
        match goban.stone_at(n) {
            Some(s) if s == stone => friends += 1,
            Some(_) => enemies += 1,
            None => {}
        }
    }

    let mut score = f64::from(36 - manhattan(point, CENTER)) * 0.1;
    score += f64::from(friends) * 2.0;
    if level > 0.5 {
        score += f64::from(enemies) * 1.5;
    }
    score
}

/// How many of the best `total` candidates stay in the draw.
pub fn top_slice_len(total: usize, level: f64) -> usize {
    let n = (total as f64 * (1.0 - level * 0.7)).ceil() as usize;
    n.clamp(1, total.max(1))
}

fn manhattan((r1, c1): Point, (r2, c2): Point) -> i32 {
    (i32::from(r1) - i32::from(r2)).abs() + (i32::from(c1) - i32::from(c2)).abs()
}
