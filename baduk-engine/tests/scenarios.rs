//! Whole-game scenarios driven through the public engine API.

use baduk_engine::selector::{self, Difficulty, Selection};
use baduk_engine::{Engine, GoError, Point, Stone};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Play alternating moves starting with whoever is to move.
fn play_all(engine: &mut Engine, moves: &[Point]) {
    for &p in moves {
        let stone = engine.current_turn_stone();
        engine
            .try_play(stone, p)
            .unwrap_or_else(|e| panic!("{stone} at {p:?}: {e}"));
    }
}

/// Black at (5,5) surrounded by White, with Black stones placed so that
/// White's capturing stone at (5,6) is itself in atari afterwards.
fn ko_position() -> Engine {
    let mut engine = Engine::new();
    play_all(
        &mut engine,
        &[
            (5, 5),
            (4, 5),
            (4, 6),
            (6, 5),
            (6, 6),
            (5, 4),
            (5, 7),
            (5, 6),
        ],
    );
    engine
}

#[test]
fn opening_moves_alternate() {
    let mut engine = Engine::new();
    assert!(engine.place_stone(3, 3, Stone::Black));
    assert_eq!(engine.current_turn_stone(), Stone::White);
    assert!(engine.place_stone(3, 4, Stone::White));
    assert_eq!(engine.current_turn_stone(), Stone::Black);
    assert!(engine.place_stone(2, 4, Stone::Black));
    assert_eq!(engine.current_turn_stone(), Stone::White);

    assert_eq!(engine.captured_black(), 0);
    assert_eq!(engine.captured_white(), 0);
    assert_eq!(engine.move_count(), 3);
}

#[test]
fn surrounding_stone_is_captured() {
    let mut engine = Engine::new();
    play_all(
        &mut engine,
        &[(5, 5), (4, 5), (0, 0), (6, 5), (0, 2), (5, 4), (18, 18)],
    );
    assert_eq!(engine.stone_at((5, 5)), Some(Stone::Black));

    let dead = engine.try_play(Stone::White, (5, 6)).unwrap();
    assert_eq!(dead, vec![(5, 5)]);
    assert_eq!(engine.stone_at((5, 5)), None);
    assert_eq!(engine.captured_black(), 1);
    assert_eq!(engine.stone_captures(Stone::White), 1);
    assert_eq!(engine.captured_white(), 0);
}

#[test]
fn immediate_ko_recapture_is_rejected() {
    let mut engine = ko_position();
    assert_eq!(engine.stone_at((5, 5)), None);
    assert_eq!(engine.captured_black(), 1);
    assert_eq!(engine.last_move(), Some((5, 6)));

    let before = engine.clone();
    assert!(!engine.place_stone(5, 5, Stone::Black));
    assert_eq!(
        engine.try_play(Stone::Black, (5, 5)),
        Err(GoError::KoViolation)
    );
    assert_eq!(engine, before);
}

#[test]
fn ko_recapture_after_exchange_elsewhere() {
    let mut engine = ko_position();
    play_all(&mut engine, &[(15, 15), (15, 3)]);

    let dead = engine.try_play(Stone::Black, (5, 5)).unwrap();
    assert_eq!(dead, vec![(5, 6)]);
    assert_eq!(engine.captured_white(), 1);
    assert_eq!(engine.captured_black(), 1);
}

#[test]
fn multi_stone_capture_ignores_ko_marker() {
    let mut engine = Engine::new();
    play_all(&mut engine, &[(1, 0), (0, 0), (1, 1), (0, 1)]);
    assert_eq!(engine.last_move(), Some((0, 1)));

    let mut dead = engine.try_play(Stone::Black, (0, 2)).unwrap();
    dead.sort();
    assert_eq!(dead, vec![(0, 0), (0, 1)]);
    assert_eq!(engine.captured_white(), 2);
}

#[test]
fn suicide_is_rejected_without_change() {
    let mut engine = Engine::new();
    play_all(&mut engine, &[(0, 1), (10, 10), (1, 0), (10, 12)]);

    let before = engine.clone();
    assert!(engine.try_play(Stone::Black, (5, 5)).is_ok());
    assert_eq!(engine.try_play(Stone::White, (0, 0)), Err(GoError::Suicide));
    assert_eq!(engine.move_count(), before.move_count() + 1);
    assert_eq!(engine.stone_at((0, 0)), None);
}

#[test]
fn occupied_points_are_rejected_idempotently() {
    let mut engine = Engine::new();
    play_all(&mut engine, &[(3, 3), (3, 4), (9, 9)]);

    let before = engine.clone();
    for p in [(3, 3), (3, 4), (9, 9)] {
        for stone in [Stone::Black, Stone::White] {
            assert!(!engine.place_stone(p.0, p.1, stone));
            assert_eq!(engine, before);
        }
    }
}

#[test]
fn two_passes_end_the_game() {
    let mut engine = Engine::new();
    play_all(&mut engine, &[(3, 3)]);

    engine.pass();
    assert!(!engine.check_game_over());
    play_all(&mut engine, &[(15, 15)]);
    engine.pass();
    assert!(!engine.check_game_over());
    engine.pass();
    assert!(engine.check_game_over());

    let score = engine.calculate_score();
    assert_eq!(score.winner, Stone::White);
    assert_eq!(score.white, 6.5);
}

#[test]
fn export_import_reproduces_grid() {
    let mut engine = ko_position();
    play_all(&mut engine, &[(15, 15), (15, 3), (5, 5)]);

    let mut fresh = Engine::new();
    fresh.import_board(&engine.export_board()).unwrap();
    assert_eq!(fresh.board(), engine.board());
    assert_eq!(fresh.export_board(), engine.export_board());
    assert_eq!(fresh.current_turn_stone(), Stone::Black);
    assert_eq!(fresh.captured_white(), 0);
}

#[test]
fn computer_games_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut engine = Engine::new();
    let mut placed = 0u32;
    let mut last_total = 0;

    for turn in 0..300 {
        let difficulty = Difficulty([0, 4, 12, 18][turn % 4]);
        match selector::select_move_with(&mut engine, difficulty, &mut rng) {
            Selection::Pass => {}
            Selection::Play(point) => {
                let stone = engine.current_turn_stone();
                engine.try_play(stone, point).unwrap();
                placed += 1;
            }
        }
        if engine.check_game_over() {
            break;
        }

        let total = engine.captures().total();
        assert!(total >= last_total);
        last_total = total;

        let on_board = engine.board().iter().filter(|&&v| v != 0).count() as u32;
        assert_eq!(placed - total, on_board);

        for r in 0..19 {
            for c in 0..19 {
                if engine.stone_at((r, c)).is_some() {
                    assert!(engine.has_liberties((r, c)), "dead group at ({r}, {c})");
                }
            }
        }
    }
}
