use std::fmt;

use baduk_engine::{BOARD_SIZE, Engine, Stone};

/// Text diagram of the board with row and column indices. The most recent
/// placement is bracketed.
pub struct BoardView<'a>(pub &'a Engine);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = self.0.last_move();
        write!(f, "   ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{c:>2} ")?;
        }
        writeln!(f)?;

        for r in 0..BOARD_SIZE {
            write!(f, "{r:>2} ")?;
            for c in 0..BOARD_SIZE {
                let ch = match self.0.stone_at((r, c)) {
                    Some(Stone::Black) => 'X',
                    Some(Stone::White) => 'O',
                    None => '.',
                };
                if last == Some((r, c)) {
                    write!(f, "[{ch}]")?;
                } else {
                    write!(f, " {ch} ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn board(engine: &Engine) -> String {
    BoardView(engine).to_string()
}

pub fn status(engine: &Engine) -> String {
    format!(
        "{} to move | captured black: {} white: {}",
        engine.current_turn_stone(),
        engine.captured_black(),
        engine.captured_white(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stones_and_last_move() {
        let mut engine = Engine::new();
        engine.try_play(Stone::Black, (0, 0)).unwrap();
        engine.try_play(Stone::White, (0, 1)).unwrap();

        let text = board(&engine);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        assert!(lines[1].starts_with(" 0  X [O] . "));
        assert!(lines[19].starts_with("18  .  . "));
    }

    #[test]
    fn empty_board_has_no_marker() {
        let engine = Engine::new();
        let text = format!("{}", BoardView(&engine));
        assert_eq!(text, board(&engine));
        assert!(!text.contains('['));
        assert!(text.lines().next().unwrap().ends_with("17 18 "));
        assert_eq!(text.matches('.').count(), 361);
    }

    #[test]
    fn status_line() {
        let engine = Engine::new();
        assert_eq!(
            status(&engine),
            format!("{} to move | captured black: 0 white: 0", Stone::Black)
        );
    }
}
