use baduk_engine::{BOARD_SIZE, Point};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Point),
    Pass,
    Board,
    Restart,
    Quit,
    Help,
}

pub const HELP: &str = "\
commands:
  <row> <col>   place a stone, 0-based (e.g. `3 15`)
  pass          pass your turn
  board         show the board
  restart       start a new game
  quit          leave";

/// Parse one line of player input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(first) = parts.first() else {
        return Ok(None);
    };

    let command = match (first.to_lowercase().as_str(), parts.len()) {
        ("pass", 1) => Command::Pass,
        ("board", 1) | ("show", 1) => Command::Board,
        ("restart", 1) | ("new", 1) => Command::Restart,
        ("quit", 1) | ("exit", 1) => Command::Quit,
        ("help", 1) | ("?", 1) => Command::Help,
        (_, 2) => Command::Play((coord(parts[0])?, coord(parts[1])?)),
        _ => return Err(format!("unknown command: {}", line.trim())),
    };
    Ok(Some(command))
}

fn coord(raw: &str) -> Result<u8, String> {
    raw.parse::<u8>()
        .ok()
        .filter(|&v| v < BOARD_SIZE)
        .ok_or_else(|| format!("coordinate must be 0-{}, got '{raw}'", BOARD_SIZE - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_moves_and_words() {
        assert_eq!(parse_command("3 15"), Ok(Some(Command::Play((3, 15)))));
        assert_eq!(parse_command("  0   18 "), Ok(Some(Command::Play((0, 18)))));
        assert_eq!(parse_command("PASS"), Ok(Some(Command::Pass)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("new"), Ok(Some(Command::Restart)));
        assert_eq!(parse_command(""), Ok(None));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_command("19 0").is_err());
        assert!(parse_command("-1 4").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("3").is_err());
        assert!(parse_command("pass now").is_err());
    }
}
