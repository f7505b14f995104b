use std::fmt;

/// Reasons a placement or pass is refused. Every variant is recoverable:
/// the engine is left exactly as it was before the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoError {
    NotOnBoard,
    Overwrite,
    OutOfTurn,
    Suicide,
    KoViolation,
    GameOver,
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::NotOnBoard => write!(f, "not on board"),
            GoError::Overwrite => write!(f, "point is occupied"),
            GoError::OutOfTurn => write!(f, "out of turn"),
            GoError::Suicide => write!(f, "suicide"),
            GoError::KoViolation => write!(f, "ko violation"),
            GoError::GameOver => write!(f, "game is over"),
        }
    }
}

impl std::error::Error for GoError {}
