//! Rule engine and heuristic opponent for 19×19 baduk.
//!
//! [`Engine`] owns one game: the [`Goban`] grid, whose turn it is, pass
//! bookkeeping and the move history. [`selector`] proposes moves for the
//! computer side by trying every empty point on a throwaway copy of the
//! engine. [`wire`] converts the board to and from the JSON grid exchanged
//! with rendering and networking collaborators.

pub mod commentary;
pub mod engine;
pub mod error;
pub mod goban;
pub mod ko;
pub mod record;
pub mod score;
pub mod selector;
pub mod session;
pub mod stone;
pub mod sync;
pub mod turn;
pub mod wire;

/// Board coordinate as `(row, col)`, both in `0..BOARD_SIZE`.
pub type Point = (u8, u8);

/// Board side length. The grid is always square.
pub const BOARD_SIZE: u8 = 19;

pub use commentary::{CaptureSnapshot, CommentaryRequest};
pub use engine::{Engine, Stage};
pub use error::GoError;
pub use goban::{Captures, Goban};
pub use ko::Ko;
pub use record::{GameRecord, Outcome};
pub use score::{KOMI, Score};
pub use selector::{Difficulty, Selection};
pub use session::{Reply, SessionConfig, SinglePlayer};
pub use stone::Stone;
pub use sync::{RoomSync, SyncAction};
pub use turn::MoveRecord;
pub use wire::{GameStatePayload, WireError};
