//! Move legality for standard chess pieces on an 8x8 board.
//!
//! The crate decides whether a single move is geometrically legal, is not
//! obstructed, and belongs to the side to move, and applies it when it is.
//! Check, castling, en passant, promotion and draw rules are not part of it.

pub mod game;
pub mod ui;

pub use game::board::{Board, Color, Kind, Piece};
pub use game::mv::{apply, Move, MoveError};
pub use game::rules::{check_move, is_legal};
pub use game::session::{ClickOutcome, Session};
pub use game::square::Square;
pub use ui::renderer::{BoardRenderer, Glyphs, RenderOptions};

/// Fresh game: the standard starting layout with White to move.
pub fn new_game() -> Session {
    Session::new()
}
