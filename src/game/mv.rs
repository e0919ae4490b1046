//! Move representation, error types and the move applier.

use std::fmt;
use std::str::FromStr;

use log::info;
use thiserror::Error;

use crate::game::board::{Board, Color, Piece};
use crate::game::rules::is_legal;
use crate::game::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses coordinate pairs such as `e2e4`, with no capture or check marks.
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.is_ascii() {
            return Err(MoveError::InvalidSquare(s.to_string()));
        }
        let (from, to) = s.split_at(2);
        Ok(Move::new(from.parse()?, to.parse()?))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("invalid square: {0}")]
    InvalidSquare(String),
    #[error("no piece to move on {0}")]
    NoPiece(Square),
    #[error("illegal move {from}->{to}")]
    IllegalMove { from: Square, to: Square },
    #[error("move {from}->{to} applied without passing the legality check")]
    PreconditionViolated { from: Square, to: Square },
}

/// Move the piece on `from` to `to`, capturing whatever stood there, and
/// hand the turn to the other side. Returns the captured piece.
///
/// The move is checked again first; an illegal move leaves both the board
/// and the turn untouched.
pub fn apply(
    board: &mut Board,
    turn: &mut Color,
    from: Square,
    to: Square,
) -> Result<Option<Piece>, MoveError> {
    if !is_legal(board, *turn, from, to) {
        return Err(MoveError::PreconditionViolated { from, to });
    }
    Ok(commit(board, turn, from, to))
}

/// The write half of [`apply`], for callers that have just run
/// [`check_move`](crate::game::rules::check_move) themselves.
pub(crate) fn commit(
    board: &mut Board,
    turn: &mut Color,
    from: Square,
    to: Square,
) -> Option<Piece> {
    let piece = board.set(from, None);
    let captured = board.set(to, piece);
    *turn = turn.opposite();
    info!("{from}->{to} played, {turn} to move");
    captured
}
