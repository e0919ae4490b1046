//! One game in progress: board, side to move and the current selection.
//!
//! A front end feeds square clicks (or whole moves) into a [`Session`] and
//! redraws from it afterwards. Each session owns its state outright, so
//! separate games never share anything.

use log::{debug, info};

use crate::game::board::{Board, Color, Piece};
use crate::game::mv::{commit, MoveError};
use crate::game::rules::check_move;
use crate::game::square::Square;

/// What a single click did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing was selected and the square holds no piece of the side to move.
    Ignored,
    Selected(Square),
    Moved {
        from: Square,
        to: Square,
        captured: Option<Piece>,
    },
    /// The attempted move was illegal; the selection is dropped anyway.
    Rejected { from: Square, to: Square },
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    moves_played: usize,
}

impl Session {
    pub fn new() -> Self {
        Session {
            board: Board::new(),
            turn: Color::White,
            selected: None,
            moves_played: 0,
        }
    }

    /// Start from an arbitrary position.
    pub fn from_position(board: Board, turn: Color) -> Self {
        Session {
            board,
            turn,
            selected: None,
            moves_played: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selection(&self) -> Option<Square> {
        self.selected
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Status line shown under the board, e.g. `White's turn`.
    pub fn status(&self) -> String {
        format!("{}'s turn", self.turn)
    }

    pub fn is_legal(&self, from: Square, to: Square) -> bool {
        check_move(&self.board, self.turn, from, to).is_ok()
    }

    /// Handle a click on `square`.
    ///
    /// Without a selection, a piece of the side to move gets selected. With a
    /// selection, the selected piece tries to move to `square` and the
    /// selection is cleared whatever the result.
    pub fn click(&mut self, square: Square) -> ClickOutcome {
        match self.selected.take() {
            None => match self.board.piece_at(square) {
                Some(piece) if piece.color == self.turn => {
                    debug!("selected {square}");
                    self.selected = Some(square);
                    ClickOutcome::Selected(square)
                }
                _ => ClickOutcome::Ignored,
            },
            Some(from) => match self.play(from, square) {
                Ok(captured) => ClickOutcome::Moved {
                    from,
                    to: square,
                    captured,
                },
                Err(_) => ClickOutcome::Rejected { from, to: square },
            },
        }
    }

    /// Play `from`->`to` directly. Clears any selection; on error nothing
    /// else changes.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        self.selected = None;
        self.play(from, to)
    }

    /// Back to the starting position with White to move.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Session::new();
    }

    fn play(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        check_move(&self.board, self.turn, from, to)?;
        let captured = commit(&mut self.board, &mut self.turn, from, to);
        self.moves_played += 1;
        Ok(captured)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
