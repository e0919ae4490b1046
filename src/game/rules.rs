//! Per-piece move legality.
//!
//! A move is legal when the source holds a piece of the side to move, the
//! destination is not held by a friendly piece, and the piece's movement
//! shape (plus a clear path for sliders) allows it. Nothing here looks at
//! whether a king ends up attacked.

use log::debug;

use crate::game::board::{Board, Color, Kind, Piece};
use crate::game::mv::MoveError;
use crate::game::path::path_clear;
use crate::game::square::Square;

/// `true` when `turn` may move the piece on `from` to `to`.
pub fn is_legal(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    check_move(board, turn, from, to).is_ok()
}

/// Same verdict as [`is_legal`], with the reason when the move is refused.
pub fn check_move(board: &Board, turn: Color, from: Square, to: Square) -> Result<(), MoveError> {
    let piece = board.piece_at(from).ok_or(MoveError::NoPiece(from))?;
    let illegal = MoveError::IllegalMove { from, to };

    if piece.color != turn {
        debug!("{from}->{to}: {piece:?} does not belong to {turn}");
        return Err(illegal);
    }
    if from == to {
        debug!("{from}->{to}: null move");
        return Err(illegal);
    }
    if let Some(target) = board.piece_at(to) {
        if target.color == turn {
            debug!("{from}->{to}: destination holds a friendly {:?}", target.kind);
            return Err(illegal);
        }
    }

    if follows_movement_rule(board, piece, from, to) {
        debug!("{from}->{to}: legal {:?} move", piece.kind);
        Ok(())
    } else {
        debug!("{from}->{to}: shape not allowed for {:?}", piece.kind);
        Err(illegal)
    }
}

fn follows_movement_rule(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    match piece.kind {
        Kind::Pawn => pawn_move(board, piece.color, from, to),
        Kind::Rook => rook_move(board, from, to),
        Kind::Bishop => bishop_move(board, from, to),
        Kind::Queen => rook_move(board, from, to) || bishop_move(board, from, to),
        Kind::Knight => knight_move(dx, dy),
        Kind::King => king_move(dx, dy),
    }
}

fn pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let dir = color.forward();
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let target = board.piece_at(to);

    if dx == 0 && dy == dir {
        return target.is_none();
    }
    if dx == 0 && dy == 2 * dir && from.y() == color.pawn_rank() {
        let step_is_empty = from.offset(0, dir).is_some_and(|sq| board.is_empty(sq));
        return target.is_none() && step_is_empty;
    }
    if dx.abs() == 1 && dy == dir {
        return target.is_some_and(|p| p.color != color);
    }
    false
}

fn rook_move(board: &Board, from: Square, to: Square) -> bool {
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    if (dx != 0 && dy != 0) || (dx == 0 && dy == 0) {
        return false;
    }
    path_clear(board, from, to, dx.signum(), dy.signum())
}

fn bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    if dx.abs() != dy.abs() || dx == 0 {
        return false;
    }
    path_clear(board, from, to, dx.signum(), dy.signum())
}

fn knight_move(dx: i32, dy: i32) -> bool {
    matches!((dx.abs(), dy.abs()), (2, 1) | (1, 2))
}

fn king_move(dx: i32, dy: i32) -> bool {
    dx.abs().max(dy.abs()) == 1
}
