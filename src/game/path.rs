use log::trace;

use crate::game::board::Board;
use crate::game::square::Square;

/// Walk from `from` toward `to` one `(step_x, step_y)` at a time and report
/// whether every square strictly between them is empty.
///
/// The step must line up with `to`; the rook and bishop rules check that
/// before calling. A walk that falls off the board without meeting `to`
/// reports `false`.
pub fn path_clear(board: &Board, from: Square, to: Square, step_x: i32, step_y: i32) -> bool {
    debug_assert!((step_x, step_y) != (0, 0));
    let mut current = from.offset(step_x, step_y);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if let Some(piece) = board.piece_at(square) {
            trace!("path {from}->{to} blocked at {square} by {piece:?}");
            return false;
        }
        current = square.offset(step_x, step_y);
    }
    false
}
