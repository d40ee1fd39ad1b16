//! Collision detection between the active piece and the board.
//!
//! Two flavours:
//!
//! - [`collides`] and [`overlaps`] only look at locked cells. Movement code
//!   pre-checks the walls and floor with the piece's reach metrics first.
//! - [`placement_overlaps`] validates a hypothetical placement (a rotation or
//!   hold-swap target) that has not been bounds-checked, so it also rejects
//!   cells left of column 0, right of column 9 or below the last row.
//!
//! Rows above the board are never out of bounds.

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::types::Coord;

/// Would the active piece hit a locked cell after moving by `(dx, dy)`?
pub fn collides(board: &Board, piece: &ActivePiece, dx: i8, dy: i8) -> bool {
    piece
        .cells
        .iter()
        .map(|c| c.offset(dx, dy))
        .any(|c| board.is_occupied(c.x, c.y))
}

/// Does the live piece already share a cell with the board?
pub fn overlaps(board: &Board, piece: &ActivePiece) -> bool {
    collides(board, piece, 0, 0)
}

/// Is a candidate placement blocked by the board or the playfield bounds?
pub fn placement_overlaps(board: &Board, cells: &[Coord]) -> bool {
    cells
        .iter()
        .any(|c| c.is_out_of_bounds() || board.is_occupied(c.x, c.y))
}
