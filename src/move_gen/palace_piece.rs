//! General and guard movement
//!
//! Both pieces are confined to their own palace and move one point per
//! turn: one step along a board line, or one step along a palace diagonal
//! edge. Single-step pieces have nothing to be blocked by.

use crate::board::{in_palace, is_palace_diagonal_edge};
use crate::position::Position;
use crate::types::Piece;

pub fn is_valid_palace_step(piece: &Piece, destination: Position) -> bool {
    let side = piece.side();
    if !in_palace(destination, side) {
        return false;
    }

    let origin = piece.position();
    let (dc, dr) = origin.delta(destination);
    match (dc.abs(), dr.abs()) {
        (1, 0) | (0, 1) => true,
        (1, 1) => is_palace_diagonal_edge(origin, destination, side),
        _ => false,
    }
}
