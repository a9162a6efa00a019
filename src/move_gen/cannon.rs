//! Cannon movement
//!
//! The cannon travels along a row, column or palace diagonal by jumping
//! exactly one piece, the screen, of either side. Moving and capturing use
//! the same rule. Cannons can neither serve as the screen nor be captured
//! by a cannon.
//!
//! On a palace diagonal the only possible jump is corner to opposite
//! corner over the occupied center.

use super::sliding::pieces_between;
use crate::board::Board;
use crate::position::Position;
use crate::types::PieceKind;

pub fn is_valid_cannon_move(origin: Position, destination: Position, board: &Board) -> bool {
    if board
        .piece_at(destination)
        .is_some_and(|target| target.kind() == PieceKind::Cannon)
    {
        return false;
    }

    match pieces_between(origin, destination, board).as_deref() {
        Some([screen]) => screen.kind() != PieceKind::Cannon,
        _ => false,
    }
}
