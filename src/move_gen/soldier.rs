//! Soldier movement
//!
//! One point straight forward or one point sideways, never backward. There
//! is no promotion: a soldier on the far row can only move sideways. Inside
//! the enemy palace a soldier may also step diagonally forward along the
//! palace's diagonal edges.

use crate::board::{in_palace, is_palace_diagonal_edge};
use crate::position::Position;
use crate::types::Piece;

pub fn is_valid_soldier_move(piece: &Piece, destination: Position) -> bool {
    let origin = piece.position();
    let forward = piece.side().forward();
    let (dc, dr) = origin.delta(destination);

    match (dc.abs(), dr) {
        (0, r) => r == forward,
        (1, 0) => true,
        (1, r) if r == forward => {
            let enemy_palace = piece.side().opponent();
            in_palace(origin, enemy_palace)
                && is_palace_diagonal_edge(origin, destination, enemy_palace)
        }
        _ => false,
    }
}
