//! Piece movement rules
//!
//! [`is_pseudo_legal`] decides whether a piece could move to a destination
//! by geometry and blocking alone. It ignores whose turn it is and whether
//! the move leaves the mover's general attacked; those belong to the move
//! validator in [`crate::api`].
//!
//! ## Shared rules
//!
//! Checked once here, before the per-kind rule:
//! - staying in place is not a move
//! - landing on a piece of one's own side is never allowed
//! - **diagonal gate**: generals, guards, chariots and cannons may only
//!   move diagonally along a palace diagonal of the palace they stand in.
//!   Horses and elephants have fixed leaps and are exempt; soldiers handle
//!   their single palace step themselves.
//!
//! ## Module Structure
//!
//! - `palace_piece` - General and guard: one step inside the own palace
//! - `horse` - (1,2) leap, blockable on the first leg
//! - `elephant` - (2,3) leap, blockable on both inner legs
//! - `sliding` - Line walking shared by chariot and cannon
//! - `chariot` - Any distance along a clear line
//! - `cannon` - Any distance over exactly one non-cannon screen
//! - `soldier` - Forward or sideways, diagonal forward in the enemy palace
//! - `attack` - Check and checkmate detection built on the above

pub mod attack;
pub mod cannon;
pub mod chariot;
pub mod elephant;
pub mod horse;
pub mod palace_piece;
pub mod sliding;
pub mod soldier;


use crate::board::{palace_containing, palace_diagonal, Board};
use crate::position::Position;
use crate::types::{Piece, PieceKind};

/// Can `piece` reach `destination` on `board`, ignoring turn and check
pub fn is_pseudo_legal(piece: &Piece, destination: Position, board: &Board) -> bool {
    let origin = piece.position();

    if origin == destination {
        return false;
    }

    // Can't capture your own pieces
    if board.side_at(destination) == Some(piece.side()) {
        return false;
    }

    if piece.kind().follows_palace_lines() && !passes_diagonal_gate(origin, destination) {
        return false;
    }

    match piece.kind() {
        PieceKind::General | PieceKind::Guard => {
            palace_piece::is_valid_palace_step(piece, destination)
        }
        PieceKind::Horse => horse::is_valid_horse_move(origin, destination, board),
        PieceKind::Elephant => elephant::is_valid_elephant_move(origin, destination, board),
        PieceKind::Chariot => chariot::is_valid_chariot_move(origin, destination, board),
        PieceKind::Cannon => cannon::is_valid_cannon_move(origin, destination, board),
        PieceKind::Soldier => soldier::is_valid_soldier_move(piece, destination),
    }
}

/// Orthogonal moves always pass; a diagonal move must run along a palace
/// diagonal of the palace containing the origin
fn passes_diagonal_gate(origin: Position, destination: Position) -> bool {
    let (dc, dr) = origin.delta(destination);
    if dc == 0 || dr == 0 {
        return true;
    }
    match palace_diagonal(origin, destination) {
        Some(palace) => palace_containing(origin) == Some(palace),
        None => false,
    }
}

/// Every destination `piece` can reach on `board`, row-major
pub fn pseudo_legal_destinations(piece: &Piece, board: &Board) -> Vec<Position> {
    board
        .all_positions()
        .filter(|&destination| is_pseudo_legal(piece, destination, board))
        .collect()
}
