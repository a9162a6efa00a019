//! Horse movement
//!
//! One orthogonal step followed by one diagonal step outward: a net
//! displacement of (±1, ±2) or (±2, ±1). The orthogonal leg, taken along
//! the longer axis, must be empty. The diagonal leg cannot be blocked.

use crate::board::Board;
use crate::position::Position;

pub fn is_valid_horse_move(origin: Position, destination: Position, board: &Board) -> bool {
    let (dc, dr) = origin.delta(destination);

    let leg = match (dc.abs(), dr.abs()) {
        (1, 2) => (0, dr.signum()),
        (2, 1) => (dc.signum(), 0),
        _ => return false,
    };

    origin
        .offset(leg.0, leg.1)
        .is_some_and(|square| board.is_empty(square))
}
