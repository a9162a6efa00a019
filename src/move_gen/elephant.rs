//! Elephant movement
//!
//! One orthogonal step followed by two diagonal steps outward, landing on
//! the far corner of a 2x3 rectangle: (±2, ±3) or (±3, ±2). Both inner
//! points (after the orthogonal step, and after the first diagonal step)
//! must be empty, whichever side occupies them.

use crate::board::Board;
use crate::position::Position;

pub fn is_valid_elephant_move(origin: Position, destination: Position, board: &Board) -> bool {
    let (dc, dr) = origin.delta(destination);
    let (sc, sr) = (dc.signum(), dr.signum());

    let legs = match (dc.abs(), dr.abs()) {
        (2, 3) => [(0, sr), (sc, 2 * sr)],
        (3, 2) => [(sc, 0), (2 * sc, sr)],
        _ => return false,
    };

    legs.iter().all(|&(c, r)| {
        origin
            .offset(c, r)
            .is_some_and(|square| board.is_empty(square))
    })
}
