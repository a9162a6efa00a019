//! Line walking for the chariot and cannon
//!
//! Both pieces travel any distance along a row, a column, or a palace
//! diagonal. The diagonal gate in [`super::is_pseudo_legal`] has already
//! rejected diagonals that are not palace lines by the time these helpers
//! run, but [`line_path`] checks again so it is safe on its own.

use crate::board::{palace_diagonal, Board};
use crate::position::Position;
use crate::types::Piece;

/// Squares strictly between `origin` and `destination` along a walkable
/// line, or `None` if no row, column or palace diagonal joins them
pub fn line_path(origin: Position, destination: Position) -> Option<Vec<Position>> {
    let (dc, dr) = origin.delta(destination);
    if dc != 0 && dr != 0 && palace_diagonal(origin, destination).is_none() {
        return None;
    }
    origin.between(destination)
}

/// Pieces standing strictly between the two ends of a walkable line,
/// nearest first
pub fn pieces_between(
    origin: Position,
    destination: Position,
    board: &Board,
) -> Option<Vec<Piece>> {
    let path = line_path(origin, destination)?;
    Some(
        path.into_iter()
            .filter_map(|square| board.piece_at(square).copied())
            .collect(),
    )
}
