//! Chariot movement: any distance along a row, column or palace diagonal,
//! with every point in between empty

use super::sliding::pieces_between;
use crate::board::Board;
use crate::position::Position;

pub fn is_valid_chariot_move(origin: Position, destination: Position, board: &Board) -> bool {
    pieces_between(origin, destination, board).is_some_and(|blockers| blockers.is_empty())
}
