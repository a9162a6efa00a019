//! Board geometry and starting layout
//!
//! The Janggi board is 9 columns (`a`-`i`) by 10 rows (`1`-`10`); pieces
//! stand on intersections. Red occupies rows 1-4 at the start, Blue rows
//! 7-10. Internally columns and rows are zero-based, so `a1` is (0, 0) and
//! `i10` is (8, 9).

use crate::position::Position;
use crate::types::{PieceKind, Side};
use std::ops::RangeInclusive;

pub const BOARD_COLUMNS: u8 = 9;
pub const BOARD_ROWS: u8 = 10;
pub const NUM_POSITIONS: usize = (BOARD_COLUMNS as usize) * (BOARD_ROWS as usize);

/// Column letters in index order
pub const COLUMN_LETTERS: [char; BOARD_COLUMNS as usize] =
    ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i'];

/// Palace columns d-f, shared by both palaces
pub const PALACE_COLUMNS: RangeInclusive<u8> = 3..=5;

/// Red palace rows 1-3
pub const RED_PALACE_ROWS: RangeInclusive<u8> = 0..=2;

/// Blue palace rows 8-10
pub const BLUE_PALACE_ROWS: RangeInclusive<u8> = 7..=9;

pub const RED_PALACE_CENTER: Position = Position::at(b'e', 2);
pub const BLUE_PALACE_CENTER: Position = Position::at(b'e', 9);

/// Side that makes the first move of a game
pub const FIRST_TO_MOVE: Side = Side::Blue;

/// Canonical starting layout: 16 pieces per side
pub const STARTING_LAYOUT: [(PieceKind, Side, Position); 32] = [
    // Red back rank
    (PieceKind::Chariot, Side::Red, Position::at(b'a', 1)),
    (PieceKind::Elephant, Side::Red, Position::at(b'b', 1)),
    (PieceKind::Horse, Side::Red, Position::at(b'c', 1)),
    (PieceKind::Guard, Side::Red, Position::at(b'd', 1)),
    (PieceKind::Guard, Side::Red, Position::at(b'f', 1)),
    (PieceKind::Elephant, Side::Red, Position::at(b'g', 1)),
    (PieceKind::Horse, Side::Red, Position::at(b'h', 1)),
    (PieceKind::Chariot, Side::Red, Position::at(b'i', 1)),
    (PieceKind::General, Side::Red, RED_PALACE_CENTER),
    (PieceKind::Cannon, Side::Red, Position::at(b'b', 3)),
    (PieceKind::Cannon, Side::Red, Position::at(b'h', 3)),
    (PieceKind::Soldier, Side::Red, Position::at(b'a', 4)),
    (PieceKind::Soldier, Side::Red, Position::at(b'c', 4)),
    (PieceKind::Soldier, Side::Red, Position::at(b'e', 4)),
    (PieceKind::Soldier, Side::Red, Position::at(b'g', 4)),
    (PieceKind::Soldier, Side::Red, Position::at(b'i', 4)),
    // Blue back rank
    (PieceKind::Chariot, Side::Blue, Position::at(b'a', 10)),
    (PieceKind::Elephant, Side::Blue, Position::at(b'b', 10)),
    (PieceKind::Horse, Side::Blue, Position::at(b'c', 10)),
    (PieceKind::Guard, Side::Blue, Position::at(b'd', 10)),
    (PieceKind::Guard, Side::Blue, Position::at(b'f', 10)),
    (PieceKind::Elephant, Side::Blue, Position::at(b'g', 10)),
    (PieceKind::Horse, Side::Blue, Position::at(b'h', 10)),
    (PieceKind::Chariot, Side::Blue, Position::at(b'i', 10)),
    (PieceKind::General, Side::Blue, BLUE_PALACE_CENTER),
    (PieceKind::Cannon, Side::Blue, Position::at(b'b', 8)),
    (PieceKind::Cannon, Side::Blue, Position::at(b'h', 8)),
    (PieceKind::Soldier, Side::Blue, Position::at(b'a', 7)),
    (PieceKind::Soldier, Side::Blue, Position::at(b'c', 7)),
    (PieceKind::Soldier, Side::Blue, Position::at(b'e', 7)),
    (PieceKind::Soldier, Side::Blue, Position::at(b'g', 7)),
    (PieceKind::Soldier, Side::Blue, Position::at(b'i', 7)),
];
