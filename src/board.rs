//! Board storage and zone queries
//!
//! The board is a fixed array of 90 cells in row-major order, so cloning it
//! for a speculative move is a plain copy. Nothing here knows how pieces
//! move; the palace helpers only answer geometric questions about the two
//! 3x3 palaces and their diagonal lines.
//!
//! # Palace lines
//!
//! Each palace has two diagonals crossing at its center:
//!
//! ```text
//!  d3 . f3        d10 . f10
//!    \ /             \ /
//!    e2               e9
//!    / \             / \
//!  d1 . f1        d8 .  f8
//! ```
//!
//! Every corner is joined to the center by one edge, four edges per palace.
//! Those are the only diagonal adjacencies on the board.

use crate::constants::{
    BLUE_PALACE_CENTER, BLUE_PALACE_ROWS, NUM_POSITIONS, PALACE_COLUMNS, RED_PALACE_CENTER,
    RED_PALACE_ROWS, STARTING_LAYOUT,
};
use crate::error::BoardError;
use crate::position::Position;
use crate::types::{Cell, Piece, PieceKind, Side};
use serde::{Deserialize, Serialize};

/// Every board position mapped to a [`Cell`]
///
/// Serializes as the list of pieces on it; each piece carries its own
/// position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct Board {
    cells: [Cell; NUM_POSITIONS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// A board with no pieces
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_POSITIONS],
        }
    }

    /// The canonical starting position
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (kind, side, position) in STARTING_LAYOUT {
            board.place(Piece::new(kind, side, position));
        }
        board
    }

    #[inline]
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Write a cell. An occupying piece is re-stamped with `position` so the
    /// stored position always matches its key.
    pub fn set(&mut self, position: Position, cell: Cell) {
        let cell = match cell {
            Cell::Occupied(mut piece) => {
                piece.set_position(position);
                Cell::Occupied(piece)
            }
            Cell::Empty => Cell::Empty,
        };
        self.cells[position.index()] = cell;
    }

    /// Put a piece on the position it names, replacing whatever was there
    pub fn place(&mut self, piece: Piece) {
        self.cells[piece.position().index()] = Cell::Occupied(piece);
    }

    /// Clear a position, returning what stood there
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        let previous = self.get(position);
        self.cells[position.index()] = Cell::Empty;
        previous.piece().copied()
    }

    /// Move whatever stands on `origin` to `destination`, returning the
    /// captured piece. No legality checks.
    pub(crate) fn relocate(&mut self, origin: Position, destination: Position) -> Option<Piece> {
        let moving = self.remove(origin);
        let captured = self.get(destination).piece().copied();
        self.set(destination, moving.into());
        captured
    }

    #[inline]
    pub fn piece_at(&self, position: Position) -> Option<&Piece> {
        self.cells[position.index()].piece()
    }

    #[inline]
    pub fn is_empty(&self, position: Position) -> bool {
        self.cells[position.index()].is_empty()
    }

    #[inline]
    pub fn side_at(&self, position: Position) -> Option<Side> {
        self.cells[position.index()].side()
    }

    /// All 90 positions, row-major from `a1`
    pub fn all_positions(&self) -> impl Iterator<Item = Position> {
        Position::all()
    }

    /// Every piece on the board, row-major
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.cells.iter().filter_map(Cell::piece)
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces().filter(move |piece| piece.side() == side)
    }

    /// Where `side`'s general stands, if it is still on the board
    pub fn general_position(&self, side: Side) -> Option<Position> {
        self.pieces_of(side)
            .find(|piece| piece.kind() == PieceKind::General)
            .map(Piece::position)
    }

    pub fn count(&self, kind: PieceKind, side: Side) -> usize {
        self.pieces_of(side).filter(|piece| piece.kind() == kind).count()
    }
}

impl TryFrom<Vec<Piece>> for Board {
    type Error = BoardError;

    fn try_from(pieces: Vec<Piece>) -> Result<Self, Self::Error> {
        let mut board = Board::empty();
        for piece in pieces {
            if !board.is_empty(piece.position()) {
                return Err(BoardError::DuplicatePosition {
                    position: piece.position(),
                });
            }
            board.place(piece);
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Piece> {
    fn from(board: Board) -> Self {
        board.pieces().copied().collect()
    }
}

/// Read-only cell lookup for renderers
pub fn get_piece(board: &Board, position: Position) -> Cell {
    board.get(position)
}

/// Palace center of `side`
pub fn palace_center(side: Side) -> Position {
    match side {
        Side::Red => RED_PALACE_CENTER,
        Side::Blue => BLUE_PALACE_CENTER,
    }
}

/// Is `position` inside `side`'s palace bounding box
pub fn in_palace(position: Position, side: Side) -> bool {
    let rows = match side {
        Side::Red => RED_PALACE_ROWS,
        Side::Blue => BLUE_PALACE_ROWS,
    };
    PALACE_COLUMNS.contains(&position.column()) && rows.contains(&position.row())
}

/// Whose palace contains `position`, if any
pub fn palace_containing(position: Position) -> Option<Side> {
    Side::ALL.into_iter().find(|&side| in_palace(position, side))
}

/// On one of the palace's two diagonals (its four corners or its center)
fn on_palace_diagonals(position: Position, side: Side) -> bool {
    let (dc, dr) = palace_center(side).delta(position);
    in_palace(position, side) && dc.abs() == dr.abs()
}

/// True only when `from` and `to` are the two ends of one corner-center
/// edge of `palace`
pub fn is_palace_diagonal_edge(from: Position, to: Position, palace: Side) -> bool {
    let center = palace_center(palace);
    let is_corner = |p: Position| {
        let (dc, dr) = center.delta(p);
        dc.abs() == 1 && dr.abs() == 1
    };
    (from == center && is_corner(to)) || (to == center && is_corner(from))
}

/// The palace whose diagonal line carries a straight move from `from` to
/// `to`: both on the same diagonal of one palace. Covers single edges and
/// the corner-to-corner run through the center.
pub fn palace_diagonal(from: Position, to: Position) -> Option<Side> {
    let (dc, dr) = from.delta(to);
    if dc == 0 || dc.abs() != dr.abs() {
        return None;
    }
    palace_containing(from)
        .filter(|&side| on_palace_diagonals(from, side) && on_palace_diagonals(to, side))
}
