//! # Core Types
//!
//! Sides, piece kinds, pieces, board cells and the [`Game`] record that the
//! api functions operate on.
//!
//! ## Piece identity
//!
//! A [`Piece`] carries its kind, its side and the position it stands on.
//! The board stores pieces by position, and the stored `position` field
//! always matches the cell holding the piece; [`crate::board::Board`] keeps
//! that invariant on every write. A captured piece is simply overwritten and
//! stops existing.
//!
//! ## Display tokens
//!
//! Renderers ask each occupied cell for a three-letter token: lowercase side
//! initial plus the kind code, e.g. `rCH` for a Red chariot or `bGN` for the
//! Blue general. The engine itself never prints anything.

use crate::board::Board;
use crate::config::RuleConfig;
use crate::game_state::GameState;
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two players. Blue moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Red,
    Blue,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Red, Side::Blue];

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Blue,
            Side::Blue => Side::Red,
        }
    }

    /// Row direction of a forward step: Red advances toward row 10, Blue
    /// toward row 1
    #[inline]
    pub fn forward(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Blue => -1,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Blue => 1,
        }
    }

    /// Lowercase initial used in display tokens
    pub fn initial(self) -> char {
        match self {
            Side::Red => 'r',
            Side::Blue => 'b',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Blue => write!(f, "Blue"),
        }
    }
}

/// The seven Janggi piece kinds
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    General,
    Guard,
    Horse,
    Elephant,
    Chariot,
    Cannon,
    Soldier,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::General,
        PieceKind::Guard,
        PieceKind::Horse,
        PieceKind::Elephant,
        PieceKind::Chariot,
        PieceKind::Cannon,
        PieceKind::Soldier,
    ];

    /// Two-letter code used in display tokens
    pub fn code(self) -> &'static str {
        match self {
            PieceKind::General => "GN",
            PieceKind::Guard => "GD",
            PieceKind::Horse => "HO",
            PieceKind::Elephant => "EL",
            PieceKind::Chariot => "CH",
            PieceKind::Cannon => "CN",
            PieceKind::Soldier => "SO",
        }
    }

    /// Farthest Chebyshev distance a single move can cover, `None` for the
    /// line movers whose reach is unbounded
    pub fn max_reach(self) -> Option<u8> {
        match self {
            PieceKind::General | PieceKind::Guard | PieceKind::Soldier => Some(1),
            PieceKind::Horse => Some(2),
            PieceKind::Elephant => Some(3),
            PieceKind::Chariot | PieceKind::Cannon => None,
        }
    }

    /// Generals and guards never give check; they cannot leave their palace
    pub fn gives_check(self) -> bool {
        !matches!(self, PieceKind::General | PieceKind::Guard)
    }

    /// Kinds whose diagonal moves are confined to palace lines
    pub fn follows_palace_lines(self) -> bool {
        matches!(
            self,
            PieceKind::General | PieceKind::Guard | PieceKind::Chariot | PieceKind::Cannon
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    position: Position,
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side, position: Position) -> Self {
        Self {
            kind,
            side,
            position,
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn side(&self) -> Side {
        self.side
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Only the board moves pieces, so the position stays in sync with the
    /// cell that stores it
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Display token, e.g. `rCH`
    pub fn token(&self) -> String {
        format!("{}{}", self.side.initial(), self.kind.code())
    }
}

/// One board intersection
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    #[inline]
    pub fn piece(&self) -> Option<&Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    #[inline]
    pub fn side(&self) -> Option<Side> {
        self.piece().map(Piece::side)
    }

    /// Renderer token for the cell, `None` when empty
    pub fn token(&self) -> Option<String> {
        self.piece().map(Piece::token)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(value: Option<Piece>) -> Self {
        value.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// Complete state of one Janggi game
///
/// Fields are only written by the api functions, which keep the move
/// pipeline atomic: a rejected move leaves the whole record unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) state: GameState,
    pub(crate) turn: Side,
    pub(crate) in_check: [bool; 2],
    pub(crate) ply: u32,
    pub(crate) config: RuleConfig,
}

impl Game {
    /// Side to move
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Accepted moves so far, passes included
    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }
}

/// What an accepted move did
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// Origin equalled destination; only the turn changed
    Pass,
    /// A piece moved, possibly capturing
    Moved {
        captured: Option<Piece>,
        /// Opponent's general is attacked after the move
        check: bool,
    },
}
