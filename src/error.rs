//! Error types for the Janggi engine
//!
//! Each concern gets its own `thiserror` enum and a `Result` alias:
//! move validation, position notation, board construction and rule
//! configuration. A rejected move never leaves partial state behind, so
//! none of these carry anything that needs cleanup.

use crate::position::Position;
use crate::types::Side;
use thiserror::Error;

/// Reasons `apply_move` refuses a move, in the order they are checked
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The game already has a winner
    #[error("Game is already over; no further moves are accepted")]
    GameAlreadyOver,

    /// Origin square is empty
    #[error("No piece at origin {origin}")]
    NoPieceAtOrigin { origin: Position },

    /// Piece at origin belongs to the side not on move
    #[error("Piece at {origin} belongs to {side}, who is not on move")]
    WrongSideToMove { origin: Position, side: Side },

    /// Destination is unreachable for this piece (geometry or blocking)
    #[error("Piece at {origin} cannot reach {destination}")]
    IllegalPieceGeometry {
        origin: Position,
        destination: Position,
    },

    /// Move would leave the mover's own general attacked
    #[error("Move {origin}-{destination} leaves own general in check")]
    MoveExposesOwnCheck {
        origin: Position,
        destination: Position,
    },

    /// Pass attempted while in check with passing-in-check disabled
    #[error("{side} cannot pass while in check")]
    PassWhileInCheck { side: Side },
}

/// Result type alias for move operations
pub type MoveResult<T> = Result<T, MoveError>;

/// Malformed position notation at the engine boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Input is empty or not of the form `<column><row>`
    #[error("Malformed position '{input}' (expected a1..i10)")]
    Malformed { input: String },

    /// Column letter outside a-i
    #[error("Invalid column '{column}' (must be a-i)")]
    InvalidColumn { column: char },

    /// Row number outside 1-10
    #[error("Invalid row in '{input}' (must be 1-10)")]
    InvalidRow { input: String },
}

/// Board snapshots that break the one-piece-per-position invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Two pieces claim position {position}")]
    DuplicatePosition { position: Position },
}

/// Errors that can occur while loading or saving rule configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from the text-notation entry point, which parses before it moves
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Position(#[from] PositionError),

    #[error(transparent)]
    Move(#[from] MoveError),
}

/// Result type alias for notation-level engine operations
pub type EngineResult<T> = Result<T, EngineError>;
