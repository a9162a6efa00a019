//! Shared helpers for integration tests

#![allow(dead_code)]

use janggi::{Board, Piece, PieceKind, Position, Side};
use tracing_subscriber::EnvFilter;

/// Route engine logs to the test harness; `RUST_LOG=debug` shows moves
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn pos(s: &str) -> Position {
    s.parse().expect("valid test position")
}

/// Board holding exactly the listed pieces
pub fn create_test_board(pieces: &[(PieceKind, Side, &str)]) -> Board {
    let mut board = Board::empty();
    for &(kind, side, square) in pieces {
        board.place(Piece::new(kind, side, pos(square)));
    }
    board
}
