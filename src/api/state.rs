//! Read-only game queries

use crate::board::Board;
use crate::game_state::GameState;
use crate::types::{Game, Side};

/// The current board
pub fn get_board(game: &Game) -> &Board {
    &game.board
}

pub fn get_game_state(game: &Game) -> GameState {
    game.state
}

/// Whether `side`'s general was attacked after the last accepted move
///
/// Reads the flag stored by the move pipeline; passes do not refresh it.
pub fn is_in_check(game: &Game, side: Side) -> bool {
    game.in_check[side.index()]
}

/// Side to move
pub fn turn(game: &Game) -> Side {
    game.turn
}
