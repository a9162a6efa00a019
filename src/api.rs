//! Public API for the rules engine
//!
//! Free functions over [`Game`](crate::types::Game). Hosts create a game,
//! submit moves, and read back the board and result; every rule decision
//! is made here or below.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move validation and execution (apply_move, make_move, legal_moves)
//! - `state` - Read-only queries (get_board, get_game_state, is_in_check)

mod game;
mod moves;
mod state;

pub use game::{game_from_position, new_game, new_game_with_config, reset_game};
pub use moves::{apply_move, legal_moves, make_move};
pub use state::{get_board, get_game_state, is_in_check, turn};
