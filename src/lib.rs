//! Janggi (Korean chess) rules engine
//!
//! Holds a game, validates moves for the side to move, and reports check
//! and checkmate. There is no search, rendering or networking; hosts drive
//! the engine through the free functions in [`api`].
//!
//! ```rust,ignore
//! use janggi::{make_move, new_game, get_game_state, GameState};
//!
//! let mut game = new_game();
//! make_move(&mut game, "a7", "b7")?;
//! assert_eq!(get_game_state(&game), GameState::Unfinished);
//! ```
//!
//! Logging goes through `tracing`; the library never installs a
//! subscriber.

pub mod api;
pub mod board;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod move_gen;
pub mod position;
pub mod types;

pub use api::{
    apply_move, game_from_position, get_board, get_game_state, is_in_check, legal_moves,
    make_move, new_game, new_game_with_config, reset_game, turn,
};
pub use board::{get_piece, Board};
pub use config::RuleConfig;
pub use error::{EngineError, EngineResult, MoveError, MoveResult, PositionError};
pub use game_state::GameState;
pub use position::Position;
pub use types::{Cell, Game, MoveOutcome, Piece, PieceKind, Side};
