//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::board::Board;
use crate::config::RuleConfig;
use crate::constants::FIRST_TO_MOVE;
use crate::game_state::GameState;
use crate::move_gen::attack;
use crate::types::{Game, Side};
use tracing::info;

/// Create a new game with the starting position and default rules
pub fn new_game() -> Game {
    new_game_with_config(RuleConfig::default())
}

/// Create a new game with the starting position and the given rules
pub fn new_game_with_config(config: RuleConfig) -> Game {
    info!("[GAME] New game ({:?})", config);
    Game {
        board: Board::starting(),
        state: GameState::Unfinished,
        turn: FIRST_TO_MOVE,
        in_check: [false; 2],
        ply: 0,
        config,
    }
}

/// Put `game` back at the starting position, keeping its rules
pub fn reset_game(game: &mut Game) {
    *game = new_game_with_config(game.config);
}

/// Start a game from an arbitrary position
///
/// Check flags are computed for both sides. A side that is already
/// checkmated here does not end the game; only an accepted move can.
pub fn game_from_position(board: Board, turn: Side, config: RuleConfig) -> Game {
    let prune = config.prune_distant_attackers;
    let mut in_check = [false; 2];
    for side in Side::ALL {
        in_check[side.index()] = attack::is_in_check(&board, side, prune);
    }

    info!(
        "[GAME] Game from position: {} pieces, {} to move",
        board.pieces().count(),
        turn
    );
    Game {
        board,
        state: GameState::Unfinished,
        turn,
        in_check,
        ply: 0,
        config,
    }
}
