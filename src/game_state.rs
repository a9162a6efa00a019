//! Game result tracking
//!
//! A game starts `Unfinished` and moves to a win for one side when the
//! other is checkmated.
//!
//! ```text
//! Unfinished → RedWon / BlueWon
//! ```
//!
//! Both won states are terminal: once reached, every further move is
//! rejected with [`crate::error::MoveError::GameAlreadyOver`].

use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Default, Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum GameState {
    /// Moves are still accepted
    #[default]
    Unfinished,

    /// Blue was checkmated
    RedWon,

    /// Red was checkmated
    BlueWon,
}

impl GameState {
    /// Terminal state in which `side` has won
    pub fn won_by(side: Side) -> Self {
        match side {
            Side::Red => GameState::RedWon,
            Side::Blue => GameState::BlueWon,
        }
    }

    /// Returns `true` for any terminal state
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameState::Unfinished)
    }

    /// The winning side, `None` while the game is running
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameState::Unfinished => None,
            GameState::RedWon => Some(Side::Red),
            GameState::BlueWon => Some(Side::Blue),
        }
    }

    /// Human-readable result line
    pub fn message(&self) -> &'static str {
        match self {
            GameState::Unfinished => "Game in progress",
            GameState::RedWon => "Red wins by checkmate!",
            GameState::BlueWon => "Blue wins by checkmate!",
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Unfinished => "UNFINISHED",
            GameState::RedWon => "RED_WON",
            GameState::BlueWon => "BLUE_WON",
        };
        f.write_str(label)
    }
}
