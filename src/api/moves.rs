//! Move validation and execution
//!
//! [`apply_move`] is the only way a game changes. It validates first and
//! commits last: every check runs against the untouched game (speculative
//! moves are played on a copy of the board), so a rejected move leaves the
//! game exactly as it was.
//!
//! Validation order, first failure wins:
//!
//! 1. the game is still running
//! 2. the origin holds a piece
//! 3. that piece belongs to the side to move
//! 4. origin == destination is a pass: accepted (unless passing out of
//!    check is disabled and the mover is in check)
//! 5. the piece can reach the destination
//! 6. the move does not leave the mover's general attacked

use crate::error::{EngineResult, MoveError, MoveResult};
use crate::game_state::GameState;
use crate::move_gen::{attack, is_pseudo_legal, pseudo_legal_destinations};
use crate::position::Position;
use crate::types::{Game, MoveOutcome, Piece};
use tracing::{debug, info};

/// Validate and, if legal, play a move for the side to move
///
/// # Errors
///
/// Returns the first [`MoveError`] in validation order. The game is not
/// modified on error.
///
/// # Examples
///
/// ```rust,ignore
/// let mut game = new_game();
/// let a7: Position = "a7".parse()?;
/// let b7: Position = "b7".parse()?;
/// apply_move(&mut game, a7, b7)?;
/// assert_eq!(game.turn(), Side::Red);
/// ```
pub fn apply_move(
    game: &mut Game,
    origin: Position,
    destination: Position,
) -> MoveResult<MoveOutcome> {
    let result = validate(game, origin, destination);
    let piece = match result {
        Ok(piece) => piece,
        Err(e) => {
            debug!("[MOVE] Rejected {}-{}: {}", origin, destination, e);
            return Err(e);
        }
    };

    let mover = piece.side();

    if origin == destination {
        game.turn = mover.opponent();
        game.ply += 1;
        debug!("[MOVE] {} passes", mover);
        return Ok(MoveOutcome::Pass);
    }

    let captured = game.board.relocate(origin, destination);

    let prune = game.config.prune_distant_attackers;
    let opponent = mover.opponent();
    let check = attack::is_in_check(&game.board, opponent, prune);
    game.in_check[mover.index()] = false;
    game.in_check[opponent.index()] = check;

    if check && !attack::has_escape(&game.board, opponent, prune) {
        game.state = GameState::won_by(mover);
        info!("[GAME] {} ({}-{})", game.state.message(), origin, destination);
    }

    game.turn = opponent;
    game.ply += 1;

    match captured {
        Some(taken) => debug!(
            "[MOVE] {} {}-{} takes {}{}",
            piece.token(),
            origin,
            destination,
            taken.token(),
            if check { ", check" } else { "" }
        ),
        None => debug!(
            "[MOVE] {} {}-{}{}",
            piece.token(),
            origin,
            destination,
            if check { ", check" } else { "" }
        ),
    }

    Ok(MoveOutcome::Moved { captured, check })
}

/// Run every check in order without touching the game; returns the moving
/// piece
fn validate(game: &Game, origin: Position, destination: Position) -> MoveResult<Piece> {
    if game.state.is_game_over() {
        return Err(MoveError::GameAlreadyOver);
    }

    let piece = *game
        .board
        .piece_at(origin)
        .ok_or(MoveError::NoPieceAtOrigin { origin })?;

    if piece.side() != game.turn {
        return Err(MoveError::WrongSideToMove {
            origin,
            side: piece.side(),
        });
    }

    if origin == destination {
        if !game.config.allow_pass_in_check && game.in_check[piece.side().index()] {
            return Err(MoveError::PassWhileInCheck { side: piece.side() });
        }
        return Ok(piece);
    }

    if !is_pseudo_legal(&piece, destination, &game.board) {
        return Err(MoveError::IllegalPieceGeometry {
            origin,
            destination,
        });
    }

    let prune = game.config.prune_distant_attackers;
    if attack::move_exposes_check(&game.board, piece.side(), origin, destination, prune) {
        return Err(MoveError::MoveExposesOwnCheck {
            origin,
            destination,
        });
    }

    Ok(piece)
}

/// [`apply_move`] taking positions in text form, e.g. `"a7"`
///
/// # Errors
///
/// [`crate::error::EngineError::Position`] for bad notation, otherwise
/// whatever [`apply_move`] reports.
pub fn make_move(game: &mut Game, origin: &str, destination: &str) -> EngineResult<MoveOutcome> {
    let origin: Position = origin.parse()?;
    let destination: Position = destination.parse()?;
    Ok(apply_move(game, origin, destination)?)
}

/// Destinations [`apply_move`] would accept from `origin` right now
///
/// Excludes the pass. Empty when the game is over or `origin` does not
/// hold a piece of the side to move.
pub fn legal_moves(game: &Game, origin: Position) -> Vec<Position> {
    if game.state.is_game_over() {
        return Vec::new();
    }
    let Some(piece) = game.board.piece_at(origin) else {
        return Vec::new();
    };
    if piece.side() != game.turn {
        return Vec::new();
    }

    let prune = game.config.prune_distant_attackers;
    pseudo_legal_destinations(piece, &game.board)
        .into_iter()
        .filter(|&destination| {
            !attack::move_exposes_check(&game.board, piece.side(), origin, destination, prune)
        })
        .collect()
}
