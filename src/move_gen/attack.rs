//! Check and checkmate detection
//!
//! A side is in check when some opposing piece could capture its general
//! by an ordinary pseudo-legal move. Generals and guards never give check:
//! they cannot leave their own palace, and the two palaces never touch.
//!
//! ## Attacker pruning
//!
//! With `prune` set, attackers with a bounded reach (horse 2, elephant 3,
//! soldier 1, by Chebyshev distance) that stand farther than that from the
//! general are skipped without evaluating their move rule. Chariots and
//! cannons reach along whole lines and are always evaluated. Pruned and
//! full scans give the same answer.
//!
//! ## Checkmate
//!
//! Checkmate is an exhaustive search: for every piece of the checked side
//! and every pseudo-legal destination, the move is played on a copy of the
//! board and check is recomputed. One escaping move is enough to refute
//! mate. The caller's board is never touched.
//!
//! A side whose general is missing counts as checked with no escape.

use super::{is_pseudo_legal, pseudo_legal_destinations};
use crate::board::Board;
use crate::position::Position;
use crate::types::{Piece, Side};
use tracing::trace;

/// Could `attacker` possibly reach `target` in one move, judged by distance
#[inline]
fn within_reach(attacker: &Piece, target: Position) -> bool {
    match attacker.kind().max_reach() {
        Some(reach) => attacker.position().chebyshev_distance(target) <= reach,
        None => true,
    }
}

/// Opposing pieces that attack `side`'s general, row-major
pub fn attackers(board: &Board, side: Side, prune: bool) -> Vec<Position> {
    let Some(general) = board.general_position(side) else {
        return Vec::new();
    };

    board
        .pieces_of(side.opponent())
        .filter(|piece| piece.kind().gives_check())
        .filter(|piece| !prune || within_reach(piece, general))
        .filter(|piece| is_pseudo_legal(piece, general, board))
        .map(Piece::position)
        .collect()
}

/// Is `side`'s general currently attacked
pub fn is_in_check(board: &Board, side: Side, prune: bool) -> bool {
    let Some(general) = board.general_position(side) else {
        return true;
    };

    board
        .pieces_of(side.opponent())
        .filter(|piece| piece.kind().gives_check())
        .filter(|piece| !prune || within_reach(piece, general))
        .any(|piece| is_pseudo_legal(piece, general, board))
}

/// Copy of `board` with the piece on `origin` moved to `destination`
pub fn simulate_move(board: &Board, origin: Position, destination: Position) -> Board {
    let mut scratch = *board;
    scratch.relocate(origin, destination);
    scratch
}

/// Would moving `origin` to `destination` leave `side`'s general attacked
pub fn move_exposes_check(
    board: &Board,
    side: Side,
    origin: Position,
    destination: Position,
    prune: bool,
) -> bool {
    is_in_check(&simulate_move(board, origin, destination), side, prune)
}

/// Does `side` have at least one pseudo-legal move after which its
/// general is not attacked
pub fn has_escape(board: &Board, side: Side, prune: bool) -> bool {
    board.pieces_of(side).any(|piece| {
        pseudo_legal_destinations(piece, board)
            .into_iter()
            .any(|destination| {
                let escapes =
                    !move_exposes_check(board, side, piece.position(), destination, prune);
                if escapes {
                    trace!(
                        "[CHECK] {} escapes with {}-{}",
                        side,
                        piece.position(),
                        destination
                    );
                }
                escapes
            })
    })
}

/// In check with no escaping move
pub fn is_checkmated(board: &Board, side: Side, prune: bool) -> bool {
    is_in_check(board, side, prune) && !has_escape(board, side, prune)
}
