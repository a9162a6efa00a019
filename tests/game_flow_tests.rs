//! Game Flow Integration Tests
//!
//! Tests for full games played through the public API:
//! - Turn alternation, passes included
//! - Move rejection and atomicity
//! - Check reporting across a scripted opening

mod common;

use anyhow::Result;
use common::{create_test_board, init_tracing, pos};
use janggi::{
    apply_move, game_from_position, get_board, get_game_state, get_piece, is_in_check,
    legal_moves, make_move, new_game, new_game_with_config, turn, Cell, EngineError, GameState,
    MoveError, MoveOutcome, PieceKind, RuleConfig, Side,
};

// ============================================================================
// Starting Position
// ============================================================================

#[test]
fn test_starting_census() {
    init_tracing();
    let game = new_game();
    let board = get_board(&game);

    let expected = [
        (PieceKind::General, 1),
        (PieceKind::Guard, 2),
        (PieceKind::Horse, 2),
        (PieceKind::Elephant, 2),
        (PieceKind::Chariot, 2),
        (PieceKind::Cannon, 2),
        (PieceKind::Soldier, 5),
    ];
    for side in [Side::Red, Side::Blue] {
        for (kind, count) in expected {
            assert_eq!(board.count(kind, side), count, "{side} {kind}");
        }
    }
    assert_eq!(board.general_position(Side::Red), Some(pos("e2")));
    assert_eq!(board.general_position(Side::Blue), Some(pos("e9")));

    match get_piece(board, pos("b3")) {
        Cell::Occupied(piece) => {
            assert_eq!(piece.kind(), PieceKind::Cannon);
            assert_eq!(piece.side(), Side::Red);
            assert_eq!(piece.position(), pos("b3"));
        }
        Cell::Empty => panic!("b3 should hold a cannon"),
    }
    assert_eq!(get_piece(board, pos("e5")), Cell::Empty);
}

// ============================================================================
// Turn Alternation
// ============================================================================

#[test]
fn test_blue_moves_first() -> Result<()> {
    init_tracing();
    let mut game = new_game();

    let err = make_move(&mut game, "c1", "d3").unwrap_err();
    assert!(matches!(
        err,
        EngineError::Move(MoveError::WrongSideToMove {
            side: Side::Red,
            ..
        })
    ));
    assert_eq!(turn(&game), Side::Blue);

    make_move(&mut game, "a7", "b7")?;
    assert_eq!(turn(&game), Side::Red);
    Ok(())
}

#[test]
fn test_turns_alternate_with_passes() -> Result<()> {
    init_tracing();
    let mut game = new_game();

    let script = [
        ("a7", "a6", Side::Red),
        ("e2", "e2", Side::Blue),
        ("e9", "e9", Side::Red),
        ("c4", "d4", Side::Blue),
    ];
    for (from, to, next) in script {
        make_move(&mut game, from, to)?;
        assert_eq!(turn(&game), next, "after {from}-{to}");
    }
    assert_eq!(game.ply(), 4);
    Ok(())
}

// ============================================================================
// Scripted Opening
// ============================================================================

#[test]
fn test_opening_into_check() -> Result<()> {
    //! Plays an opening in which Blue's chariot ends up checking the Red
    //! general on the f file
    init_tracing();
    let mut game = new_game();

    assert!(make_move(&mut game, "c1", "e3").is_err());
    make_move(&mut game, "a7", "b7")?;
    assert!(!is_in_check(&game, Side::Blue));
    make_move(&mut game, "a4", "a5")?;
    assert_eq!(get_game_state(&game), GameState::Unfinished);
    make_move(&mut game, "b7", "b6")?;

    let err = make_move(&mut game, "b3", "b6").unwrap_err();
    assert!(
        matches!(
            err,
            EngineError::Move(MoveError::IllegalPieceGeometry { .. })
        ),
        "cannon has no screen: {err}"
    );

    make_move(&mut game, "a1", "a4")?;
    make_move(&mut game, "c7", "d7")?;
    assert_eq!(make_move(&mut game, "a4", "a4")?, MoveOutcome::Pass);
    make_move(&mut game, "e9", "e8")?;
    make_move(&mut game, "e2", "f3")?;
    make_move(&mut game, "i10", "i9")?;
    make_move(&mut game, "f1", "e2")?;

    let outcome = make_move(&mut game, "i9", "f9")?;
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            captured: None,
            check: true
        }
    );
    assert!(is_in_check(&game, Side::Red));
    assert!(!is_in_check(&game, Side::Blue));
    assert_eq!(get_game_state(&game), GameState::Unfinished);

    // Ignoring the check is refused
    let before = game.clone();
    let err = make_move(&mut game, "e4", "e5").unwrap_err();
    assert!(matches!(
        err,
        EngineError::Move(MoveError::MoveExposesOwnCheck { .. })
    ));
    assert_eq!(game, before);

    // Stepping off the file answers it
    make_move(&mut game, "f3", "e3")?;
    assert!(!is_in_check(&game, Side::Red));
    assert_eq!(turn(&game), Side::Blue);
    Ok(())
}

#[test]
fn test_pass_in_check_official_rules() -> Result<()> {
    init_tracing();
    let mut game = new_game_with_config(RuleConfig::official());

    for (from, to) in [
        ("a7", "b7"),
        ("a4", "a5"),
        ("b7", "b6"),
        ("a1", "a4"),
        ("c7", "d7"),
        ("a4", "a4"),
        ("e9", "e8"),
        ("e2", "f3"),
        ("i10", "i9"),
        ("f1", "e2"),
        ("i9", "f9"),
    ] {
        make_move(&mut game, from, to)?;
    }
    assert!(is_in_check(&game, Side::Red));

    let before = game.clone();
    let err = make_move(&mut game, "a5", "a5").unwrap_err();
    assert!(matches!(
        err,
        EngineError::Move(MoveError::PassWhileInCheck { side: Side::Red })
    ));
    assert_eq!(game, before);
    Ok(())
}

// ============================================================================
// Self-check
// ============================================================================

#[test]
fn test_uncovering_own_general_rejected() {
    //! The soldier on e7 shields its general from the chariot on e5
    init_tracing();
    let board = create_test_board(&[
        (PieceKind::General, Side::Blue, "e9"),
        (PieceKind::Soldier, Side::Blue, "e7"),
        (PieceKind::Chariot, Side::Red, "e5"),
        (PieceKind::General, Side::Red, "e2"),
    ]);
    let mut game = game_from_position(board, Side::Blue, RuleConfig::default());
    let before = game.clone();

    let result = apply_move(&mut game, pos("e7"), pos("d7"));
    assert_eq!(
        result,
        Err(MoveError::MoveExposesOwnCheck {
            origin: pos("e7"),
            destination: pos("d7"),
        })
    );
    assert_eq!(game, before);
    assert_eq!(legal_moves(&game, pos("e7")), vec![pos("e6")]);
}

#[test]
fn test_bad_notation_reported() {
    init_tracing();
    let mut game = new_game();
    for (from, to) in [("z1", "a1"), ("a0", "a1"), ("a7", "a11"), ("", "a1"), ("a07", "a6")] {
        let err = make_move(&mut game, from, to).unwrap_err();
        assert!(
            matches!(err, EngineError::Position(_)),
            "{from}-{to} gave {err}"
        );
    }
    assert_eq!(game, new_game());
}
