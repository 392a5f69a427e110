//! Capture and game-over integration tests.

use rust_chess_core::core::{PieceId, PieceKind, PlayerId, Square};
use rust_chess_core::events::{EventLog, GameEvent};
use rust_chess_core::game::{Game, GameBuilder, MoveError};
use rust_chess_core::rules::GamePhase;

/// White king on e1, White rook on a1, Black queen on e4, Black king on e8.
/// Black to move.
fn queen_versus_king(log: &EventLog) -> (Game, PieceId, PieceId) {
    let mut game = GameBuilder::new().observer(log.clone()).build();
    let king = game.place_piece(PieceKind::King, PlayerId::WHITE, Square::new(4, 0));
    game.place_piece(PieceKind::Rook, PlayerId::WHITE, Square::new(0, 0));
    let queen = game.place_piece(PieceKind::Queen, PlayerId::BLACK, Square::new(4, 3));
    game.place_piece(PieceKind::King, PlayerId::BLACK, Square::new(4, 7));
    game.begin();
    game.end_turn();
    log.clear();
    (game, king, queen)
}

// =============================================================================
// King capture
// =============================================================================

/// Test the step-by-step king capture: winner reported, queen on the square,
/// king off the board.
#[test]
fn test_queen_captures_king() {
    let log = EventLog::new();
    let (mut game, king, queen) = queen_versus_king(&log);
    let dst = Square::new(4, 0);

    assert!(game.legal_destinations(queen).contains(&dst));

    let capture = game.capture_if_occupied(dst).expect("king should be captured");
    assert_eq!(capture.winner, Some(PlayerId::BLACK));
    assert_eq!(capture.captured.id, king);
    assert_eq!(capture.by, PlayerId::BLACK);
    assert_eq!(game.phase(), GamePhase::GameOver { winner: PlayerId::BLACK });

    // The capturing move still completes
    game.apply_move(queen, dst);
    game.end_turn();

    assert_eq!(game.piece_at(dst).map(|p| p.id), Some(queen));
    assert_eq!(game.square_of(king), None);
    assert!(game.player(PlayerId::WHITE).owns(king));
    assert_eq!(game.player(PlayerId::BLACK).captured().collect::<Vec<_>>(), vec![king]);

    // None of White's owned pieces stands on the king's old square
    for id in game.player(PlayerId::WHITE).pieces() {
        assert_ne!(game.square_of(id), Some(dst));
    }
}

/// Test that play reports the winner and that the game then refuses moves.
#[test]
fn test_play_king_capture_ends_game() {
    let log = EventLog::new();
    let (mut game, king, queen) = queen_versus_king(&log);

    let outcome = game.play(queen, Square::new(4, 0)).unwrap();
    assert_eq!(outcome.winner(), Some(PlayerId::BLACK));
    assert_eq!(game.winner(), Some(PlayerId::BLACK));

    let events = log.events();
    let king_piece = *game.piece(king).unwrap();
    let queen_piece = *game.piece(queen).unwrap();
    assert_eq!(
        events,
        vec![
            GameEvent::PieceCaptured {
                piece: king_piece,
                by: PlayerId::BLACK
            },
            GameEvent::GameOver { winner: PlayerId::BLACK },
            GameEvent::PieceMoved {
                piece: queen_piece,
                from: Square::new(4, 3),
                to: Square::new(4, 0)
            },
            GameEvent::TurnEnded {
                current: PlayerId::WHITE,
                turn_number: 3
            },
        ]
    );

    // White's rook can no longer move, and nothing is selectable
    let rook = game.piece_at(Square::new(0, 0)).unwrap();
    assert_eq!(
        game.play(rook.id, Square::new(0, 5)),
        Err(MoveError::GameOver { winner: PlayerId::BLACK })
    );
    assert_eq!(game.selectable_at(Square::new(0, 0)), None);
    assert_eq!(game.square_of(rook.id), Some(Square::new(0, 0)));
}

/// Test that once the king-capturing move has finished, the step API
/// refuses any further move.
#[test]
#[should_panic(expected = "after the game is over")]
fn test_apply_move_after_game_over_panics() {
    let log = EventLog::new();
    let (mut game, _king, queen) = queen_versus_king(&log);

    game.play(queen, Square::new(4, 0)).unwrap();
    assert!(game.phase().is_over());

    let rook = game.piece_at(Square::new(0, 0)).unwrap();
    game.apply_move(rook.id, Square::new(0, 5));
}

/// Test that the turn can be passed only once after the king falls.
#[test]
#[should_panic(expected = "Cannot end a turn after the game is over")]
fn test_end_turn_after_game_over_panics() {
    let log = EventLog::new();
    let (mut game, _king, queen) = queen_versus_king(&log);

    game.play(queen, Square::new(4, 0)).unwrap();
    game.end_turn();
}

/// Test that the capturing piece must land on the king's square.
#[test]
#[should_panic(expected = "after the game is over")]
fn test_closing_move_elsewhere_panics() {
    let log = EventLog::new();
    let (mut game, _king, queen) = queen_versus_king(&log);

    game.capture_if_occupied(Square::new(4, 0));
    game.apply_move(queen, Square::new(4, 4));
}

/// Test that a finished game stays exactly as the last move left it.
#[test]
fn test_finished_game_is_frozen() {
    let log = EventLog::new();
    let (mut game, _king, queen) = queen_versus_king(&log);

    game.capture_if_occupied(Square::new(4, 0));
    game.apply_move(queen, Square::new(4, 0));
    game.end_turn();
    let turn = game.turn_number();

    let rook = game.piece_at(Square::new(0, 0)).unwrap();
    assert!(game.play(rook.id, Square::new(0, 5)).is_err());
    assert_eq!(game.square_of(rook.id), Some(Square::new(0, 0)));
    assert_eq!(game.square_of(queen), Some(Square::new(4, 0)));
    assert_eq!(game.turn_number(), turn);
}

// =============================================================================
// Ordinary captures
// =============================================================================

/// Test that capturing a non-king piece leaves the game in progress.
#[test]
fn test_non_king_capture_keeps_playing() {
    let mut game = GameBuilder::new().build();
    let rook = game.place_piece(PieceKind::Rook, PlayerId::WHITE, Square::new(0, 0));
    let knight = game.place_piece(PieceKind::Knight, PlayerId::BLACK, Square::new(0, 5));
    game.place_piece(PieceKind::King, PlayerId::WHITE, Square::new(4, 0));
    game.place_piece(PieceKind::King, PlayerId::BLACK, Square::new(4, 7));
    game.begin();

    let outcome = game.play(rook, Square::new(0, 5)).unwrap();

    let capture = outcome.capture.expect("knight should be captured");
    assert_eq!(capture.captured.id, knight);
    assert_eq!(capture.winner, None);
    assert_eq!(game.phase(), GamePhase::InProgress);
    assert_eq!(game.square_of(knight), None);
    assert_eq!(game.square_of(rook), Some(Square::new(0, 5)));
    assert_eq!(game.player(PlayerId::WHITE).captured_count(), 1);
    assert_eq!(game.current_player(), PlayerId::BLACK);
}

/// Test that a captured piece cannot be played and has no destinations.
#[test]
fn test_captured_piece_is_inert() {
    let mut game = GameBuilder::new().build();
    let rook = game.place_piece(PieceKind::Rook, PlayerId::WHITE, Square::new(0, 0));
    let knight = game.place_piece(PieceKind::Knight, PlayerId::BLACK, Square::new(0, 5));
    game.place_piece(PieceKind::King, PlayerId::WHITE, Square::new(4, 0));
    game.place_piece(PieceKind::King, PlayerId::BLACK, Square::new(4, 7));
    game.begin();

    game.play(rook, Square::new(0, 5)).unwrap();

    assert!(game.legal_destinations(knight).is_empty());
    assert_eq!(
        game.play(knight, Square::new(1, 3)),
        Err(MoveError::PieceCaptured(knight))
    );
    // The registry still knows what it was
    assert_eq!(game.piece(knight).map(|p| p.kind), Some(PieceKind::Knight));
}

/// Test the pawn diagonal capture in an opening line.
#[test]
fn test_pawn_captures_diagonally() {
    let mut game = GameBuilder::new().build_standard();

    let e_pawn = game.piece_at(Square::new(4, 1)).unwrap().id;
    let d_pawn = game.piece_at(Square::new(3, 6)).unwrap().id;

    game.play(e_pawn, Square::new(4, 3)).unwrap();
    game.play(d_pawn, Square::new(3, 4)).unwrap();

    assert!(game.legal_destinations(e_pawn).contains(&Square::new(3, 4)));
    let outcome = game.play(e_pawn, Square::new(3, 4)).unwrap();

    assert_eq!(outcome.capture.map(|c| c.captured.id), Some(d_pawn));
    assert_eq!(game.board().piece_count(), 31);
    assert_eq!(game.player(PlayerId::WHITE).captured().collect::<Vec<_>>(), vec![d_pawn]);
}

/// Test that resolving a capture onto the current player's own piece is a
/// loud precondition failure.
#[test]
#[should_panic(expected = "cannot capture its own")]
fn test_capture_own_piece_panics() {
    let mut game = GameBuilder::new().build_standard();
    game.capture_if_occupied(Square::new(0, 1));
}
