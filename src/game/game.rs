//! The game facade.
//!
//! `Game` owns the board, the players, the turn state, and the moved-pawn
//! set, and is the only way to change any of them. A presentation layer
//! holds one `Game` and passes it to whatever needs it.
//!
//! ## Two ways to play a move
//!
//! The step-by-step API mirrors how an input layer drives a move:
//!
//! ```
//! use rust_chess_core::core::Square;
//! use rust_chess_core::game::GameBuilder;
//!
//! let mut game = GameBuilder::new().build_standard();
//!
//! let pawn = game.piece_at(Square::new(4, 1)).unwrap();
//! let legal = game.legal_destinations(pawn.id);
//! assert!(legal.contains(&Square::new(4, 3)));
//!
//! let dst = Square::new(4, 3);
//! let capture = game.capture_if_occupied(dst);
//! assert!(capture.is_none());
//! game.apply_move(pawn.id, dst);
//! game.end_turn();
//! ```
//!
//! `play` runs the same sequence as one checked transaction and rejects bad
//! requests with a `MoveError` instead of panicking.

use crate::board::BoardState;
use crate::core::{GameConfig, PieceId, PieceInstance, PieceKind, PieceRegistry, Player, PlayerId, PlayerMap, Square};
use crate::events::{GameEvent, GameObserver, NullObserver};
use crate::moves::{BoardView, Candidates, MoveProvider, StandardMoves};
use crate::rules::{
    CaptureEvent, CaptureResolver, GamePhase, MoveExecutor, MoveRecord, PawnMoveTracker, TurnEngine,
};

use super::error::MoveError;

/// Everything that happened in one `play` transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub record: MoveRecord,
    pub capture: Option<CaptureEvent>,
}

impl MoveOutcome {
    /// The winner, if this move captured a king.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.capture.and_then(|c| c.winner)
    }
}

/// What is left of the transaction that captured the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Closing {
    /// The capturing piece still has to land on this square.
    Move(Square),
    /// Only the turn swap remains.
    EndTurn,
}

/// Authoritative state of one game.
pub struct Game {
    config: GameConfig,
    board: BoardState,
    pieces: PieceRegistry,
    players: PlayerMap<Player>,
    turns: TurnEngine,
    moved: PawnMoveTracker,
    phase: GamePhase,
    closing: Option<Closing>,
    provider: Box<dyn MoveProvider>,
    observer: Box<dyn GameObserver>,
}

impl Game {
    /// Create a game in the Setup phase with an empty board, standard move
    /// shapes, and no observer.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_parts(config, Box::new(StandardMoves), Box::new(NullObserver))
    }

    pub(crate) fn with_parts(
        config: GameConfig,
        provider: Box<dyn MoveProvider>,
        observer: Box<dyn GameObserver>,
    ) -> Self {
        let players = PlayerMap::new(|p| Player::new(config.name_of(p), p.is_white()));
        Self {
            config,
            board: BoardState::new(),
            pieces: PieceRegistry::new(),
            players,
            turns: TurnEngine::new(),
            moved: PawnMoveTracker::new(),
            phase: GamePhase::Setup,
            closing: None,
            provider,
            observer,
        }
    }

    // === Setup ===

    /// Place the standard starting arrangement and start the game.
    ///
    /// White's pieces are created first, back rank before pawns. Panics
    /// unless the game is in Setup with an empty board and the configured
    /// back rank holds exactly one King.
    pub fn setup_game(&mut self) {
        assert!(
            self.board.piece_count() == 0,
            "Standard setup needs an empty board, found {} pieces",
            self.board.piece_count()
        );

        let back_rank = self.config.back_rank();
        GameConfig::check_back_rank(&back_rank);
        for player in PlayerId::all() {
            let home = GameConfig::home_row(player);
            for (col, kind) in (0i8..).zip(back_rank) {
                self.place_piece(kind, player, Square::new(col, home));
            }
            let pawns = GameConfig::pawn_row(player);
            for col in 0..8 {
                self.place_piece(PieceKind::Pawn, player, Square::new(col, pawns));
            }
        }

        self.begin();
    }

    /// Create a piece for `owner` on `square`.
    ///
    /// Panics outside Setup or if the square is off the board or occupied.
    pub fn place_piece(&mut self, kind: PieceKind, owner: PlayerId, square: Square) -> PieceId {
        assert!(
            self.phase.is_setup(),
            "Pieces can only be placed during Setup, currently {:?}",
            self.phase
        );
        assert!(
            self.board.is_empty(square),
            "Cannot place {} {} at {}: square is off the board or occupied",
            owner,
            kind,
            square
        );

        let piece = self.pieces.create(kind, owner);
        self.board.place_piece(piece.id, square);
        self.players[owner].add_piece(piece.id);
        self.observer.notify(&GameEvent::PiecePlaced { piece, square });
        piece.id
    }

    /// Finish setup: Setup → InProgress.
    pub fn begin(&mut self) {
        self.phase.begin();
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Read-only view for move providers and presentation code.
    #[must_use]
    pub fn view(&self) -> BoardView<'_> {
        BoardView::new(&self.board, &self.pieces, &self.players, &self.moved)
    }

    /// The piece on a square. Off-board squares are empty.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceInstance> {
        self.board.piece_at(square).and_then(|id| self.pieces.get(id)).copied()
    }

    /// Where a piece stands, or `None` once it has been captured.
    #[must_use]
    pub fn square_of(&self, piece: PieceId) -> Option<Square> {
        self.board.square_of(piece)
    }

    /// Any piece created in this game, captured or not.
    #[must_use]
    pub fn piece(&self, id: PieceId) -> Option<&PieceInstance> {
        self.pieces.get(id)
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player to move.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.turns.current()
    }

    #[must_use]
    pub fn other_player(&self) -> PlayerId {
        self.turns.other()
    }

    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turns.turn_number()
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.phase.winner()
    }

    #[must_use]
    pub fn has_moved(&self, piece: PieceId) -> bool {
        self.moved.has_moved(piece)
    }

    #[must_use]
    pub fn belongs_to_current_player(&self, piece: PieceId) -> bool {
        self.players[self.turns.current()].owns(piece)
    }

    /// The piece on `square` if the current player may select it.
    ///
    /// `None` when the game is not in progress, the square is empty, or the
    /// piece belongs to the other player.
    #[must_use]
    pub fn selectable_at(&self, square: Square) -> Option<PieceInstance> {
        if !self.phase.is_in_progress() {
            return None;
        }
        self.piece_at(square)
            .filter(|p| self.belongs_to_current_player(p.id))
    }

    /// Squares `piece` may move to.
    ///
    /// Empty for unknown or captured pieces.
    #[must_use]
    pub fn legal_destinations(&self, piece: PieceId) -> Candidates {
        MoveExecutor::legal_destinations(&self.view(), self.provider.as_ref(), piece)
    }

    // === Step-by-step mutation ===

    /// Relocate `piece` to `to`.
    ///
    /// `to` must be one of `legal_destinations(piece)` with any capture
    /// already resolved. Panics on unknown or off-board pieces, an occupied
    /// destination, or during Setup. Once the game is over the only move
    /// accepted is the one landing on the captured king's square.
    pub fn apply_move(&mut self, piece: PieceId, to: Square) -> MoveRecord {
        assert!(!self.phase.is_setup(), "Cannot move before the game has begun");
        if self.phase.is_over() {
            assert!(
                self.closing == Some(Closing::Move(to)),
                "Cannot move to {} after the game is over",
                to
            );
        }
        let Some(&instance) = self.pieces.get(piece) else {
            panic!("Cannot move unknown {}", piece);
        };

        let record =
            MoveExecutor::apply(&mut self.board, &mut self.moved, &instance, to, self.observer.as_mut());
        if self.closing.is_some() {
            self.closing = Some(Closing::EndTurn);
        }
        record
    }

    /// Capture the piece on `square` for the current player, if any.
    ///
    /// Panics if the occupant belongs to the current player or the game is
    /// not in progress.
    pub fn capture_if_occupied(&mut self, square: Square) -> Option<CaptureEvent> {
        self.board.piece_at(square)?;
        let capture = CaptureResolver::resolve(
            &mut self.board,
            &self.pieces,
            &mut self.players,
            &mut self.phase,
            square,
            self.turns.current(),
            self.observer.as_mut(),
        );
        if capture.ends_game() {
            self.closing = Some(Closing::Move(square));
        }
        Some(capture)
    }

    /// Record that a pawn has left its starting square.
    ///
    /// `apply_move` does this itself; the hook is for front ends that
    /// relocate pawns through their own flow. Returns true the first time.
    /// Panics unless `piece` is a known pawn.
    pub fn mark_pawn_moved(&mut self, piece: PieceId) -> bool {
        let is_pawn = self.pieces.get(piece).map_or(false, PieceInstance::is_pawn);
        assert!(is_pawn, "{} is not a pawn", piece);
        self.moved.mark_moved(piece)
    }

    /// Pass the turn to the other player.
    ///
    /// After the game is over this is accepted once, to finish the move
    /// that captured the king.
    pub fn end_turn(&mut self) {
        assert!(!self.phase.is_setup(), "Cannot end a turn before the game has begun");
        if self.phase.is_over() {
            assert!(
                self.closing == Some(Closing::EndTurn),
                "Cannot end a turn after the game is over"
            );
            self.closing = None;
        }
        self.turns.swap();
        self.observer.notify(&GameEvent::TurnEnded {
            current: self.turns.current(),
            turn_number: self.turns.turn_number(),
        });
    }

    // === Checked transaction ===

    /// Validate and play a whole move: capture, relocate, end turn.
    ///
    /// Nothing changes if an error is returned.
    pub fn play(&mut self, piece: PieceId, to: Square) -> Result<MoveOutcome, MoveError> {
        self.check_move(piece, to)?;

        let capture = self.capture_if_occupied(to);
        let record = self.apply_move(piece, to);
        self.end_turn();

        Ok(MoveOutcome { record, capture })
    }

    fn check_move(&self, piece: PieceId, to: Square) -> Result<(), MoveError> {
        match self.phase {
            GamePhase::Setup => return Err(MoveError::NotStarted),
            GamePhase::GameOver { winner } => return Err(MoveError::GameOver { winner }),
            GamePhase::InProgress => {}
        }

        if !self.pieces.contains(piece) {
            return Err(MoveError::UnknownPiece(piece));
        }
        if self.board.square_of(piece).is_none() {
            return Err(MoveError::PieceCaptured(piece));
        }
        if !self.belongs_to_current_player(piece) {
            return Err(MoveError::NotYourPiece {
                piece,
                current: self.turns.current(),
            });
        }
        if !self.legal_destinations(piece).contains(&to) {
            return Err(MoveError::IllegalDestination { piece, to });
        }

        Ok(())
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("phase", &self.phase)
            .field("turns", &self.turns)
            .field("board", &self.board)
            .finish_non_exhaustive()
    }
}
