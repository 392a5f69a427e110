//! Outbound notification interface.
//!
//! The core calls a `GameObserver` for every state change. Observers are
//! notified after the change has been applied and cannot veto it; the core
//! never waits on anything an observer does.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::core::{PieceInstance, PlayerId, Square};

use super::GameEvent;

/// Receiver for game notifications.
///
/// All methods default to doing nothing, so implementors override only what
/// they care about. `notify` dispatches an event to the matching method;
/// override it instead to handle every event in one place.
pub trait GameObserver: Send {
    fn on_piece_placed(&mut self, _piece: &PieceInstance, _square: Square) {}

    fn on_piece_moved(&mut self, _piece: &PieceInstance, _from: Square, _to: Square) {}

    fn on_piece_captured(&mut self, _piece: &PieceInstance, _by: PlayerId) {}

    fn on_game_over(&mut self, _winner: PlayerId) {}

    fn on_turn_ended(&mut self, _current: PlayerId, _turn_number: u32) {}

    /// Dispatch an event to the per-kind method.
    fn notify(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::PiecePlaced { piece, square } => self.on_piece_placed(&piece, square),
            GameEvent::PieceMoved { piece, from, to } => self.on_piece_moved(&piece, from, to),
            GameEvent::PieceCaptured { piece, by } => self.on_piece_captured(&piece, by),
            GameEvent::GameOver { winner } => self.on_game_over(winner),
            GameEvent::TurnEnded { current, turn_number } => self.on_turn_ended(current, turn_number),
        }
    }
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Observer that records every event in a shared buffer.
///
/// Clones share the same buffer, so keep one clone and hand the other to
/// the game.
///
/// ```
/// use rust_chess_core::events::EventLog;
/// use rust_chess_core::game::GameBuilder;
///
/// let log = EventLog::new();
/// let mut game = GameBuilder::new().observer(log.clone()).build();
/// game.setup_game();
///
/// assert_eq!(log.len(), 32);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.lock().clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drop all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<GameEvent>> {
        // Recorded events stay valid after a panic in another holder
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl GameObserver for EventLog {
    fn notify(&mut self, event: &GameEvent) {
        self.lock().push(*event);
    }
}
