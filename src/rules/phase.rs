//! Game lifecycle.
//!
//! ```text
//! Setup --begin--> InProgress --king captured--> GameOver
//!                    ^    |
//!                    +----+  move / non-king capture
//! ```
//!
//! `GameOver` is terminal.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pieces are being placed; no moves yet.
    #[default]
    Setup,
    /// Moves are being played.
    InProgress,
    /// A king was captured by `winner`.
    GameOver { winner: PlayerId },
}

impl GamePhase {
    /// Setup → InProgress.
    ///
    /// Panics if the game has already started.
    pub fn begin(&mut self) {
        assert!(
            *self == GamePhase::Setup,
            "Game can only begin from Setup, currently {:?}",
            self
        );
        *self = GamePhase::InProgress;
    }

    /// InProgress → GameOver.
    ///
    /// Panics unless the game is in progress.
    pub fn finish(&mut self, winner: PlayerId) {
        assert!(
            *self == GamePhase::InProgress,
            "Game can only end while in progress, currently {:?}",
            self
        );
        *self = GamePhase::GameOver { winner };
    }

    #[must_use]
    pub fn is_setup(&self) -> bool {
        matches!(self, GamePhase::Setup)
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GamePhase::InProgress)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver { .. })
    }

    /// The winner, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GamePhase::GameOver { winner } => Some(*winner),
            _ => None,
        }
    }
}
