//! Turn rotation.
//!
//! `TurnEngine` holds the current/other player pair. The pair is swapped as
//! one value, so there is no point at which both roles name the same player.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Current and other player, plus the turn counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnEngine {
    current: PlayerId,
    other: PlayerId,
    /// Turn number (starts at 1).
    turn_number: u32,
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnEngine {
    /// White to move on turn 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: PlayerId::WHITE,
            other: PlayerId::BLACK,
            turn_number: 1,
        }
    }

    /// The player to move.
    #[must_use]
    pub const fn current(&self) -> PlayerId {
        self.current
    }

    /// The player waiting.
    #[must_use]
    pub const fn other(&self) -> PlayerId {
        self.other
    }

    #[must_use]
    pub const fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Exchange the current and other player and advance the turn counter.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.other);
        let Some(next) = self.turn_number.checked_add(1) else {
            panic!("Turn counter overflowed after turn {}", self.turn_number);
        };
        self.turn_number = next;
        debug_assert_ne!(self.current, self.other);
    }
}
