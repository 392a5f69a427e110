//! Player identification, per-player storage, and ownership bookkeeping.
//!
//! ## PlayerId
//!
//! Type-safe identifier for one of the two sides. `PlayerId::WHITE` moves
//! first.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by a fixed two-entry array, indexable by
//! `PlayerId`.
//!
//! ## Player
//!
//! Display name, side flag, the pieces the player owns (in setup order) and
//! the opponent pieces the player has captured. Neither list ever shrinks:
//! a captured piece stays in its owner's `pieces` and is additionally
//! recorded in the capturer's `captured`.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::entity::PieceId;

/// Number of players in a game.
pub const PLAYER_COUNT: usize = 2;

/// Player identifier: `0` is White, `1` is Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The side that moves first.
    pub const WHITE: PlayerId = PlayerId(0);

    /// The side that moves second.
    pub const BLACK: PlayerId = PlayerId(1);

    /// Create a new player ID.
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player id must be 0 or 1");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The opposing player.
    #[must_use]
    pub const fn other(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Whether this is the side that moves first.
    #[must_use]
    pub const fn is_white(self) -> bool {
        self.0 == 0
    }

    /// Iterate over both player IDs, White first.
    pub fn all() -> impl Iterator<Item = PlayerId> {
        [Self::WHITE, Self::BLACK].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_white() {
            write!(f, "White")
        } else {
            write!(f, "Black")
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rust_chess_core::core::{PlayerId, PlayerMap};
///
/// let mut captured: PlayerMap<u32> = PlayerMap::with_value(0);
/// captured[PlayerId::BLACK] += 1;
///
/// assert_eq!(captured[PlayerId::WHITE], 0);
/// assert_eq!(captured[PlayerId::BLACK], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::WHITE), factory(PlayerId::BLACK)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new PlayerMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs, White first.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::all().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs, White first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::all().zip(self.data.iter_mut())
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One side of the game and the pieces attached to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,

    /// Side flag: true for the side that moves first.
    pub is_white: bool,

    /// Owned pieces, in setup order.
    pieces: Vector<PieceId>,

    /// Opponent pieces this player has captured, in capture order.
    captured: Vector<PieceId>,
}

impl Player {
    /// Create a player with no pieces.
    pub fn new(name: impl Into<String>, is_white: bool) -> Self {
        Self {
            name: name.into(),
            is_white,
            pieces: Vector::new(),
            captured: Vector::new(),
        }
    }

    /// Append a piece to the owned collection.
    pub fn add_piece(&mut self, piece: PieceId) {
        self.pieces.push_back(piece);
    }

    /// Append an opponent piece to the captured collection.
    pub fn record_capture(&mut self, piece: PieceId) {
        self.captured.push_back(piece);
    }

    /// Check whether this player owns a piece (captured or not).
    #[must_use]
    pub fn owns(&self, piece: PieceId) -> bool {
        self.pieces.contains(&piece)
    }

    /// Owned pieces in setup order.
    pub fn pieces(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.pieces.iter().copied()
    }

    /// Captured opponent pieces in capture order.
    pub fn captured(&self) -> impl Iterator<Item = PieceId> + '_ {
        self.captured.iter().copied()
    }

    /// Number of owned pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    /// Number of captured opponent pieces.
    #[must_use]
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}
