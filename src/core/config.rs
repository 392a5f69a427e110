//! Game configuration.
//!
//! A `GameConfig` fixes everything about a game that is decided before the
//! first piece is placed:
//! - Display names for both players
//! - The back-rank arrangement used by the standard setup
//!
//! Who moves first is not configurable: White always starts.

use serde::{Deserialize, Serialize};

use super::piece::PieceKind;
use super::player::PlayerId;

/// The standard back rank, from column 0 to column 7.
pub const STANDARD_BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Startup configuration for a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Display name of the side that moves first.
    pub white_name: String,

    /// Display name of the side that moves second.
    pub black_name: String,

    /// Piece kinds placed on each side's home row, column 0 first.
    /// Both sides use the same arrangement so the setup is mirrored.
    back_rank: [PieceKind; 8],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            white_name: "White".to_string(),
            black_name: "Black".to_string(),
            back_rank: STANDARD_BACK_RANK,
        }
    }
}

impl GameConfig {
    /// Create a configuration with the standard layout and default names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both display names.
    #[must_use]
    pub fn with_names(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.white_name = white.into();
        self.black_name = black.into();
        self
    }

    /// Replace the back-rank arrangement.
    ///
    /// Panics unless the arrangement contains exactly one King.
    #[must_use]
    pub fn with_back_rank(mut self, back_rank: [PieceKind; 8]) -> Self {
        Self::check_back_rank(&back_rank);
        self.back_rank = back_rank;
        self
    }

    /// The back-rank arrangement, column 0 first.
    #[must_use]
    pub fn back_rank(&self) -> [PieceKind; 8] {
        self.back_rank
    }

    /// Panics unless `back_rank` contains exactly one King.
    ///
    /// A deserialized configuration skips `with_back_rank`, so the standard
    /// setup checks again before placing anything.
    pub fn check_back_rank(back_rank: &[PieceKind; 8]) {
        let kings = back_rank.iter().filter(|&&k| k == PieceKind::King).count();
        assert!(kings == 1, "Back rank must contain exactly one King, found {}", kings);
    }

    /// Display name for a player.
    #[must_use]
    pub fn name_of(&self, player: PlayerId) -> &str {
        if player.is_white() {
            &self.white_name
        } else {
            &self.black_name
        }
    }

    /// Row holding a player's back rank.
    #[must_use]
    pub const fn home_row(player: PlayerId) -> i8 {
        if player.is_white() {
            0
        } else {
            7
        }
    }

    /// Row holding a player's pawns at the start.
    #[must_use]
    pub const fn pawn_row(player: PlayerId) -> i8 {
        if player.is_white() {
            1
        } else {
            6
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.name_of(PlayerId::WHITE), "White");
        assert_eq!(config.name_of(PlayerId::BLACK), "Black");
        assert_eq!(config.back_rank(), STANDARD_BACK_RANK);
    }

    #[test]
    fn test_with_names() {
        let config = GameConfig::new().with_names("Alice", "Bob");

        assert_eq!(config.name_of(PlayerId::WHITE), "Alice");
        assert_eq!(config.name_of(PlayerId::BLACK), "Bob");
    }

    #[test]
    fn test_rows() {
        assert_eq!(GameConfig::home_row(PlayerId::WHITE), 0);
        assert_eq!(GameConfig::pawn_row(PlayerId::WHITE), 1);
        assert_eq!(GameConfig::home_row(PlayerId::BLACK), 7);
        assert_eq!(GameConfig::pawn_row(PlayerId::BLACK), 6);
    }

    #[test]
    fn test_custom_back_rank() {
        let mut rank = STANDARD_BACK_RANK;
        rank.swap(3, 4);
        let config = GameConfig::new().with_back_rank(rank);
        assert_eq!(config.back_rank()[3], PieceKind::King);
    }

    #[test]
    #[should_panic(expected = "exactly one King")]
    fn test_back_rank_without_king() {
        let _ = GameConfig::new().with_back_rank([PieceKind::Rook; 8]);
    }

    #[test]
    #[should_panic(expected = "exactly one King")]
    fn test_back_rank_with_two_kings() {
        let mut rank = STANDARD_BACK_RANK;
        rank[3] = PieceKind::King;
        let _ = GameConfig::new().with_back_rank(rank);
    }

    #[test]
    fn test_config_serialization() {
        let config = GameConfig::new().with_names("Alice", "Bob");
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
