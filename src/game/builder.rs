//! Builder for creating a `Game`.

use crate::core::{GameConfig, PieceKind};
use crate::events::{GameObserver, NullObserver};
use crate::moves::{MoveProvider, StandardMoves};

use super::game::Game;

/// Builder for creating a Game.
///
/// ```
/// use rust_chess_core::core::PlayerId;
/// use rust_chess_core::events::EventLog;
/// use rust_chess_core::game::GameBuilder;
///
/// let log = EventLog::new();
/// let game = GameBuilder::new()
///     .names("Alice", "Bob")
///     .observer(log.clone())
///     .build_standard();
///
/// assert_eq!(game.player(PlayerId::WHITE).name, "Alice");
/// assert_eq!(game.board().piece_count(), 32);
/// ```
pub struct GameBuilder {
    config: GameConfig,
    provider: Box<dyn MoveProvider>,
    observer: Box<dyn GameObserver>,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            provider: Box::new(StandardMoves),
            observer: Box::new(NullObserver),
        }
    }
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn names(mut self, white: impl Into<String>, black: impl Into<String>) -> Self {
        self.config = self.config.with_names(white, black);
        self
    }

    pub fn back_rank(mut self, back_rank: [PieceKind; 8]) -> Self {
        self.config = self.config.with_back_rank(back_rank);
        self
    }

    /// Use a custom move-shape provider instead of `StandardMoves`.
    pub fn provider(mut self, provider: impl MoveProvider + 'static) -> Self {
        self.provider = Box::new(provider);
        self
    }

    pub fn observer(mut self, observer: impl GameObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Build a game in Setup with an empty board.
    pub fn build(self) -> Game {
        Game::with_parts(self.config, self.provider, self.observer)
    }

    /// Build a game with the standard arrangement, ready for White's first
    /// move.
    pub fn build_standard(self) -> Game {
        let mut game = self.build();
        game.setup_game();
        game
    }
}
