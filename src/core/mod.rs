//! Core value types: pieces, players, squares, configuration.
//!
//! Everything here is plain data. Game rules live in `rules`, the board
//! grid in `board`.

pub mod entity;
pub mod player;
pub mod square;
pub mod piece;
pub mod config;
pub mod registry;

pub use entity::PieceId;
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use square::{Square, BOARD_SIZE};
pub use piece::{PieceInstance, PieceKind};
pub use config::{GameConfig, STANDARD_BACK_RANK};
pub use registry::PieceRegistry;
