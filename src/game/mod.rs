//! The game facade a presentation layer holds.
//!
//! - `Game`: owns all state; step-by-step and checked move APIs
//! - `GameBuilder`: names, layout, move provider, observer
//! - `MoveError`: why a checked move was refused

mod builder;
mod error;
#[allow(clippy::module_inception)]
mod game;

pub use builder::GameBuilder;
pub use error::MoveError;
pub use game::{Game, MoveOutcome};
