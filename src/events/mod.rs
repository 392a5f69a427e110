//! Event notifications from the core to the presentation layer.
//!
//! ## Architecture
//!
//! - `GameEvent`: one value per state change (placed, moved, captured,
//!   game over, turn ended)
//! - `GameObserver`: the receiving side, with no-op defaults
//! - `EventLog`: an observer that records events for later inspection
//!
//! Events are the crate's only observability channel: anything a log line
//! would report is available as a `GameEvent`.

mod event;
mod observer;

pub use event::GameEvent;
pub use observer::{EventLog, GameObserver, NullObserver};
