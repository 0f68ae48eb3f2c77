//! Display mode state machine
//!
//! Arbitrates between the status screen and the screensaver. The machine
//! is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{Mode, ModeState};
