//! Configuration types
//!
//! Board-agnostic tuning structures, optionally stored as postcard binary data.

#[cfg(feature = "serde")]
pub mod stored;
pub mod types;

pub use types::*;
