//! Status screen rendering
//!
//! - [`layout`]: field regions, quantisation and widget drawing
//! - [`dirty`]: which fields must be redrawn this cycle

pub mod dirty;
pub mod layout;

pub use dirty::{DirtyState, DirtyStateTracker, Field, FieldSet};
