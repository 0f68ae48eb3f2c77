//! Flying-toaster screensaver
//!
//! Fixed-point sprite motion with painter's-algorithm occlusion.

pub mod engine;
pub mod flyer;

pub use engine::{ScreensaverEngine, ToasterEngine};
pub use flyer::Flyer;
