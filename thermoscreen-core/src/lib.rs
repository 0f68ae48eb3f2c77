//! Board-agnostic display engine for the Thermoscreen thermostat
//!
//! This crate contains all display logic that does not depend on a
//! specific panel or bus:
//!
//! - Capability traits (canvas, sensor snapshot)
//! - Dirty-field tracking for the status screen
//! - Flying-toaster screensaver with fixed-point motion
//! - Display mode state machine and controller
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod fixed;
pub mod render;
pub mod screensaver;
pub mod sprites;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use controller::{CycleReport, DisplayModeController};
