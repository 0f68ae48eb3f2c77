//! SSD1306 OLED canvas for the Thermoscreen display engine
//!
//! This crate provides:
//! - [`FrameBuffer`]: 128x64 1bpp buffer in panel page layout, usable as an
//!   `embedded-graphics` draw target
//! - [`Ssd1306`]: init and page transfer over blocking I2C
//! - [`OledCanvas`]: the [`Canvas`](thermoscreen_core::traits::Canvas)
//!   implementation tying the two together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod canvas;
pub mod frame;
pub mod ssd1306;

#[cfg(test)]
mod testing;

pub use canvas::OledCanvas;
pub use frame::FrameBuffer;
pub use ssd1306::{Ssd1306, DEFAULT_ADDRESS};
