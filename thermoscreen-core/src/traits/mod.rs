//! Capability traits
//!
//! These traits define the interface between the display engine and the
//! code that owns the panel and the sensors.

pub mod canvas;
pub mod sensor;

pub use canvas::{Canvas, CanvasError, CanvasExt, Color, Region, TextStyle};
pub use sensor::{SensorSnapshot, SensorValues};
