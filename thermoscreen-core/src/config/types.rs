//! Configuration type definitions
//!
//! Tuning for the panel, the normal-mode dirty tracker and the screensaver.
//! Everything is plain data with a `Default` matching the reference device;
//! boards may override it from flash (see [`super::stored`]).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fixed::SubPixel;

/// Number of flyers in the reference sizing
pub const FLYER_COUNT: usize = 5;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A min/max pair is reversed or outside the representable range
    InvalidRange,
    /// A quantisation step is zero, negative or not finite
    InvalidStep,
    /// Motion rates or animation period cannot produce a visible animation
    InvalidRate,
    /// Encoded configuration does not fit the buffer
    TooLarge,
    /// Encoding failed
    Serialize,
    /// Stored bytes are corrupt or from another format version
    Deserialize,
}

/// Panel size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelSize {
    pub width: u16,
    pub height: u16,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
        }
    }
}

impl PanelSize {
    /// Check that the panel fits the subpixel coordinate range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = SubPixel::MAX_PX as u16;
        if self.width == 0 || self.height == 0 || self.width > max || self.height > max {
            return Err(ConfigError::InvalidRange);
        }
        Ok(())
    }
}

/// Optional display features, fixed once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Capabilities {
    /// Screensaver available; when off, screensaver requests are ignored
    pub screensaver: bool,
    /// Signal-strength icon shown and tracked
    pub signal_icon: bool,
}

impl Default for Capabilities {
    fn default() -> Self {
        Self {
            screensaver: true,
            signal_icon: true,
        }
    }
}

/// Inclusive range for a randomized spawn parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpawnRange {
    pub min: i16,
    pub max: i16,
}

impl SpawnRange {
    /// Create a new range `min..=max`
    pub const fn new(min: i16, max: i16) -> Self {
        Self { min, max }
    }

    /// Number of distinct values in the range
    pub const fn span(&self) -> u32 {
        (self.max as i32 - self.min as i32 + 1) as u32
    }

    /// Check if a value lies in the range
    pub const fn contains(&self, value: i16) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check ordering and that both ends are valid pixel coordinates
    pub fn validate_px(&self) -> Result<(), ConfigError> {
        if self.min > self.max || self.min < SubPixel::MIN_PX || self.max > SubPixel::MAX_PX {
            return Err(ConfigError::InvalidRange);
        }
        Ok(())
    }
}

/// Probability expressed as "`hits` in `out_of`"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Odds {
    pub hits: u8,
    pub out_of: u8,
}

impl Odds {
    /// Create new odds
    pub const fn new(hits: u8, out_of: u8) -> Self {
        Self { hits, out_of }
    }

    /// Check that the odds describe a probability
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.out_of == 0 || self.hits > self.out_of {
            return Err(ConfigError::InvalidRange);
        }
        Ok(())
    }
}

/// Screensaver tuning
///
/// Positions are whole pixels; the engine converts them to subpixels.
/// Flyers drift left and down: each tick `x` decreases by
/// `depth * x_rate` subpixels and `y` increases by `depth * y_rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScreensaverConfig {
    /// Initial x of each flyer when the screensaver starts
    pub setup_x: SpawnRange,
    /// Initial y of each flyer when the screensaver starts
    pub setup_y: SpawnRange,
    /// x of a flyer recycled onto the top edge
    pub top_edge_x: SpawnRange,
    /// y of a flyer recycled onto the right edge
    pub right_edge_y: SpawnRange,
    /// Depth (paint order and speed)
    pub depth: SpawnRange,
    /// Chance that a recycled flyer enters from the top edge
    pub top_edge_odds: Odds,
    /// Chance that a flyer is animated rather than the still sprite
    pub animated_odds: Odds,
    /// Horizontal subpixels per depth unit per tick
    pub x_rate: u8,
    /// Vertical subpixels per depth unit per tick
    pub y_rate: u8,
    /// Ticks per animation frame
    pub frame_period: u8,
    /// PRNG seed
    pub seed: u64,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            setup_x: SpawnRange::new(-32, 127),
            setup_y: SpawnRange::new(-32, 63),
            top_edge_x: SpawnRange::new(0, 159),
            right_edge_y: SpawnRange::new(0, 63),
            depth: SpawnRange::new(12, 24),
            top_edge_odds: Odds::new(5, 7),
            animated_odds: Odds::new(2, 3),
            x_rate: 2,
            y_rate: 1,
            frame_period: 3,
            seed: 0x5EED_7057_E125_0001,
        }
    }
}

impl ScreensaverConfig {
    /// Validate all ranges and rates
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.setup_x.validate_px()?;
        self.setup_y.validate_px()?;
        self.top_edge_x.validate_px()?;
        self.right_edge_y.validate_px()?;

        if self.depth.min < 1 || self.depth.max > i8::MAX as i16 || self.depth.min > self.depth.max
        {
            return Err(ConfigError::InvalidRange);
        }

        self.top_edge_odds.validate()?;
        self.animated_odds.validate()?;

        if (self.x_rate == 0 && self.y_rate == 0) || self.frame_period == 0 {
            return Err(ConfigError::InvalidRate);
        }

        Ok(())
    }
}

/// Normal-mode redraw tuning
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrackerConfig {
    /// Display resolution of the measured temperature (°C)
    pub temperature_step: f32,
    /// Display resolution of the setpoint (°C)
    pub setpoint_step: f32,
    /// Temperature shown as an empty thermometer (°C)
    pub gauge_min_c: f32,
    /// Temperature shown as a full thermometer (°C)
    pub gauge_max_c: f32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            temperature_step: 0.5,
            setpoint_step: 0.5,
            gauge_min_c: 10.0,
            gauge_max_c: 30.0,
        }
    }
}

impl TrackerConfig {
    /// Validate steps and gauge limits
    pub fn validate(&self) -> Result<(), ConfigError> {
        for step in [self.temperature_step, self.setpoint_step] {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::InvalidStep);
            }
        }
        if !self.gauge_min_c.is_finite()
            || !self.gauge_max_c.is_finite()
            || self.gauge_min_c >= self.gauge_max_c
        {
            return Err(ConfigError::InvalidRange);
        }
        Ok(())
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    pub panel: PanelSize,
    pub capabilities: Capabilities,
    pub screensaver: ScreensaverConfig,
    pub tracker: TrackerConfig,
}

impl DisplayConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()?;
        self.screensaver.validate()?;
        self.tracker.validate()
    }
}
