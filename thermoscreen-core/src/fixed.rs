//! Fixed-point subpixel coordinates
//!
//! Uses Q12.4 fixed-point format (an `i16` scaled by 16) for sprite
//! positions. Motion accumulates in subpixels; the fraction is discarded
//! only when a position is handed to the canvas.

use core::ops::{Add, Neg, Sub};

/// Q12.4 fixed-point coordinate
///
/// Range: -2048.0 to +2047.9375 pixels
/// Resolution: 1/16 pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SubPixel(pub i16);

impl SubPixel {
    /// Zero value
    pub const ZERO: Self = Self(0);

    /// One whole pixel
    pub const ONE: Self = Self(1 << 4);

    /// Fractional bits (4)
    pub const FRAC_BITS: u32 = 4;

    /// Smallest whole pixel that can be represented
    pub const MIN_PX: i16 = i16::MIN >> 4;

    /// Largest whole pixel that can be represented
    pub const MAX_PX: i16 = i16::MAX >> 4;

    /// Create from a whole pixel coordinate
    ///
    /// # Example
    /// ```
    /// use thermoscreen_core::fixed::SubPixel;
    /// let p = SubPixel::from_px(-32);
    /// assert_eq!(p.raw(), -512);
    /// ```
    #[inline]
    pub const fn from_px(px: i16) -> Self {
        Self(px << Self::FRAC_BITS)
    }

    /// Convert to a whole pixel coordinate
    ///
    /// Right-shift on signed integers is arithmetic, so this floors:
    /// -0.5 px lands on pixel -1, not 0.
    #[inline]
    pub const fn to_px(self) -> i16 {
        self.0 >> Self::FRAC_BITS
    }

    /// Fractional part in sixteenths of a pixel (0-15)
    #[inline]
    pub const fn frac(self) -> u8 {
        (self.0 & 0x0F) as u8
    }

    /// Saturating addition (clamps on overflow)
    #[inline]
    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating subtraction (clamps on underflow)
    #[inline]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Get the raw i16 representation
    #[inline]
    pub const fn raw(self) -> i16 {
        self.0
    }

    /// Create from raw i16 representation (pixels × 16)
    #[inline]
    pub const fn from_raw(raw: i16) -> Self {
        Self(raw)
    }
}

impl Add for SubPixel {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self(self.0.wrapping_add(other.0))
    }
}

impl Sub for SubPixel {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self(self.0.wrapping_sub(other.0))
    }
}

impl Neg for SubPixel {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}
