//! Canvas capability for the monochrome panel
//!
//! The engine never touches pixels directly. Every frame is composed through
//! this trait and pushed to the glass with [`Canvas::present`].

/// Errors reported by a canvas implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// Bus transfer to the display was rejected or timed out
    Communication,
    /// Display not initialized
    NotInitialized,
    /// Bitmap slice does not match the given width/height
    InvalidDimensions,
}

/// Pixel color on a monochrome panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Pixel off
    Black,
    /// Pixel lit
    White,
}

/// Font selection for [`Canvas::draw_text`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextStyle {
    /// Labels and secondary values
    Small,
    /// The main temperature reading
    Large,
}

/// Drawing surface backed by a display
///
/// Coordinates are whole pixels with the origin at the top-left corner.
/// Anything outside the panel is clipped by the implementation.
pub trait Canvas {
    /// Clear the whole frame to black
    fn clear(&mut self) -> Result<(), CanvasError>;

    /// Composite a masked bitmap
    ///
    /// Bitmaps are row-major, MSB first, `(width + 7) / 8` bytes per row.
    /// Every pixel whose mask bit is set is cleared first; image bits are
    /// then lit only where the mask is set.
    fn draw_bitmap_masked(
        &mut self,
        x: i16,
        y: i16,
        image: &[u8],
        mask: &[u8],
        width: u16,
        height: u16,
    ) -> Result<(), CanvasError>;

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, x: i16, y: i16, text: &str, style: TextStyle)
        -> Result<(), CanvasError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Draw a one-pixel rectangle outline
    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError>;

    /// Push the composed frame to the panel
    ///
    /// This is the slow step: the whole frame crosses the display bus.
    fn present(&mut self) -> Result<(), CanvasError>;

    /// Panel size in pixels as (width, height)
    fn dimensions(&self) -> (u16, u16);
}

/// Axis-aligned screen region in whole pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Region {
    pub x: i16,
    pub y: i16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    /// Create a new region
    pub const fn new(x: i16, y: i16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Helper trait for drawing common status widgets
pub trait CanvasExt: Canvas {
    /// Blank a region before redrawing its content
    fn erase(&mut self, region: Region) -> Result<(), CanvasError> {
        self.fill_rect(
            region.x,
            region.y,
            region.width,
            region.height,
            Color::Black,
        )
    }

    /// Replace the content of a region with a line of text
    fn draw_field(
        &mut self,
        region: Region,
        text: &str,
        style: TextStyle,
    ) -> Result<(), CanvasError> {
        self.erase(region)?;
        self.draw_text(region.x, region.y, text, style)
    }

    /// Draw a vertical bar gauge filled from the bottom
    ///
    /// - `level`: filled pixels (clamped to the inner height)
    fn draw_vgauge(&mut self, region: Region, level: u16) -> Result<(), CanvasError> {
        self.erase(region)?;
        self.draw_rect(
            region.x,
            region.y,
            region.width,
            region.height,
            Color::White,
        )?;

        let inner = region.height.saturating_sub(2);
        let level = level.min(inner);
        if level > 0 && region.width > 2 {
            let top = region.y + 1 + (inner - level) as i16;
            self.fill_rect(
                region.x + 1,
                top,
                region.width - 2,
                level,
                Color::White,
            )?;
        }
        Ok(())
    }

    /// Draw a signal-strength icon of `bars` rising bars out of `max_bars`
    ///
    /// Lit bars are filled, the remaining ones are drawn as outlines.
    fn draw_signal_bars(
        &mut self,
        region: Region,
        bars: u8,
        max_bars: u8,
    ) -> Result<(), CanvasError> {
        self.erase(region)?;
        if max_bars == 0 {
            return Ok(());
        }

        let slot = region.width / max_bars as u16;
        let bar_width = slot.saturating_sub(1).max(1);
        for i in 0..max_bars {
            let height = (region.height * (i as u16 + 1)) / max_bars as u16;
            let height = height.max(1);
            let x = region.x + (i as u16 * slot) as i16;
            let y = region.y + (region.height - height) as i16;
            if i < bars {
                self.fill_rect(x, y, bar_width, height, Color::White)?;
            } else {
                self.draw_rect(x, y, bar_width, height, Color::White)?;
            }
        }
        Ok(())
    }
}

// Blanket implementation for all Canvas types
impl<T: Canvas + ?Sized> CanvasExt for T {}
