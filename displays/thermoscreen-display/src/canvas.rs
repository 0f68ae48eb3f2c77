//! [`Canvas`] implementation for an SSD1306 panel
//!
//! Drawing goes to the local frame buffer; only [`Canvas::present`]
//! touches the bus.

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use embedded_hal::i2c::I2c;
use thermoscreen_core::traits::{Canvas, CanvasError, Color, TextStyle};

use crate::frame::{FrameBuffer, HEIGHT, WIDTH};
use crate::ssd1306::Ssd1306;

/// Buffered SSD1306 canvas
pub struct OledCanvas<I2C> {
    driver: Ssd1306<I2C>,
    frame: FrameBuffer,
}

impl<I2C: I2c> OledCanvas<I2C> {
    /// Create a canvas; call [`init`](Self::init) before presenting
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            driver: Ssd1306::new(i2c, address),
            frame: FrameBuffer::new(),
        }
    }

    /// Power up the panel
    pub fn init(&mut self) -> Result<(), CanvasError> {
        self.driver.init().map_err(|_| CanvasError::Communication)?;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialized");

        Ok(())
    }

    /// The composed, possibly not yet presented, frame
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn driver_mut(&mut self) -> &mut Ssd1306<I2C> {
        &mut self.driver
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.driver.release()
    }
}

fn on(color: Color) -> bool {
    matches!(color, Color::White)
}

impl<I2C: I2c> Canvas for OledCanvas<I2C> {
    fn clear(&mut self) -> Result<(), CanvasError> {
        self.frame.clear();
        Ok(())
    }

    fn draw_bitmap_masked(
        &mut self,
        x: i16,
        y: i16,
        image: &[u8],
        mask: &[u8],
        width: u16,
        height: u16,
    ) -> Result<(), CanvasError> {
        let expected = ((width as usize + 7) / 8) * height as usize;
        if image.len() != expected || mask.len() != expected {
            return Err(CanvasError::InvalidDimensions);
        }
        self.frame.blit_masked(
            x as i32,
            y as i32,
            image,
            mask,
            width as u32,
            height as u32,
        );
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: i16,
        y: i16,
        text: &str,
        style: TextStyle,
    ) -> Result<(), CanvasError> {
        let font = match style {
            TextStyle::Small => &FONT_6X10,
            TextStyle::Large => &FONT_10X20,
        };
        let character_style = MonoTextStyle::new(font, BinaryColor::On);
        let text = Text::with_baseline(
            text,
            Point::new(x as i32, y as i32),
            character_style,
            Baseline::Top,
        );
        match text.draw(&mut self.frame) {
            Ok(_) => Ok(()),
            Err(never) => match never {},
        }
    }

    fn fill_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.frame
            .fill_rect(x as i32, y as i32, width as u32, height as u32, on(color));
        Ok(())
    }

    fn draw_rect(
        &mut self,
        x: i16,
        y: i16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), CanvasError> {
        self.frame
            .draw_rect(x as i32, y as i32, width as u32, height as u32, on(color));
        Ok(())
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        if !self.driver.is_initialized() {
            return Err(CanvasError::NotInitialized);
        }
        self.driver
            .flush(&self.frame)
            .map_err(|_| CanvasError::Communication)
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }
}
