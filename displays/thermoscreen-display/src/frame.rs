//! 1bpp frame buffer in SSD1306 page layout
//!
//! The panel memory is 8 pages of 128 column bytes; bit `n` of a column
//! byte is row `page * 8 + n`. All drawing clips to the panel.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};

/// Panel width in pixels
pub const WIDTH: usize = 128;

/// Panel height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

/// Off-screen frame buffer
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a blank frame
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Column bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Set one pixel; off-panel coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        let bit = 1 << (y % 8);
        let byte = &mut self.pages[y / 8][x];
        if on {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    /// Read one pixel; off-panel pixels read as off
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= HEIGHT as i32 {
            return false;
        }
        let (x, y) = (x as usize, y as usize);
        self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Number of lit pixels
    pub fn lit(&self) -> usize {
        self.pages
            .iter()
            .flatten()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool) {
        let style = PrimitiveStyle::with_fill(BinaryColor::from(on));
        self.draw_styled_rect(x, y, width, height, style);
    }

    /// Draw a one-pixel rectangle outline inside the given bounds
    pub fn draw_rect(&mut self, x: i32, y: i32, width: u32, height: u32, on: bool) {
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(BinaryColor::from(on))
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.draw_styled_rect(x, y, width, height, style);
    }

    fn draw_styled_rect(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        style: PrimitiveStyle<BinaryColor>,
    ) {
        let rect = Rectangle::new(Point::new(x, y), Size::new(width, height)).into_styled(style);
        match rect.draw(self) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Composite a row-major, MSB-first bitmap through its mask
    ///
    /// Pixels under a set mask bit take the image bit; everything else is
    /// left untouched. Slices must hold `(width + 7) / 8 * height` bytes.
    pub fn blit_masked(
        &mut self,
        x: i32,
        y: i32,
        image: &[u8],
        mask: &[u8],
        width: u32,
        height: u32,
    ) {
        let row_bytes = (width as usize + 7) / 8;
        for row in 0..height as usize {
            for col in 0..width as usize {
                let index = row * row_bytes + col / 8;
                let bit = 0x80 >> (col % 8);
                if mask[index] & bit != 0 {
                    self.set_pixel(x + col as i32, y + row as i32, image[index] & bit != 0);
                }
            }
        }
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}
