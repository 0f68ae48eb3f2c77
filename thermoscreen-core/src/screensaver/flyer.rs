//! A single screensaver sprite instance

use crate::fixed::SubPixel;
use crate::sprites::{ANIMATION_FRAMES, STILL_FRAME};

/// One flyer in the screensaver
///
/// `depth` carries two meanings at once: it is the paint-order key
/// (larger is nearer, drawn later) and the speed factor. Nearer flyers
/// therefore always move faster; see [`Flyer::speed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Flyer {
    pub x: SubPixel,
    pub y: SubPixel,
    pub depth: i8,
    /// Animation frame (0..=3) or [`STILL_FRAME`]
    pub frame: u8,
}

impl Flyer {
    /// Flyer at the origin before the first setup
    pub const PARKED: Self = Self {
        x: SubPixel::ZERO,
        y: SubPixel::ZERO,
        depth: 0,
        frame: STILL_FRAME,
    };

    /// Per-tick displacement in subpixels as (dx, dy)
    ///
    /// Proportional to depth on both axes. `dx` is applied leftwards and
    /// `dy` downwards.
    pub fn speed(&self, x_rate: u8, y_rate: u8) -> (i16, i16) {
        let depth = self.depth as i16;
        (depth * x_rate as i16, depth * y_rate as i16)
    }

    pub fn is_animated(&self) -> bool {
        self.frame != STILL_FRAME
    }

    /// Whole-pixel position used for drawing
    pub fn position_px(&self) -> (i16, i16) {
        (self.x.to_px(), self.y.to_px())
    }

    /// Move one tick along the travel direction
    pub fn advance(&mut self, x_rate: u8, y_rate: u8) {
        let (dx, dy) = self.speed(x_rate, y_rate);
        self.x = self.x.saturating_sub(SubPixel::from_raw(dx));
        self.y = self.y.saturating_add(SubPixel::from_raw(dy));
    }

    /// Step to the next animation frame; still flyers stay still
    pub fn animate(&mut self) {
        if self.is_animated() {
            self.frame = (self.frame + 1) % ANIMATION_FRAMES;
        }
    }

    /// Check if the sprite has fully left through the left or bottom edge
    pub fn past_trailing_edge(&self, sprite_width: u16, panel_height: u16) -> bool {
        self.x <= SubPixel::from_px(-(sprite_width as i16))
            || self.y >= SubPixel::from_px(panel_height as i16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flyer(x: i16, y: i16, depth: i8, frame: u8) -> Flyer {
        Flyer {
            x: SubPixel::from_px(x),
            y: SubPixel::from_px(y),
            depth,
            frame,
        }
    }

    #[test]
    fn test_speed_follows_depth() {
        // Paint depth and speed are the same field: a nearer flyer is
        // always the faster one.
        let far = flyer(0, 0, 12, 0);
        let near = flyer(0, 0, 24, 0);
        assert_eq!(far.speed(2, 1), (24, 12));
        assert_eq!(near.speed(2, 1), (48, 24));
        assert!(near.depth > far.depth);
        assert!(near.speed(2, 1).0 > far.speed(2, 1).0);
    }

    #[test]
    fn test_advance_moves_left_and_down() {
        let mut f = flyer(100, 10, 16, 0);
        f.advance(2, 1);
        assert_eq!(f.x, SubPixel::from_raw(100 * 16 - 32));
        assert_eq!(f.y, SubPixel::from_raw(10 * 16 + 16));
        assert_eq!(f.position_px(), (98, 11));
    }

    #[test]
    fn test_subpixel_motion_accumulates() {
        // 12 subpixels per tick on y: the pixel position only moves once
        // enough fractions have built up
        let mut f = flyer(0, 0, 12, 0);
        let mut ys = [0i16; 4];
        for y in ys.iter_mut() {
            f.advance(0, 1);
            *y = f.position_px().1;
        }
        assert_eq!(ys, [0, 1, 2, 3]);
        assert_eq!(f.y.raw(), 48);
    }

    #[test]
    fn test_animation_cycle() {
        let mut f = flyer(0, 0, 12, 2);
        f.animate();
        assert_eq!(f.frame, 3);
        f.animate();
        assert_eq!(f.frame, 0);
    }

    #[test]
    fn test_still_flyer_keeps_frame() {
        let mut f = flyer(0, 0, 12, STILL_FRAME);
        f.animate();
        assert_eq!(f.frame, STILL_FRAME);
        assert!(!f.is_animated());
    }

    #[test]
    fn test_trailing_edge() {
        assert!(!flyer(-31, 10, 12, 0).past_trailing_edge(32, 64));
        assert!(flyer(-32, 10, 12, 0).past_trailing_edge(32, 64));
        assert!(!flyer(10, 63, 12, 0).past_trailing_edge(32, 64));
        assert!(flyer(10, 64, 12, 0).past_trailing_edge(32, 64));

        // One subpixel short of the edge is still on screen
        let f = Flyer {
            x: SubPixel::from_raw(-32 * 16 + 1),
            ..flyer(0, 0, 12, 0)
        };
        assert!(!f.past_trailing_edge(32, 64));
    }
}
