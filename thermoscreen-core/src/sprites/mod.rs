//! Sprite assets and paint order
//!
//! A [`SpriteSet`] is static data: image/footprint bitmap pairs plus the
//! rule that maps a flyer's frame selector to one of them. The paint-order
//! comparator and the stable sort used by the screensaver also live here.

pub mod bitmaps;

use core::cmp::Ordering;

use bitmaps::{
    SPRITE_BYTES, TOAST, TOASTER_0, TOASTER_1, TOASTER_2, TOASTER_MASK_0, TOASTER_MASK_1,
    TOASTER_MASK_2, TOAST_MASK,
};

/// Frame selector of the non-animated sprite variant
pub const STILL_FRAME: u8 = 255;

/// Length of the animation cycle (frame selectors 0..=3)
pub const ANIMATION_FRAMES: u8 = 4;

/// One composited sprite: lit pixels plus the footprint they cover
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    /// Pixels drawn white
    pub image: &'static [u8],
    /// Pixels cleared before the image is drawn
    pub mask: &'static [u8],
}

/// A fixed family of equally sized sprites
#[derive(Debug)]
pub struct SpriteSet {
    pub width: u16,
    pub height: u16,
    /// Frames shown for selectors 0..ANIMATION_FRAMES, in order
    pub animation: [Sprite; ANIMATION_FRAMES as usize],
    /// Frame shown for [`STILL_FRAME`]
    pub still: Sprite,
}

impl SpriteSet {
    /// Select the sprite for a frame selector
    ///
    /// Animated selectors wrap modulo the cycle length; the sentinel picks
    /// the still variant.
    pub fn frame(&self, selector: u8) -> &Sprite {
        if selector == STILL_FRAME {
            &self.still
        } else {
            &self.animation[(selector % ANIMATION_FRAMES) as usize]
        }
    }

    /// Bytes per bitmap row
    pub const fn row_bytes(&self) -> usize {
        (self.width as usize + 7) / 8
    }
}

/// Merge the dark-pixel mask with the image into the full footprint
const fn footprint(mask: &[u8; SPRITE_BYTES], image: &[u8; SPRITE_BYTES]) -> [u8; SPRITE_BYTES] {
    let mut out = [0u8; SPRITE_BYTES];
    let mut i = 0;
    while i < SPRITE_BYTES {
        out[i] = mask[i] | image[i];
        i += 1;
    }
    out
}

static FOOTPRINT_0: [u8; SPRITE_BYTES] = footprint(&TOASTER_MASK_0, &TOASTER_0);
static FOOTPRINT_1: [u8; SPRITE_BYTES] = footprint(&TOASTER_MASK_1, &TOASTER_1);
static FOOTPRINT_2: [u8; SPRITE_BYTES] = footprint(&TOASTER_MASK_2, &TOASTER_2);
static FOOTPRINT_TOAST: [u8; SPRITE_BYTES] = footprint(&TOAST_MASK, &TOAST);

/// Flying toasters: a three-pose wing flap played 0, 1, 2, 1, and a
/// slice of toast as the still variant
pub static TOASTERS: SpriteSet = SpriteSet {
    width: 32,
    height: 32,
    animation: [
        Sprite {
            image: &TOASTER_0,
            mask: &FOOTPRINT_0,
        },
        Sprite {
            image: &TOASTER_1,
            mask: &FOOTPRINT_1,
        },
        Sprite {
            image: &TOASTER_2,
            mask: &FOOTPRINT_2,
        },
        Sprite {
            image: &TOASTER_1,
            mask: &FOOTPRINT_1,
        },
    ],
    still: Sprite {
        image: &TOAST,
        mask: &FOOTPRINT_TOAST,
    },
};

/// Paint-order comparator: smaller depth is farther and painted first
#[inline]
pub fn paint_order(a: i8, b: i8) -> Ordering {
    a.cmp(&b)
}

/// Stable insertion sort
///
/// Equal elements keep their relative order. Cheap on the nearly sorted
/// input the screensaver feeds it every tick.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
