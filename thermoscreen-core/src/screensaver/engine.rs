//! Flyer particle system
//!
//! A fixed arena of `N` flyers indexed by slot. Flyers are never removed:
//! one that leaves through the trailing (left or bottom) edge is respawned
//! in place at the leading (top or right) edge.

use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128StarStar;

use super::flyer::Flyer;
use crate::config::{ConfigError, Odds, PanelSize, ScreensaverConfig, SpawnRange, FLYER_COUNT};
use crate::fixed::SubPixel;
use crate::sprites::{self, SpriteSet, ANIMATION_FRAMES, STILL_FRAME, TOASTERS};
use crate::traits::{Canvas, CanvasError};

/// Engine with the default PRNG and flyer count
pub type ToasterEngine = ScreensaverEngine<Xoroshiro128StarStar, FLYER_COUNT>;

/// Screensaver particle system
pub struct ScreensaverEngine<R: RngCore, const N: usize = FLYER_COUNT> {
    config: ScreensaverConfig,
    panel: PanelSize,
    sprites: &'static SpriteSet,
    rng: R,
    flyers: [Flyer; N],
    /// Slot indices in paint order, far to near
    order: [usize; N],
    ticks: u32,
    generation: u32,
}

impl<const N: usize> ScreensaverEngine<Xoroshiro128StarStar, N> {
    /// Create an engine seeded from `config.seed`
    pub fn seeded(config: ScreensaverConfig, panel: PanelSize) -> Result<Self, ConfigError> {
        let rng = Xoroshiro128StarStar::seed_from_u64(config.seed);
        Self::new(config, panel, rng)
    }
}

impl<R: RngCore, const N: usize> ScreensaverEngine<R, N> {
    /// Create an engine drawing the toaster sprites
    ///
    /// Flyers stay parked until the first [`setup`](Self::setup).
    pub fn new(config: ScreensaverConfig, panel: PanelSize, rng: R) -> Result<Self, ConfigError> {
        Self::with_sprites(config, panel, &TOASTERS, rng)
    }

    /// Create an engine drawing an arbitrary sprite set
    pub fn with_sprites(
        config: ScreensaverConfig,
        panel: PanelSize,
        sprites: &'static SpriteSet,
        rng: R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        panel.validate()?;
        if sprites.width as i16 > SubPixel::MAX_PX || sprites.height as i16 > SubPixel::MAX_PX {
            return Err(ConfigError::InvalidRange);
        }

        Ok(Self {
            config,
            panel,
            sprites,
            rng,
            flyers: [Flyer::PARKED; N],
            order: core::array::from_fn(|i| i),
            ticks: 0,
            generation: 0,
        })
    }

    /// Scatter every flyer over its setup range with fresh depth and frame
    pub fn setup(&mut self) {
        for slot in 0..N {
            let x = self.draw_in(self.config.setup_x);
            let y = self.draw_in(self.config.setup_y);
            self.flyers[slot] = self.spawn(x, y);
        }
        self.order = core::array::from_fn(|i| i);
        self.ticks = 0;
        self.generation = self.generation.wrapping_add(1);
        self.paint_order();
    }

    /// Advance every flyer by one tick
    ///
    /// Moves each flyer by its depth-derived speed, steps animated frames
    /// every `frame_period` ticks and recycles flyers that left the panel.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        let animate = self.ticks % self.config.frame_period as u32 == 0;

        for slot in 0..N {
            let flyer = &mut self.flyers[slot];
            flyer.advance(self.config.x_rate, self.config.y_rate);
            if animate {
                flyer.animate();
            }
            if flyer.past_trailing_edge(self.sprites.width, self.panel.height) {
                self.recycle(slot);
            }
        }
    }

    /// Re-sort the paint order and return it as slot indices
    ///
    /// Stable: flyers of equal depth keep the order they had last frame.
    pub fn paint_order(&mut self) -> &[usize; N] {
        let flyers = &self.flyers;
        sprites::stable_sort_by(&mut self.order, |&a, &b| {
            sprites::paint_order(flyers[a].depth, flyers[b].depth)
        });
        &self.order
    }

    /// Composite every flyer onto the canvas in paint order
    ///
    /// Returns the number of flyers drawn. Does not clear or present.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<usize, CanvasError> {
        for &slot in self.order.iter() {
            let flyer = &self.flyers[slot];
            let sprite = self.sprites.frame(flyer.frame);
            let (x, y) = flyer.position_px();
            canvas.draw_bitmap_masked(
                x,
                y,
                sprite.image,
                sprite.mask,
                self.sprites.width,
                self.sprites.height,
            )?;
        }
        Ok(N)
    }

    /// Paint order as of the last sort
    pub fn order(&self) -> &[usize; N] {
        &self.order
    }

    pub fn flyers(&self) -> &[Flyer; N] {
        &self.flyers
    }

    pub fn config(&self) -> &ScreensaverConfig {
        &self.config
    }

    /// Number of completed [`setup`](Self::setup) calls
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Respawn a flyer at the leading edge
    fn recycle(&mut self, slot: usize) {
        let (x, y) = if self.chance(self.config.top_edge_odds) {
            (
                self.draw_in(self.config.top_edge_x),
                -(self.sprites.height as i16),
            )
        } else {
            (
                self.panel.width as i16,
                self.draw_in(self.config.right_edge_y),
            )
        };
        self.flyers[slot] = self.spawn(x, y);

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "flyer {} recycled at ({}, {}) depth {}",
            slot,
            x,
            y,
            self.flyers[slot].depth
        );
    }

    fn spawn(&mut self, x: i16, y: i16) -> Flyer {
        let depth = self.draw_in(self.config.depth) as i8;
        let frame = if self.chance(self.config.animated_odds) {
            self.below(ANIMATION_FRAMES as u32) as u8
        } else {
            STILL_FRAME
        };
        Flyer {
            x: SubPixel::from_px(x),
            y: SubPixel::from_px(y),
            depth,
            frame,
        }
    }

    /// Uniform value in `0..bound` (bound > 0)
    fn below(&mut self, bound: u32) -> u32 {
        ((self.rng.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Uniform value in the inclusive range
    fn draw_in(&mut self, range: SpawnRange) -> i16 {
        (range.min as i32 + self.below(range.span()) as i32) as i16
    }

    fn chance(&mut self, odds: Odds) -> bool {
        self.below(odds.out_of as u32) < odds.hits as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CanvasOp, RecordingCanvas};
    use proptest::prelude::*;

    fn engine(seed: u64) -> ToasterEngine {
        let config = ScreensaverConfig {
            seed,
            ..ScreensaverConfig::default()
        };
        ToasterEngine::seeded(config, PanelSize::default()).unwrap()
    }

    fn assert_spawn_valid(config: &ScreensaverConfig, flyer: &Flyer) {
        assert!(config.depth.contains(flyer.depth as i16));
        assert!(flyer.frame < ANIMATION_FRAMES || flyer.frame == STILL_FRAME);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ScreensaverConfig {
            frame_period: 0,
            ..ScreensaverConfig::default()
        };
        assert!(matches!(
            ToasterEngine::seeded(config, PanelSize::default()),
            Err(ConfigError::InvalidRate)
        ));
    }

    #[test]
    fn test_setup_counts_generation() {
        let mut engine = engine(1);
        assert_eq!(engine.generation(), 0);
        engine.setup();
        engine.setup();
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_same_seed_same_flight() {
        let mut a = engine(42);
        let mut b = engine(42);
        a.setup();
        b.setup();
        for _ in 0..100 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.flyers(), b.flyers());
    }

    #[test]
    fn test_frame_advances_every_period() {
        let mut engine = engine(3);
        engine.setup();
        engine.flyers[0] = Flyer {
            x: SubPixel::from_px(100),
            y: SubPixel::from_px(0),
            depth: 12,
            frame: 0,
        };

        engine.tick();
        engine.tick();
        assert_eq!(engine.flyers[0].frame, 0);
        engine.tick();
        assert_eq!(engine.flyers[0].frame, 1);
    }

    #[test]
    fn test_fastest_flyer_recycled_after_crossing() {
        let mut engine = engine(9);
        engine.setup();
        engine.flyers[0] = Flyer {
            x: SubPixel::from_px(0),
            y: SubPixel::from_px(0),
            depth: 24,
            frame: 1,
        };

        // 48 subpixels per tick leftwards, 24 downwards: the left edge is
        // reached first, after ceil(32 * 16 / 48) ticks
        let (dx, dy) = engine.flyers[0].speed(2, 1);
        let k = (32 * 16 + dx - 1) / dx;
        assert_eq!(k, 11);
        assert!(k * dy < 64 * 16);

        for _ in 0..k - 1 {
            engine.tick();
        }
        let before = engine.flyers[0];
        assert_eq!(before.x.raw(), -(k - 1) * dx);
        assert_eq!(before.depth, 24);
        assert!(!before.past_trailing_edge(32, 64));

        engine.tick();
        let after = engine.flyers[0];
        let top_entry = after.y == SubPixel::from_px(-32) && engine.config.top_edge_x.contains(after.x.to_px());
        let right_entry = after.x == SubPixel::from_px(128) && engine.config.right_edge_y.contains(after.y.to_px());
        assert!(top_entry || right_entry, "not at a leading edge: {:?}", after);
        assert_spawn_valid(&engine.config, &after);
    }

    #[test]
    fn test_draw_in_paint_order() {
        let mut engine = engine(5);
        engine.setup();
        let depths = [20, 12, 24, 12, 16];
        for (flyer, depth) in engine.flyers.iter_mut().zip(depths) {
            flyer.depth = depth;
        }
        for (i, flyer) in engine.flyers.iter_mut().enumerate() {
            flyer.x = SubPixel::from_px(i as i16 * 10);
            flyer.y = SubPixel::from_px(5);
        }
        engine.order = [0, 1, 2, 3, 4];

        assert_eq!(engine.paint_order(), &[1, 3, 4, 0, 2]);

        let mut canvas = RecordingCanvas::new();
        assert_eq!(engine.draw(&mut canvas), Ok(5));
        let xs: std::vec::Vec<i16> = canvas
            .ops()
            .iter()
            .map(|op| match op {
                CanvasOp::Bitmap { x, width: 32, height: 32, .. } => *x,
                other => panic!("unexpected op {:?}", other),
            })
            .collect();
        assert_eq!(xs, [10, 30, 40, 0, 20]);
    }

    #[test]
    fn test_draw_stops_on_canvas_error() {
        let mut engine = engine(5);
        engine.setup();
        let mut canvas = RecordingCanvas::new();
        canvas.fail_next(CanvasError::Communication);
        assert_eq!(engine.draw(&mut canvas), Err(CanvasError::Communication));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_draw_uses_floor_of_subpixel() {
        let mut engine = engine(5);
        engine.setup();
        for flyer in engine.flyers.iter_mut() {
            flyer.x = SubPixel::from_raw(-8); // -0.5 px
            flyer.y = SubPixel::from_raw(31); // 1.9375 px
        }
        let mut canvas = RecordingCanvas::new();
        engine.draw(&mut canvas).unwrap();
        assert!(canvas
            .ops()
            .iter()
            .all(|op| matches!(op, CanvasOp::Bitmap { x: -1, y: 1, .. })));
    }

    proptest! {
        #[test]
        fn prop_setup_within_ranges(seed in any::<u64>()) {
            let mut engine = engine(seed);
            engine.setup();
            let config = engine.config;
            for flyer in engine.flyers() {
                prop_assert!(config.setup_x.contains(flyer.x.to_px()));
                prop_assert!(config.setup_y.contains(flyer.y.to_px()));
                prop_assert!(config.depth.contains(flyer.depth as i16));
                prop_assert!(flyer.frame < ANIMATION_FRAMES || flyer.frame == STILL_FRAME);
                prop_assert_eq!(flyer.x.frac(), 0);
            }
        }

        #[test]
        fn prop_travel_bounds(seed in any::<u64>(), ticks in 1usize..400) {
            let mut engine = engine(seed);
            engine.setup();
            let config = engine.config;
            let max_x = config.setup_x.max.max(config.top_edge_x.max).max(128);
            let min_y = config.setup_y.min.min(config.right_edge_y.min).min(-32);

            for _ in 0..ticks {
                engine.tick();
                for flyer in engine.flyers() {
                    prop_assert!(flyer.x > SubPixel::from_px(-32));
                    prop_assert!(flyer.y < SubPixel::from_px(64));
                    prop_assert!(flyer.x <= SubPixel::from_px(max_x));
                    prop_assert!(flyer.y >= SubPixel::from_px(min_y));
                    prop_assert!(config.depth.contains(flyer.depth as i16));
                    prop_assert!(flyer.frame < ANIMATION_FRAMES || flyer.frame == STILL_FRAME);
                }
            }
        }

        #[test]
        fn prop_paint_order_is_sorted_permutation(seed in any::<u64>(), ticks in 0usize..100) {
            let mut engine = engine(seed);
            engine.setup();
            for _ in 0..ticks {
                engine.tick();
            }
            let flyers = *engine.flyers();
            let order = *engine.paint_order();

            let mut seen = [false; FLYER_COUNT];
            for &slot in order.iter() {
                prop_assert!(!seen[slot]);
                seen[slot] = true;
            }
            for pair in order.windows(2) {
                prop_assert!(flyers[pair[0]].depth <= flyers[pair[1]].depth);
            }
        }

        #[test]
        fn prop_equal_depths_keep_previous_order(
            depths in proptest::array::uniform5(12i8..15),
            next in proptest::array::uniform5(12i8..15),
        ) {
            let mut engine = engine(0);
            engine.setup();
            for (flyer, depth) in engine.flyers.iter_mut().zip(depths) {
                flyer.depth = depth;
            }
            let previous = *engine.paint_order();

            for (flyer, depth) in engine.flyers.iter_mut().zip(next) {
                flyer.depth = depth;
            }
            let order = *engine.paint_order();

            let rank = |slot: usize| previous.iter().position(|&s| s == slot).unwrap();
            for pair in order.windows(2) {
                if next[pair[0]] == next[pair[1]] {
                    prop_assert!(rank(pair[0]) < rank(pair[1]));
                }
            }
        }
    }
}
