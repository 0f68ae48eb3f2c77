//! Display mode controller
//!
//! Top-level owner of the panel. Once per display cycle the caller runs
//! [`DisplayModeController::run_cycle`], which applies any pending mode
//! request and then renders either the status screen or one screensaver
//! frame.
//!
//! The status screen only touches the bus for fields that changed. The
//! screensaver redraws the whole frame every cycle.

use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128StarStar;

use crate::config::{ConfigError, DisplayConfig, FLYER_COUNT};
use crate::render::{DirtyStateTracker, FieldSet};
use crate::screensaver::ScreensaverEngine;
use crate::state::{Event, Mode, ModeState};
use crate::traits::{Canvas, CanvasError, SensorSnapshot, SensorValues};

/// What one display cycle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Mode the cycle rendered in
    pub mode: Mode,
    /// First cycle since entering `mode`
    pub entered: bool,
    /// The whole canvas was cleared
    pub cleared: bool,
    /// Status fields redrawn
    pub fields: FieldSet,
    /// Flyers composited
    pub flyers: usize,
    /// The frame was pushed to the panel
    pub presented: bool,
}

/// Mode state machine driving the status screen and the screensaver
pub struct DisplayModeController<C, S = SensorValues, R = Xoroshiro128StarStar>
where
    C: Canvas,
    S: SensorSnapshot,
    R: RngCore,
{
    canvas: C,
    sensors: S,
    config: DisplayConfig,
    state: ModeState,
    tracker: DirtyStateTracker,
    engine: ScreensaverEngine<R, FLYER_COUNT>,
    /// Snapshot changed since the last status render
    touched: bool,
    /// Next status render clears and redraws every field
    force_full: bool,
    /// Canvas holds drawing that has not been presented
    unpresented: bool,
}

impl<C, S> DisplayModeController<C, S, Xoroshiro128StarStar>
where
    C: Canvas,
    S: SensorSnapshot + Default,
{
    /// Create a controller whose screensaver is seeded from the config
    pub fn seeded(canvas: C, config: DisplayConfig) -> Result<Self, ConfigError> {
        let rng = Xoroshiro128StarStar::seed_from_u64(config.screensaver.seed);
        Self::new(canvas, config, rng)
    }
}

impl<C, S, R> DisplayModeController<C, S, R>
where
    C: Canvas,
    S: SensorSnapshot + Default,
    R: RngCore,
{
    /// Create a controller in [`Mode::Normal`]
    ///
    /// The configuration is validated here, once; the per-cycle operations
    /// cannot fail on configuration. The canvas must match the panel size.
    pub fn new(canvas: C, config: DisplayConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        if canvas.dimensions() != (config.panel.width, config.panel.height) {
            return Err(ConfigError::InvalidRange);
        }

        let tracker = DirtyStateTracker::new(config.tracker, config.capabilities)?;
        let engine = ScreensaverEngine::new(config.screensaver, config.panel, rng)?;

        Ok(Self {
            canvas,
            sensors: S::default(),
            config,
            state: ModeState::new(),
            tracker,
            engine,
            touched: true,
            force_full: true,
            unpresented: false,
        })
    }
}

impl<C, S, R> DisplayModeController<C, S, R>
where
    C: Canvas,
    S: SensorSnapshot,
    R: RngCore,
{
    /// Install the sensor snapshot and start on the status screen
    ///
    /// The next cycle clears the panel and draws every field.
    pub fn init(&mut self, snapshot: S) {
        self.sensors = snapshot;
        self.state = ModeState::new();
        self.touched = true;
        self.force_full = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "display init: screensaver {}, signal icon {}",
            self.config.capabilities.screensaver,
            self.config.capabilities.signal_icon
        );
    }

    /// Note that the snapshot changed; the next status render compares it
    pub fn touch(&mut self) {
        self.touched = true;
    }

    /// Clear and redraw every status field on the next status render
    pub fn refresh(&mut self) {
        self.force_full = true;
    }

    /// Request a mode; returns whether the mode changed
    ///
    /// Requesting the current mode is a no-op. Entering the screensaver
    /// scatters the flyers; leaving it schedules a full status redraw.
    /// Screensaver requests are ignored when the capability is disabled.
    pub fn turn_screensaver(&mut self, on: bool) -> bool {
        if on && !self.config.capabilities.screensaver {
            #[cfg(feature = "defmt")]
            defmt::warn!("screensaver requested but disabled");
            return false;
        }

        match self.state.apply(Event::from_request(on)) {
            Some(Mode::Screensaver) => {
                self.engine.setup();
                #[cfg(feature = "defmt")]
                defmt::info!("entering screensaver");
                true
            }
            Some(Mode::Normal) => {
                self.force_full = true;
                #[cfg(feature = "defmt")]
                defmt::info!("leaving screensaver");
                true
            }
            None => false,
        }
    }

    /// Run one display cycle
    ///
    /// Applies the requested mode first, then renders in it.
    pub fn run_cycle(&mut self, screensaver_requested: bool) -> Result<CycleReport, CanvasError> {
        self.turn_screensaver(screensaver_requested);
        self.render()
    }

    /// Render one cycle in the current mode
    pub fn render(&mut self) -> Result<CycleReport, CanvasError> {
        let mut report = CycleReport {
            mode: self.state.mode(),
            entered: self.state.just_entered(),
            ..CycleReport::default()
        };

        let result = match self.state.mode() {
            Mode::Normal => self.render_status(&mut report),
            Mode::Screensaver => self.render_screensaver(&mut report),
        };
        if result.is_ok() {
            self.state.settle();
        }
        result.map(|()| report)
    }

    /// Check if the screensaver owns the panel
    ///
    /// Input handlers use this to decide between "wake up" and "adjust".
    pub fn is_screensaver_playing(&self) -> bool {
        self.state.mode().is_screensaver()
    }

    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub fn engine(&self) -> &ScreensaverEngine<R, FLYER_COUNT> {
        &self.engine
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Mutable snapshot; call [`touch`](Self::touch) after changing it
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn render_status(&mut self, report: &mut CycleReport) -> Result<(), CanvasError> {
        if !(self.force_full || self.touched || self.unpresented) {
            return Ok(());
        }

        if self.force_full {
            #[cfg(feature = "defmt")]
            defmt::debug!("full status redraw");

            // A failed clear leaves force_full set for the next cycle
            self.canvas.clear()?;
            self.tracker.invalidate();
            self.force_full = false;
            self.unpresented = true;
            report.cleared = true;
        }

        self.touched = false;
        match self.tracker.render(&mut self.canvas, &self.sensors) {
            Ok(fields) => {
                report.fields = fields;
                if !fields.is_empty() {
                    self.unpresented = true;
                }
            }
            Err(err) => {
                // Failed fields stay dirty; look again next cycle
                self.touched = true;
                self.unpresented = true;
                return Err(err);
            }
        }

        if self.unpresented {
            self.present()?;
            self.unpresented = false;
            report.presented = true;
        }
        Ok(())
    }

    fn render_screensaver(&mut self, report: &mut CycleReport) -> Result<(), CanvasError> {
        self.engine.tick();
        self.engine.paint_order();

        self.canvas.clear()?;
        report.cleared = true;
        report.flyers = self.engine.draw(&mut self.canvas)?;

        self.present()?;
        report.presented = true;
        Ok(())
    }

    fn present(&mut self) -> Result<(), CanvasError> {
        self.canvas.present().map_err(|err| {
            #[cfg(feature = "defmt")]
            defmt::error!("present failed: {}", err);

            // Nothing reached the glass; rebuild the status screen from scratch
            self.force_full = true;
            err
        })
    }
}
