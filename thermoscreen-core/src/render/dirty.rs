//! Dirty-field tracking for the status screen
//!
//! The display bus is slow relative to the tick rate, so a field is only
//! redrawn when what it would show differs from what is already on the
//! panel. Readings are compared after quantisation: 21.0 and 21.4 °C look
//! the same at 0.5 °C resolution and cause no traffic.

use super::layout;
use crate::config::{Capabilities, ConfigError, TrackerConfig};
use crate::traits::{Canvas, CanvasError, SensorSnapshot};

/// Independently redrawn field of the status screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    Switch,
    Signal,
    Temperature,
    Setpoint,
}

impl Field {
    /// Every field, in draw order
    pub const ALL: [Field; 4] = [
        Field::Switch,
        Field::Signal,
        Field::Temperature,
        Field::Setpoint,
    ];

    const fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// Set of fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FieldSet(u8);

impl FieldSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, field: Field) {
        self.0 |= field.bit();
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = FieldSet::EMPTY;
        for field in iter {
            set.insert(field);
        }
        set
    }
}

/// What a field shows, after quantisation
///
/// `None` means unknown: nothing drawn yet, or the panel was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirtyState {
    /// Temperature bucket
    pub temperature: Option<i32>,
    /// Setpoint bucket
    pub desired_temperature: Option<i32>,
    pub switch_on: Option<bool>,
    /// Signal bars
    pub signal: Option<u8>,
}

impl DirtyState {
    /// Nothing known to be on the panel
    pub const UNKNOWN: Self = Self {
        temperature: None,
        desired_temperature: None,
        switch_on: None,
        signal: None,
    };

    fn differs(&self, other: &DirtyState, field: Field) -> bool {
        match field {
            Field::Switch => self.switch_on != other.switch_on,
            Field::Signal => self.signal != other.signal,
            Field::Temperature => self.temperature != other.temperature,
            Field::Setpoint => self.desired_temperature != other.desired_temperature,
        }
    }

    fn copy_field(&mut self, from: &DirtyState, field: Field) {
        match field {
            Field::Switch => self.switch_on = from.switch_on,
            Field::Signal => self.signal = from.signal,
            Field::Temperature => self.temperature = from.temperature,
            Field::Setpoint => self.desired_temperature = from.desired_temperature,
        }
    }
}

/// Decides which status fields need a redraw and draws them
#[derive(Debug, Clone)]
pub struct DirtyStateTracker {
    config: TrackerConfig,
    signal_icon: bool,
    shown: DirtyState,
}

impl DirtyStateTracker {
    /// Create a tracker with nothing shown yet
    pub fn new(config: TrackerConfig, capabilities: Capabilities) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            signal_icon: capabilities.signal_icon,
            shown: DirtyState::UNKNOWN,
        })
    }

    /// Forget what is on the panel; every field becomes dirty
    pub fn invalidate(&mut self) {
        self.shown = DirtyState::UNKNOWN;
    }

    /// Last successfully drawn state
    pub fn shown(&self) -> &DirtyState {
        &self.shown
    }

    /// Quantise a snapshot into what the panel would show
    pub fn sample<S: SensorSnapshot + ?Sized>(&self, snapshot: &S) -> DirtyState {
        DirtyState {
            temperature: Some(layout::quantize(
                snapshot.temperature(),
                self.config.temperature_step,
            )),
            desired_temperature: Some(layout::quantize(
                snapshot.desired_temperature(),
                self.config.setpoint_step,
            )),
            switch_on: Some(snapshot.switch_on()),
            signal: self
                .signal_icon
                .then(|| layout::signal_bars(snapshot.signal_strength())),
        }
    }

    /// Fields whose live value differs from what is shown
    pub fn diff<S: SensorSnapshot + ?Sized>(&self, snapshot: &S) -> FieldSet {
        let live = self.sample(snapshot);
        Field::ALL
            .into_iter()
            .filter(|&field| live.differs(&self.shown, field))
            .collect()
    }

    /// Redraw every dirty field
    ///
    /// A field's shown value is updated only after its draw succeeds. A
    /// failed field stays dirty and is retried on the next call; the
    /// remaining fields are still attempted. Returns the fields drawn, or
    /// the first error once all fields were attempted.
    pub fn render<C, S>(&mut self, canvas: &mut C, snapshot: &S) -> Result<FieldSet, CanvasError>
    where
        C: Canvas + ?Sized,
        S: SensorSnapshot + ?Sized,
    {
        let live = self.sample(snapshot);
        let mut drawn = FieldSet::EMPTY;
        let mut first_error = None;

        for field in Field::ALL {
            if !live.differs(&self.shown, field) {
                continue;
            }
            match self.draw_field(canvas, &live, field) {
                Ok(()) => {
                    self.shown.copy_field(&live, field);
                    drawn.insert(field);
                }
                Err(err) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("{} draw failed: {}, left dirty", field, err);
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(drawn),
        }
    }

    fn draw_field<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        live: &DirtyState,
        field: Field,
    ) -> Result<(), CanvasError> {
        match field {
            Field::Switch => match live.switch_on {
                Some(on) => layout::draw_switch(canvas, on),
                None => Ok(()),
            },
            Field::Signal => match live.signal {
                Some(bars) => layout::draw_signal(canvas, bars),
                None => Ok(()),
            },
            Field::Temperature => match live.temperature {
                Some(bucket) => layout::draw_temperature(canvas, bucket, &self.config),
                None => Ok(()),
            },
            Field::Setpoint => match live.desired_temperature {
                Some(bucket) => layout::draw_setpoint(canvas, bucket, self.config.setpoint_step),
                None => Ok(()),
            },
        }
    }
}
