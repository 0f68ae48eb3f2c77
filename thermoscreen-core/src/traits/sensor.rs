//! Sensor snapshot capability and the plain value holder

/// Lowest setpoint the thermostat accepts (°C)
pub const SETPOINT_MIN_C: f32 = 10.0;

/// Highest setpoint the thermostat accepts (°C)
pub const SETPOINT_MAX_C: f32 = 30.0;

/// Setpoint after power-on (°C)
pub const SETPOINT_DEFAULT_C: f32 = 21.0;

/// Read-only view of the live thermostat readings
///
/// Refreshed by code outside the display engine; polled once per
/// normal-mode render.
pub trait SensorSnapshot {
    /// Measured room temperature in °C
    fn temperature(&self) -> f32;

    /// Setpoint in °C
    fn desired_temperature(&self) -> f32;

    /// Whether the heating output is switched on
    fn switch_on(&self) -> bool;

    /// Wireless signal strength (RSSI, dBm)
    fn signal_strength(&self) -> i32;
}

impl<T: SensorSnapshot + ?Sized> SensorSnapshot for &T {
    fn temperature(&self) -> f32 {
        (**self).temperature()
    }

    fn desired_temperature(&self) -> f32 {
        (**self).desired_temperature()
    }

    fn switch_on(&self) -> bool {
        (**self).switch_on()
    }

    fn signal_strength(&self) -> i32 {
        (**self).signal_strength()
    }
}

/// Current thermostat readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorValues {
    temperature: f32,
    desired_temperature: f32,
    switch_on: bool,
    signal_strength: i32,
}

impl Default for SensorValues {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorValues {
    /// Power-on values: no reading yet, default setpoint, output off
    pub const fn new() -> Self {
        Self {
            temperature: 0.0,
            desired_temperature: SETPOINT_DEFAULT_C,
            switch_on: false,
            signal_strength: 0,
        }
    }

    /// Record a new temperature reading
    pub fn set_temperature(&mut self, temp: f32) {
        self.temperature = temp;
    }

    /// Change the setpoint, clamped to the supported range
    pub fn set_desired_temperature(&mut self, temp: f32) {
        self.desired_temperature = temp.clamp(SETPOINT_MIN_C, SETPOINT_MAX_C);
    }

    /// Set the heating output state
    pub fn set_switch_state(&mut self, on: bool) {
        self.switch_on = on;
    }

    /// Flip the heating output state
    pub fn toggle_switch_state(&mut self) {
        self.switch_on = !self.switch_on;
    }

    /// Record a new signal strength reading (dBm)
    pub fn set_signal_strength(&mut self, rssi: i32) {
        self.signal_strength = rssi;
    }
}

impl SensorSnapshot for SensorValues {
    fn temperature(&self) -> f32 {
        self.temperature
    }

    fn desired_temperature(&self) -> f32 {
        self.desired_temperature
    }

    fn switch_on(&self) -> bool {
        self.switch_on
    }

    fn signal_strength(&self) -> i32 {
        self.signal_strength
    }
}
