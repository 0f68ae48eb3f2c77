//! Display mode state machine
//!
//! What the panel shows is a function of the current mode. Transitions
//! only happen through [`Mode::transition`].

use super::events::Event;

/// Display modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Live readings, redrawn field by field
    #[default]
    Normal,
    /// Animated flyers, full frame every cycle
    Screensaver,
}

impl Mode {
    /// Check if the screensaver owns the panel
    pub fn is_screensaver(&self) -> bool {
        matches!(self, Mode::Screensaver)
    }

    /// Process an event and return the next mode
    ///
    /// Requests for the current mode leave it unchanged.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            (Normal, ScreensaverRequested) => Screensaver,
            (Screensaver, WakeRequested) => Normal,
            _ => self,
        }
    }
}

/// Mode plus the pending full redraw owed to it
///
/// Entering either mode sets `just_entered`; the first cycle rendered in
/// the new mode consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeState {
    mode: Mode,
    just_entered: bool,
}

impl ModeState {
    /// Start in [`Mode::Normal`] with a full redraw owed
    pub const fn new() -> Self {
        Self {
            mode: Mode::Normal,
            just_entered: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn just_entered(&self) -> bool {
        self.just_entered
    }

    /// Apply an event; returns the new mode if it changed
    pub fn apply(&mut self, event: Event) -> Option<Mode> {
        let next = self.mode.transition(event);
        if next == self.mode {
            return None;
        }
        self.mode = next;
        self.just_entered = true;
        Some(next)
    }

    /// Mark the entry redraw as done
    pub fn settle(&mut self) {
        self.just_entered = false;
    }
}
