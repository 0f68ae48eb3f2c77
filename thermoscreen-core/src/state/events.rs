//! Events that trigger mode transitions

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Caller asked for the screensaver (inactivity timeout)
    ScreensaverRequested,
    /// Caller asked for the status screen (user input)
    WakeRequested,
}

impl Event {
    /// Map a `loop(screensaver_requested)` argument to an event
    pub const fn from_request(screensaver: bool) -> Self {
        if screensaver {
            Event::ScreensaverRequested
        } else {
            Event::WakeRequested
        }
    }
}
