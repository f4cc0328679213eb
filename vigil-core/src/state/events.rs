//! Events that trigger state transitions
//!
//! Each event is delivered as a level-triggered flag (see
//! [`crate::input::EventFlags`]): at most one pending occurrence per kind
//! between polls, cleared by the controller when acted upon.

/// Events consumed by the alarm controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Motion sensor output went high
    MotionDetected,
    /// Local button pressed (falling edge, debounced)
    ButtonPressed,
    /// Remote "start" command decoded
    RemoteStart,
    /// Remote "stop" command decoded
    RemoteStop,
    /// Remote "silence alarm" command decoded
    RemoteSilence,
    /// Periodic wake timer elapsed during a low-power wait
    WakeTimeout,
}

impl Event {
    /// Every event kind, in flag-slot order
    pub const ALL: [Event; 6] = [
        Event::MotionDetected,
        Event::ButtonPressed,
        Event::RemoteStart,
        Event::RemoteStop,
        Event::RemoteSilence,
        Event::WakeTimeout,
    ];

    /// Check if this event can deactivate an active alarm
    pub fn is_disarm(&self) -> bool {
        matches!(self, Event::ButtonPressed | Event::RemoteSilence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarm_events() {
        assert!(Event::ButtonPressed.is_disarm());
        assert!(Event::RemoteSilence.is_disarm());
        assert!(!Event::RemoteStop.is_disarm());
        assert!(!Event::MotionDetected.is_disarm());
    }

    #[test]
    fn test_all_covers_every_kind() {
        for event in Event::ALL {
            assert!(Event::ALL.contains(&event));
        }
        assert_eq!(Event::ALL.len(), 6);
    }
}
