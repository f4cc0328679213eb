//! State machine definition
//!
//! All actuator, display, and power behavior is a function of the current
//! state and an event. Exactly one state is current at any time; the
//! controller is its only writer.

use super::events::Event;

/// System states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Disarmed; only a remote start is honored. Boot state.
    Stopped,
    /// Motion will trigger the alarm
    Armed,
    /// Alarm actuation running (LED + buzzer blinking)
    AlarmActive,
    /// Remote stop accepted; shutdown notice on the display
    ShuttingDown,
}

impl SystemState {
    /// Check if motion can trigger the alarm in this state
    pub fn accepts_motion(&self) -> bool {
        matches!(self, SystemState::Armed)
    }

    /// Check if the system is armed or alarming
    pub fn is_active(&self) -> bool {
        matches!(self, SystemState::Armed | SystemState::AlarmActive)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic. Side effects (actuator,
    /// display, timing sub-phases) are applied by the controller.
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use SystemState::*;

        match (self, event) {
            // Remote stop is effective from any state
            (_, RemoteStop) => ShuttingDown,

            // Arming
            (Stopped, RemoteStart) => Armed,

            // Alarm trigger
            (Armed, MotionDetected) => AlarmActive,

            // Deactivation is accepted only while the alarm is active;
            // presses while merely armed are ignored on purpose
            (AlarmActive, ButtonPressed) | (AlarmActive, RemoteSilence) => Armed,

            // Default: stay in current state
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_arms_from_stopped() {
        let next = SystemState::Stopped.transition(Event::RemoteStart);
        assert_eq!(next, SystemState::Armed);
    }

    #[test]
    fn test_start_is_noop_while_running() {
        assert_eq!(
            SystemState::Armed.transition(Event::RemoteStart),
            SystemState::Armed
        );
        assert_eq!(
            SystemState::AlarmActive.transition(Event::RemoteStart),
            SystemState::AlarmActive
        );
    }

    #[test]
    fn test_motion_triggers_only_while_armed() {
        assert_eq!(
            SystemState::Armed.transition(Event::MotionDetected),
            SystemState::AlarmActive
        );
        assert_eq!(
            SystemState::Stopped.transition(Event::MotionDetected),
            SystemState::Stopped
        );
        assert_eq!(
            SystemState::ShuttingDown.transition(Event::MotionDetected),
            SystemState::ShuttingDown
        );
    }

    #[test]
    fn test_disarm_only_from_alarm_active() {
        assert_eq!(
            SystemState::AlarmActive.transition(Event::ButtonPressed),
            SystemState::Armed
        );
        assert_eq!(
            SystemState::AlarmActive.transition(Event::RemoteSilence),
            SystemState::Armed
        );
        // Accepted-while-armed presses are explicitly ignored
        assert_eq!(
            SystemState::Armed.transition(Event::ButtonPressed),
            SystemState::Armed
        );
        assert_eq!(
            SystemState::Stopped.transition(Event::RemoteSilence),
            SystemState::Stopped
        );
    }

    #[test]
    fn test_stop_from_any_state() {
        let states = [
            SystemState::Stopped,
            SystemState::Armed,
            SystemState::AlarmActive,
            SystemState::ShuttingDown,
        ];

        for state in states {
            assert_eq!(
                state.transition(Event::RemoteStop),
                SystemState::ShuttingDown
            );
        }
    }

    #[test]
    fn test_wake_timeout_never_changes_state() {
        let states = [
            SystemState::Stopped,
            SystemState::Armed,
            SystemState::AlarmActive,
            SystemState::ShuttingDown,
        ];

        for state in states {
            assert_eq!(state.transition(Event::WakeTimeout), state);
        }
    }

    #[test]
    fn test_accepts_motion() {
        assert!(SystemState::Armed.accepts_motion());
        assert!(!SystemState::AlarmActive.accepts_motion());
        assert!(!SystemState::Stopped.accepts_motion());
    }
}
