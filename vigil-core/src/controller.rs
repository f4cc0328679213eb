//! Alarm controller
//!
//! One [`Controller::poll`] call is one iteration of the cooperative
//! control loop: it arbitrates pending event flags, advances the timed
//! sub-phases, and reports what the platform must do (actuator level,
//! display actions, optional low-power wait).
//!
//! The remote stop flag is checked before all other event processing in
//! every iteration, so shutdown is never starved by an in-progress alarm
//! sequence. The single deliberate exception is the post-alarm
//! sensor-settle wait: while the motion output is still high from a real
//! detection, a pending stop is deferred (not consumed) and honored on
//! the first iteration after the level returns low.

use heapless::Vec;

use crate::actuator::Blinker;
use crate::config::TimingConfig;
use crate::input::EventFlags;
use crate::power::WakePolicy;
use crate::state::{Event, SystemState};

/// Status message shown when the system arms
pub const MSG_ARMED: &str = "Sustav aktivan";
/// Status message shown when an active alarm is silenced
pub const MSG_ALARM_OFF: &str = "Alarm ugasen";
/// Status message shown while returning to the armed idle state
pub const MSG_IDLE: &str = "Stanje mirovanja";
/// Status message shown while shutting down
pub const MSG_STOPPED: &str = "Sustav ugasen";

/// Upper bound on display actions emitted by one iteration
pub const MAX_DISPLAY_ACTIONS: usize = 4;

/// One display-side effect of a loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayAction {
    /// Replace the content of one line
    Show {
        /// Line index
        line: u8,
        /// Message text
        text: &'static str,
    },
    /// Blank the panel
    Clear,
    /// Backlight on/off
    Backlight(bool),
}

/// Outputs of one control-loop iteration
#[derive(Debug, Clone, Default)]
pub struct Step {
    /// Desired LED/buzzer level
    pub actuator: bool,
    /// Display actions, in order
    pub display: Vec<DisplayAction, MAX_DISPLAY_ACTIONS>,
    /// State transition taken this iteration, for the event log
    pub transition: Option<(SystemState, SystemState)>,
    /// Disarm press consumed without effect, for the event log
    pub ignored: Option<Event>,
    /// Low-power wait request; only emitted when armed, idle, and quiet
    pub sleep: Option<WakePolicy>,
}

/// Timed sub-phases of the control loop
///
/// The deliberate synchronous stalls of the design (startup animation,
/// post-silence notices, sensor-settle wait, shutdown notice) are modeled
/// as re-entrant phases so the loop keeps polling instead of busy-waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Steady behavior of the current state
    Idle,
    /// 3 s arming animation on the actuator
    StartupBlink { start: u32 },
    /// "Alarm ugasen" hold after a silence
    SilenceNotice { start: u32 },
    /// "Stanje mirovanja" hold before the settle wait
    IdleNotice { start: u32 },
    /// Wait for the motion output to return low; prevents an immediate
    /// false re-trigger while the sensor rides out its own hold time
    SensorSettle,
    /// "Sustav ugasen" hold before reaching `Stopped`
    ShutdownNotice { start: u32 },
}

/// The alarm controller: exclusive owner of the system state
#[derive(Debug)]
pub struct Controller {
    state: SystemState,
    phase: Phase,
    timing: TimingConfig,
    blinker: Blinker,
    alarm_since_ms: Option<u32>,
}

impl Controller {
    /// Create a controller in the boot state (`Stopped`)
    pub fn new(timing: TimingConfig) -> Self {
        Self {
            state: SystemState::Stopped,
            phase: Phase::Idle,
            timing,
            blinker: Blinker::new(),
            alarm_since_ms: None,
        }
    }

    /// Current state
    pub fn state(&self) -> SystemState {
        self.state
    }

    /// Timestamp latched when the alarm last triggered
    pub fn alarm_since(&self) -> Option<u32> {
        self.alarm_since_ms
    }

    /// Run one iteration of the control loop
    ///
    /// `motion_high` is the raw motion sensor level at the time of the
    /// call; `now_ms` is a monotonic millisecond clock (wrapping is fine).
    pub fn poll(&mut self, flags: &EventFlags, motion_high: bool, now_ms: u32) -> Step {
        let mut step = Step::default();
        let before = self.state;

        self.advance_phase(motion_high, now_ms, &mut step);

        // Shutdown check precedes all other event processing. Deferred,
        // not consumed, while the sensor-settle wait is in progress.
        if self.phase != Phase::SensorSettle && flags.take(Event::RemoteStop) {
            self.begin_shutdown(flags, now_ms, &mut step);
        }

        if flags.take(Event::RemoteStart)
            && self.state == SystemState::Stopped
            && self.phase == Phase::Idle
        {
            self.begin_startup(now_ms, &mut step);
        }

        // Both disarm flags are consumed every iteration; the button wins
        // a tie. A press outside an active alarm does nothing, but it is
        // reported for the event log rather than vanishing.
        let mut disarm = None;
        for event in Event::ALL.into_iter().filter(Event::is_disarm) {
            if flags.take(event) && disarm.is_none() {
                disarm = Some(event);
            }
        }
        if let Some(by) = disarm {
            if self.state == SystemState::AlarmActive {
                self.begin_reset(by, now_ms, &mut step);
            } else {
                step.ignored = Some(by);
            }
        }

        let motion_event = flags.take(Event::MotionDetected);
        if self.state.accepts_motion()
            && self.phase == Phase::Idle
            && (motion_event || motion_high)
        {
            self.trigger_alarm(now_ms, &mut step);
        }

        // Wake timeouts exist only to bound the power wait
        flags.take(Event::WakeTimeout);

        if self.blinker.is_running() {
            self.blinker.tick(now_ms);
        }
        step.actuator = self.blinker.level();

        if self.state == SystemState::Armed
            && self.phase == Phase::Idle
            && !motion_high
            && !flags.any_pending()
        {
            step.sleep = Some(WakePolicy {
                max_wait_ms: self.timing.wake_interval_ms,
            });
        }

        if before != self.state {
            step.transition = Some((before, self.state));
        }
        step
    }

    /// Complete timed phases whose interval has elapsed
    fn advance_phase(&mut self, motion_high: bool, now_ms: u32, step: &mut Step) {
        match self.phase {
            Phase::StartupBlink { start }
                if now_ms.wrapping_sub(start) >= self.timing.startup_total_ms =>
            {
                self.blinker.stop();
                let _ = step.display.push(DisplayAction::Backlight(false));
                self.phase = Phase::Idle;
            }
            Phase::SilenceNotice { start }
                if now_ms.wrapping_sub(start) >= self.timing.silence_notice_ms =>
            {
                let _ = step.display.push(DisplayAction::Show {
                    line: 0,
                    text: MSG_IDLE,
                });
                let _ = step.display.push(DisplayAction::Backlight(false));
                self.phase = Phase::IdleNotice { start: now_ms };
            }
            Phase::IdleNotice { start }
                if now_ms.wrapping_sub(start) >= self.timing.idle_notice_ms =>
            {
                self.phase = Phase::SensorSettle;
            }
            Phase::SensorSettle if !motion_high => {
                self.phase = Phase::Idle;
            }
            Phase::ShutdownNotice { start }
                if now_ms.wrapping_sub(start) >= self.timing.shutdown_notice_ms =>
            {
                let _ = step.display.push(DisplayAction::Clear);
                self.state = SystemState::Stopped;
                self.phase = Phase::Idle;
            }
            _ => {}
        }
    }

    fn begin_startup(&mut self, now_ms: u32, step: &mut Step) {
        self.state = self.state.transition(Event::RemoteStart);
        self.phase = Phase::StartupBlink { start: now_ms };
        self.blinker.start(self.timing.startup_blink_ms, now_ms);
        let _ = step.display.push(DisplayAction::Backlight(true));
        let _ = step.display.push(DisplayAction::Show {
            line: 0,
            text: MSG_ARMED,
        });
    }

    fn trigger_alarm(&mut self, now_ms: u32, step: &mut Step) {
        self.state = self.state.transition(Event::MotionDetected);
        self.alarm_since_ms = Some(now_ms);
        self.blinker.start(self.timing.alarm_blink_ms, now_ms);
        let _ = step.display.push(DisplayAction::Backlight(true));
    }

    fn begin_reset(&mut self, by: Event, now_ms: u32, step: &mut Step) {
        self.blinker.stop();
        self.alarm_since_ms = None;
        self.state = self.state.transition(by);
        self.phase = Phase::SilenceNotice { start: now_ms };
        let _ = step.display.push(DisplayAction::Show {
            line: 0,
            text: MSG_ALARM_OFF,
        });
    }

    fn begin_shutdown(&mut self, flags: &EventFlags, now_ms: u32, step: &mut Step) {
        self.blinker.stop();
        self.alarm_since_ms = None;
        flags.clear_all();
        self.state = self.state.transition(Event::RemoteStop);
        self.phase = Phase::ShutdownNotice { start: now_ms };
        let _ = step.display.push(DisplayAction::Backlight(false));
        let _ = step.display.push(DisplayAction::Show {
            line: 0,
            text: MSG_STOPPED,
        });
    }
}
