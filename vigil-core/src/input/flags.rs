//! Cross-context event flags
//!
//! One level-triggered flag per event kind. Producers (interrupt handlers
//! or input tasks) only `raise` flags; the controller is the only consumer
//! and clears each flag atomically when it acts on it (`take` is a swap,
//! so an update raised between the read and the clear is never lost).
//!
//! Single writer per side: one producer, one consumer per flag. Not a
//! queue - at most one pending occurrence per kind between polls.

use portable_atomic::{AtomicBool, Ordering};

use crate::state::Event;

/// One atomic flag per event kind
#[derive(Debug)]
pub struct EventFlags {
    motion: AtomicBool,
    button: AtomicBool,
    remote_start: AtomicBool,
    remote_stop: AtomicBool,
    remote_silence: AtomicBool,
    wake_timeout: AtomicBool,
}

impl EventFlags {
    /// Create a new flag set with nothing pending
    pub const fn new() -> Self {
        Self {
            motion: AtomicBool::new(false),
            button: AtomicBool::new(false),
            remote_start: AtomicBool::new(false),
            remote_stop: AtomicBool::new(false),
            remote_silence: AtomicBool::new(false),
            wake_timeout: AtomicBool::new(false),
        }
    }

    fn slot(&self, event: Event) -> &AtomicBool {
        match event {
            Event::MotionDetected => &self.motion,
            Event::ButtonPressed => &self.button,
            Event::RemoteStart => &self.remote_start,
            Event::RemoteStop => &self.remote_stop,
            Event::RemoteSilence => &self.remote_silence,
            Event::WakeTimeout => &self.wake_timeout,
        }
    }

    /// Mark an event pending (producer side)
    pub fn raise(&self, event: Event) {
        self.slot(event).store(true, Ordering::Release);
    }

    /// Consume a pending event, clearing it atomically (consumer side)
    ///
    /// Returns `true` if the event was pending.
    pub fn take(&self, event: Event) -> bool {
        self.slot(event).swap(false, Ordering::AcqRel)
    }

    /// Peek at a flag without clearing it
    ///
    /// Used by the poll-mode power wait to detect a pending shutdown
    /// request without consuming it.
    pub fn pending(&self, event: Event) -> bool {
        self.slot(event).load(Ordering::Acquire)
    }

    /// Check if any event is pending
    pub fn any_pending(&self) -> bool {
        Event::ALL.iter().any(|&event| self.pending(event))
    }

    /// Drop every pending event (remote stop side effect)
    pub fn clear_all(&self) {
        for event in Event::ALL {
            self.slot(event).store(false, Ordering::Release);
        }
    }
}

impl Default for EventFlags {
    fn default() -> Self {
        Self::new()
    }
}
