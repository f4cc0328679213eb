//! Inter-task communication
//!
//! Producers (motion, button, remote tasks) raise event flags and ping
//! the wake signal; the controller task is the only consumer. Display
//! actions travel over their own channel so a slow I2C write never
//! delays event intake.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, Ordering};

use vigil_core::controller::DisplayAction;
use vigil_core::input::EventFlags;

/// Channel capacity for display actions
const DISPLAY_CHANNEL_SIZE: usize = 8;

/// Shared event flags: one producer per flag, the controller consumes
pub static FLAGS: EventFlags = EventFlags::new();

/// Pinged by every producer so a low-power wait ends as soon as an event
/// is pending; the signal latches, so a ping during processing is not
/// lost
pub static EDGE_WAKE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Display actions from the controller to the display task
pub static DISPLAY_ACTIONS: Channel<CriticalSectionRawMutex, DisplayAction, DISPLAY_CHANNEL_SIZE> =
    Channel::new();

/// Mirror of the motion sensor output level, maintained by the motion
/// task on every edge
static MOTION_LEVEL: AtomicBool = AtomicBool::new(false);

/// Record the motion level (motion task only)
pub fn set_motion_level(high: bool) {
    MOTION_LEVEL.store(high, Ordering::Release);
}

/// Read the mirrored motion level
pub fn motion_level() -> bool {
    MOTION_LEVEL.load(Ordering::Acquire)
}
