//! Motion sensor task
//!
//! Mirrors the PIR output level into a shared atomic on every edge and
//! raises the motion flag on each rising edge. The controller polls the
//! mirrored level; the settle wait after an alarm depends on it.

use defmt::*;
use embassy_rp::gpio::Input;

use vigil_core::state::Event;

use crate::channels::{set_motion_level, EDGE_WAKE, FLAGS};

/// Motion sensor task: level mirror plus rising-edge events
#[embassy_executor::task]
pub async fn motion_task(mut pin: Input<'static>) {
    info!("motion task started");

    loop {
        let high = pin.is_high();
        set_motion_level(high);
        if high {
            FLAGS.raise(Event::MotionDetected);
            EDGE_WAKE.signal(());
            pin.wait_for_low().await;
        } else {
            pin.wait_for_high().await;
        }
    }
}
