//! Button task
//!
//! The disarm button is active-low. Each falling edge is run through the
//! debounce window; a held button counts as one press because the task
//! waits for release before listening again.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use vigil_core::input::DebounceWindow;
use vigil_core::state::Event;

use crate::channels::{EDGE_WAKE, FLAGS};

/// Button task: debounced falling edges
#[embassy_executor::task]
pub async fn button_task(mut pin: Input<'static>, debounce_ms: u32) {
    info!("button task started");

    let mut window = DebounceWindow::new(debounce_ms);
    loop {
        pin.wait_for_falling_edge().await;
        let now_ms = Instant::now().as_millis() as u32;
        if window.accept(now_ms) {
            debug!("button press accepted");
            FLAGS.raise(Event::ButtonPressed);
            EDGE_WAKE.signal(());
        }
        pin.wait_for_high().await;
    }
}
