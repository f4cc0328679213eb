//! Display task
//!
//! Drains the display action channel into the I2C LCD so the control
//! loop never blocks on a bus transaction. A failed write is logged and
//! dropped; the next status message overwrites the line anyway.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use vigil_core::traits::StatusDisplay;
use vigil_drivers::display::Lcd1602;

use crate::channels::DISPLAY_ACTIONS;

/// The board's status display
pub type BoardLcd = Lcd1602<I2c<'static, I2C0, Blocking>, Delay>;

/// Display task: applies controller-issued actions in order
#[embassy_executor::task]
pub async fn display_task(mut lcd: BoardLcd) {
    info!("display task started");

    loop {
        let action = DISPLAY_ACTIONS.receive().await;
        if let Err(e) = lcd.apply(action) {
            warn!("display write failed: {}", e);
        }
    }
}
