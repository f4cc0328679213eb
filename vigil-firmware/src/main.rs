//! Vigil - Motion Alarm Controller Firmware
//!
//! Main firmware binary for RP2040-based boards. A PIR sensor, a disarm
//! button, and an NEC infrared receiver feed event flags; the core
//! controller drives an LED/buzzer pair and a 16x2 I2C status display.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use vigil_core::config::TimingConfig;
use vigil_core::controller::Controller;
use vigil_drivers::alarm::GpioAlarm;
use vigil_drivers::display::{Lcd1602, DEFAULT_ADDR};
use vigil_drivers::remote::CodeMap;

mod channels;
mod tasks;

/// Raw code assignments of the shipped remote
const REMOTE_CODES: CodeMap = CodeMap {
    start: 0x00FF_A25D,
    stop: 0x00FF_E21D,
    silence: 0x00FF_629D,
};

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("vigil firmware starting");

    let p = embassy_rp::init(Default::default());
    let timing = TimingConfig::default();

    // Actuator pair: both low until the controller says otherwise
    let led = Output::new(p.PIN_15, Level::Low);
    let buzzer = Output::new(p.PIN_14, Level::Low);
    let alarm = GpioAlarm::new(led, buzzer);

    // Event sources
    let motion = Input::new(p.PIN_16, Pull::Down);
    let button = Input::new(p.PIN_17, Pull::Up);
    let ir = Input::new(p.PIN_18, Pull::Up);

    // Status display. Remote commands are an explicit disarm path, so a
    // system that cannot show its state must not come up armed-capable.
    let i2c = I2c::new_blocking(p.I2C0, p.PIN_21, p.PIN_20, i2c::Config::default());
    let mut lcd = Lcd1602::new(i2c, Delay, DEFAULT_ADDR);
    if lcd.init().is_err() {
        defmt::panic!("status display unreachable at boot");
    }

    unwrap!(spawner.spawn(tasks::motion_task(motion)));
    unwrap!(spawner.spawn(tasks::button_task(button, timing.button_debounce_ms)));
    unwrap!(spawner.spawn(tasks::remote_task(ir, REMOTE_CODES, timing.remote_repeat_ms)));
    unwrap!(spawner.spawn(tasks::display_task(lcd)));
    unwrap!(spawner.spawn(tasks::controller_task(Controller::new(timing), alarm)));

    info!("boot complete, system stopped");
}
