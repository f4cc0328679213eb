//! Controller task
//!
//! The single-threaded cooperative control loop. Each iteration polls
//! the controller, applies the actuator level, forwards display actions,
//! and logs transitions. When the controller asks for a low-power wait
//! the task suspends on the wake signal with the periodic wake timer as
//! a bound, so a pending remote stop is never starved.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{Instant, Timer};

use vigil_core::controller::Controller;
use vigil_core::state::{Event, SystemState};
use vigil_core::traits::AlarmOutput;
use vigil_drivers::alarm::GpioAlarm;

use crate::channels::{motion_level, DISPLAY_ACTIONS, EDGE_WAKE, FLAGS};

/// Loop pacing when no low-power wait is requested
const LOOP_PACE_MS: u64 = 10;

/// The board's alarm output
pub type BoardAlarm = GpioAlarm<Output<'static>, Output<'static>>;

/// Controller task: the cooperative polling loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: Controller, mut alarm: BoardAlarm) {
    info!("controller task started");

    let epoch = Instant::now();
    loop {
        let now_ms = epoch.elapsed().as_millis() as u32;
        let step = controller.poll(&FLAGS, motion_level(), now_ms);

        alarm.set_level(step.actuator);
        for action in &step.display {
            DISPLAY_ACTIONS.send(*action).await;
        }
        if let Some(event) = step.ignored {
            info!("{} ignored in {}", event, controller.state());
        }
        if let Some((from, to)) = step.transition {
            info!("state {} -> {}", from, to);
            match (from, to) {
                (_, SystemState::AlarmActive) => warn!("alarm activated"),
                (SystemState::AlarmActive, SystemState::Armed) => info!("alarm deactivated"),
                (SystemState::Stopped, SystemState::Armed) => info!("system started"),
                (_, SystemState::Stopped) => info!("system stopped"),
                _ => {}
            }
        }

        match step.sleep {
            Some(policy) => {
                // Low-power wait: any producer edge ends it early
                match select(
                    EDGE_WAKE.wait(),
                    Timer::after_millis(u64::from(policy.max_wait_ms)),
                )
                .await
                {
                    Either::First(()) => {}
                    Either::Second(()) => FLAGS.raise(Event::WakeTimeout),
                }
            }
            None => Timer::after_millis(LOOP_PACE_MS).await,
        }
    }
}
