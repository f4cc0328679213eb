//! Remote control task
//!
//! Receives NEC pulse-distance frames on the IR pin by timestamping
//! edges, feeds the raw codes through the decoder adapter, and raises
//! the matching event flag. Retransmissions of a held key inside the
//! suppression window are dropped; a different key always passes.
//! Unknown codes are logged and ignored.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use vigil_core::traits::CommandDecoder;
use vigil_drivers::remote::{CodeMap, CodeSlot, MappedDecoder, RepeatGate};

use crate::channels::{EDGE_WAKE, FLAGS};

// NEC timing, all in microseconds
const LEAD_BURST: core::ops::Range<u64> = 8_000..10_500;
const LEAD_SPACE: core::ops::Range<u64> = 3_500..5_500;
const BIT_MARK: core::ops::Range<u64> = 300..900;
const ONE_SPACE: core::ops::Range<u64> = 1_300..1_900;

/// Remote control task: NEC receive, decode, classify
#[embassy_executor::task]
pub async fn remote_task(mut pin: Input<'static>, map: CodeMap, repeat_ms: u32) {
    info!("remote task started");

    let mut decoder = MappedDecoder::new(CodeSlot::new(), map);
    let mut gate = RepeatGate::new(repeat_ms);

    loop {
        let raw = read_frame(&mut pin).await;
        decoder.receiver_mut().load(raw);

        if let Some(cmd) = decoder.try_decode() {
            match cmd.symbol.event() {
                Some(event) => {
                    let now_ms = Instant::now().as_millis() as u32;
                    if gate.accept(cmd.raw, now_ms) {
                        info!("remote code {=u32:08x} -> {}", cmd.raw, cmd.symbol);
                        FLAGS.raise(event);
                        EDGE_WAKE.signal(());
                    }
                }
                None => warn!("unrecognized remote code {=u32:08x}", cmd.raw),
            }
        }
        // The adapter stalls without this
        decoder.resume();
    }
}

/// Receive one 32-bit NEC frame; repeat frames and malformed pulse
/// trains are discarded
async fn read_frame(pin: &mut Input<'static>) -> u32 {
    'frame: loop {
        pin.wait_for_low().await;
        if !LEAD_BURST.contains(&low_pulse_us(pin).await) {
            continue;
        }
        // A 2.25 ms space here would be a repeat frame; ignored
        if !LEAD_SPACE.contains(&high_pulse_us(pin).await) {
            continue;
        }

        let mut code: u32 = 0;
        for _ in 0..32 {
            if !BIT_MARK.contains(&low_pulse_us(pin).await) {
                continue 'frame;
            }
            let space = high_pulse_us(pin).await;
            code >>= 1;
            if ONE_SPACE.contains(&space) {
                code |= 0x8000_0000;
            } else if !BIT_MARK.contains(&space) {
                continue 'frame;
            }
        }
        return code;
    }
}

async fn low_pulse_us(pin: &mut Input<'static>) -> u64 {
    let start = Instant::now();
    pin.wait_for_high().await;
    start.elapsed().as_micros()
}

async fn high_pulse_us(pin: &mut Input<'static>) -> u64 {
    let start = Instant::now();
    pin.wait_for_low().await;
    start.elapsed().as_micros()
}
