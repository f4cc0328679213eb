//! Remote command decoder adapter
//!
//! The platform delivers raw 32-bit codes (however it receives them);
//! [`CodeMap`] gives them meaning and [`MappedDecoder`] adapts a raw-code
//! source to the core [`CommandDecoder`] contract, including the
//! stall-until-resume behavior real receiver hardware exhibits.

use vigil_core::traits::{CommandDecoder, CommandSymbol, RemoteCommand};

/// Raw code assignments for one remote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CodeMap {
    /// Code of the "start" key
    pub start: u32,
    /// Code of the "stop" key
    pub stop: u32,
    /// Code of the "silence alarm" key
    pub silence: u32,
}

impl CodeMap {
    /// Map a raw code to its command symbol
    pub const fn classify(&self, raw: u32) -> CommandSymbol {
        if raw == self.start {
            CommandSymbol::Start
        } else if raw == self.stop {
            CommandSymbol::Stop
        } else if raw == self.silence {
            CommandSymbol::Silence
        } else {
            CommandSymbol::Unknown
        }
    }
}

/// Source of raw remote codes
///
/// Implementations must not report the same physical press twice without
/// an intervening [`resume`](RawReceiver::resume).
pub trait RawReceiver {
    /// Poll for a received code; non-blocking
    fn poll_code(&mut self) -> Option<u32>;

    /// Re-enable reception after a poll
    fn resume(&mut self);
}

/// Adapter from a raw-code source to the core decoder contract
pub struct MappedDecoder<R> {
    rx: R,
    map: CodeMap,
}

impl<R: RawReceiver> MappedDecoder<R> {
    /// Wrap a raw receiver with a code map
    pub fn new(rx: R, map: CodeMap) -> Self {
        Self { rx, map }
    }

    /// Access the underlying receiver
    pub fn receiver_mut(&mut self) -> &mut R {
        &mut self.rx
    }
}

impl<R: RawReceiver> CommandDecoder for MappedDecoder<R> {
    fn try_decode(&mut self) -> Option<RemoteCommand> {
        self.rx.poll_code().map(|raw| RemoteCommand {
            raw,
            symbol: self.map.classify(raw),
        })
    }

    fn resume(&mut self) {
        self.rx.resume();
    }
}

/// Single-slot raw-code buffer
///
/// Producers (an interrupt handler or a receive task) `load` decoded
/// codes; the slot stalls after each poll until `resume` is called,
/// matching the adapter guarantee of at most one report per press.
#[derive(Debug, Default)]
pub struct CodeSlot {
    code: Option<u32>,
    stalled: bool,
}

impl CodeSlot {
    /// Create an empty slot
    pub const fn new() -> Self {
        Self {
            code: None,
            stalled: false,
        }
    }

    /// Store a received code, replacing any unread one
    pub fn load(&mut self, raw: u32) {
        self.code = Some(raw);
    }
}

impl RawReceiver for CodeSlot {
    fn poll_code(&mut self) -> Option<u32> {
        if self.stalled {
            return None;
        }
        let code = self.code.take();
        if code.is_some() {
            self.stalled = true;
        }
        code
    }

    fn resume(&mut self) {
        self.stalled = false;
    }
}

/// Held-key suppression for full remote frames
///
/// A held key retransmits its full frame every ~110 ms on remotes that do
/// not emit repeat frames. The gate drops retransmissions of the *same*
/// code inside the suppression window; a different key is a new press and
/// always passes, so a stop is never shadowed by a recent start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RepeatGate {
    window_ms: u32,
    last: Option<(u32, u32)>,
}

impl RepeatGate {
    /// Create a gate with the given suppression window
    pub const fn new(window_ms: u32) -> Self {
        Self {
            window_ms,
            last: None,
        }
    }

    /// Accept or suppress a received code at `now_ms` (wrapping clock)
    pub fn accept(&mut self, raw: u32, now_ms: u32) -> bool {
        if let Some((code, at_ms)) = self.last {
            if code == raw && now_ms.wrapping_sub(at_ms) < self.window_ms {
                return false;
            }
        }
        self.last = Some((raw, now_ms));
        true
    }
}
