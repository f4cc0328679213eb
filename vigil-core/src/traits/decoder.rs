//! Remote command decoder trait
//!
//! Bit-level decoding of the infrared signal is an external concern; the
//! core consumes discrete command symbols only.

use crate::state::Event;

/// Decoded abstract meaning of a remote-control signal, independent of
/// its raw bit encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandSymbol {
    /// Arm the system
    Start,
    /// Stop the system (effective from any state)
    Stop,
    /// Silence an active alarm
    Silence,
    /// Code outside the known set; ignored and logged
    Unknown,
}

impl CommandSymbol {
    /// Map a symbol to the controller event it raises, if any
    pub fn event(self) -> Option<Event> {
        match self {
            CommandSymbol::Start => Some(Event::RemoteStart),
            CommandSymbol::Stop => Some(Event::RemoteStop),
            CommandSymbol::Silence => Some(Event::RemoteSilence),
            CommandSymbol::Unknown => None,
        }
    }
}

/// One decoded remote command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RemoteCommand {
    /// Raw code as received, for the diagnostic log
    pub raw: u32,
    /// Decoded meaning
    pub symbol: CommandSymbol,
}

/// Trait for the external command decoder
///
/// The adapter will not report the same physical press twice without an
/// intervening [`resume`](CommandDecoder::resume); callers must call
/// `resume` after every decode regardless of the symbol, or the adapter
/// is permitted to stall.
pub trait CommandDecoder {
    /// Poll for a decoded command; non-blocking
    fn try_decode(&mut self) -> Option<RemoteCommand>;

    /// Re-enable reception after a decode
    fn resume(&mut self);
}
