//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod alarm;
pub mod decoder;
pub mod display;

pub use alarm::AlarmOutput;
pub use decoder::{CommandDecoder, CommandSymbol, RemoteCommand};
pub use display::{DisplayError, StatusDisplay};
