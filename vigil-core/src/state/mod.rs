//! State machine for the alarm controller
//!
//! Defines the authoritative runtime behavior of the system.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::SystemState;
