//! Board-agnostic core logic for the Vigil motion alarm controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display, command decoder, alarm output)
//! - State machine for arm/alarm/disarm behavior
//! - Debounced edge detection for buttons and sensors
//! - Cross-context event flags (single writer per flag, atomic clear-on-read)
//! - Alarm actuation blink timing
//! - Low-power wait policy and wake reasons
//! - Timing configuration

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actuator;
pub mod config;
pub mod controller;
pub mod input;
pub mod power;
pub mod state;
pub mod traits;
