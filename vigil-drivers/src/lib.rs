//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in vigil-core for the board peripherals:
//!
//! - Alarm output (LED + buzzer GPIO pair)
//! - PIR motion sensor input
//! - Polled debounced button
//! - Remote command decoder adapter (raw code to symbol mapping)
//! - Poll-mode power manager
//! - I2C character display (HD44780 behind a PCF8574 expander)
//!
//! All drivers are generic over `embedded-hal` 1.0 traits and are
//! testable on the host with fake pins.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod alarm;
pub mod button;
pub mod display;
pub mod power;
pub mod remote;
pub mod sensor;
