//! Board-agnostic core logic for the gas ignition valve controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Ignition sequencer (prepurge, trial for ignition, flame proving,
//!   main valve modulation, shutdown and lockout)
//! - Sensor and actuator gateway traits
//! - Monotonic tick source with wraparound-safe interval arithmetic
//! - Safety interlock and lockout reset confirmation
//! - Control loop that samples one sensor snapshot per cycle
//! - Configuration type definitions and parsing

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod safety;
pub mod sequencer;
pub mod state;
pub mod time;
pub mod traits;

#[cfg(test)]
pub(crate) mod sim;
