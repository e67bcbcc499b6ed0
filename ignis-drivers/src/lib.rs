//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the gateway traits
//! defined in ignis-core, built on `embedded-hal` pin and PWM traits:
//!
//! - Thermocouple flame sensor with moving-average filtering
//! - Setpoint potentiometer
//! - Heat request and safety switch inputs
//! - Pilot valve and igniter outputs, status LEDs
//! - Pulse-width-modulated main valve

#![no_std]
#![deny(unsafe_code)]

pub mod gateway;
pub mod output;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;

pub use gateway::{ApplianceActuators, ApplianceSensors};
