//! Control loop
//!
//! Ties the time base, the sensor and actuator gateways and the
//! sequencer together into a fixed-cadence cycle.

pub mod control_loop;
pub mod sampler;

pub use control_loop::{ActuatorFaults, ControlLoop, CycleReport, LoopStats};
pub use sampler::{Sample, SensorFaults, SnapshotSampler};
