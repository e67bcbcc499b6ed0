//! Hardware abstraction traits
//!
//! These traits define the interface between the sequencing logic
//! and hardware-specific implementations. Any backend that can read the
//! four appliance inputs and drive the four outputs can run the same
//! sequencer, including a simulated one on the host.

pub mod gateway;

pub use gateway::{ActuatorError, ActuatorGateway, SensorError, SensorGateway};
