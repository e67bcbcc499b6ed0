//! Actuator drivers

pub mod gpio;
pub mod main_valve;
pub mod status;

pub use gpio::GpioOutput;
pub use main_valve::MainValve;
pub use status::StatusLedPair;
