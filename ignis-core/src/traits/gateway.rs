//! Sensor and actuator gateway traits

/// Errors that can occur reading an appliance input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// No new conversion is available yet; the previous value still holds
    NotReady,
    /// Sensor disconnected (open circuit)
    OpenCircuit,
    /// Reading out of expected range
    OutOfRange,
    /// ADC conversion error
    ConversionError,
    /// Digital input could not be read
    PinFault,
}

impl SensorError {
    /// Check if the previous reading may be reused
    ///
    /// Only `NotReady` means the last value is stale but still valid;
    /// every other error means the input cannot be trusted.
    pub fn is_stale(&self) -> bool {
        matches!(self, SensorError::NotReady)
    }
}

/// Errors that can occur driving an appliance output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorError {
    /// Digital output could not be driven
    PinFault,
    /// PWM duty cycle could not be set
    PwmFault,
}

/// Trait for reading the appliance inputs
///
/// Takes `&mut self` because ADC reads and filters require mutable access.
/// Each method performs at most one short, bounded conversion.
pub trait SensorGateway {
    /// Check if the flame sensor currently sees a flame
    fn flame_detected(&mut self) -> Result<bool, SensorError>;

    /// Read the operator setpoint as main valve flow percent (0..=100)
    fn potentiometer_setpoint(&mut self) -> Result<u8, SensorError>;

    /// Check if the thermostat is calling for heat
    fn heat_requested(&mut self) -> Result<bool, SensorError>;

    /// Check if the safety switch is in the safe position
    fn safety_ok(&mut self) -> Result<bool, SensorError>;
}

/// Trait for driving the appliance outputs
pub trait ActuatorGateway {
    /// Open or close the pilot valve
    fn set_pilot_valve(&mut self, open: bool) -> Result<(), ActuatorError>;

    /// Enable or disable the igniter
    fn set_igniter(&mut self, on: bool) -> Result<(), ActuatorError>;

    /// Set main valve flow in percent (0..=100, larger values are clamped)
    fn set_main_valve(&mut self, percent: u8) -> Result<(), ActuatorError>;

    /// Set the status LEDs
    fn set_status(&mut self, green: bool, red: bool) -> Result<(), ActuatorError>;
}
