//! Sensor drivers
//!
//! Analog inputs are read through [`AdcReader`], one conversion per call,
//! so a board can back several sensors with one shared converter.

pub mod filter;
pub mod flame;
pub mod potentiometer;
pub mod switch;

pub use filter::MovingAverage;
pub use flame::ThermocoupleFlameSensor;
pub use potentiometer::Potentiometer;
pub use switch::SwitchInput;

use ignis_core::traits::SensorError;

/// ADC conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Converter busy with another channel
    NotReady,
    /// Conversion failed
    Conversion,
}

impl From<AdcError> for SensorError {
    fn from(e: AdcError) -> Self {
        match e {
            AdcError::NotReady => SensorError::NotReady,
            AdcError::Conversion => SensorError::ConversionError,
        }
    }
}

/// ADC reading trait for platform abstraction
pub trait AdcReader {
    /// Read one 12-bit conversion (0-4095)
    fn read(&mut self) -> Result<u16, AdcError>;
}
