//! Thermocouple flame sensor
//!
//! A thermocouple in the pilot flame produces a small voltage once it
//! heats up. The raw reading is averaged over [`FLAME_FILTER_WINDOW`]
//! samples and compared against an empirical threshold. A reading at
//! the top rail means the thermocouple or its amplifier is disconnected.

use ignis_core::config::{FlameSensorConfig, FLAME_FILTER_WINDOW};
use ignis_core::traits::SensorError;

use super::{AdcReader, MovingAverage};

/// Flame sensor on one ADC channel
pub struct ThermocoupleFlameSensor<ADC> {
    adc: ADC,
    config: FlameSensorConfig,
    filter: MovingAverage<FLAME_FILTER_WINDOW>,
}

impl<ADC: AdcReader> ThermocoupleFlameSensor<ADC> {
    /// Create a new flame sensor with an empty filter
    pub fn new(adc: ADC, config: FlameSensorConfig) -> Self {
        Self {
            adc,
            config,
            filter: MovingAverage::new(),
        }
    }

    /// Take one sample and return the filtered level
    pub fn sample(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read()?;

        if raw >= self.config.open_circuit_above {
            // Do not let pre-fault samples vouch for a flame later
            self.filter.clear();
            return Err(SensorError::OpenCircuit);
        }

        Ok(self.filter.push(raw))
    }

    /// Take one sample and check the filtered level against the threshold
    pub fn flame_detected(&mut self) -> Result<bool, SensorError> {
        Ok(self.sample()? > self.config.threshold)
    }

    /// Filtered level from the last successful sample
    pub fn level(&self) -> u16 {
        self.filter.mean()
    }
}
