//! Setpoint potentiometer
//!
//! The operator's flow knob. Its usable travel is a calibrated sub-range
//! of the ADC; readings outside it are clamped and the result is mapped
//! linearly onto 0-100 % main valve flow.

use ignis_core::config::{PotentiometerConfig, ADC_FULL_SCALE};
use ignis_core::traits::SensorError;

use super::AdcReader;

/// Potentiometer on one ADC channel
pub struct Potentiometer<ADC> {
    adc: ADC,
    config: PotentiometerConfig,
}

impl<ADC> Potentiometer<ADC> {
    /// Create a new potentiometer reader
    pub fn new(adc: ADC, config: PotentiometerConfig) -> Self {
        Self { adc, config }
    }

    /// Map a raw ADC reading to flow percent
    ///
    /// An inverted calibration range (`adc_min > adc_max`) reads as 0 %.
    pub fn percent_for_raw(&self, raw: u16) -> Result<u8, SensorError> {
        if raw > ADC_FULL_SCALE {
            return Err(SensorError::OutOfRange);
        }

        let PotentiometerConfig { adc_min, adc_max } = self.config;
        let clamped = raw.max(adc_min).min(adc_max);
        let span = adc_max.saturating_sub(adc_min).max(1) as u32;
        let percent = clamped.saturating_sub(adc_min) as u32 * 100 / span;
        Ok(percent.min(100) as u8)
    }
}

impl<ADC: AdcReader> Potentiometer<ADC> {
    /// Read the setpoint in percent
    pub fn read_percent(&mut self) -> Result<u8, SensorError> {
        let raw = self.adc.read()?;
        self.percent_for_raw(raw)
    }
}
