//! Configuration type definitions
//!
//! These types represent the appliance configuration. All durations are
//! tick counts of the monotonic time base; [`ControlConfig`] records how
//! long one tick is.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Full-scale reading of the 12-bit ADC
pub const ADC_FULL_SCALE: u16 = 4095;

/// Flame sensor moving average window (samples)
pub const FLAME_FILTER_WINDOW: usize = 5;

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// At least one ignition trial must be permitted
    ZeroMaxTrials,
    /// Lockout blink period must be nonzero
    ZeroBlinkPeriod,
    /// Lockout blink half-period must be shorter than the full period
    BlinkHalfNotBelowPeriod,
    /// Tick period must be nonzero
    ZeroTickPeriod,
    /// Control cycle must be at least one tick long
    CycleShorterThanTick,
    /// Flame threshold must lie within the ADC range
    ThresholdAboveFullScale,
    /// Potentiometer calibration range is empty or exceeds the ADC range
    InvalidPotRange,
    /// Main valve minimum pulse must be shorter than the maximum pulse
    InvalidPulseRange,
    /// Main valve pulse must fit within the PWM period
    PulseExceedsPeriod,
}

/// Sequencer timing thresholds (in ticks)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SequencerTiming {
    /// Prepurge dwell before each ignition trial
    pub prepurge_ticks: u32,
    /// Maximum duration of one ignition trial
    pub ignition_trial_ticks: u32,
    /// Flame must stay detected this long before the main valve opens
    pub flame_prove_ticks: u32,
    /// Extra wait added to the prepurge that follows a failed trial
    pub retry_delay_ticks: u32,
    /// Ignition trials permitted before lockout
    pub max_trials: u8,
    /// Pilot stays open this long after the main valve closes
    pub shutdown_linger_ticks: u32,
    /// Red LED on-time within each lockout blink period
    pub lockout_blink_half_ticks: u32,
    /// Lockout blink period
    pub lockout_blink_period_ticks: u32,
    /// Reset condition must hold this long to leave lockout
    pub lockout_reset_confirm_ticks: u32,
}

impl SequencerTiming {
    /// Factory timing, one tick per millisecond
    pub const DEFAULT: SequencerTiming = SequencerTiming {
        prepurge_ticks: 3_000,
        ignition_trial_ticks: 10_000,
        flame_prove_ticks: 1_000,
        retry_delay_ticks: 5_000,
        max_trials: 3,
        shutdown_linger_ticks: 1_000,
        lockout_blink_half_ticks: 250,
        lockout_blink_period_ticks: 500,
        lockout_reset_confirm_ticks: 1_000,
    };

    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_trials == 0 {
            return Err(ConfigError::ZeroMaxTrials);
        }
        if self.lockout_blink_period_ticks == 0 {
            return Err(ConfigError::ZeroBlinkPeriod);
        }
        if self.lockout_blink_half_ticks >= self.lockout_blink_period_ticks {
            return Err(ConfigError::BlinkHalfNotBelowPeriod);
        }
        Ok(())
    }

    /// Prepurge dwell after a failed trial (retry delay plus prepurge)
    pub fn retry_prepurge_ticks(&self) -> u32 {
        self.retry_delay_ticks.saturating_add(self.prepurge_ticks)
    }
}

impl Default for SequencerTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Control loop cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ControlConfig {
    /// Length of one time base tick (ms)
    pub tick_period_ms: u32,
    /// Interval between control cycles (ms)
    pub cycle_period_ms: u32,
}

impl ControlConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.cycle_period_ms < self.tick_period_ms {
            return Err(ConfigError::CycleShorterThanTick);
        }
        Ok(())
    }

    /// Convert a millisecond duration to whole ticks (rounded down)
    pub fn ms_to_ticks(&self, ms: u32) -> u32 {
        ms / self.tick_period_ms.max(1)
    }
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 1,
            cycle_period_ms: 10,
        }
    }
}

/// Thermocouple flame sensor calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct FlameSensorConfig {
    /// Filtered ADC reading above which flame is present
    pub threshold: u16,
    /// Raw readings at or above this are treated as an open circuit
    pub open_circuit_above: u16,
}

impl FlameSensorConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threshold >= ADC_FULL_SCALE || self.open_circuit_above <= self.threshold {
            return Err(ConfigError::ThresholdAboveFullScale);
        }
        Ok(())
    }
}

impl Default for FlameSensorConfig {
    fn default() -> Self {
        Self {
            threshold: 500,
            open_circuit_above: 4090,
        }
    }
}

/// Potentiometer calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PotentiometerConfig {
    /// ADC reading at 0% flow
    pub adc_min: u16,
    /// ADC reading at 100% flow
    pub adc_max: u16,
}

impl PotentiometerConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adc_min >= self.adc_max || self.adc_max > ADC_FULL_SCALE {
            return Err(ConfigError::InvalidPotRange);
        }
        Ok(())
    }
}

impl Default for PotentiometerConfig {
    fn default() -> Self {
        Self {
            adc_min: 100,
            adc_max: ADC_FULL_SCALE,
        }
    }
}

/// Modulating main valve actuator calibration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct MainValveConfig {
    /// PWM period (µs)
    pub period_us: u16,
    /// Pulse width at 0% flow (µs)
    pub min_pulse_us: u16,
    /// Pulse width at 100% flow (µs)
    pub max_pulse_us: u16,
}

impl MainValveConfig {
    /// Check internal consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_pulse_us >= self.max_pulse_us {
            return Err(ConfigError::InvalidPulseRange);
        }
        if self.max_pulse_us > self.period_us {
            return Err(ConfigError::PulseExceedsPeriod);
        }
        Ok(())
    }

    /// Pulse width for a flow percentage (clamped to 100%)
    pub fn pulse_for_percent(&self, percent: u8) -> u16 {
        let percent = percent.min(100) as u32;
        let span = (self.max_pulse_us - self.min_pulse_us) as u32;
        self.min_pulse_us + (span * percent / 100) as u16
    }
}

impl Default for MainValveConfig {
    fn default() -> Self {
        Self {
            period_us: 20_000,
            min_pulse_us: 1_000,
            max_pulse_us: 2_000,
        }
    }
}

/// Complete appliance configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ApplianceConfig {
    /// Sequencer thresholds
    pub timing: SequencerTiming,
    /// Loop cadence
    pub control: ControlConfig,
    /// Flame sensor calibration
    pub flame_sensor: FlameSensorConfig,
    /// Potentiometer calibration
    pub potentiometer: PotentiometerConfig,
    /// Main valve calibration
    pub main_valve: MainValveConfig,
}

impl ApplianceConfig {
    /// Validate every section, reporting the first inconsistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timing.validate()?;
        self.control.validate()?;
        self.flame_sensor.validate()?;
        self.potentiometer.validate()?;
        self.main_valve.validate()
    }
}
