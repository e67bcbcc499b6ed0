//! Modulating main valve
//!
//! The main valve is positioned by a hobby-servo style actuator: a pulse
//! between `min_pulse_us` (closed) and `max_pulse_us` (fully open) repeated
//! every `period_us`. The PWM slice must be configured so that one full
//! duty cycle spans `period_us`.

use embedded_hal::pwm::SetDutyCycle;

use ignis_core::config::MainValveConfig;
use ignis_core::traits::ActuatorError;

/// Main valve on one PWM channel
pub struct MainValve<P> {
    pwm: P,
    config: MainValveConfig,
    /// Last successfully applied flow percent
    percent: u8,
}

impl<P: SetDutyCycle> MainValve<P> {
    /// Create a new main valve driver and command it closed
    pub fn new(pwm: P, config: MainValveConfig) -> Self {
        let mut valve = Self {
            pwm,
            config,
            percent: 0,
        };
        // A failure here is reported again by the first control cycle
        let _ = valve.set_percent(0);
        valve
    }

    /// Set flow in percent (values above 100 are clamped)
    pub fn set_percent(&mut self, percent: u8) -> Result<(), ActuatorError> {
        let percent = percent.min(100);
        let pulse = self.config.pulse_for_percent(percent);
        self.pwm
            .set_duty_cycle_fraction(pulse, self.config.period_us)
            .map_err(|_| ActuatorError::PwmFault)?;
        self.percent = percent;
        Ok(())
    }

    /// Last applied flow percent
    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Pulse width for the last applied flow percent (µs)
    pub fn pulse_us(&self) -> u16 {
        self.config.pulse_for_percent(self.percent)
    }
}
