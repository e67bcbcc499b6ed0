//! Digital switch inputs
//!
//! The thermostat contact and the safety switch pull their pin to ground
//! when closed, so both are wired active-low with the internal pull-up
//! enabled. An open wire then reads as "not requested" and "tripped".

use embedded_hal::digital::InputPin;

use ignis_core::traits::SensorError;

/// Switch on one GPIO input
pub struct SwitchInput<P> {
    pin: P,
    /// If true, switch closed = pin LOW
    active_low: bool,
}

impl<P: InputPin> SwitchInput<P> {
    /// Create a new switch input
    pub fn new(pin: P, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Create a switch that reads closed when the pin is low
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Create a switch that reads closed when the pin is high
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Check if the switch is closed
    pub fn is_closed(&mut self) -> Result<bool, SensorError> {
        let high = self.pin.is_high().map_err(|_| SensorError::PinFault)?;
        Ok(high != self.active_low)
    }
}
