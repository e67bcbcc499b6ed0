//! GPIO binary output
//!
//! Pilot valve solenoid, igniter and status LEDs are each one GPIO pin,
//! driven directly or through a MOSFET/relay.

use embedded_hal::digital::OutputPin;

use ignis_core::traits::ActuatorError;

/// Binary output on one GPIO pin
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioOutput<P> {
    pin: P,
    /// If true, output ON = pin LOW
    inverted: bool,
    /// Last successfully applied logical state
    on: bool,
}

impl<P: OutputPin> GpioOutput<P> {
    /// Create a new output and drive it off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, output is ON when pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut output = Self {
            pin,
            inverted,
            on: false,
        };
        // A failure here is reported again by the first control cycle
        let _ = output.set_on(false);
        output
    }

    /// Create a new active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    /// Create a new active-low output
    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }

    /// Switch the output on or off
    pub fn set_on(&mut self, on: bool) -> Result<(), ActuatorError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ActuatorError::PinFault)?;
        self.on = on;
        Ok(())
    }

    /// Check if the output is on
    pub fn is_on(&self) -> bool {
        self.on
    }
}
