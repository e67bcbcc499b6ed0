//! Green/red status LED pair

use embedded_hal::digital::OutputPin;

use ignis_core::traits::ActuatorError;

use super::GpioOutput;

/// Two status LEDs, each on its own GPIO pin
pub struct StatusLedPair<G, R> {
    green: GpioOutput<G>,
    red: GpioOutput<R>,
}

impl<G: OutputPin, R: OutputPin> StatusLedPair<G, R> {
    /// Create a new LED pair (both off)
    pub fn new(green: GpioOutput<G>, red: GpioOutput<R>) -> Self {
        Self { green, red }
    }

    /// Set both LEDs, attempting both even if the first fails
    pub fn set(&mut self, green: bool, red: bool) -> Result<(), ActuatorError> {
        let g = self.green.set_on(green);
        let r = self.red.set_on(red);
        g.and(r)
    }

    /// Current LED states (green, red)
    pub fn get(&self) -> (bool, bool) {
        (self.green.is_on(), self.red.is_on())
    }
}
