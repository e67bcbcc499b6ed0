//! Mock pins, ADC channels and PWM outputs for tests
//!
//! Each mock reads or writes through a `Cell` owned by the test, so the
//! test can keep changing inputs after handing the mock to a driver.

use core::cell::Cell;
use core::convert::Infallible;

use embedded_hal::digital::{self, ErrorType as DigitalErrorType, InputPin, OutputPin};
use embedded_hal::pwm::{self, ErrorType as PwmErrorType, SetDutyCycle};

use crate::sensor::{AdcError, AdcReader};

/// Error returned by a mock configured to fail
#[derive(Debug, Clone, Copy)]
pub struct MockFault;

impl digital::Error for MockFault {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

impl pwm::Error for MockFault {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

/// ADC channel returning whatever the test last stored
pub struct MockAdc<'a> {
    pub value: &'a Cell<Result<u16, AdcError>>,
}

impl AdcReader for MockAdc<'_> {
    fn read(&mut self) -> Result<u16, AdcError> {
        self.value.get()
    }
}

/// Input pin at the level the test last stored
pub struct MockInput<'a> {
    pub high: &'a Cell<bool>,
    pub fail: bool,
}

impl DigitalErrorType for MockInput<'_> {
    type Error = MockFault;
}

impl InputPin for MockInput<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        if self.fail {
            return Err(MockFault);
        }
        Ok(self.high.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

/// Output pin recording its level
pub struct MockOutput<'a> {
    pub high: &'a Cell<bool>,
    pub fail: &'a Cell<bool>,
}

impl DigitalErrorType for MockOutput<'_> {
    type Error = MockFault;
}

impl OutputPin for MockOutput<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(MockFault);
        }
        self.high.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        if self.fail.get() {
            return Err(MockFault);
        }
        self.high.set(true);
        Ok(())
    }
}

/// PWM channel recording the last duty written
pub struct MockPwm<'a> {
    pub duty: &'a Cell<u16>,
    pub max: u16,
}

impl PwmErrorType for MockPwm<'_> {
    type Error = Infallible;
}

impl SetDutyCycle for MockPwm<'_> {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.duty.set(duty);
        Ok(())
    }
}

/// PWM channel that always fails
pub struct BrokenPwm;

impl PwmErrorType for BrokenPwm {
    type Error = MockFault;
}

impl SetDutyCycle for BrokenPwm {
    fn max_duty_cycle(&self) -> u16 {
        20_000
    }

    fn set_duty_cycle(&mut self, _duty: u16) -> Result<(), Self::Error> {
        Err(MockFault)
    }
}
