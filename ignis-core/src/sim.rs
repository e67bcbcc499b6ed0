//! Simulated clock, inputs and outputs for host tests

use core::cell::Cell;

use heapless::Vec;

use crate::sequencer::{ActuatorCommand, StatusLeds};
use crate::time::{Tick, TimeBase};
use crate::traits::{ActuatorError, ActuatorGateway, SensorError, SensorGateway};

/// Clock advanced by hand
pub struct ManualTimeBase {
    ticks: Cell<u32>,
}

impl ManualTimeBase {
    pub fn new(start: u32) -> Self {
        Self {
            ticks: Cell::new(start),
        }
    }

    pub fn set(&self, ticks: u32) {
        self.ticks.set(ticks);
    }

    pub fn advance(&self, ticks: u32) {
        self.ticks.set(self.ticks.get().wrapping_add(ticks));
    }
}

impl TimeBase for ManualTimeBase {
    fn now(&self) -> Tick {
        Tick::from_raw(self.ticks.get())
    }
}

/// Inputs returned verbatim on every read
pub struct SimSensors {
    pub flame: Result<bool, SensorError>,
    pub setpoint: Result<u8, SensorError>,
    pub heat: Result<bool, SensorError>,
    pub safety: Result<bool, SensorError>,
    /// Total gateway reads
    pub reads: u32,
}

impl SimSensors {
    /// No flame, no call for heat, safety switch closed
    pub fn quiet() -> Self {
        Self {
            flame: Ok(false),
            setpoint: Ok(0),
            heat: Ok(false),
            safety: Ok(true),
            reads: 0,
        }
    }
}

impl SensorGateway for SimSensors {
    fn flame_detected(&mut self) -> Result<bool, SensorError> {
        self.reads += 1;
        self.flame
    }

    fn potentiometer_setpoint(&mut self) -> Result<u8, SensorError> {
        self.reads += 1;
        self.setpoint
    }

    fn heat_requested(&mut self) -> Result<bool, SensorError> {
        self.reads += 1;
        self.heat
    }

    fn safety_ok(&mut self) -> Result<bool, SensorError> {
        self.reads += 1;
        self.safety
    }
}

/// Output written by the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Pilot,
    Igniter,
    MainValve,
    Status,
}

/// Outputs that remember what was last written
pub struct SimActuators {
    pub applied: ActuatorCommand,
    /// Write order, cleared by the test as needed
    pub writes: Vec<Output, 64>,
    /// Make main valve writes fail
    pub fail_main_valve: bool,
    /// Make pilot valve writes fail
    pub fail_pilot: bool,
}

impl SimActuators {
    pub fn new() -> Self {
        Self {
            applied: ActuatorCommand::ALL_OFF,
            writes: Vec::new(),
            fail_main_valve: false,
            fail_pilot: false,
        }
    }

    fn log(&mut self, output: Output) {
        if self.writes.is_full() {
            self.writes.clear();
        }
        let _ = self.writes.push(output);
    }
}

impl ActuatorGateway for SimActuators {
    fn set_pilot_valve(&mut self, open: bool) -> Result<(), ActuatorError> {
        self.log(Output::Pilot);
        if self.fail_pilot {
            return Err(ActuatorError::PinFault);
        }
        self.applied.pilot_valve = open;
        Ok(())
    }

    fn set_igniter(&mut self, on: bool) -> Result<(), ActuatorError> {
        self.log(Output::Igniter);
        self.applied.igniter = on;
        Ok(())
    }

    fn set_main_valve(&mut self, percent: u8) -> Result<(), ActuatorError> {
        self.log(Output::MainValve);
        if self.fail_main_valve {
            return Err(ActuatorError::PwmFault);
        }
        self.applied.main_valve_percent = percent.min(100);
        Ok(())
    }

    fn set_status(&mut self, green: bool, red: bool) -> Result<(), ActuatorError> {
        self.log(Output::Status);
        self.applied.status = StatusLeds { green, red };
        Ok(())
    }
}
