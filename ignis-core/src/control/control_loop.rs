//! Control cycle driver
//!
//! One call to [`ControlLoop::run_cycle`] is one control cycle: read the
//! clock, sample the inputs, step the sequencer, write every output. The
//! caller decides the cadence.

use crate::config::SequencerTiming;
use crate::sequencer::{ActuatorCommand, Sequencer, TransitionLog};
use crate::state::{SystemState, Transition};
use crate::time::{Tick, TimeBase};
use crate::traits::{ActuatorError, ActuatorGateway, SensorGateway};

use super::sampler::{SensorFaults, SnapshotSampler};

/// Outputs that failed to apply this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorFaults {
    pub main_valve: Option<ActuatorError>,
    pub igniter: Option<ActuatorError>,
    pub pilot_valve: Option<ActuatorError>,
    pub status: Option<ActuatorError>,
}

impl ActuatorFaults {
    /// Check if any output failed
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Number of outputs that failed
    pub fn count(&self) -> u32 {
        [self.main_valve, self.igniter, self.pilot_valve, self.status]
            .iter()
            .filter(|f| f.is_some())
            .count() as u32
    }
}

/// Summary of one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    /// Tick the cycle ran at
    pub now: Tick,
    /// State after the cycle
    pub state: SystemState,
    /// Transition taken, if any
    pub transition: Option<Transition>,
    /// Commands written
    pub command: ActuatorCommand,
    /// Inputs that failed to read
    pub faults: SensorFaults,
    /// Outputs that failed to apply
    pub actuator_faults: ActuatorFaults,
}

/// Running counters since boot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopStats {
    /// Control cycles run
    pub cycles: u32,
    /// Entries into lockout
    pub lockouts: u32,
    /// Input reads that failed
    pub sensor_faults: u32,
    /// Output writes that failed
    pub actuator_faults: u32,
}

/// Control loop over a clock, a sensor gateway and an actuator gateway
pub struct ControlLoop<T, S, A>
where
    T: TimeBase,
    S: SensorGateway,
    A: ActuatorGateway,
{
    clock: T,
    sensors: S,
    actuators: A,
    sampler: SnapshotSampler,
    sequencer: Sequencer,
    history: TransitionLog,
    stats: LoopStats,
}

impl<T, S, A> ControlLoop<T, S, A>
where
    T: TimeBase,
    S: SensorGateway,
    A: ActuatorGateway,
{
    /// Create a control loop with the sequencer in Idle
    pub fn new(clock: T, sensors: S, actuators: A, timing: SequencerTiming) -> Self {
        Self {
            clock,
            sensors,
            actuators,
            sampler: SnapshotSampler::new(),
            sequencer: Sequencer::new(timing),
            history: TransitionLog::new(),
            stats: LoopStats::default(),
        }
    }

    /// Run one control cycle
    pub fn run_cycle(&mut self) -> CycleReport {
        let now = self.clock.now();
        let sample = self.sampler.sample(&mut self.sensors);
        let outcome = self.sequencer.advance(now, sample.snapshot);

        if let Some(transition) = outcome.transition {
            self.history.record(transition);
            if transition.to.is_lockout() {
                self.stats.lockouts = self.stats.lockouts.wrapping_add(1);
            }
        }

        let actuator_faults = self.apply(&outcome.command);

        self.stats.cycles = self.stats.cycles.wrapping_add(1);
        self.stats.sensor_faults = self
            .stats
            .sensor_faults
            .wrapping_add(sample.faults.count());
        self.stats.actuator_faults = self
            .stats
            .actuator_faults
            .wrapping_add(actuator_faults.count());

        CycleReport {
            now,
            state: self.sequencer.current(),
            transition: outcome.transition,
            command: outcome.command,
            faults: sample.faults,
            actuator_faults,
        }
    }

    /// Write every output, closing gas paths before opening any
    ///
    /// A failed write does not stop the remaining writes.
    fn apply(&mut self, cmd: &ActuatorCommand) -> ActuatorFaults {
        let a = &mut self.actuators;
        ActuatorFaults {
            main_valve: a.set_main_valve(cmd.main_valve_percent).err(),
            igniter: a.set_igniter(cmd.igniter).err(),
            pilot_valve: a.set_pilot_valve(cmd.pilot_valve).err(),
            status: a.set_status(cmd.status.green, cmd.status.red).err(),
        }
    }

    /// Sequencer driven by this loop
    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    /// Recent transitions
    pub fn history(&self) -> &TransitionLog {
        &self.history
    }

    /// Counters since boot
    pub fn stats(&self) -> &LoopStats {
        &self.stats
    }

    /// Sensor gateway
    pub fn sensors(&self) -> &S {
        &self.sensors
    }

    /// Sensor gateway (mutable)
    pub fn sensors_mut(&mut self) -> &mut S {
        &mut self.sensors
    }

    /// Actuator gateway
    pub fn actuators(&self) -> &A {
        &self.actuators
    }

    /// Actuator gateway (mutable)
    pub fn actuators_mut(&mut self) -> &mut A {
        &mut self.actuators
    }
}
