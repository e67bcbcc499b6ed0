//! Ignition sequencer
//!
//! Owns the system state, the per-state timer, the ignition trial
//! counter and the valve/igniter intent. Each call to [`Sequencer::step`]
//! consumes one sensor snapshot and produces one complete actuator
//! command; there is no other I/O.
//!
//! ```text
//!            heat            dwell              flame            proven
//!   Idle ─────────▶ Prepurge ─────▶ PilotIgnition ─────▶ PilotProve ─────▶ MainValve
//!    ▲                 ▲                 │  timeout             │ flame lost     │ flame lost /
//!    │                 └─────────────────┤  (trials left)       ▼                │ heat released
//!    │                                   │                   Shutdown ◀──────────┘
//!    │            manual reset           │  timeout (last)      │ linger
//!    ├──────────────── Lockout ◀─────────┘                      │
//!    └──────────────────────────────────────────────────────────┘
//! ```
//!
//! A tripped safety switch sends every state except Idle and Lockout to
//! Shutdown, ahead of the state's own conditions.

pub mod history;
pub mod io;

pub use history::{TransitionLog, HISTORY_LEN};
pub use io::{ActuatorCommand, SensorSnapshot, StatusLeds};

use crate::config::SequencerTiming;
use crate::safety::{ResetConfirmation, SafetyInterlock};
use crate::state::{Event, SystemState, Transition};
use crate::time::Tick;

/// The sequencer's observable state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SequencerState {
    /// Current state
    pub state: SystemState,
    /// Ticks since the current state was entered
    pub state_timer: u32,
    /// Ignition trials started since the last fresh heat request or
    /// lockout reset
    pub ignition_trials: u8,
    /// Last commanded pilot valve position
    pub pilot_open: bool,
    /// Last commanded main valve flow percent
    pub main_flow_percent: u8,
}

/// Result of one sequencer step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepOutcome {
    /// Commands to apply this cycle
    pub command: ActuatorCommand,
    /// State change taken this cycle, if any
    pub transition: Option<Transition>,
}

/// Ignition sequencer state machine
pub struct Sequencer {
    timing: SequencerTiming,
    record: SequencerState,
    igniter_on: bool,
    /// Tick at which the current state was entered (set on first step)
    entered_at: Option<Tick>,
    /// Dwell required by the current or next prepurge
    prepurge_dwell: u32,
    interlock: SafetyInterlock,
    reset: ResetConfirmation,
}

impl Sequencer {
    /// Create a sequencer in Idle with no trials counted
    pub fn new(timing: SequencerTiming) -> Self {
        Self {
            timing,
            record: SequencerState::default(),
            igniter_on: false,
            entered_at: None,
            prepurge_dwell: timing.prepurge_ticks,
            interlock: SafetyInterlock::new(),
            reset: ResetConfirmation::new(timing.lockout_reset_confirm_ticks),
        }
    }

    /// Observable state
    pub fn state(&self) -> &SequencerState {
        &self.record
    }

    /// Current system state
    pub fn current(&self) -> SystemState {
        self.record.state
    }

    /// Timing thresholds in use
    pub fn timing(&self) -> &SequencerTiming {
        &self.timing
    }

    /// Check if the igniter is commanded on
    pub fn igniter_on(&self) -> bool {
        self.igniter_on
    }

    /// Safety interlock statistics
    pub fn interlock(&self) -> &SafetyInterlock {
        &self.interlock
    }

    /// Run one control cycle and return the commands to apply
    ///
    /// `now` must be non-decreasing between calls (modulo wraparound).
    pub fn step(&mut self, now: Tick, sensors: SensorSnapshot) -> ActuatorCommand {
        self.advance(now, sensors).command
    }

    /// Run one control cycle, also reporting any transition taken
    pub fn advance(&mut self, now: Tick, sensors: SensorSnapshot) -> StepOutcome {
        let entered_at = *self.entered_at.get_or_insert(now);
        self.record.state_timer = now.elapsed_since(entered_at);

        let event = match self.interlock.pre_empt(self.record.state, &sensors) {
            Some(event) => Some(event),
            None => self.evaluate(now, &sensors),
        };
        let transition = event.map(|event| self.enter(event, now, &sensors));

        if self.record.state.main_flow_allowed() {
            self.record.main_flow_percent = sensors.setpoint_percent.min(100);
        }

        StepOutcome {
            command: self.command(),
            transition,
        }
    }

    /// Transition conditions of the current state
    fn evaluate(&mut self, now: Tick, s: &SensorSnapshot) -> Option<Event> {
        let timer = self.record.state_timer;
        let t = &self.timing;

        match self.record.state {
            SystemState::Idle => s.heat_requested.then_some(Event::HeatRequested),

            SystemState::Prepurge => (timer >= self.prepurge_dwell).then_some(Event::PurgeComplete),

            SystemState::PilotIgnition => {
                if s.flame_detected {
                    Some(Event::FlameDetected)
                } else if timer >= t.ignition_trial_ticks {
                    if self.record.ignition_trials >= t.max_trials {
                        Some(Event::TrialsExhausted)
                    } else {
                        Some(Event::IgnitionTimeout)
                    }
                } else {
                    None
                }
            }

            SystemState::PilotProve => {
                if !s.flame_detected {
                    Some(Event::FlameLost)
                } else {
                    (timer >= t.flame_prove_ticks).then_some(Event::FlameProven)
                }
            }

            SystemState::MainValve => {
                if !s.flame_detected {
                    Some(Event::FlameLost)
                } else if !s.heat_requested {
                    Some(Event::HeatReleased)
                } else {
                    None
                }
            }

            SystemState::Shutdown => {
                if timer < t.shutdown_linger_ticks {
                    return None;
                }
                // Linger over: pilot closes now, even while held here by
                // a tripped safety switch.
                self.record.pilot_open = false;
                s.safety_ok.then_some(Event::ShutdownComplete)
            }

            SystemState::Lockout => {
                let condition = !s.heat_requested && s.safety_ok;
                self.reset
                    .observe(now, condition)
                    .then_some(Event::ManualReset)
            }
        }
    }

    /// Apply the entry actions for `event` and switch state
    fn enter(&mut self, event: Event, now: Tick, s: &SensorSnapshot) -> Transition {
        let from = self.record.state;
        let r = &mut self.record;

        match event {
            Event::HeatRequested => {
                r.ignition_trials = 0;
                self.prepurge_dwell = self.timing.prepurge_ticks;
            }
            Event::PurgeComplete => {
                r.pilot_open = true;
                self.igniter_on = true;
                r.ignition_trials = r.ignition_trials.saturating_add(1);
            }
            Event::FlameDetected => {
                self.igniter_on = false;
            }
            Event::FlameProven => {
                r.main_flow_percent = s.setpoint_percent.min(100);
            }
            Event::IgnitionTimeout => {
                self.igniter_on = false;
                r.pilot_open = false;
                self.prepurge_dwell = self.timing.retry_prepurge_ticks();
            }
            Event::TrialsExhausted => {
                self.igniter_on = false;
                r.pilot_open = false;
                r.main_flow_percent = 0;
                self.reset.clear();
            }
            Event::FlameLost | Event::HeatReleased | Event::SafetyTrip => {
                // Pilot keeps its position through the shutdown linger
                self.igniter_on = false;
                r.main_flow_percent = 0;
            }
            Event::ShutdownComplete => {
                self.igniter_on = false;
                r.pilot_open = false;
                r.main_flow_percent = 0;
            }
            Event::ManualReset => {
                r.ignition_trials = 0;
                self.igniter_on = false;
                r.pilot_open = false;
                r.main_flow_percent = 0;
                self.reset.clear();
            }
        }

        let to = event.target();
        r.state = to;
        r.state_timer = 0;
        self.entered_at = Some(now);

        Transition {
            at: now,
            from,
            to,
            event,
        }
    }

    fn command(&self) -> ActuatorCommand {
        ActuatorCommand {
            pilot_valve: self.record.pilot_open,
            igniter: self.igniter_on,
            main_valve_percent: self.record.main_flow_percent,
            status: self.status_leds(),
        }
    }

    fn status_leds(&self) -> StatusLeds {
        match self.record.state {
            SystemState::Idle => StatusLeds::READY,
            SystemState::Prepurge
            | SystemState::PilotIgnition
            | SystemState::PilotProve
            | SystemState::Shutdown => StatusLeds::SEQUENCING,
            SystemState::MainValve => StatusLeds::HEATING,
            SystemState::Lockout => {
                let period = self.timing.lockout_blink_period_ticks.max(1);
                let phase = self.record.state_timer % period;
                StatusLeds {
                    green: false,
                    red: phase < self.timing.lockout_blink_half_ticks,
                }
            }
        }
    }
}
