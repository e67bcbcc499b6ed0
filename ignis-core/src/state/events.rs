//! Events that trigger state transitions

use super::machine::SystemState;
use crate::time::Tick;

/// Events that can trigger state transitions
///
/// Each event has exactly one destination state, so the event alone
/// explains why a transition happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Sequence progress
    /// Thermostat called for heat while idle
    HeatRequested,
    /// Prepurge dwell elapsed
    PurgeComplete,
    /// Flame sensed during the ignition trial
    FlameDetected,
    /// Flame held for the whole prove period
    FlameProven,
    /// Shutdown linger elapsed
    ShutdownComplete,

    // Failures
    /// Ignition trial timed out with trials remaining
    IgnitionTimeout,
    /// Ignition trial timed out on the last permitted trial
    TrialsExhausted,
    /// Flame went out while proving or heating
    FlameLost,
    /// Safety switch tripped
    SafetyTrip,

    // Operator
    /// Thermostat stopped calling for heat while heating
    HeatReleased,
    /// Lockout reset condition confirmed
    ManualReset,
}

impl Event {
    /// Destination state for this event
    pub fn target(&self) -> SystemState {
        match self {
            Event::HeatRequested => SystemState::Prepurge,
            Event::PurgeComplete => SystemState::PilotIgnition,
            Event::FlameDetected => SystemState::PilotProve,
            Event::FlameProven => SystemState::MainValve,
            Event::ShutdownComplete => SystemState::Idle,
            Event::IgnitionTimeout => SystemState::Prepurge,
            Event::TrialsExhausted => SystemState::Lockout,
            Event::FlameLost => SystemState::Shutdown,
            Event::SafetyTrip => SystemState::Shutdown,
            Event::HeatReleased => SystemState::Shutdown,
            Event::ManualReset => SystemState::Idle,
        }
    }

    /// Check if this event counts against the ignition trial budget
    ///
    /// Only trial timeouts do. Flame loss and safety trips shut down
    /// cleanly without touching the counter.
    pub fn is_trial_failure(&self) -> bool {
        matches!(self, Event::IgnitionTimeout | Event::TrialsExhausted)
    }

    /// Check if this event ends a sequence abnormally
    pub fn is_fault(&self) -> bool {
        matches!(
            self,
            Event::IgnitionTimeout | Event::TrialsExhausted | Event::FlameLost | Event::SafetyTrip
        )
    }
}

/// Record of one state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Tick at which the transition happened
    pub at: Tick,
    /// State left
    pub from: SystemState,
    /// State entered
    pub to: SystemState,
    /// Cause
    pub event: Event,
}
