//! Safety switch interlock
//!
//! Checked every cycle before the state's own transition conditions.

use crate::sequencer::SensorSnapshot;
use crate::state::{Event, SystemState};

/// Safety condition status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SafetyStatus {
    /// Sequence may follow its own transitions
    Ok,
    /// Safety switch tripped; sequence must be in Shutdown
    Tripped,
}

/// Safety interlock
///
/// Tracks how many times the interlock forced a shutdown so the firmware
/// can report nuisance trips.
#[derive(Debug, Clone, Default)]
pub struct SafetyInterlock {
    trips: u32,
}

impl SafetyInterlock {
    /// Create a new interlock
    pub const fn new() -> Self {
        Self { trips: 0 }
    }

    /// Evaluate the interlock for the current state
    pub fn check(&self, state: SystemState, snapshot: &SensorSnapshot) -> SafetyStatus {
        if state.interlock_applies() && !snapshot.safety_ok {
            SafetyStatus::Tripped
        } else {
            SafetyStatus::Ok
        }
    }

    /// Event forcing the sequence into Shutdown, if any
    ///
    /// Returns `None` when already in Shutdown: the sequence stays there
    /// without restarting its linger.
    pub fn pre_empt(&mut self, state: SystemState, snapshot: &SensorSnapshot) -> Option<Event> {
        match self.check(state, snapshot) {
            SafetyStatus::Tripped if state != SystemState::Shutdown => {
                self.trips = self.trips.saturating_add(1);
                Some(Event::SafetyTrip)
            }
            _ => None,
        }
    }

    /// Number of shutdowns forced since boot
    pub fn trip_count(&self) -> u32 {
        self.trips
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tripped() -> SensorSnapshot {
        SensorSnapshot {
            safety_ok: false,
            ..SensorSnapshot::SAFE_DEFAULT
        }
    }

    fn safe() -> SensorSnapshot {
        SensorSnapshot {
            safety_ok: true,
            ..SensorSnapshot::SAFE_DEFAULT
        }
    }

    #[test]
    fn test_normal_operation() {
        let mut interlock = SafetyInterlock::new();
        assert_eq!(interlock.check(SystemState::MainValve, &safe()), SafetyStatus::Ok);
        assert_eq!(interlock.pre_empt(SystemState::MainValve, &safe()), None);
    }

    #[test]
    fn test_trip_forces_shutdown() {
        let mut interlock = SafetyInterlock::new();
        for state in [
            SystemState::Prepurge,
            SystemState::PilotIgnition,
            SystemState::PilotProve,
            SystemState::MainValve,
        ] {
            assert_eq!(interlock.pre_empt(state, &tripped()), Some(Event::SafetyTrip));
        }
        assert_eq!(interlock.trip_count(), 4);
    }

    #[test]
    fn test_idle_and_lockout_exempt() {
        let mut interlock = SafetyInterlock::new();
        assert_eq!(interlock.check(SystemState::Idle, &tripped()), SafetyStatus::Ok);
        assert_eq!(interlock.pre_empt(SystemState::Lockout, &tripped()), None);
        assert_eq!(interlock.trip_count(), 0);
    }

    #[test]
    fn test_shutdown_held_without_new_event() {
        let mut interlock = SafetyInterlock::new();
        assert_eq!(
            interlock.check(SystemState::Shutdown, &tripped()),
            SafetyStatus::Tripped
        );
        assert_eq!(interlock.pre_empt(SystemState::Shutdown, &tripped()), None);
    }
}
