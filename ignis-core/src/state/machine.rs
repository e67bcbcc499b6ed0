//! System state definition
//!
//! Valve, igniter and status LED behavior is a function of the current
//! state and the per-cycle sensor snapshot.

/// Appliance states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SystemState {
    /// Waiting for a heat request; all gas closed
    #[default]
    Idle,
    /// Mandatory wait to clear residual gas before ignition
    Prepurge,
    /// Pilot valve open, igniter sparking, waiting for flame
    PilotIgnition,
    /// Igniter off, flame must stay detected for the prove period
    PilotProve,
    /// Flame proven; main valve modulated from the setpoint
    MainValve,
    /// Main valve closed, pilot lingers before closing
    Shutdown,
    /// Ignition failed too often; latched until manual reset
    Lockout,
}

impl SystemState {
    /// Check if the safety interlock applies in this state
    ///
    /// Idle has nothing to shut down and Lockout already holds every
    /// valve closed.
    pub fn interlock_applies(&self) -> bool {
        !matches!(self, SystemState::Idle | SystemState::Lockout)
    }

    /// Check if this state may hold the pilot valve open
    pub fn pilot_allowed(&self) -> bool {
        matches!(
            self,
            SystemState::PilotIgnition
                | SystemState::PilotProve
                | SystemState::MainValve
                | SystemState::Shutdown
        )
    }

    /// Check if this state may command nonzero main valve flow
    pub fn main_flow_allowed(&self) -> bool {
        matches!(self, SystemState::MainValve)
    }

    /// Check if an ignition sequence is in progress
    pub fn is_sequencing(&self) -> bool {
        matches!(
            self,
            SystemState::Prepurge | SystemState::PilotIgnition | SystemState::PilotProve
        )
    }

    /// Check if this is the latched failure state
    pub fn is_lockout(&self) -> bool {
        matches!(self, SystemState::Lockout)
    }

    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            SystemState::Idle => "idle",
            SystemState::Prepurge => "prepurge",
            SystemState::PilotIgnition => "pilot-ignition",
            SystemState::PilotProve => "pilot-prove",
            SystemState::MainValve => "main-valve",
            SystemState::Shutdown => "shutdown",
            SystemState::Lockout => "lockout",
        }
    }
}
