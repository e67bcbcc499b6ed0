//! Sequencer inputs and outputs
//!
//! One immutable snapshot in, one complete command out, per cycle.

/// Sensor readings for one control cycle
///
/// Every decision within a single `step` sees the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSnapshot {
    /// Flame sensor sees a flame
    pub flame_detected: bool,
    /// Operator setpoint, main valve flow percent (0..=100)
    pub setpoint_percent: u8,
    /// Thermostat calling for heat
    pub heat_requested: bool,
    /// Safety switch in the safe position
    pub safety_ok: bool,
}

impl SensorSnapshot {
    /// Reading assumed before any sensor has been sampled
    ///
    /// No flame, no heat request, safety tripped: the sequencer cannot
    /// start a sequence from this snapshot.
    pub const SAFE_DEFAULT: SensorSnapshot = SensorSnapshot {
        flame_detected: false,
        setpoint_percent: 0,
        heat_requested: false,
        safety_ok: false,
    };
}

impl Default for SensorSnapshot {
    fn default() -> Self {
        Self::SAFE_DEFAULT
    }
}

/// Status LED pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusLeds {
    pub green: bool,
    pub red: bool,
}

impl StatusLeds {
    /// Idle, ready for a heat request
    pub const READY: StatusLeds = StatusLeds {
        green: true,
        red: false,
    };
    /// Sequence in progress
    pub const SEQUENCING: StatusLeds = StatusLeds {
        green: false,
        red: true,
    };
    /// Main valve open, heating
    pub const HEATING: StatusLeds = StatusLeds {
        green: true,
        red: true,
    };
    /// Both off (lockout blink dark phase)
    pub const OFF: StatusLeds = StatusLeds {
        green: false,
        red: false,
    };
}

/// Complete set of actuator commands for one cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActuatorCommand {
    /// Pilot valve open
    pub pilot_valve: bool,
    /// Igniter enabled
    pub igniter: bool,
    /// Main valve flow percent (0..=100)
    pub main_valve_percent: u8,
    /// Status LEDs
    pub status: StatusLeds,
}

impl ActuatorCommand {
    /// Everything closed and off
    pub const ALL_OFF: ActuatorCommand = ActuatorCommand {
        pilot_valve: false,
        igniter: false,
        main_valve_percent: 0,
        status: StatusLeds::OFF,
    };

    /// Check if any gas path is commanded open
    pub fn gas_open(&self) -> bool {
        self.pilot_valve || self.main_valve_percent > 0
    }
}
