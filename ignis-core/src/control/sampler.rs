//! Per-cycle sensor sampling
//!
//! Each gateway input is read exactly once per cycle. Failed reads are
//! replaced by a fail-safe value so the sequencer always receives a
//! complete snapshot:
//!
//! | Input         | `NotReady`  | Any other error |
//! |---------------|-------------|-----------------|
//! | flame         | last value  | no flame        |
//! | setpoint      | last value  | last value      |
//! | heat request  | last value  | not requested   |
//! | safety switch | last value  | tripped         |

use crate::sequencer::SensorSnapshot;
use crate::traits::{SensorError, SensorGateway};

/// Inputs that failed to read this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorFaults {
    pub flame: Option<SensorError>,
    pub setpoint: Option<SensorError>,
    pub heat: Option<SensorError>,
    pub safety: Option<SensorError>,
}

impl SensorFaults {
    /// Check if any input failed
    pub fn any(&self) -> bool {
        self.count() > 0
    }

    /// Number of inputs that failed
    pub fn count(&self) -> u32 {
        [self.flame, self.setpoint, self.heat, self.safety]
            .iter()
            .filter(|f| f.is_some())
            .count() as u32
    }

    /// Check if any failure was more than a missing conversion
    pub fn any_hard(&self) -> bool {
        [self.flame, self.setpoint, self.heat, self.safety]
            .iter()
            .flatten()
            .any(|e| !e.is_stale())
    }
}

/// Snapshot and the faults behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    pub snapshot: SensorSnapshot,
    pub faults: SensorFaults,
}

/// Builds one [`SensorSnapshot`] per cycle, applying the degraded-value
/// policy to failed reads
#[derive(Debug, Clone, Default)]
pub struct SnapshotSampler {
    last: SensorSnapshot,
}

impl SnapshotSampler {
    /// Create a sampler whose fallback is [`SensorSnapshot::SAFE_DEFAULT`]
    pub const fn new() -> Self {
        Self {
            last: SensorSnapshot::SAFE_DEFAULT,
        }
    }

    /// Snapshot produced by the previous cycle
    pub fn last(&self) -> &SensorSnapshot {
        &self.last
    }

    /// Read every input once and build this cycle's snapshot
    pub fn sample<S: SensorGateway>(&mut self, sensors: &mut S) -> Sample {
        let mut faults = SensorFaults::default();
        let last = self.last;

        let flame_detected = resolve(
            sensors.flame_detected(),
            last.flame_detected,
            false,
            &mut faults.flame,
        );
        let setpoint_percent = resolve(
            sensors.potentiometer_setpoint(),
            last.setpoint_percent,
            last.setpoint_percent,
            &mut faults.setpoint,
        )
        .min(100);
        let heat_requested = resolve(
            sensors.heat_requested(),
            last.heat_requested,
            false,
            &mut faults.heat,
        );
        let safety_ok = resolve(sensors.safety_ok(), last.safety_ok, false, &mut faults.safety);

        let snapshot = SensorSnapshot {
            flame_detected,
            setpoint_percent,
            heat_requested,
            safety_ok,
        };
        self.last = snapshot;

        Sample { snapshot, faults }
    }
}

fn resolve<T>(
    read: Result<T, SensorError>,
    last: T,
    on_fault: T,
    fault: &mut Option<SensorError>,
) -> T {
    match read {
        Ok(value) => value,
        Err(e) => {
            *fault = Some(e);
            if e.is_stale() {
                last
            } else {
                on_fault
            }
        }
    }
}
