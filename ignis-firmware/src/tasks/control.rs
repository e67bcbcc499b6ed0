//! Control task
//!
//! Runs one control cycle per period: sample inputs, step the sequencer,
//! write outputs. Transitions are forwarded to the diagnostics task;
//! faults are logged here when they change.

use defmt::*;
use embassy_time::{Duration, Ticker};

use ignis_core::control::SensorFaults;

use crate::board::ApplianceLoop;
use crate::channels::TRANSITIONS;

/// Cycles between statistics log lines (10 s at the default cadence)
const STATS_INTERVAL_CYCLES: u32 = 1_000;

/// Control task - fixed-cadence sequencer loop
#[embassy_executor::task]
pub async fn control_task(mut ctl: ApplianceLoop, cycle_period_ms: u32) {
    info!("Control task started ({} ms cycle)", cycle_period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(cycle_period_ms as u64));
    let mut reported = SensorFaults::default();

    loop {
        ticker.next().await;

        let report = ctl.run_cycle();

        if let Some(transition) = report.transition {
            if TRANSITIONS.try_send(transition).is_err() {
                warn!("Transition channel full, dropped {}", transition.event);
            }
        }

        if report.faults != reported {
            if report.faults.any_hard() {
                warn!("Sensor fault: {}", report.faults);
            } else if reported.any_hard() {
                info!("Sensor faults cleared");
            }
            reported = report.faults;
        }

        if report.actuator_faults.any() {
            warn!("Actuator write failed: {}", report.actuator_faults);
        }

        let stats = *ctl.stats();
        if stats.cycles % STATS_INTERVAL_CYCLES == 0 {
            debug!(
                "{} sequencing={} trials={} flame={} | {}",
                report.state.name(),
                report.state.is_sequencing(),
                ctl.sequencer().state().ignition_trials,
                ctl.sensors().flame_level(),
                stats
            );
        }

        trace!("tick {}: {}", report.now.raw(), report.command);
    }
}
