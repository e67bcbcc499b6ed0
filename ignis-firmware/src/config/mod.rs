//! Configuration loading
//!
//! The appliance configuration is compiled in from `appliance.toml` and
//! parsed at boot with the core's `no_std` parser. The build script has
//! already validated the same file, so a failure here means the parser
//! and the build-time check disagree; the firmware then runs on the
//! built-in defaults.

use defmt::*;

use ignis_core::config::{parse_config, ApplianceConfig};

/// Embedded configuration (compiled into firmware)
/// Edit appliance.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../../appliance.toml");

/// Parse and validate the embedded configuration
pub fn load() -> ApplianceConfig {
    let config = match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            error!(
                "appliance.toml line {}: {}, using defaults",
                e.line, e.kind
            );
            return ApplianceConfig::default();
        }
    };

    if let Err(e) = config.validate() {
        error!("appliance.toml rejected: {}, using defaults", e);
        return ApplianceConfig::default();
    }

    let t = &config.timing;
    info!(
        "Timing: prepurge={} trial={} prove={} retry={} trials={} linger={}",
        t.prepurge_ticks,
        t.ignition_trial_ticks,
        t.flame_prove_ticks,
        t.retry_delay_ticks,
        t.max_trials,
        t.shutdown_linger_ticks
    );
    info!(
        "Cadence: tick={} ms cycle={} ms, flame threshold={}",
        config.control.tick_period_ms, config.control.cycle_period_ms, config.flame_sensor.threshold
    );
    config
}
