//! Build script for ignis-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates appliance.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ignis_core::config::ApplianceConfig;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate appliance.toml at compile time
///
/// The firmware parses the same file again at boot.
fn validate_config() {
    println!("cargo:rerun-if-changed=appliance.toml");

    let config_path = Path::new("appliance.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: appliance.toml not found!                                ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires an appliance.toml configuration file.     ║\n\
            ║  Please create one in the ignis-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read appliance.toml                            ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    // Syntax, unknown keys and value ranges
    let config: ApplianceConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid appliance.toml                                   ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    // Cross-field consistency
    if let Err(e) = config.validate() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Inconsistent appliance.toml                              ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    println!("cargo:warning=appliance.toml validated successfully");
}

fn describe(e: ignis_core::config::ConfigError) -> &'static str {
    use ignis_core::config::ConfigError::*;
    match e {
        ZeroMaxTrials => "[timing] max_trials must be at least 1",
        ZeroBlinkPeriod => "[timing] lockout_blink_period_ticks must be nonzero",
        BlinkHalfNotBelowPeriod => "[timing] lockout_blink_half_ticks must be below the period",
        ZeroTickPeriod => "[control] tick_period_ms must be nonzero",
        CycleShorterThanTick => "[control] cycle_period_ms must be at least one tick",
        ThresholdAboveFullScale => "[flame_sensor] threshold must lie below open_circuit_above",
        InvalidPotRange => "[potentiometer] need adc_min < adc_max <= 4095",
        InvalidPulseRange => "[main_valve] min_pulse_us must be below max_pulse_us",
        PulseExceedsPeriod => "[main_valve] max_pulse_us must fit within period_us",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
