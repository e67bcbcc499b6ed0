//! Ignis - Gas Ignition Valve Controller Firmware
//!
//! Main firmware binary for RP2040-based ignition controllers. Runs the
//! prepurge, trial-for-ignition, flame-proving and main-valve sequence
//! from a fixed-cadence control task.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Ignis firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!("Configuration loaded");

    let control_loop = board::build(p, &config, &tasks::TIME_BASE);

    // Spawn tasks; the time base starts before anything reads it
    spawner
        .spawn(tasks::tick_task(config.control))
        .unwrap();
    spawner.spawn(tasks::diagnostics_task()).unwrap();
    spawner
        .spawn(tasks::control_task(
            control_loop,
            config.control.cycle_period_ms,
        ))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
