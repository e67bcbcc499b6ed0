//! Diagnostics task
//!
//! Logs every state transition. Lockout is logged as an error; it needs
//! the operator to release the heat request before the appliance will
//! try again.

use defmt::*;

use ignis_core::state::SystemState;

use crate::channels::TRANSITIONS;

/// Diagnostics task - transition logger
#[embassy_executor::task]
pub async fn diagnostics_task() {
    info!("Diagnostics task started");

    loop {
        let t = TRANSITIONS.receive().await;

        if t.to == SystemState::Lockout {
            error!(
                "LOCKOUT at tick {}: {} -> {} ({})",
                t.at.raw(),
                t.from.name(),
                t.to.name(),
                t.event
            );
        } else if t.event.is_fault() {
            warn!(
                "tick {}: {} -> {} ({})",
                t.at.raw(),
                t.from.name(),
                t.to.name(),
                t.event
            );
        } else {
            info!(
                "tick {}: {} -> {} ({})",
                t.at.raw(),
                t.from.name(),
                t.to.name(),
                t.event
            );
        }
    }
}
