//! Lockout reset confirmation
//!
//! Leaving lockout requires the heat request released and the safety
//! switch safe, observed continuously for a confirmation window. A single
//! cycle that fails the condition restarts the window.

use crate::time::Tick;

/// Debounced lockout reset condition
#[derive(Debug, Clone)]
pub struct ResetConfirmation {
    /// Ticks the condition must hold
    confirm_ticks: u32,
    /// First tick of the current unbroken run of the condition
    since: Option<Tick>,
}

impl ResetConfirmation {
    /// Create a confirmation requiring `confirm_ticks` of steady condition
    pub const fn new(confirm_ticks: u32) -> Self {
        Self {
            confirm_ticks,
            since: None,
        }
    }

    /// Feed one observation; returns true once the reset is confirmed
    pub fn observe(&mut self, now: Tick, condition: bool) -> bool {
        if !condition {
            self.since = None;
            return false;
        }

        let since = *self.since.get_or_insert(now);
        now.elapsed_since(since) >= self.confirm_ticks
    }

    /// Forget any partial confirmation
    pub fn clear(&mut self) {
        self.since = None;
    }

    /// Check if a confirmation window is currently running
    pub fn is_pending(&self) -> bool {
        self.since.is_some()
    }
}
