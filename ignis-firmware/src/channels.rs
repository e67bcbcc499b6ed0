//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use ignis_core::state::Transition;
use ignis_core::sequencer::HISTORY_LEN;

/// State transitions from the control task (for logging)
///
/// Same depth as the control loop's own history; the control task drops
/// a transition rather than wait when the channel is full.
pub static TRANSITIONS: Channel<CriticalSectionRawMutex, Transition, HISTORY_LEN> =
    Channel::new();
