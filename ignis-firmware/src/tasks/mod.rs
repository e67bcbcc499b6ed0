//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod control;
pub mod diagnostics;
pub mod tick;

pub use control::control_task;
pub use diagnostics::diagnostics_task;
pub use tick::{tick_task, TIME_BASE};
