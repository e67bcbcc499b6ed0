//! Safety monitoring
//!
//! The interlock pre-empts the sequence when the safety switch trips;
//! the reset confirmation debounces the operator's way out of lockout.

pub mod interlock;
pub mod reset;

pub use interlock::{SafetyInterlock, SafetyStatus};
pub use reset::ResetConfirmation;
