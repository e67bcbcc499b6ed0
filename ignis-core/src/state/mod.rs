//! Ignition system states
//!
//! Defines the finite set of states the appliance can be in and the
//! events that move it between them. Exactly one state is current at
//! any instant; the sequencer owns it.

pub mod events;
pub mod machine;

pub use events::{Event, Transition};
pub use machine::SystemState;
