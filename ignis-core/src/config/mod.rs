//! Configuration types
//!
//! Board-agnostic configuration structures. Defaults reproduce the
//! appliance's calibrated constants; the firmware overrides them from an
//! embedded TOML file.

pub mod parse;
pub mod types;

pub use parse::{parse_config, ParseError, ParseErrorKind};
pub use types::*;
