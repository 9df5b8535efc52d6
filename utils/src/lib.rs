//! Shared utilities for the Orochi verification workspace.

pub mod logging;
pub mod time;

pub use logging::{init_logging, LogFormat, UnknownLogFormat};
pub use time::format_duration;
