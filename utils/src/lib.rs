//! Shared utilities for the dispute resolution core.

pub mod logging;
pub mod stats;
pub mod time;

pub use logging::{init_tracing, LogFormat};
pub use stats::StatsCounter;
pub use time::format_duration;
