//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - Stats Reporter: Logs response cache statistics at a configured interval

mod stats_reporter;

pub use stats_reporter::spawn_stats_reporter;
