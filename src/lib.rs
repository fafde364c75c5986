//! Stopwatch - a stopwatch that renders elapsed time and survives restarts
//!
//! This library provides the timer state machine, the `HH:MM:SS.mmm`
//! formatter, key-value persistence of the elapsed time and the frame loop
//! that ties them to a display surface.

pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod state;
pub mod storage;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::{run_safe, Stopwatch, StopwatchOptions};
pub use error::{Result, StopwatchError};
pub use state::TimerEngine;
pub use utils::format_elapsed;
