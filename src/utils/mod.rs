//! Utility functions module
//!
//! This module contains the time formatter and signal helpers.

pub mod signals;
pub mod time_format;

// Re-export main functions
pub use signals::unload_signal;
pub use time_format::format_elapsed;
