//! Background tasks module
//!
//! This module contains the frame loop that drives the stopwatch.

pub mod frame_loop;

// Re-export main functions
pub use frame_loop::{run_frame_loop, FrameScheduler, DEFAULT_FRAME_INTERVAL};
