//! State management module
//!
//! This module contains the stopwatch state, the clock it reads and the
//! state machine that drives it.

pub mod clock;
pub mod engine;
pub mod timer_state;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::TimerEngine;
pub use timer_state::{Phase, TimerState};
