//! Timer state structure and management

/// Raw stopwatch state owned by [`TimerEngine`](super::TimerEngine)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerState {
    /// Whether time is currently accumulating
    pub running: bool,
    /// Instant (ms since epoch) elapsed time is measured from
    pub start_epoch: i64,
    /// Accumulated milliseconds; authoritative only while paused
    pub elapsed: u64,
}

impl TimerState {
    /// Create a paused state holding `elapsed` milliseconds at `now`
    pub fn paused(now: i64, elapsed: u64) -> Self {
        Self {
            running: false,
            start_epoch: now.saturating_sub(i64::try_from(elapsed).unwrap_or(i64::MAX)),
            elapsed,
        }
    }

    /// Elapsed time as observed at `now`
    pub fn elapsed_at(&self, now: i64) -> u64 {
        if self.running {
            since(self.start_epoch, now)
        } else {
            self.elapsed
        }
    }
}

/// Milliseconds from `start` to `now`, clamped at zero
pub(crate) fn since(start: i64, now: i64) -> u64 {
    now.saturating_sub(start).max(0) as u64
}

/// Observable phase of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not played yet during this session
    Idle,
    Running,
    Paused,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
