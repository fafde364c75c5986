//! Play/pause/reset state machine

use std::sync::Arc;
use tracing::debug;

use super::{
    clock::Clock,
    timer_state::{since, Phase, TimerState},
};
use crate::storage::PersistedSnapshot;

/// Stopwatch state machine over a [`Clock`].
///
/// Transitions that are not valid from the current phase are no-ops and
/// report `false`; nothing here ever fails.
pub struct TimerEngine {
    state: TimerState,
    played: bool,
    clock: Arc<dyn Clock>,
}

impl TimerEngine {
    /// Create a paused engine at zero
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_offset(clock, 0)
    }

    /// Create a paused engine that already shows `offset_ms`
    pub fn with_offset(clock: Arc<dyn Clock>, offset_ms: u64) -> Self {
        let state = TimerState::paused(clock.now_ms(), offset_ms);
        Self {
            state,
            played: false,
            clock,
        }
    }

    /// Create a paused engine from a persisted snapshot
    pub fn restore(clock: Arc<dyn Clock>, snapshot: PersistedSnapshot) -> Self {
        Self::with_offset(clock, snapshot.elapsed)
    }

    fn now(&self) -> i64 {
        self.clock.now_ms()
    }

    pub fn play(&mut self) -> bool {
        if self.state.running {
            return false;
        }
        let now = self.now();
        self.state.running = true;
        self.state.start_epoch = now.saturating_sub(i64::try_from(self.state.elapsed).unwrap_or(i64::MAX));
        self.played = true;
        debug!("Timer playing from {} ms", self.state.elapsed);
        true
    }

    pub fn pause(&mut self) -> bool {
        if !self.state.running {
            return false;
        }
        self.state.elapsed = since(self.state.start_epoch, self.now());
        self.state.running = false;
        debug!("Timer paused at {} ms", self.state.elapsed);
        true
    }

    /// Pause when running, play otherwise
    pub fn toggle(&mut self) -> bool {
        if self.state.running {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Zero the timer. Ignored while running.
    pub fn reset(&mut self) -> bool {
        if self.state.running {
            debug!("Reset ignored while running");
            return false;
        }
        self.state.elapsed = 0;
        self.state.start_epoch = self.now();
        true
    }

    /// Refresh the cached elapsed time; `None` while paused
    pub fn tick(&mut self) -> Option<u64> {
        if !self.state.running {
            return None;
        }
        self.state.elapsed = since(self.state.start_epoch, self.now());
        Some(self.state.elapsed)
    }

    pub fn current_elapsed(&self) -> u64 {
        self.state.elapsed_at(self.now())
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn phase(&self) -> Phase {
        if self.state.running {
            Phase::Running
        } else if self.played {
            Phase::Paused
        } else {
            Phase::Idle
        }
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        Arc::clone(&self.clock)
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    /// Snapshot of the elapsed time as of now
    pub fn snapshot(&self) -> PersistedSnapshot {
        PersistedSnapshot {
            elapsed: self.current_elapsed(),
        }
    }
}

impl std::fmt::Debug for TimerEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerEngine")
            .field("state", &self.state)
            .field("phase", &self.phase())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ManualClock;

    fn engine() -> (Arc<ManualClock>, TimerEngine) {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let engine = TimerEngine::new(clock.clone());
        (clock, engine)
    }

    #[test]
    fn fresh_engine_is_idle_at_zero() {
        let (_, engine) = engine();
        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_running());
        assert_eq!(engine.current_elapsed(), 0);
    }

    #[test]
    fn play_then_elapse() {
        let (clock, mut engine) = engine();
        assert!(engine.play());
        assert_eq!(engine.current_elapsed(), 0);
        clock.advance(500);
        assert_eq!(engine.current_elapsed(), 500);
        assert_eq!(engine.phase(), Phase::Running);
    }

    #[test]
    fn double_play_is_noop() {
        let (clock, mut engine) = engine();
        engine.play();
        clock.advance(300);
        let before = engine.state();
        assert!(!engine.play());
        assert_eq!(engine.state(), before);
        assert_eq!(engine.current_elapsed(), 300);
    }

    #[test]
    fn pause_is_idempotent() {
        let (clock, mut engine) = engine();
        engine.play();
        clock.advance(1_200);
        assert!(engine.pause());
        let once = engine.state();
        clock.advance(700);
        assert!(!engine.pause());
        assert_eq!(engine.state(), once);
        assert_eq!(engine.current_elapsed(), 1_200);
        assert_eq!(engine.phase(), Phase::Paused);
    }

    #[test]
    fn resume_continues_from_paused_value() {
        let (clock, mut engine) = engine();
        engine.play();
        clock.advance(400);
        engine.pause();
        clock.advance(10_000);
        engine.play();
        clock.advance(100);
        assert_eq!(engine.current_elapsed(), 500);
    }

    #[test]
    fn play_pause_reset_zeroes() {
        let (clock, mut engine) = engine();
        engine.play();
        clock.advance(900);
        engine.pause();
        assert!(engine.reset());
        assert_eq!(engine.state().elapsed, 0);
        assert_eq!(engine.state().start_epoch, clock.now_ms());
        assert_eq!(engine.current_elapsed(), 0);
    }

    #[test]
    fn reset_while_running_is_ignored() {
        let (clock, mut engine) = engine();
        engine.play();
        clock.advance(250);
        engine.tick();
        let before = engine.state();
        assert!(!engine.reset());
        assert_eq!(engine.state(), before);
        assert_eq!(engine.current_elapsed(), 250);
    }

    #[test]
    fn tick_only_while_running() {
        let (clock, mut engine) = engine();
        assert_eq!(engine.tick(), None);
        engine.play();
        clock.advance(42);
        assert_eq!(engine.tick(), Some(42));
        assert_eq!(engine.state().elapsed, 42);
    }

    #[test]
    fn elapsed_is_monotonic_while_running() {
        let (clock, mut engine) = engine();
        engine.play();
        let mut last = engine.current_elapsed();
        for step in [1, 3, 16, 17, 250, 1] {
            clock.advance(step);
            engine.tick();
            let now = engine.current_elapsed();
            assert!(now > last);
            last = now;
        }
    }

    #[test]
    fn offset_and_restore_start_paused() {
        let clock = Arc::new(ManualClock::new(50_000));
        let offset = TimerEngine::with_offset(clock.clone(), 3_000);
        assert_eq!(offset.current_elapsed(), 3_000);
        assert!(!offset.is_running());

        let restored = TimerEngine::restore(clock.clone(), PersistedSnapshot { elapsed: 61_234 });
        clock.advance(5_000);
        assert_eq!(restored.current_elapsed(), 61_234);
        assert_eq!(restored.snapshot().elapsed, 61_234);
    }

    #[test]
    fn huge_restored_value_does_not_wrap_on_play() {
        let clock = Arc::new(ManualClock::new(1_700_000_000_000));
        let mut engine = TimerEngine::restore(clock.clone(), PersistedSnapshot::new(u64::MAX));
        assert_eq!(engine.current_elapsed(), u64::MAX);
        engine.play();
        clock.advance(10);
        assert!(engine.current_elapsed() > 1_700_000_000_000);
    }

    #[test]
    fn toggle_alternates() {
        let (clock, mut engine) = engine();
        assert!(engine.toggle());
        assert!(engine.is_running());
        clock.advance(10);
        assert!(engine.toggle());
        assert!(!engine.is_running());
        assert_eq!(engine.current_elapsed(), 10);
    }
}
