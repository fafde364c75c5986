//! Stopwatch controller: input, rendering and persistence around the engine

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    host::{DisplaySurface, InputEvent},
    state::{Clock, Phase, TimerEngine},
    storage::{storage_key, KeyValueStore, PersistedSnapshot},
    utils::format_elapsed,
};

/// Construction options for a [`Stopwatch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwatchOptions {
    /// Human-readable name, shown on the surface and hashed into the store key
    pub name: String,
    /// Restore the last saved state on mount
    pub enable_cache: bool,
    /// Starting value when the cache is disabled
    pub start_offset_ms: u64,
    /// Key codes that toggle play/pause
    pub toggle_keys: Vec<String>,
    /// Key code that resets a paused stopwatch
    pub reset_key: String,
}

impl Default for StopwatchOptions {
    fn default() -> Self {
        Self {
            name: "Stopwatch".to_string(),
            enable_cache: true,
            start_offset_ms: 0,
            toggle_keys: vec!["Space".to_string(), "KeyP".to_string()],
            reset_key: "KeyR".to_string(),
        }
    }
}

/// Run `callback` with `element`, or log and skip when the element is missing
pub fn run_safe<T, R>(element: Option<T>, callback: impl FnOnce(T) -> R) -> Option<R> {
    match element {
        Some(element) => Some(callback(element)),
        None => {
            error!("Element not found.");
            None
        }
    }
}

/// A stopwatch mounted on a display surface and backed by a key-value store
pub struct Stopwatch<D, S> {
    options: StopwatchOptions,
    key: String,
    engine: TimerEngine,
    surface: D,
    store: S,
}

impl<D: DisplaySurface, S: KeyValueStore> Stopwatch<D, S> {
    /// Mount a stopwatch on `surface`, restoring its last state when caching is on
    pub fn new(options: StopwatchOptions, mut surface: D, store: S, clock: Arc<dyn Clock>) -> Self {
        surface.set_attribute("name", &options.name);
        let key = storage_key(&options.name);
        let engine = TimerEngine::with_offset(clock, options.start_offset_ms);

        let mut stopwatch = Self {
            options,
            key,
            engine,
            surface,
            store,
        };

        if stopwatch.options.enable_cache {
            stopwatch.load_state();
        }
        stopwatch.render(stopwatch.engine.current_elapsed());

        info!(
            "Stopwatch '{}' ready at {} (key {})",
            stopwatch.options.name,
            format_elapsed(stopwatch.engine.current_elapsed()),
            stopwatch.key
        );
        stopwatch
    }

    /// Route a host event to the matching transition
    pub fn dispatch(&mut self, event: InputEvent) {
        match event {
            InputEvent::Click => self.toggle(),
            InputEvent::KeyPress(code) => {
                if code == self.options.reset_key {
                    self.reset();
                }
                if self.options.toggle_keys.iter().any(|k| *k == code) {
                    self.toggle();
                }
            }
            InputEvent::Unload => self.unload(),
        }
    }

    /// Play or pause, then persist
    pub fn toggle(&mut self) {
        self.engine.toggle();
        info!("Stopwatch '{}' {}", self.options.name, self.engine.phase());
        self.render(self.engine.current_elapsed());
        self.save_state();
    }

    /// Zero a paused stopwatch and persist; ignored while running
    pub fn reset(&mut self) {
        if self.engine.reset() {
            info!("Stopwatch '{}' reset", self.options.name);
            self.render(0);
            self.save_state();
        }
    }

    /// Frame callback: refresh the display while running.
    ///
    /// Returns whether another frame should be requested.
    pub fn on_frame(&mut self) -> bool {
        match self.engine.tick() {
            Some(elapsed) => {
                self.render(elapsed);
                true
            }
            None => false,
        }
    }

    /// Persist the current state before the host goes away
    pub fn unload(&mut self) {
        info!("Stopwatch '{}' unloading", self.options.name);
        self.save_state();
    }

    /// Write the current elapsed time to the store
    pub fn save_state(&mut self) {
        self.write_snapshot(self.engine.snapshot());
    }

    /// Restore from the store. A missing or unreadable record is a first run:
    /// a zero snapshot is written and the stopwatch starts at zero.
    pub fn load_state(&mut self) {
        let clock = self.engine.clock();
        match self.read_snapshot() {
            Some(snapshot) => {
                debug!("Restored {} ms for '{}'", snapshot.elapsed, self.options.name);
                self.engine = TimerEngine::restore(clock, snapshot);
            }
            None => {
                info!("No saved state for '{}', starting fresh", self.options.name);
                self.engine = TimerEngine::new(clock);
                self.write_snapshot(PersistedSnapshot::default());
            }
        }
    }

    fn read_snapshot(&self) -> Option<PersistedSnapshot> {
        let encoded = match self.store.get(&self.key) {
            Ok(Some(encoded)) => encoded,
            Ok(None) => return None,
            Err(e) => {
                warn!("Failed to read saved state: {}", e);
                return None;
            }
        };
        match PersistedSnapshot::decode(&encoded) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                warn!("Discarding unreadable saved state: {}", e);
                None
            }
        }
    }

    fn write_snapshot(&mut self, snapshot: PersistedSnapshot) {
        let result = snapshot
            .encode()
            .and_then(|encoded| self.store.set(&self.key, encoded));
        match result {
            Ok(()) => debug!("Saved {} ms for '{}'", snapshot.elapsed, self.options.name),
            Err(e) => warn!("Failed to save state: {}", e),
        }
    }

    fn render(&mut self, elapsed: u64) {
        self.surface.set_text(&format_elapsed(elapsed));
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.engine.phase()
    }

    pub fn elapsed(&self) -> u64 {
        self.engine.current_elapsed()
    }

    pub fn options(&self) -> &StopwatchOptions {
        &self.options
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
