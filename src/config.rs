//! Configuration and CLI argument handling

use std::{path::PathBuf, time::Duration};

use clap::Parser;

use crate::controller::StopwatchOptions;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stopwatch")]
#[command(about = "A stopwatch that remembers where it left off")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Stopwatch name; shown next to the time and used to derive the storage key
    #[arg(short, long, default_value = "Stopwatch")]
    pub name: String,

    /// Element id to mount the stopwatch on
    #[arg(long, default_value = "stopwatch")]
    pub element: String,

    /// Do not restore or save state
    #[arg(long)]
    pub no_cache: bool,

    /// Starting value in milliseconds (only with --no-cache)
    #[arg(long, default_value = "0")]
    pub start_offset: u64,

    /// Key code that toggles play/pause (repeatable)
    #[arg(long = "toggle-key", default_values_t = ["Space".to_string(), "KeyP".to_string()])]
    pub toggle_keys: Vec<String>,

    /// Key code that resets a paused stopwatch
    #[arg(long, default_value = "KeyR")]
    pub reset_key: String,

    /// Storage file (defaults to the user data directory)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Repaint interval in milliseconds
    #[arg(long, default_value = "16")]
    pub frame_ms: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Storage file location, falling back to the working directory
    pub fn store_path(&self) -> PathBuf {
        match &self.store {
            Some(path) => path.clone(),
            None => dirs::data_dir()
                .map(|p| p.join("stopwatch"))
                .unwrap_or_default()
                .join("local_storage.json"),
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    /// Stopwatch options described by the command line
    pub fn options(&self) -> StopwatchOptions {
        StopwatchOptions {
            name: self.name.clone(),
            enable_cache: !self.no_cache,
            start_offset_ms: self.start_offset,
            toggle_keys: self.toggle_keys.clone(),
            reset_key: self.reset_key.clone(),
        }
    }
}
