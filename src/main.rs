//! Stopwatch - a stopwatch that renders elapsed time and survives restarts
//!
//! This is the main entry point for the stopwatch binary.

use std::sync::Arc;
use anyhow::Context;
use tokio::sync::mpsc;
use tracing::info;

use stopwatch::{
    config::Config,
    controller::{run_safe, Stopwatch},
    host::{read_input, Page, TerminalSurface},
    state::SystemClock,
    storage::FileStore,
    tasks::{run_frame_loop, FrameScheduler},
    utils::unload_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the display line
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatch={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting stopwatch v1.0.0");
    info!(
        "Configuration: name={}, cache={}, element={}",
        config.name,
        !config.no_cache,
        config.element
    );

    let mut page = Page::new().with_element("stopwatch", TerminalSurface::new(std::io::stdout()));
    let store_path = config.store_path();
    let store = FileStore::open(&store_path)
        .with_context(|| format!("Failed to open store {}", store_path.display()))?;
    info!("Using store {}", store.path().display());

    let Some(mut stopwatch) = run_safe(page.element_by_id(&config.element), |element| {
        Stopwatch::new(config.options(), element, store, Arc::new(SystemClock))
    }) else {
        return Ok(());
    };

    info!("Controls: Enter = click, space/p + Enter = play/pause, r + Enter = reset");

    // Forward stdin lines as input events
    let (tx, rx) = mpsc::channel(32);
    std::thread::spawn(move || read_input(std::io::stdin().lock(), tx));

    let mut scheduler = FrameScheduler::new(config.frame_interval());
    run_frame_loop(&mut stopwatch, &mut scheduler, rx, unload_signal()).await;

    println!();
    info!("Stopwatch stopped at {} ms", stopwatch.elapsed());
    Ok(())
}
