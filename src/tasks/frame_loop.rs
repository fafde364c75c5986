//! Frame-driven event loop

use std::{future::Future, pin::Pin, time::Duration};
use tokio::{
    sync::mpsc,
    time::{sleep_until, Instant},
};
use tracing::{debug, info};

use crate::{
    controller::Stopwatch,
    host::{DisplaySurface, InputEvent},
    storage::KeyValueStore,
};

/// Default repaint interval, roughly one display frame
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// One-shot frame request, re-armed by the loop after each frame while running
#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    deadline: Option<Instant>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            deadline: None,
        }
    }

    /// Ask for a frame one interval from now; keeps an already pending request
    pub fn request(&mut self) {
        if self.deadline.is_none() {
            self.deadline = Some(Instant::now() + self.interval);
        }
    }

    /// Drop the pending request, if any
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            debug!("Pending frame cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Resolve when the pending frame is due; never resolves when nothing is pending
    pub async fn fired(&mut self) {
        match self.deadline {
            Some(deadline) => {
                sleep_until(deadline).await;
                self.deadline = None;
            }
            None => futures::future::pending::<()>().await,
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

/// Drive `stopwatch` until the host unloads.
///
/// Input comes from `events`; a closed channel or a resolved `unload` both
/// save the state and end the loop.
pub async fn run_frame_loop<D, S, U>(
    stopwatch: &mut Stopwatch<D, S>,
    scheduler: &mut FrameScheduler,
    mut events: mpsc::Receiver<InputEvent>,
    unload: U,
) where
    D: DisplaySurface,
    S: KeyValueStore,
    U: Future<Output = ()>,
{
    info!("Starting frame loop");
    tokio::pin!(unload);

    sync_frame_request(stopwatch, scheduler);
    while frame_step(stopwatch, scheduler, &mut events, unload.as_mut()).await {}

    scheduler.cancel();
    info!("Frame loop stopped");
}

/// Keep a frame pending exactly while the stopwatch runs
fn sync_frame_request<D, S>(stopwatch: &Stopwatch<D, S>, scheduler: &mut FrameScheduler)
where
    D: DisplaySurface,
    S: KeyValueStore,
{
    if stopwatch.is_running() {
        scheduler.request();
    } else {
        scheduler.cancel();
    }
}

/// Handle one input event, frame or unload. Returns `false` once unloaded.
async fn frame_step<D, S, U>(
    stopwatch: &mut Stopwatch<D, S>,
    scheduler: &mut FrameScheduler,
    events: &mut mpsc::Receiver<InputEvent>,
    mut unload: Pin<&mut U>,
) -> bool
where
    D: DisplaySurface,
    S: KeyValueStore,
    U: Future<Output = ()>,
{
    tokio::select! {
        event = events.recv() => match event {
            Some(InputEvent::Unload) | None => {
                stopwatch.unload();
                return false;
            }
            Some(event) => stopwatch.dispatch(event),
        },
        _ = scheduler.fired() => {
            stopwatch.on_frame();
        }
        _ = &mut unload => {
            stopwatch.unload();
            return false;
        }
    }

    sync_frame_request(stopwatch, scheduler);
    true
}
