//! A cancelable periodic task.

use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Configures and spawns a periodic callback.
///
/// The first tick fires one full `period` after spawning. Ticks that fall
/// behind are skipped, never replayed.
pub struct Ticker {
    name: String,
    period: Duration,
    limit: Option<u64>,
}

impl Ticker {
    /// # Arguments
    ///
    /// * `name` - Used in log lines only.
    /// * `period` - Interval between ticks. Zero is raised to one millisecond.
    pub fn new(name: impl Into<String>, period: Duration) -> Self {
        Self {
            name: name.into(),
            period: period.max(Duration::from_millis(1)),
            limit: None,
        }
    }

    /// Stops the task on its own after `ticks` callbacks.
    pub fn with_limit(mut self, ticks: u64) -> Self {
        self.limit = Some(ticks);
        self
    }

    /// Spawns the task on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime.
    pub fn spawn<F>(self, mut on_tick: F) -> TickHandle
    where
        F: FnMut() + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let Ticker {
            name,
            period,
            limit,
        } = self;
        let task_name = name.clone();

        let handle = tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut ticks = 0u64;

            debug!("Ticker '{}' started ({:?})", task_name, period);
            loop {
                if limit.is_some_and(|max| ticks >= max) {
                    debug!("Ticker '{}' reached its limit of {} ticks", task_name, ticks);
                    break;
                }

                tokio::select! {
                    _ = &mut stop_rx => {
                        debug!("Ticker '{}' received stop signal", task_name);
                        break;
                    }
                    _ = interval.tick() => {
                        on_tick();
                        ticks += 1;
                    }
                }
            }
            ticks
        });

        TickHandle {
            name,
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }
}

/// Owner of a running ticker. Dropping it aborts the task.
pub struct TickHandle {
    name: String,
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<u64>>,
}

impl TickHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Signals the task to stop and waits for it to exit.
    ///
    /// Once this returns, the callback will not run again.
    ///
    /// # Returns
    ///
    /// The number of ticks the task executed.
    pub async fn stop(mut self) -> Result<u64> {
        if let Some(stop_tx) = self.stop_tx.take() {
            // Err only means the task already finished.
            let _ = stop_tx.send(());
        }
        let ticks = match self.handle.take() {
            Some(handle) => handle
                .await
                .with_context(|| format!("Ticker '{}' did not shut down cleanly", self.name))?,
            None => 0,
        };
        info!("Ticker '{}' stopped after {} ticks", self.name, ticks);
        Ok(ticks)
    }

    /// Waits for a limited ticker to run out on its own.
    pub async fn join(mut self) -> Result<u64> {
        match self.handle.take() {
            Some(handle) => handle
                .await
                .with_context(|| format!("Ticker '{}' did not shut down cleanly", self.name)),
            None => Ok(0),
        }
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
