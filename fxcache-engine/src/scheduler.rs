//! Freshness scheduler.
//!
//! Owns the periodic probe and refresh-check tasks. Lifecycle is explicit:
//! `start` spawns the tasks, `SchedulerHandle::stop` (or dropping the
//! handle) cancels them.

use chrono::Utc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::RateEngine;

/// Stops the scheduler's background tasks when asked - or when dropped,
/// since dropping the sender closes the channel both loops select on.
pub struct SchedulerHandle {
    stop_tx: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

impl SchedulerHandle {
    /// Signals both tasks and waits for them to exit.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        for task in self.tasks {
            let _ = task.await;
        }
    }
}

pub(crate) fn start(engine: RateEngine) -> SchedulerHandle {
    let (stop_tx, _) = watch::channel(false);
    let tasks = vec![
        tokio::spawn(probe_loop(engine.clone(), stop_tx.subscribe())),
        tokio::spawn(refresh_loop(engine, stop_tx.subscribe())),
    ];
    SchedulerHandle { stop_tx, tasks }
}

fn should_stop(changed: Result<(), watch::error::RecvError>, rx: &watch::Receiver<bool>) -> bool {
    changed.is_err() || *rx.borrow()
}

async fn probe_loop(engine: RateEngine, mut stop_rx: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(engine.config().probe_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                engine.probe().await;
            }
            changed = stop_rx.changed() => {
                if should_stop(changed, &stop_rx) {
                    break;
                }
            }
        }
    }
}

async fn refresh_loop(engine: RateEngine, mut stop_rx: watch::Receiver<bool>) {
    // Startup always attempts one refresh, even over a fresh cache, to get
    // the freshest possible initial snapshot subject to reachability.
    engine.probe().await;
    let _ = engine.refresh().await;

    let mut ticker = tokio::time::interval(engine.config().refresh_check_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the startup refresh covered it.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                scheduled_refresh(&engine).await;
            }
            changed = stop_rx.changed() => {
                if should_stop(changed, &stop_rx) {
                    break;
                }
            }
        }
    }
}

/// One staleness check: refresh when the snapshot is absent, or when it has
/// aged past the threshold and the provider is believed reachable.
/// Refreshing a fresh snapshot, or refreshing while offline, is explicitly
/// avoided.
pub(crate) async fn scheduled_refresh(engine: &RateEngine) {
    match engine.snapshot() {
        None => {
            let _ = engine.refresh().await;
        }
        Some(snapshot)
            if snapshot.is_stale(Utc::now(), engine.config().staleness_threshold)
                && engine.connectivity().is_online() =>
        {
            let _ = engine.refresh().await;
        }
        Some(snapshot) => {
            tracing::trace!(
                age_minutes = snapshot.age(Utc::now()).num_minutes(),
                connectivity = %engine.connectivity(),
                "snapshot fresh or offline, skipping refresh"
            );
        }
    }
}
