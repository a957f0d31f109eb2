//! Workout timer.
//!
//! A periodic task that counts elapsed seconds while a workout session is
//! open. The task is owned by the timer: stopping or dropping the timer
//! aborts it, so it never outlives the session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// One tick per elapsed second.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Cancellable elapsed-seconds counter.
#[derive(Debug)]
pub struct WorkoutTimer {
    elapsed_rx: watch::Receiver<u64>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl WorkoutTimer {
    /// Start ticking. Must be called from within a tokio runtime.
    ///
    /// The first increment happens one full period after start.
    pub fn start() -> Self {
        Self::start_with_period(TICK_PERIOD)
    }

    /// Start ticking with a custom period; each tick counts as one second.
    pub fn start_with_period(period: Duration) -> Self {
        let (elapsed_tx, elapsed_rx) = watch::channel(0u64);
        let running = Arc::new(AtomicBool::new(true));
        let task_running = Arc::clone(&running);

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            while task_running.load(Ordering::SeqCst) {
                ticker.tick().await;
                if !task_running.load(Ordering::SeqCst) {
                    break;
                }
                elapsed_tx.send_modify(|elapsed| *elapsed += 1);
            }
            tracing::debug!("Workout timer task exited");
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "Workout timer started");

        Self {
            elapsed_rx,
            running,
            handle: Some(handle),
        }
    }

    /// Seconds counted so far.
    pub fn elapsed_seconds(&self) -> u64 {
        *self.elapsed_rx.borrow()
    }

    /// Receiver that observes every tick.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed_rx.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop the timer and return the final elapsed seconds.
    pub fn stop(&mut self) -> u64 {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!(elapsed = self.elapsed_seconds(), "Workout timer stopped");
        }
        self.elapsed_seconds()
    }
}

impl Drop for WorkoutTimer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Format seconds as "M min S sec".
pub fn format_elapsed(seconds: u64) -> String {
    format!("{} min {} sec", seconds / 60, seconds % 60)
}
