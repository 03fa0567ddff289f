//! Background session refresh
//!
//! While a [`RefreshHandle`] is alive, the stored admin session is re-issued
//! on every tick so an open admin console never hits the expiry window.
//! Dropping the handle stops the task.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::debug;

use crate::security::session::SessionStore;

/// Handle to a running refresh loop
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
}

impl RefreshHandle {
    /// Stop the loop
    pub fn stop(self) {
        // Drop aborts the task
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn a loop that refreshes the session every `period`.
///
/// The first tick fires one full period after spawning. Ticks that find no
/// valid session do nothing.
pub fn spawn_refresh_loop(store: Arc<dyn SessionStore>, period: Duration) -> RefreshHandle {
    let task = tokio::spawn(async move {
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if store.is_authenticated().await {
                let refreshed = store.refresh_token().await;
                debug!(refreshed, "Periodic admin session refresh");
            }
        }
    });

    RefreshHandle { task }
}
