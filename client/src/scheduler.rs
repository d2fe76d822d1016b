use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::error;

use application::service::ExpiryService;
use time::OffsetDateTime;

use crate::handler::AppModule;

static SWEEP_INTERVAL_SECS: &str = "SWEEP_INTERVAL_SECS";
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Reconciliation period, overridable through the environment.
pub fn sweep_interval() -> Duration {
    std::env::var(SWEEP_INTERVAL_SECS)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_SWEEP_INTERVAL)
}

/// Recurring expiry pass: once right away, then on every tick.
///
/// A failed pass is logged and retried on the next tick; the timer
/// itself never dies until [`ExpiryScheduler::stop`].
pub struct ExpiryScheduler {
    handle: JoinHandle<()>,
}

impl ExpiryScheduler {
    pub fn spawn(module: AppModule, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut timer = tokio::time::interval(period);
            loop {
                timer.tick().await;
                if let Err(report) = module.run_expiry_pass(OffsetDateTime::now_utc()).await {
                    error!("Expiry pass failed, retrying on the next tick: {report:?}");
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}
