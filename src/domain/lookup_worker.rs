//! Asynchronous lookup-tracking worker.
//!
//! Lookup events are handed off to an independent task through a bounded
//! channel, so tracking cannot block or fail a resolution. Each event gets a
//! bounded timeout; tracker failures and timeouts are logged and dropped.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::domain::lookup_event::LookupEvent;

/// External notifier for completed lookups.
///
/// Implementations deliver events to whatever sink the deployment uses (a
/// message bus, an analytics pipeline). Delivery is best-effort: the worker
/// logs failures and moves on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LookupTracker: Send + Sync {
    async fn track(&self, event: LookupEvent) -> anyhow::Result<()>;
}

/// A tracker that only logs events.
///
/// The default sink for deployments without a tracking pipeline; also useful
/// in development to see resolution traffic.
pub struct TracingTracker;

#[async_trait]
impl LookupTracker for TracingTracker {
    async fn track(&self, event: LookupEvent) -> anyhow::Result<()> {
        debug!(
            short_link_id = %event.short_link_id,
            found = event.found,
            expired = event.expired,
            status = event.response_status_code,
            "short link lookup"
        );
        Ok(())
    }
}

/// Drains lookup events from `rx` until every sender is dropped.
///
/// `per_event_timeout` bounds each delivery; a tracker that hangs costs at
/// most one timeout per event, and neither errors nor timeouts propagate
/// anywhere.
pub async fn run_lookup_worker(
    mut rx: mpsc::Receiver<LookupEvent>,
    tracker: Arc<dyn LookupTracker>,
    per_event_timeout: Duration,
) {
    while let Some(event) = rx.recv().await {
        let short_link_id = event.short_link_id.clone();

        match tokio::time::timeout(per_event_timeout, tracker.track(event)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                error!(short_link_id = %short_link_id, error = %e, "failed to track lookup");
            }
            Err(_) => {
                warn!(
                    short_link_id = %short_link_id,
                    timeout_ms = per_event_timeout.as_millis() as u64,
                    "lookup tracking timed out"
                );
            }
        }
    }
}
