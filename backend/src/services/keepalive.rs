//! Best-effort keep-alive pinger
//!
//! Probes the service's own `/health` endpoint on a fixed interval so
//! free-tier hosts do not idle the process out. Failures are logged at
//! debug and otherwise swallowed; the loop shares no state with request
//! handling.

use std::time::Duration;

use tokio::time;

/// Timeout for a single liveness probe.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Run the keep-alive loop, probing at `interval`.
///
/// This function runs forever until the task is cancelled. Intended
/// to be spawned as a background tokio task.
pub async fn run(port: u16, interval: Duration) {
    let client = reqwest::Client::new();
    let url = format!("http://127.0.0.1:{}/health", port);

    let mut ticker = time::interval(interval);
    // Skip the first tick (fires immediately).
    ticker.tick().await;

    loop {
        ticker.tick().await;

        match client.get(&url).timeout(PING_TIMEOUT).send().await {
            Ok(_) => tracing::debug!(%url, "keep-alive ping sent"),
            Err(e) => tracing::debug!(%url, error = %e, "keep-alive ping failed"),
        }
    }
}
