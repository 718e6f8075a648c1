//! Scheduler layer of the monitor
//!
//! Each loop fetches, reacts, then suspends until its next fetch. A fetch is
//! only ever issued after the previous one was handled, so a loop never has
//! more than one request outstanding. Both loops end on their own stopping
//! conditions or when the session's cancellation token fires.

pub mod status;
pub mod tail;

pub use status::StatusPoller;
pub use tail::{LogCursor, LogTailer};

use ferry_client::ClientError;
use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use crate::config::{MAX_RETRY_BACKOFF, MonitorConfig};

/// Sleeps for `delay`, returning `false` if cancelled first
pub(crate) async fn sleep_or_cancel(delay: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(delay) => true,
    }
}

/// Runs `fetch`, retrying transport failures as configured
///
/// Returns `None` if the session was cancelled while fetching or backing off.
/// Server errors are never retried.
pub(crate) async fn fetch_with_retry<T, F, Fut>(
    config: &MonitorConfig,
    cancel: &CancellationToken,
    what: &str,
    mut fetch: F,
) -> Option<Result<T, ClientError>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0;
    let mut delay = config.retry_backoff;

    loop {
        let result = tokio::select! {
            _ = cancel.cancelled() => return None,
            result = fetch() => result,
        };

        match result {
            Err(e) if e.is_transport() && attempt < config.max_transport_retries => {
                attempt += 1;
                warn!(
                    "Failed to fetch {} (attempt {}/{}): {}; retrying in {:?}",
                    what, attempt, config.max_transport_retries, e, delay
                );

                if !sleep_or_cancel(delay, cancel).await {
                    return None;
                }

                delay = (delay * 2).min(MAX_RETRY_BACKOFF);
            }
            other => return Some(other),
        }
    }
}
