//! # Retry driver.
//!
//! Runs one unit of work repeatedly while it fails with a retryable error,
//! waiting between attempts for as long as the backoff schedule says.
//!
//! ## Flow
//! ```text
//! schedule = backoff.build()
//! loop {
//!   ├─► attempt += 1
//!   ├─► op().await
//!   │     ├─ Ok(v)                         ─► return Ok(v)
//!   │     ├─ Err(e), !is_retryable(e)      ─► return Err(e)
//!   │     └─ Err(e), is_retryable(e):
//!   │          ├─ schedule.next() = None    ─► return Err(e)
//!   │          └─ schedule.next() = Some(d) ─► sleep(d), continue
//! }
//! ```
//!
//! ## Rules
//! - Attempts run **sequentially**, never in parallel
//! - The returned error is the **last** error produced, exactly as `op` returned it
//! - An unclassified error is never retried, not even after the first attempt
//! - The sleep between attempts is the only suspension point besides `op` itself
//!
//! ## Error types
//! The error only has to be viewable as `dyn Error + Send + Sync`:
//! [`BoxError`](crate::BoxError), `anyhow::Error` and the crate's own
//! [`Marked`](crate::Marked), [`HttpError`](crate::HttpError) and
//! [`Classified`](crate::Classified) all are. Other concrete error types are
//! boxed or marked first.

use std::error::Error as StdError;
use std::future::Future;

use backon::BackoffBuilder;
use tokio::time;
use tracing::{debug, warn};

use crate::chain::is_retryable;
use crate::policies::BackoffPolicy;

/// Retries `op` with the default exponential schedule.
///
/// See [`retry_with_backoff`] and [`BackoffPolicy::default`].
pub async fn retry<F, Fut, T, E>(op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: AsRef<dyn StdError + Send + Sync + 'static>,
{
    retry_with_backoff(op, BackoffPolicy::default()).await
}

/// Retries `op` while it fails with a retryable error and `backoff` grants another interval.
///
/// A fresh schedule is built from `backoff` for this call. Returns the first
/// success, or the last error: either a non-retryable one, or the retryable one
/// that exhausted the schedule.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use errclass::{retry_with_backoff, retryable, ConstantBuilder, Marked};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut calls = 0;
/// let res: Result<u32, Marked> = retry_with_backoff(
///     || {
///         calls += 1;
///         let n = calls;
///         async move {
///             if n < 3 { Err(retryable("flaky")) } else { Ok(n) }
///         }
///     },
///     ConstantBuilder::default().with_delay(Duration::from_millis(1)),
/// )
/// .await;
/// assert_eq!(res.unwrap(), 3);
/// # }
/// ```
pub async fn retry_with_backoff<F, Fut, T, E, B>(mut op: F, backoff: B) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: AsRef<dyn StdError + Send + Sync + 'static>,
    B: BackoffBuilder,
{
    let mut schedule = backoff.build();
    let mut attempt: u64 = 0;

    loop {
        attempt += 1;
        let err = match op().await {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };
        let view = err.as_ref();

        if !is_retryable(view) {
            debug!(attempt, error = %view, "not retryable, giving up");
            return Err(err);
        }

        let Some(delay) = schedule.next() else {
            warn!(attempt, error = %view, "backoff exhausted, giving up");
            return Err(err);
        };

        debug!(attempt, ?delay, error = %view, "retryable failure, backing off");
        time::sleep(delay).await;
    }
}
