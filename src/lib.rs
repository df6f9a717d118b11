//! # errclass
//!
//! **errclass** lets code that produces errors and code that handles them agree on
//! policy ("retry this?", "wait how long?", "answer with which status?") without
//! sharing a concrete error type.
//!
//! Producers wrap errors with lightweight markers as they travel up the stack.
//! Consumers (a retry loop, an HTTP handler) query the fully wrapped error; the
//! query walks the cause chain and returns the first answer it finds.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   producer                    intermediate layers                 consumer
//! ┌───────────┐   retryable()  ┌──────────────────────┐        ┌────────────────────┐
//! │ io::Error │ ─────────────► │ Marked{Retryable}    │        │ is_retryable(&e)   │
//! │ HttpError │   not_found()  │ Marked{NotFound}     │ ─────► │ status_code(&e)    │
//! │ "text"    │   with_delay() │ anyhow / thiserror   │        │ delay(&e)          │
//! └───────────┘                │ wrappers (source())  │        │ retry_with_backoff │
//!                              └──────────────────────┘        └────────────────────┘
//! ```
//!
//! ### Traversal
//! ```text
//! head ──► cause ──► cause ──► root
//!   first value answering the query wins; unanswered → default
//!
//!   query            default
//!   is_retryable     false
//!   is_not_retryable false
//!   delay            None
//!   status_code      500 (200 for Ok via status_code_for)
//! ```
//!
//! ## Features
//! | Area             | Description                                                   | Key types / functions                                  |
//! |------------------|---------------------------------------------------------------|--------------------------------------------------------|
//! | **Markers**      | Wrap an error to fix one capability answer.                   | [`Marked`], [`retryable`], [`not_found`], [`ResultExt`] |
//! | **Queries**      | Walk the cause chain for the first answer.                    | [`is_retryable`], [`is_not_retryable`], [`delay`]      |
//! | **HTTP**         | Seed errors from response statuses; resolve outbound statuses.| [`HttpError`], [`error_for_status`], [`status_code`]   |
//! | **Retry**        | Repeat work while its error is retryable.                     | [`retry`], [`retry_with_backoff`]                      |
//! | **Policies**     | Interval schedules (via `backon`) with jitter and a budget.  | [`BackoffPolicy`], [`BackoffBuilder`]                  |
//! | **Adapters**     | Let foreign error types answer capability queries.            | [`Classify`], [`classified`]                           |
//!
//! ## Optional features
//! - `reqwest`: exports [`error_for_response`] for `reqwest::Response`.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use errclass::{
//!     error_for_status, is_retryable, retry_with_backoff, status_code, ConstantBuilder,
//!     HttpError,
//! };
//! use http::StatusCode;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let mut responses = vec![StatusCode::OK, StatusCode::BAD_GATEWAY].into_iter().rev();
//!
//!     // 502 is retried, then 200 ends the loop.
//!     let res: Result<(), HttpError> = retry_with_backoff(
//!         || {
//!             let status = responses.next().unwrap_or(StatusCode::OK);
//!             async move { error_for_status(status) }
//!         },
//!         ConstantBuilder::default()
//!             .with_delay(Duration::from_millis(10))
//!             .with_max_times(3),
//!     )
//!     .await;
//!     assert!(res.is_ok());
//!
//!     let err = error_for_status(StatusCode::CONFLICT).unwrap_err();
//!     assert!(!is_retryable(&err));
//!     assert_eq!(status_code(&err), StatusCode::CONFLICT);
//! }
//! ```
mod capability;
mod chain;
mod markers;
mod policies;
mod response;
mod retry;

// ---- Public re-exports ----

pub use capability::{classified, BoxError, Classified, Classify};
pub use chain::{delay, is_not_retryable, is_retryable, retry_verdict};
pub use markers::{
    conflict, delayed_error, forbidden, invalid, not_found, not_retryable, retryable, with_delay,
    Marked, Marker, OptionExt, ResultExt,
};
pub use backon::{BackoffBuilder, ConstantBuilder, ExponentialBuilder};
pub use policies::BackoffPolicy;
#[cfg(feature = "reqwest")]
pub use response::error_for_response;
pub use response::{error_for_status, status_code, status_code_for, HttpError};
pub use retry::{retry, retry_with_backoff};
