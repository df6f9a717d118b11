//! Retry timing.
//!
//! This module groups the knobs that control **how long** the retry driver waits
//! between attempts and **when** it gives up on timing grounds. Whether to retry
//! at all is decided by the error itself (see [`is_retryable`](crate::is_retryable)).
//!
//! Schedules come from [`backon`]: any [`BackoffBuilder`](backon::BackoffBuilder)
//! works, including [`ExponentialBuilder`](backon::ExponentialBuilder),
//! [`ConstantBuilder`](backon::ConstantBuilder) and hand-written builders whose
//! backoff is an `Iterator<Item = Duration>`.
//!
//! ## Contents
//! - [`BackoffPolicy`] exponential schedule configuration (first / factor / max / jitter / limits)
//!
//! ## Quick wiring
//! ```text
//! retry(op)                    ─► BackoffPolicy::default()
//! retry_with_backoff(op, b)    ─► b.build(), then next() after each retryable failure
//! ```
//!
//! ## Defaults
//! - `BackoffPolicy::default()` → first=500ms, factor=1.5, max=60s,
//!   jitter on, no retry count limit, max_elapsed=15min.

mod backoff;

pub use backoff::BackoffPolicy;
