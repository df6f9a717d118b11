//! Retry driver: repeat a unit of work while its error says "retry".
//!
//! The driver asks the error ([`is_retryable`](crate::is_retryable)) whether to go
//! on, and the [`BackoffBuilder`](crate::BackoffBuilder) schedule how long to wait and when to
//! stop. It keeps no state between calls.

mod driver;

pub use driver::{retry, retry_with_backoff};
