//! # Synthetic HTTP errors.
//!
//! [`HttpError`] is manufactured from a response status rather than from an
//! existing error value. It sits at the bottom of a wrap chain and answers both
//! the retry and the status capability.
//!
//! Retryable statuses: `429`, `500`, `502`, `503`, `504`.

use std::borrow::Cow;
use std::error::Error as StdError;

use http::StatusCode;
use thiserror::Error;

use crate::capability::Classify;

/// Error derived from a non-success HTTP status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{}", reason_phrase(.0))]
pub struct HttpError(StatusCode);

impl HttpError {
    /// Creates the error for `status`, whatever its class.
    pub fn new(status: StatusCode) -> Self {
        Self(status)
    }

    /// Returns the status the error was built from.
    pub fn status(&self) -> StatusCode {
        self.0
    }

    /// Indicates whether a request that failed with this status is safe to retry.
    ///
    /// # Example
    /// ```
    /// use errclass::HttpError;
    /// use http::StatusCode;
    ///
    /// assert!(HttpError::new(StatusCode::BAD_GATEWAY).is_retryable());
    /// assert!(!HttpError::new(StatusCode::NOT_FOUND).is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self.0.as_u16(), 429 | 500 | 502 | 503 | 504)
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for HttpError {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

impl Classify for HttpError {
    fn retryable(&self) -> Option<bool> {
        Some(self.is_retryable())
    }

    fn status_code(&self) -> Option<StatusCode> {
        Some(self.0)
    }
}

fn reason_phrase(status: &StatusCode) -> Cow<'static, str> {
    if *status == StatusCode::TOO_MANY_REQUESTS {
        return Cow::Borrowed("Too Many Requests");
    }
    match status.canonical_reason() {
        Some(reason) => Cow::Borrowed(reason),
        None => Cow::Owned(format!("status code {}", status.as_u16())),
    }
}
