//! # Capabilities an error may answer.
//!
//! An error value can optionally carry an opinion on three independent questions:
//!
//! - [`Classify::retryable`] should the failed operation be attempted again?
//! - [`Classify::delay`] how long should a caller wait before doing so?
//! - [`Classify::status_code`] which external status code describes the failure?
//!
//! Every method defaults to `None` ("no opinion"). The crate's own wrappers
//! ([`Marked`](crate::Marked), [`HttpError`](crate::HttpError)) implement
//! [`Classify`] directly. Third-party error types implement it too and are
//! wrapped once with [`classified`] so traversal can discover them at runtime.
//!
//! ```text
//! user error ──► classified(user error) ──► Classified ──► (any outer wrappers)
//!                                               │
//!                                  traversal downcasts to Classified
//!                                  and asks the inner Classify impl
//! ```

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use http::StatusCode;

/// Boxed, thread-safe error used as the owned cause of every wrapper.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Optional capability answers carried by an error value.
///
/// Implementors answer only the questions they have an opinion on and leave
/// the rest at their `None` default; traversal then falls through to the
/// error's [`source`](StdError::source).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use errclass::{classified, is_retryable, Classify};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("rate limited by upstream")]
/// struct RateLimited;
///
/// impl Classify for RateLimited {
///     fn retryable(&self) -> Option<bool> {
///         Some(true)
///     }
///     fn delay(&self) -> Option<Duration> {
///         Some(Duration::from_secs(2))
///     }
/// }
///
/// let err = classified(RateLimited);
/// assert!(is_retryable(&err));
/// ```
pub trait Classify: StdError {
    /// Whether the operation that produced this error may succeed on retry.
    fn retryable(&self) -> Option<bool> {
        None
    }

    /// Suggested wait before the next attempt.
    fn delay(&self) -> Option<Duration> {
        None
    }

    /// External status code describing this failure.
    fn status_code(&self) -> Option<StatusCode> {
        None
    }
}

/// Adapter that exposes a foreign [`Classify`] implementation to traversal.
///
/// `Display` and [`source`](StdError::source) are forwarded to the wrapped
/// value, so wrapping is invisible in messages and cause chains.
pub struct Classified {
    inner: Box<dyn Classify + Send + Sync + 'static>,
}

impl Classified {
    /// Returns the wrapped error.
    pub fn get_ref(&self) -> &(dyn Classify + Send + Sync + 'static) {
        self.inner.as_ref()
    }
}

/// Wraps an error implementing [`Classify`] so its answers are discoverable
/// anywhere in a cause chain.
pub fn classified<E>(err: E) -> Classified
where
    E: Classify + Send + Sync + 'static,
{
    Classified {
        inner: Box::new(err),
    }
}

impl fmt::Debug for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.inner, f)
    }
}

impl fmt::Display for Classified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Classified {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Classified {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

impl Classify for Classified {
    fn retryable(&self) -> Option<bool> {
        self.inner.retryable()
    }

    fn delay(&self) -> Option<Duration> {
        self.inner.delay()
    }

    fn status_code(&self) -> Option<StatusCode> {
        self.inner.status_code()
    }
}
