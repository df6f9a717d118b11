//! # Marked errors.
//!
//! [`Marked`] wraps exactly one cause and fixes the answer to one capability.
//! Its message is the cause's message, verbatim.
//!
//! | Constructor       | Status code   | Retryable     | Delay         |
//! |-------------------|---------------|---------------|---------------|
//! | [`retryable`]     | falls through | `true`        | falls through |
//! | [`not_retryable`] | falls through | `false`       | falls through |
//! | [`with_delay`]    | falls through | falls through | given         |
//! | [`not_found`]     | 404           | `false`       | falls through |
//! | [`forbidden`]     | 403           | `false`       | falls through |
//! | [`invalid`]       | 400           | `false`       | falls through |
//! | [`conflict`]      | 409           | `false`       | falls through |
//!
//! Every constructor takes `impl Into<BoxError>`: an existing error, or plain
//! text (`&str`/`String`) which becomes the base error.

use std::error::Error as StdError;
use std::fmt;
use std::time::Duration;

use http::StatusCode;

use crate::capability::{BoxError, Classify};

/// Annotation fixed by a [`Marked`] wrapper.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// Retry the operation.
    Retryable,
    /// Do not retry the operation.
    NotRetryable,
    /// Wait at least this long before retrying.
    Delay(Duration),
    /// The target does not exist (404, not retryable).
    NotFound,
    /// Access is denied (403, not retryable).
    Forbidden,
    /// The request is malformed (400, not retryable).
    Invalid,
    /// The request conflicts with current state (409, not retryable).
    Conflict,
}

impl Marker {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use errclass::Marker;
    ///
    /// assert_eq!(Marker::NotFound.as_label(), "not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Marker::Retryable => "retryable",
            Marker::NotRetryable => "not_retryable",
            Marker::Delay(_) => "delay",
            Marker::NotFound => "not_found",
            Marker::Forbidden => "forbidden",
            Marker::Invalid => "invalid",
            Marker::Conflict => "conflict",
        }
    }
}

/// An error annotated with a single [`Marker`].
///
/// The wrapper exclusively owns its cause. It is transparent for display and for
/// [`StdError::source`]; capability traversal steps into the cause directly.
///
/// Because of that, plain `source()` walkers (such as `anyhow::Error::chain`)
/// never yield the wrapped cause itself. Reach it through [`Marked::inner`] or
/// [`Marked::into_inner`] when you need to downcast it.
pub struct Marked {
    marker: Marker,
    inner: BoxError,
}

impl Marked {
    fn new(marker: Marker, err: impl Into<BoxError>) -> Self {
        Self {
            marker,
            inner: err.into(),
        }
    }

    /// Returns the annotation this wrapper carries.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Returns the wrapped cause.
    pub fn inner(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref()
    }

    /// Drops the annotation and returns the wrapped cause.
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl fmt::Debug for Marked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marked")
            .field("marker", &self.marker)
            .field("inner", &self.inner)
            .finish()
    }
}

impl fmt::Display for Marked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl StdError for Marked {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.source()
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for Marked {
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

impl Classify for Marked {
    fn retryable(&self) -> Option<bool> {
        match self.marker {
            Marker::Retryable => Some(true),
            Marker::NotRetryable
            | Marker::NotFound
            | Marker::Forbidden
            | Marker::Invalid
            | Marker::Conflict => Some(false),
            Marker::Delay(_) => None,
        }
    }

    fn delay(&self) -> Option<Duration> {
        match self.marker {
            Marker::Delay(d) => Some(d),
            _ => None,
        }
    }

    fn status_code(&self) -> Option<StatusCode> {
        match self.marker {
            Marker::NotFound => Some(StatusCode::NOT_FOUND),
            Marker::Forbidden => Some(StatusCode::FORBIDDEN),
            Marker::Invalid => Some(StatusCode::BAD_REQUEST),
            Marker::Conflict => Some(StatusCode::CONFLICT),
            _ => None,
        }
    }
}

/// Marks an error as retryable.
///
/// # Example
/// ```
/// use errclass::{is_retryable, retryable};
///
/// let err = std::io::Error::other("connection reset");
/// assert!(!is_retryable(&err));
/// assert!(is_retryable(&retryable(err)));
/// ```
pub fn retryable(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::Retryable, err)
}

/// Marks an error as not retryable, overriding any retryable cause.
pub fn not_retryable(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::NotRetryable, err)
}

/// Attaches a suggested retry delay. A zero delay is reported as no delay.
pub fn with_delay(err: impl Into<BoxError>, delay: Duration) -> Marked {
    Marked::new(Marker::Delay(delay), err)
}

/// Builds a base error from `text` and attaches a suggested retry delay.
pub fn delayed_error(text: impl Into<String>, delay: Duration) -> Marked {
    let text: String = text.into();
    with_delay(text, delay)
}

/// Marks an error as "not found": status 404, not retryable.
///
/// # Example
/// ```
/// use errclass::{not_found, status_code};
/// use http::StatusCode;
///
/// let err = not_found("no such user");
/// assert_eq!(status_code(&err), StatusCode::NOT_FOUND);
/// ```
pub fn not_found(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::NotFound, err)
}

/// Marks an error as "access forbidden": status 403, not retryable.
pub fn forbidden(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::Forbidden, err)
}

/// Marks an error as "invalid": status 400, not retryable.
pub fn invalid(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::Invalid, err)
}

/// Marks an error as "conflict": status 409, not retryable.
pub fn conflict(err: impl Into<BoxError>) -> Marked {
    Marked::new(Marker::Conflict, err)
}

/// Formats a message like [`format!`] and marks the resulting error as retryable.
///
/// # Example
/// ```
/// use errclass::{is_retryable, retryable_error};
///
/// let err = retryable_error!("upstream {} returned {}", "billing", 503);
/// assert_eq!(err.to_string(), "upstream billing returned 503");
/// assert!(is_retryable(&err));
/// ```
#[macro_export]
macro_rules! retryable_error {
    ($($arg:tt)*) => {
        $crate::retryable(::std::format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_verbatim() {
        let base = std::io::Error::other("foobar");
        let err = conflict(not_found(retryable(base)));
        assert_eq!(err.to_string(), "foobar");
        assert_eq!(with_delay("foobar", Duration::from_secs(1)).to_string(), "foobar");
    }

    #[test]
    fn test_source_skips_marker_message() {
        let err = retryable("foobar");
        assert!(err.source().is_none());
        assert_eq!(err.inner().to_string(), "foobar");
    }

    #[test]
    fn test_inner_reaches_hidden_cause() {
        let err = retryable(std::io::Error::from(std::io::ErrorKind::TimedOut));
        assert!(err.source().is_none());
        let kind = err.inner().downcast_ref::<std::io::Error>().map(|e| e.kind());
        assert_eq!(kind, Some(std::io::ErrorKind::TimedOut));
    }

    #[test]
    fn test_status_markers_are_not_retryable() {
        let cases = [
            (not_found("x"), StatusCode::NOT_FOUND),
            (forbidden("x"), StatusCode::FORBIDDEN),
            (invalid("x"), StatusCode::BAD_REQUEST),
            (conflict("x"), StatusCode::CONFLICT),
        ];
        for (err, want) in cases {
            assert_eq!(err.retryable(), Some(false), "{}", err.marker().as_label());
            assert_eq!(err.status_code(), Some(want));
            assert_eq!(err.delay(), None);
        }
    }

    #[test]
    fn test_policy_markers_fall_through_status() {
        assert_eq!(retryable("x").status_code(), None);
        assert_eq!(not_retryable("x").status_code(), None);
        assert_eq!(with_delay("x", Duration::from_secs(1)).retryable(), None);
    }

    #[test]
    fn test_delayed_error() {
        let err = delayed_error("delayed Error", Duration::from_millis(10));
        assert_eq!(err.to_string(), "delayed Error");
        assert_eq!(err.marker(), Marker::Delay(Duration::from_millis(10)));
    }

    #[test]
    fn test_retryable_error_macro_formats_exactly() {
        let err = crate::retryable_error!("{}-{:03}", "foo", 7);
        assert_eq!(err.to_string(), format!("{}-{:03}", "foo", 7));
        assert_eq!(err.marker(), Marker::Retryable);
    }

    #[test]
    fn test_into_inner_drops_marker() {
        let inner = not_retryable(retryable("foo")).into_inner();
        let marked = inner.downcast_ref::<Marked>().map(Marked::marker);
        assert_eq!(marked, Some(Marker::Retryable));
    }
}
