//! Marking through `Result` and `Option`.
//!
//! `Ok(_)` and `None` mean "no error": they pass through untouched and no
//! wrapper is allocated.

use std::time::Duration;

use crate::capability::BoxError;
use crate::markers::marked::{self, Marked};

/// Marks the error side of a `Result`.
///
/// # Example
/// ```
/// use errclass::{is_retryable, ResultExt};
///
/// fn fetch(fail: bool) -> Result<u32, std::io::Error> {
///     if fail { Err(std::io::Error::other("reset")) } else { Ok(7) }
/// }
///
/// assert_eq!(fetch(false).retryable().ok(), Some(7));
/// let err = fetch(true).retryable().unwrap_err();
/// assert!(is_retryable(&err));
/// ```
pub trait ResultExt<T> {
    /// See [`retryable`](crate::retryable).
    fn retryable(self) -> Result<T, Marked>;
    /// See [`not_retryable`](crate::not_retryable).
    fn not_retryable(self) -> Result<T, Marked>;
    /// See [`with_delay`](crate::with_delay).
    fn with_delay(self, delay: Duration) -> Result<T, Marked>;
    /// See [`not_found`](crate::not_found).
    fn not_found(self) -> Result<T, Marked>;
    /// See [`forbidden`](crate::forbidden).
    fn forbidden(self) -> Result<T, Marked>;
    /// See [`invalid`](crate::invalid).
    fn invalid(self) -> Result<T, Marked>;
    /// See [`conflict`](crate::conflict).
    fn conflict(self) -> Result<T, Marked>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn retryable(self) -> Result<T, Marked> {
        self.map_err(marked::retryable)
    }

    fn not_retryable(self) -> Result<T, Marked> {
        self.map_err(marked::not_retryable)
    }

    fn with_delay(self, delay: Duration) -> Result<T, Marked> {
        self.map_err(|e| marked::with_delay(e, delay))
    }

    fn not_found(self) -> Result<T, Marked> {
        self.map_err(marked::not_found)
    }

    fn forbidden(self) -> Result<T, Marked> {
        self.map_err(marked::forbidden)
    }

    fn invalid(self) -> Result<T, Marked> {
        self.map_err(marked::invalid)
    }

    fn conflict(self) -> Result<T, Marked> {
        self.map_err(marked::conflict)
    }
}

/// Marks an optional error; `None` stays `None`.
pub trait OptionExt {
    /// See [`retryable`](crate::retryable).
    fn retryable(self) -> Option<Marked>;
    /// See [`not_retryable`](crate::not_retryable).
    fn not_retryable(self) -> Option<Marked>;
    /// See [`with_delay`](crate::with_delay).
    fn with_delay(self, delay: Duration) -> Option<Marked>;
    /// See [`not_found`](crate::not_found).
    fn not_found(self) -> Option<Marked>;
    /// See [`forbidden`](crate::forbidden).
    fn forbidden(self) -> Option<Marked>;
    /// See [`invalid`](crate::invalid).
    fn invalid(self) -> Option<Marked>;
    /// See [`conflict`](crate::conflict).
    fn conflict(self) -> Option<Marked>;
}

impl<E> OptionExt for Option<E>
where
    E: Into<BoxError>,
{
    fn retryable(self) -> Option<Marked> {
        self.map(marked::retryable)
    }

    fn not_retryable(self) -> Option<Marked> {
        self.map(marked::not_retryable)
    }

    fn with_delay(self, delay: Duration) -> Option<Marked> {
        self.map(|e| marked::with_delay(e, delay))
    }

    fn not_found(self) -> Option<Marked> {
        self.map(marked::not_found)
    }

    fn forbidden(self) -> Option<Marked> {
        self.map(marked::forbidden)
    }

    fn invalid(self) -> Option<Marked> {
        self.map(marked::invalid)
    }

    fn conflict(self) -> Option<Marked> {
        self.map(marked::conflict)
    }
}
