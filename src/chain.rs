//! # Cause-chain traversal.
//!
//! Walks an error and its [`source`](StdError::source) chain, head first, looking
//! for the first value that answers a capability query.
//!
//! ```text
//! head ──source()──► wrapper ──source()──► ... ──source()──► root cause
//!  │                   │                                        │
//!  └─ answers? ────────┴─ answers? ─────────────── ... ─────────┴─ answers?
//!       yes → stop, return answer          end of chain → capability default
//! ```
//!
//! ## Rules
//! - The **first** value that answers wins; nothing deeper is consulted.
//! - Values with no opinion (plain errors, foreign wrappers) are skipped through
//!   their `source()`. Any wrapper exposing `source()` is followed, whichever
//!   crate defined it.
//! - Unclassified chains answer `false` to both [`is_retryable`] and
//!   [`is_not_retryable`]: no opinion is not a negative opinion.

use std::error::Error as StdError;
use std::time::Duration;

use crate::capability::{Classified, Classify};
use crate::response::HttpError;
use crate::markers::Marked;

/// Returns the capability view of `err`, if its concrete type carries one.
pub(crate) fn as_classify<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a dyn Classify> {
    if let Some(marked) = err.downcast_ref::<Marked>() {
        return Some(marked);
    }
    if let Some(http) = err.downcast_ref::<HttpError>() {
        return Some(http);
    }
    if let Some(adapter) = err.downcast_ref::<Classified>() {
        return Some(adapter);
    }
    None
}

/// Returns the next value down the chain.
///
/// Markers are transparent to [`StdError::source`] so messages are not
/// repeated by chain printers; traversal steps into their owned cause instead.
pub(crate) fn cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    match err.downcast_ref::<Marked>() {
        Some(marked) => Some(marked.inner() as &(dyn StdError + 'static)),
        None => err.source(),
    }
}

/// Visits `err` and each of its causes until `visit` returns an answer.
pub(crate) fn walk<'a, T>(
    err: &'a (dyn StdError + 'static),
    mut visit: impl FnMut(&'a (dyn StdError + 'static)) -> Option<T>,
) -> Option<T> {
    let mut current = Some(err);
    while let Some(e) = current {
        if let Some(answer) = visit(e) {
            return Some(answer);
        }
        current = cause(e);
    }
    None
}

/// Returns the first capability answer `ask` extracts from the chain.
pub(crate) fn find<T>(
    err: &(dyn StdError + 'static),
    mut ask: impl FnMut(&dyn Classify) -> Option<T>,
) -> Option<T> {
    walk(err, |e| as_classify(e).and_then(&mut ask))
}

/// Returns the retry opinion of the first value in the chain that has one.
///
/// `None` means nothing in the chain expressed an opinion.
///
/// # Example
/// ```
/// use errclass::{not_retryable, retry_verdict, retryable};
///
/// let plain = std::io::Error::other("boom");
/// assert_eq!(retry_verdict(&plain), None);
/// assert_eq!(retry_verdict(&retryable(plain)), Some(true));
/// assert_eq!(retry_verdict(&not_retryable("nope")), Some(false));
/// ```
pub fn retry_verdict(err: &(dyn StdError + 'static)) -> Option<bool> {
    find(err, |c| c.retryable())
}

/// Reports whether `err` is explicitly marked as retryable.
///
/// Unclassified errors are not retryable.
pub fn is_retryable(err: &(dyn StdError + 'static)) -> bool {
    retry_verdict(err) == Some(true)
}

/// Reports whether `err` is explicitly marked as **not** retryable.
///
/// Unclassified errors answer `false` here as well.
pub fn is_not_retryable(err: &(dyn StdError + 'static)) -> bool {
    retry_verdict(err) == Some(false)
}

/// Returns the suggested delay carried by the chain.
///
/// The first delay answer wins; a zero delay counts as no delay.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use errclass::{delay, with_delay};
///
/// let err = with_delay("slow down", Duration::from_secs(3));
/// assert_eq!(delay(&err), Some(Duration::from_secs(3)));
/// assert_eq!(delay(&with_delay("now", Duration::ZERO)), None);
/// ```
pub fn delay(err: &(dyn StdError + 'static)) -> Option<Duration> {
    find(err, |c| c.delay()).filter(|d| !d.is_zero())
}
