//! Markers: wrappers that fix one capability answer.
//!
//! ## Contents
//! - [`Marked`] / [`Marker`] the wrapper type and its annotation
//! - constructors: [`retryable`], [`not_retryable`], [`with_delay`], [`not_found`],
//!   [`forbidden`], [`invalid`], [`conflict`], [`delayed_error`]
//! - [`ResultExt`] / [`OptionExt`] marking that leaves "no error" untouched
//!
//! ## Wrapping
//! ```text
//! io::Error("reset") ──retryable()──► Marked{Retryable} ──not_found()──► Marked{NotFound}
//!      "reset"                             "reset"                          "reset"
//! ```
//! The outermost answer for a capability shadows every inner answer for it.

mod ext;
mod marked;

pub use ext::{OptionExt, ResultExt};
pub use marked::{
    conflict, delayed_error, forbidden, invalid, not_found, not_retryable, retryable, with_delay,
    Marked, Marker,
};
