//! HTTP boundary: response classification and status resolution.
//!
//! - [`HttpError`] synthetic error seeded from a response status
//! - [`error_for_status`] status → `Ok(())` or [`HttpError`]
//! - [`status_code`] / [`status_code_for`] error chain → status to answer with

mod error;
mod status;

pub use error::HttpError;
#[cfg(feature = "reqwest")]
pub use status::error_for_response;
pub use status::{error_for_status, status_code, status_code_for};
