//! # Status classification and resolution.
//!
//! Two directions across the HTTP boundary:
//!
//! ```text
//! inbound:   response status ──error_for_status()──► Ok(()) | Err(HttpError)
//! outbound:  any error chain ──status_code()──────► status a handler should answer with
//! ```
//!
//! ## Resolution order
//! 1. first value in the chain answering the status capability;
//! 2. well-known `std::io::Error` kinds (`NotFound` → 404, `PermissionDenied` → 403);
//! 3. otherwise `500 Internal Server Error`.
//!
//! Both checks run per link, so whichever is closest to the head wins.

use std::error::Error as StdError;
use std::io;

use http::StatusCode;

use crate::chain;
use crate::response::error::HttpError;

/// Builds an error from a response status.
///
/// Returns `Ok(())` for statuses below 300 and for `304 Not Modified`;
/// every other status yields an [`HttpError`].
///
/// # Example
/// ```
/// use errclass::{error_for_status, is_retryable};
/// use http::StatusCode;
///
/// assert!(error_for_status(StatusCode::NO_CONTENT).is_ok());
/// assert!(error_for_status(StatusCode::NOT_MODIFIED).is_ok());
///
/// let err = error_for_status(StatusCode::TOO_MANY_REQUESTS).unwrap_err();
/// assert_eq!(err.to_string(), "Too Many Requests");
/// assert!(is_retryable(&err));
/// ```
pub fn error_for_status(status: StatusCode) -> Result<(), HttpError> {
    if status.as_u16() < 300 || status == StatusCode::NOT_MODIFIED {
        return Ok(());
    }
    Err(HttpError::new(status))
}

/// Builds an error from a completed `reqwest` response. See [`error_for_status`].
#[cfg(feature = "reqwest")]
pub fn error_for_response(resp: &reqwest::Response) -> Result<(), HttpError> {
    error_for_status(resp.status())
}

/// Returns the status code an HTTP handler should answer with for `err`.
///
/// Errors nobody classified resolve to `500 Internal Server Error`.
///
/// # Example
/// ```
/// use errclass::{forbidden, status_code};
/// use http::StatusCode;
///
/// let err = std::io::Error::other("boom");
/// assert_eq!(status_code(&err), StatusCode::INTERNAL_SERVER_ERROR);
/// assert_eq!(status_code(&forbidden(err)), StatusCode::FORBIDDEN);
/// ```
pub fn status_code(err: &(dyn StdError + 'static)) -> StatusCode {
    chain::walk(err, |e| {
        chain::as_classify(e)
            .and_then(|c| c.status_code())
            .or_else(|| well_known(e))
    })
    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

/// Returns the status code for the outcome of an operation.
///
/// `Ok` resolves to `200 OK`; `Err` resolves through [`status_code`].
pub fn status_code_for<T, E>(res: &Result<T, E>) -> StatusCode
where
    E: StdError + 'static,
{
    match res {
        Ok(_) => StatusCode::OK,
        Err(e) => status_code(e),
    }
}

fn well_known(err: &(dyn StdError + 'static)) -> Option<StatusCode> {
    let io = err.downcast_ref::<io::Error>()?;
    match io.kind() {
        io::ErrorKind::NotFound => Some(StatusCode::NOT_FOUND),
        io::ErrorKind::PermissionDenied => Some(StatusCode::FORBIDDEN),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{is_not_retryable, is_retryable};
    use crate::markers::{conflict, forbidden, invalid, not_found, retryable};
    use crate::BoxError;

    #[derive(Debug, thiserror::Error)]
    #[error("bar: {source}")]
    struct Wrap {
        source: BoxError,
    }

    fn wrap(err: impl Into<BoxError>) -> Wrap {
        Wrap { source: err.into() }
    }

    fn code(n: u16) -> StatusCode {
        StatusCode::from_u16(n).unwrap()
    }

    #[test]
    fn test_classifier_boundaries() {
        assert!(error_for_status(code(200)).is_ok());
        assert!(error_for_status(code(299)).is_ok());
        assert!(error_for_status(code(304)).is_ok());
        assert!(error_for_status(code(300)).is_err());
        assert!(error_for_status(code(301)).is_err());
    }

    #[test]
    fn test_classifier_retry_answers() {
        let err = error_for_status(code(429)).unwrap_err();
        assert!(is_retryable(&err));
        assert_eq!(err.to_string(), "Too Many Requests");

        let err = error_for_status(code(404)).unwrap_err();
        assert!(is_not_retryable(&err));
        assert_eq!(err.to_string(), "Not Found");

        assert!(is_retryable(&wrap(error_for_status(code(504)).unwrap_err())));
    }

    #[test]
    fn test_status_code_resolution() {
        let cases: Vec<(BoxError, StatusCode)> = vec![
            ("foo".into(), StatusCode::INTERNAL_SERVER_ERROR),
            (retryable("foo").into(), StatusCode::INTERNAL_SERVER_ERROR),
            (not_found("foo").into(), StatusCode::NOT_FOUND),
            (wrap(not_found("foo")).into(), StatusCode::NOT_FOUND),
            (forbidden("foo").into(), StatusCode::FORBIDDEN),
            (wrap(forbidden("foo")).into(), StatusCode::FORBIDDEN),
            (invalid("foo").into(), StatusCode::BAD_REQUEST),
            (wrap(invalid("foo")).into(), StatusCode::BAD_REQUEST),
            (conflict("foo").into(), StatusCode::CONFLICT),
            (wrap(conflict("foo")).into(), StatusCode::CONFLICT),
            (HttpError::new(code(404)).into(), StatusCode::NOT_FOUND),
            (wrap(HttpError::new(code(403))).into(), StatusCode::FORBIDDEN),
            (retryable(HttpError::new(code(502))).into(), StatusCode::BAD_GATEWAY),
        ];
        for (err, want) in cases {
            assert_eq!(status_code(err.as_ref()), want, "{err:?}");
        }
    }

    #[test]
    fn test_well_known_io_errors() {
        let missing = || io::Error::from(io::ErrorKind::NotFound);
        let denied = || io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(status_code(&missing()), StatusCode::NOT_FOUND);
        assert_eq!(status_code(&wrap(missing())), StatusCode::NOT_FOUND);
        assert_eq!(status_code(&denied()), StatusCode::FORBIDDEN);
        assert_eq!(status_code(&wrap(denied())), StatusCode::FORBIDDEN);
        assert_eq!(status_code(&conflict(missing())), StatusCode::CONFLICT);
        assert!(!is_not_retryable(&missing()));
    }

    #[test]
    fn test_status_code_for_outcome() {
        let ok: Result<(), io::Error> = Ok(());
        assert_eq!(status_code_for(&ok), StatusCode::OK);
        let err: Result<(), _> = Err(not_found("foo"));
        assert_eq!(status_code_for(&err), StatusCode::NOT_FOUND);
    }
}
