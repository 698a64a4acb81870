//! Map HTTP status codes to fetch errors.

use super::FetchError;

/// Reject error statuses: 404/410 become `NotFound`, anything else >= 400 is
/// `RequestFailed`. Statuses below 400 pass.
pub fn check_status(status: u16, url: &str) -> Result<(), FetchError> {
    match status {
        404 | 410 => Err(FetchError::NotFound {
            url: url.to_string(),
        }),
        s if s >= 400 => Err(FetchError::RequestFailed {
            status: s,
            url: url.to_string(),
        }),
        _ => Ok(()),
    }
}
