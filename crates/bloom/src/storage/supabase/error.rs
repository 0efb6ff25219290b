//! PostgREST error mapping.
//!
//! Maps `reqwest` failures and non-success responses to `RepositoryError`.

use bloom_core::storage::RepositoryError;
use reqwest::StatusCode;

/// Maps a `reqwest` error raised while sending or decoding.
///
/// - decode failures → `Serialization`
/// - request construction failures → `InvalidData`
/// - everything else (connect, timeout, TLS) → `ConnectionFailed`
pub fn map_reqwest_error(err: reqwest::Error) -> RepositoryError {
    if err.is_decode() {
        RepositoryError::Serialization(err.to_string())
    } else if err.is_builder() {
        RepositoryError::InvalidData(err.to_string())
    } else {
        RepositoryError::ConnectionFailed(err.to_string())
    }
}

/// Maps a non-success status and its body.
///
/// A unique violation (409) on insert becomes `AlreadyExists`; anything else
/// is a `QueryFailed` carrying the body PostgREST sent back.
pub fn map_status_error(
    status: StatusCode,
    body: &str,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match status {
        StatusCode::CONFLICT => RepositoryError::AlreadyExists {
            entity_type,
            id: id.to_string(),
        },
        _ => RepositoryError::QueryFailed(format!("{status}: {body}")),
    }
}
