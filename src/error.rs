//! Domain error taxonomy for provider calls.
//!
//! Status classification happens once, here: every higher component relies
//! on these kinds instead of re-inspecting HTTP status codes.

use reqwest::StatusCode;
use thiserror::Error;

/// Failure kinds surfaced by the remote client and everything built on it.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The provider rejected the credential (HTTP 401).
    #[error("authentication failed, check the configured access token")]
    AuthenticationFailed,

    /// Rate limit exceeded or access forbidden (HTTP 403).
    #[error("rate limit exceeded or access forbidden")]
    RateLimited,

    /// The requested account, repository or resource does not exist (HTTP 404).
    #[error("requested resource not found")]
    NotFound,

    /// Any other non-2xx answer, carrying the provider's message if it sent one.
    #[error("provider error: {0}")]
    Provider(String),

    /// The request never produced a response; propagated unchanged.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Map a non-success status (plus the provider's optional `message` body
/// field) onto the domain taxonomy.
pub(crate) fn classify_status(status: StatusCode, message: Option<String>) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::AuthenticationFailed,
        StatusCode::FORBIDDEN => ApiError::RateLimited,
        StatusCode::NOT_FOUND => ApiError::NotFound,
        _ => ApiError::Provider(
            message.unwrap_or_else(|| format!("unexpected status {status}")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_maps_to_authentication_failed() {
        let error = classify_status(StatusCode::UNAUTHORIZED, None);
        assert!(matches!(error, ApiError::AuthenticationFailed));
    }

    #[test]
    fn forbidden_maps_to_rate_limited() {
        let error = classify_status(StatusCode::FORBIDDEN, Some("slow down".into()));
        assert!(matches!(error, ApiError::RateLimited));
    }

    #[test]
    fn not_found_maps_to_not_found() {
        let error = classify_status(StatusCode::NOT_FOUND, None);
        assert!(matches!(error, ApiError::NotFound));
    }

    #[test]
    fn other_statuses_carry_the_provider_message() {
        let error = classify_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            Some("backend exploded".into()),
        );
        match error {
            ApiError::Provider(message) => assert_eq!(message, "backend exploded"),
            other => panic!("expected Provider, got {other:?}"),
        }
    }

    #[test]
    fn missing_message_falls_back_to_the_status() {
        let error = classify_status(StatusCode::BAD_GATEWAY, None);
        match error {
            ApiError::Provider(message) => assert!(message.contains("502")),
            other => panic!("expected Provider, got {other:?}"),
        }
    }
}
