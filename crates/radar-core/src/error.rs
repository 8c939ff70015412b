//! Shared error type across Release Radar crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Input failed shape or range validation.
    ValidationFailed,
    /// A release with the same version already exists.
    Conflict,
    /// Referenced release does not exist.
    NotFound,
    /// Malformed request that is not a field-level validation issue.
    BadRequest,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::ValidationFailed => "VALIDATION_FAILED",
            ClientCode::Conflict => "CONFLICT",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, RadarError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum RadarError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl RadarError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            RadarError::Validation(_) => ClientCode::ValidationFailed,
            RadarError::Conflict(_) => ClientCode::Conflict,
            RadarError::NotFound(_) => ClientCode::NotFound,
            RadarError::BadRequest(_) => ClientCode::BadRequest,
            RadarError::Internal(_) => ClientCode::Internal,
        }
    }

    pub fn release_exists(version: &str) -> Self {
        RadarError::Conflict(format!("Release {version} already exists"))
    }

    pub fn release_not_found(version: &str) -> Self {
        RadarError::NotFound(format!("Release {version} not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_and_validation_are_distinct_codes() {
        let conflict = RadarError::release_exists("v1");
        let invalid = RadarError::Validation("commit too short".into());
        assert_ne!(conflict.client_code(), invalid.client_code());
        assert_eq!(conflict.client_code().as_str(), "CONFLICT");
        assert_eq!(conflict.to_string(), "Release v1 already exists");
    }

    #[test]
    fn not_found_message_names_version() {
        let err = RadarError::release_not_found("v9.9.9");
        assert_eq!(err.client_code(), ClientCode::NotFound);
        assert_eq!(err.to_string(), "Release v9.9.9 not found");
    }
}
