//! Wire types and error taxonomy for the lottery service API.

use serde::Deserialize;
use thiserror::Error;

/// The service wraps every response payload in a `data` field.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// Errors raised talking to the lottery service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, or protocol failure.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service rejected the session token.
    #[error("Authorization rejected by the service")]
    Unauthorized,

    /// Any other non-success status.
    #[error("Unexpected status {status} from {endpoint}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response parsed but a required field was absent.
    #[error("Response from {endpoint} is missing field `{field}`")]
    MissingField {
        endpoint: &'static str,
        field: &'static str,
    },

    /// The client could not be built from the given settings.
    #[error("Invalid service configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// True when the service answered with an authorization failure, as
    /// opposed to any other transport or remote error.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Result type for service API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_unwraps_data_field() {
        let envelope: Envelope<String> = serde_json::from_str(r#"{"data":"sign me"}"#).unwrap();
        assert_eq!(envelope.data, "sign me");
    }

    #[test]
    fn test_envelope_ignores_sibling_fields() {
        let envelope: Envelope<u64> =
            serde_json::from_str(r#"{"code":0,"data":7,"message":"ok"}"#).unwrap();
        assert_eq!(envelope.data, 7);
    }

    #[test]
    fn test_unauthorized_discriminant() {
        assert!(ApiError::Unauthorized.is_unauthorized());
        let other = ApiError::MissingField {
            endpoint: "/user/lottery/draw",
            field: "block_number",
        };
        assert!(!other.is_unauthorized());
    }
}
