use thiserror::Error;

use crate::client::BodyValue;

/// Errors returned by Stable Diffusion Web UI operations.
#[derive(Error, Debug)]
pub enum SdWebUiError {
    /// The server answered with a status code outside 200-299.
    ///
    /// `data` holds the best-effort parse of the response body: JSON when the
    /// body is valid JSON, the raw text otherwise. The API reports most
    /// failures this way, with diagnostic detail in the body.
    #[error("Request failed with status code {status}")]
    Status { status: u16, data: BodyValue },

    /// The request never produced a complete response (connection refused,
    /// DNS failure, TLS failure, mid-stream abort).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL or a request path could not be combined into a valid URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured or per-call header cannot be represented on the wire.
    #[error("invalid header {name}: {message}")]
    InvalidHeader { name: String, message: String },

    /// A required setting was absent from both the explicit options and the
    /// environment.
    #[error("Missing environment variable: {0}")]
    MissingEnv(String),
}

impl SdWebUiError {
    /// Status code of a status failure, `None` for every other kind.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided body attached to a status failure.
    pub fn data(&self) -> Option<&BodyValue> {
        match self {
            Self::Status { data, .. } => Some(data),
            _ => None,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, SdWebUiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_display_names_exact_code() {
        let err = SdWebUiError::Status {
            status: 404,
            data: BodyValue::Json(json!({"detail": "Not Found"})),
        };
        assert_eq!(err.to_string(), "Request failed with status code 404");
    }

    #[test]
    fn test_status_accessors() {
        let err = SdWebUiError::Status {
            status: 503,
            data: BodyValue::Text("busy".into()),
        };
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.data(), Some(&BodyValue::Text("busy".into())));
    }

    #[test]
    fn test_missing_env_display() {
        let err = SdWebUiError::MissingEnv("SD_API_URL".into());
        assert_eq!(err.to_string(), "Missing environment variable: SD_API_URL");
    }

    #[test]
    fn test_non_status_errors_carry_no_data() {
        let err = SdWebUiError::MissingEnv("SD_API_URL".into());
        assert_eq!(err.status(), None);
        assert!(err.data().is_none());
    }
}
