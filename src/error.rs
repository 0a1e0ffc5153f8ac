use thiserror::Error;

/// Main error type for the trip planner
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Auth(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TripError>;

impl TripError {
    /// Check if this error is retryable.
    ///
    /// Every failure ends the current request; nothing is retried automatically.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            TripError::Config(_) => "CONFIG_ERROR",
            TripError::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            TripError::Transport(_) => "TRANSPORT_ERROR",
            TripError::Timeout(_) => "TIMEOUT_ERROR",
            TripError::Server { .. } => "SERVER_ERROR",
            TripError::Decode(_) => "DECODE_ERROR",
            TripError::Serialization(_) => "SERIALIZATION_ERROR",
            TripError::Validation(_) => "VALIDATION_ERROR",
            TripError::Auth(_) => "AUTH_ERROR",
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
                "retryable": self.is_retryable()
            }
        })
    }
}

impl From<reqwest::Error> for TripError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            TripError::Timeout(err.to_string())
        } else if err.is_builder() {
            TripError::InvalidEndpoint(err.to_string())
        } else if err.is_decode() {
            TripError::Decode(err.to_string())
        } else {
            TripError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_payload_carries_status() {
        let err = TripError::Server {
            status: 503,
            message: "Server error".to_string(),
        };
        let payload = err.to_error_payload();
        assert_eq!(payload["error"]["code"], "SERVER_ERROR");
        assert_eq!(payload["error"]["message"], "Server error (503): Server error");
        assert_eq!(payload["error"]["retryable"], false);
    }

    #[test]
    fn validation_error_displays_message_only() {
        let err = TripError::Validation("Please enter a destination".to_string());
        assert_eq!(err.to_string(), "Please enter a destination");
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
    }
}
