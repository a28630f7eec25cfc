//! Chat client error types.

use thiserror::Error;

/// Errors that can occur when making chat completion calls.
#[derive(Debug, Error)]
pub enum LLMError {
    /// HTTP request failed (connect, timeout, or body decode)
    #[error("http request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("api error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Response parsed but is missing an expected part
    #[error("malformed provider response: {0}")]
    ResponseShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = LLMError::Api {
            status: 429,
            message: "rate limit exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "api error (status 429): rate limit exceeded"
        );
    }

    #[test]
    fn response_shape_display() {
        let err = LLMError::ResponseShape("response contained no choices".to_string());
        assert!(err.to_string().contains("no choices"));
    }
}
