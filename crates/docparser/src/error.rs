//! Error types for docparser.
//!
//! Every failure the client can produce is an [`Error`]. Local validation
//! problems are raised before any request is sent; remote and transport
//! failures are routed through the [`ErrorTranslator`] seam first.
//!
//! [`ErrorTranslator`]: crate::ErrorTranslator

/// Result type for all Docparser operations in this crate.
///
/// This is a convenience type alias that defaults to using [`Error`] as the error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error type for Docparser operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP client errors (connection, TLS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with an error status.
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, or the status reason when the body is empty
        message: String,
    },

    /// Local validation failed before any request was made.
    #[error("{message}")]
    InvalidInput {
        /// Human-readable description of the problem
        message: String,
    },

    /// File I/O errors
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Decoding a payload into a typed model failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get the HTTP status code if this is an HTTP/API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Error::Http(_) => "http",
            Error::Api { .. } => "api",
            Error::InvalidInput { .. } => "invalid_input",
            Error::Io(_) => "io",
            Error::Config { .. } => "config",
            Error::Serialization(_) => "serialization",
        }
    }

    /// Check if this is a client-side error (bad input, bad configuration, or a 4xx answer)
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::InvalidInput { .. }
            | Error::Config { .. }
            | Error::Io(_)
            | Error::Serialization(_) => true,
            Error::Api { status, .. } => (400..500).contains(status),
            Error::Http(_) => false,
        }
    }

    /// Check if this is a server-side error
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (500..600).contains(status),
            Error::Http(err) => err.status().is_some_and(|s| s.is_server_error()),
            _ => false,
        }
    }
}

impl From<jiff::Error> for Error {
    fn from(error: jiff::Error) -> Self {
        Error::invalid_input(format!("Invalid date value: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_categories() {
        let api_err = Error::api(404, "Not found");
        assert_eq!(api_err.category(), "api");
        assert_eq!(api_err.status_code(), Some(404));
        assert!(api_err.is_client_error());
        assert!(!api_err.is_server_error());

        let server_err = Error::api(502, "Bad gateway");
        assert!(server_err.is_server_error());
        assert!(!server_err.is_client_error());

        let input_err = Error::invalid_input("No such file.");
        assert_eq!(input_err.category(), "invalid_input");
        assert_eq!(input_err.status_code(), None);
        assert!(input_err.is_client_error());
    }

    #[test]
    fn test_invalid_input_message_is_verbatim() {
        let err = Error::invalid_input("Passed a directory, expected file.");
        assert_eq!(err.to_string(), "Passed a directory, expected file.");
    }
}
