use std::error::Error;
use std::fmt;

/// Errors returned by the heatmaps.tf client.
#[derive(Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, protocol).
    Transport(reqwest::Error),
    /// The server answered with a non-success HTTP status.
    Status {
        /// HTTP status code returned by the server.
        status: reqwest::StatusCode,
        /// Full URL of the failed request.
        url: String,
    },
    /// A filter argument contained values outside its fixed vocabulary.
    /// Raised before any request is sent.
    InvalidFilter {
        /// Name of the offending argument.
        field: &'static str,
        /// The rejected values, in the order they were supplied.
        bad_values: Vec<String>,
    },
    /// The response body could not be decoded, or its shape is missing a
    /// section the enrichment step requires.
    MalformedResponse(String),
    /// Client construction failed (bad base URL or timing settings).
    InvalidConfig(String),
}

impl fmt::Display for ApiError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Status { status, url } => {
                write!(f, "HTTP status {} from {}", status, url)
            }
            ApiError::InvalidFilter { field, bad_values } => {
                write!(f, "Invalid {} value(s): {}", field, bad_values.join(", "))
            }
            ApiError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            ApiError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl Error for ApiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    /// Converts a `reqwest::Error` into an `ApiError`.
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err)
    }
}
