use thiserror::Error;

/// Message used whenever a zero modulus is rejected.
pub const INVALID_MODULUS_MESSAGE: &str = "Key/modulus must be non-zero";

/// Errors raised by the checksum engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChecksumError {
    /// Modulus is zero, so no remainder can be computed
    #[error("{}", INVALID_MODULUS_MESSAGE)]
    InvalidModulus,
}

/// Errors reported by the HTTP API to the caller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// One or more required integers are absent or unparsable.
    ///
    /// Carries the comma-separated parameter list shown to the caller.
    #[error("Missing {}: {}", parameter_noun(.0), .0)]
    MissingParameters(&'static str),

    /// Modulus is zero (should map to HTTP 400)
    #[error("{}", INVALID_MODULUS_MESSAGE)]
    InvalidModulus,

    /// Endpoint called with an unsupported HTTP method (should map to HTTP 405)
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Background computation failed to complete (should map to HTTP 500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors from the interactive console front end
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Reading the prompt answer or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Engine rejected the entered values
    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    /// Input ended before all values were entered
    #[error("Input ended while waiting for {0}")]
    UnexpectedEof(&'static str),
}

fn parameter_noun(list: &str) -> &'static str {
    if list.contains(',') {
        "parameters"
    } else {
        "parameter"
    }
}

impl From<ChecksumError> for ApiError {
    fn from(err: ChecksumError) -> Self {
        match err {
            ChecksumError::InvalidModulus => ApiError::InvalidModulus,
        }
    }
}
