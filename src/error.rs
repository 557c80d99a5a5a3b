use reqwest::StatusCode;
use thiserror::Error;

/// Result type for projector operations
pub type Result<T> = std::result::Result<T, ProjectorError>;

/// Errors that can occur when talking to a projector control daemon
#[derive(Error, Debug)]
pub enum ProjectorError {
    /// The daemon could not be reached (connection refused, DNS failure, timeout)
    #[error("projector unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    /// A status fetch returned an unexpected HTTP status
    #[error("unexpected status response: {0}")]
    BadStatus(StatusCode),

    /// The status body was malformed or violated a payload invariant
    #[error("invalid status payload: {0}")]
    InvalidPayload(String),

    /// A source selection named an input outside the fixed source list
    #[error("invalid source: {0}")]
    InvalidSource(String),

    /// A volume fraction fell outside the 0.0..=1.0 range
    #[error("invalid volume fraction: {0}")]
    InvalidVolumeFraction(f64),

    /// The daemon rejected a command with a non-success HTTP status
    #[error("command rejected by projector: {0}")]
    DeviceRejected(StatusCode),

    /// A command required the projector to be on, but it is off
    #[error("projector is powered off")]
    PoweredOff,

    /// The underlying HTTP client could not be constructed
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
}
