use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamCowboyError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("System clock error: {0}")]
    ClockError(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),
}

impl TeamCowboyError {
    /// Whether the remote service reported a failure it could not recover from
    /// (5xx or an unclassified status), as opposed to a local or transport problem.
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::ServerError { .. })
    }
}

impl From<serde_json::Error> for TeamCowboyError {
    fn from(err: serde_json::Error) -> Self {
        Self::DecodeError(err.to_string())
    }
}

impl From<reqwest::Error> for TeamCowboyError {
    fn from(err: reqwest::Error) -> Self {
        Self::NetworkError(err.to_string())
    }
}
