use thiserror::Error;

/// Fixed message shown for any failed submission. The presentation layer
/// never distinguishes between "unparseable" and other failures.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input. Please enter in the form T(N) = aT(N/b) + O(N^d), T(N) = aT(N) + O(N^d), or T(N) = c_1T(N-1) + c_2T(N-2) + ... + O(1).";

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("input matches none of the supported recurrence forms")]
    FormatError,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SolverError {
    /// Message to display for a failed submission, uniform across error kinds.
    pub fn user_friendly_message(&self) -> &'static str {
        INVALID_INPUT_MESSAGE
    }
}

pub type Result<T> = std::result::Result<T, SolverError>;
