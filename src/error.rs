//! Error types for moment parsing and formatting.

/// Errors produced when turning user input into a calendar moment or a
/// format pattern.
///
/// Classification never fails; only parsing, local-time construction and
/// caller-supplied format patterns can.
#[derive(Debug, thiserror::Error)]
pub enum DateKitError {
    #[error("Invalid moment: {0}")]
    InvalidMoment(String),

    #[error("Local time does not exist: {0}")]
    NonexistentLocalTime(String),

    #[error("Invalid format pattern: {0}")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, DateKitError>;
