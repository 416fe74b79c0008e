//! Error types for rainbow-end

use thiserror::Error;

/// Result type alias for rainbow-end operations
pub type Result<T> = std::result::Result<T, RainbowError>;

/// Errors surfaced to the host
///
/// Malformed source text never produces an error; only configuration does.
#[derive(Error, Debug)]
pub enum RainbowError {
    #[error("No language profile for: {0}")]
    UnknownLanguage(String),

    #[error("Language profile {language} failed to compile: {source}")]
    InvalidProfile {
        language: String,
        #[source]
        source: regex::Error,
    },

    #[error("Palette must contain at least one color")]
    EmptyPalette,

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid profile file: {0}")]
    ProfileFormat(#[from] toml::de::Error),

    #[error("{0}")]
    Message(String),
}

impl RainbowError {
    /// Whether this error means the scan should be skipped until the
    /// configuration is fixed
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            RainbowError::UnknownLanguage(_)
                | RainbowError::InvalidProfile { .. }
                | RainbowError::EmptyPalette
                | RainbowError::UnknownColor(_)
        )
    }
}
