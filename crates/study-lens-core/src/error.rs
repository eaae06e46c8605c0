//! Error types for study-lens-core.
//!
//! Analysis itself never fails: every scorer degrades to a documented
//! default. Errors only arise at the edges, when loading configuration or
//! parsing a category name supplied by a caller.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur when interpreting caller-supplied analysis inputs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    /// An unknown subject name was provided.
    #[error("unknown subject: {name}. Use: {available}")]
    UnknownSubject {
        /// The subject name that was requested.
        name: String,
        /// Comma-separated list of available subject names.
        available: String,
    },

    /// An unknown learning style name was provided.
    #[error("unknown learning style: {name}. Use: {available}")]
    UnknownStyle {
        /// The style name that was requested.
        name: String,
        /// Comma-separated list of available style names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;
