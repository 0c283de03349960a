// File: src/error.rs
// Purpose: Error types for navigation

use thiserror::Error;

/// Errors surfaced by the navigator.
///
/// Unknown paths, missing parameters and host-less deep links are not
/// errors; those come back as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    /// Serialized parameter or route data is corrupt or incompatible
    #[error("failed to decode route data: {0}")]
    Decoding(String),

    /// A caller value could not be serialized into an object parameter
    #[error("failed to encode route parameter: {0}")]
    Encoding(String),

    /// The path already has a view factory and overwrite was not requested
    #[error("route '{0}' already registered; pass overwrite = true to replace it")]
    DuplicateRoute(String),

    /// Routes are keyed by path, so the path cannot be empty
    #[error("route path must not be empty")]
    EmptyPath,
}

impl From<serde_json::Error> for NavError {
    fn from(err: serde_json::Error) -> Self {
        NavError::Decoding(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
