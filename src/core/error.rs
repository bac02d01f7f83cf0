//! Error types for syntax_filters
//!
//! This module provides structured error handling using thiserror.

use thiserror::Error;

use crate::core::icons::IconError;
use crate::core::pattern::PatternError;

/// Result type alias for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors that can occur while managing syntax filters and icons
#[derive(Error, Debug)]
pub enum FilterError {
    /// IO error during preference file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Style token not in the known style set
    #[error("Unknown syntax style: {token}")]
    UnknownStyle { token: String },

    /// Serialized filter group without a style/filters separator
    #[error("Malformed filter group: {group}")]
    MalformedFilterGroup { group: String },

    /// Wildcard filter could not be compiled
    #[error("{0}")]
    Pattern(#[from] PatternError),

    /// Icon resource could not be loaded
    #[error("{0}")]
    Icon(#[from] IconError),
}

impl FilterError {
    /// Create an unknown style error
    pub fn unknown_style(token: impl Into<String>) -> Self {
        FilterError::UnknownStyle {
            token: token.into(),
        }
    }

    /// Create a malformed filter group error
    pub fn malformed_group(group: impl Into<String>) -> Self {
        FilterError::MalformedFilterGroup {
            group: group.into(),
        }
    }
}
