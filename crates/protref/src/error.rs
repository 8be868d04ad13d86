//! Error types for protref
//!
//! Three kinds of failure reach callers:
//!
//! - transport failures (`Http`, `Status`, `JsonParse`) come from the fetcher
//! - shape failures (`Shape`) mean the payload did not have the expected layout
//! - absence (`Missing`) means the payload was well formed but lacked the data
//!
//! The lenient entry points turn shape failures and absence into empty values
//! (see [`crate::lenient`]); transport failures always propagate.

use thiserror::Error;

/// Result type alias for protref operations
pub type Result<T> = std::result::Result<T, UniprotError>;

#[derive(Error, Debug)]
pub enum UniprotError {
    /// HTTP request could not be completed
    #[error("Network request failed: {0}. Check your internet connection and the service root URL.")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-2xx status
    #[error("UniProt returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not JSON
    #[error("Failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Payload did not have the expected layout
    #[error("Error in {operation} for '{identifier}': {cause}")]
    Shape {
        operation: &'static str,
        identifier: String,
        cause: String,
    },

    /// Payload was well formed but the requested data is not there
    #[error("No {what} available in {operation} for '{identifier}'")]
    Missing {
        operation: &'static str,
        identifier: String,
        what: String,
    },

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check UNIPROT_SERVICE_ROOT and UNIPROT_API_TIMEOUT_SECS.")]
    Config(String),
}

impl UniprotError {
    /// Create a shape error
    pub fn shape(
        operation: &'static str,
        identifier: impl Into<String>,
        cause: impl std::fmt::Display,
    ) -> Self {
        Self::Shape {
            operation,
            identifier: identifier.into(),
            cause: cause.to_string(),
        }
    }

    /// Create a missing-data error
    pub fn missing(
        operation: &'static str,
        identifier: impl Into<String>,
        what: impl Into<String>,
    ) -> Self {
        Self::Missing {
            operation,
            identifier: identifier.into(),
            what: what.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error describes the payload rather than the transport
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Shape { .. } | Self::Missing { .. } | Self::JsonParse(_)
        )
    }

    /// True for [`UniprotError::Missing`]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// Operation that produced a data error
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Shape { operation, .. } | Self::Missing { operation, .. } => Some(operation),
            _ => None,
        }
    }

    /// Identifier a data error refers to
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Shape { identifier, .. } | Self::Missing { identifier, .. } => Some(identifier),
            _ => None,
        }
    }
}
