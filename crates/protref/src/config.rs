//! Client configuration
//!
//! Service root and request timeout, with environment overrides.

use crate::error::{Result, UniprotError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Client Configuration Constants
// ============================================================================

/// Public UniProt REST service root.
pub const DEFAULT_SERVICE_ROOT: &str = "https://rest.uniprot.org";

/// Default timeout for a single request in seconds.
/// Can be overridden via UNIPROT_API_TIMEOUT_SECS.
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 60;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Service root; `/uniprotkb` is appended to it
    pub service_root: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_API_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_root: DEFAULT_SERVICE_ROOT.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a config for the given service root with the default timeout
    pub fn new(service_root: impl Into<String>) -> Self {
        Self {
            service_root: service_root.into(),
            ..Self::default()
        }
    }

    /// Load config from environment variables
    ///
    /// - `UNIPROT_SERVICE_ROOT`: service root URL
    /// - `UNIPROT_API_TIMEOUT_SECS`: request timeout; unparsable values fall back to the default
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(root) = std::env::var("UNIPROT_SERVICE_ROOT") {
            config.service_root = root;
        }

        config.timeout_secs = std::env::var("UNIPROT_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_API_TIMEOUT_SECS);

        config.validate()?;
        Ok(config)
    }

    /// Set the timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Reject configurations the client cannot work with
    pub fn validate(&self) -> Result<()> {
        let root = self.service_root.trim();
        if !(root.starts_with("http://") || root.starts_with("https://")) {
            return Err(UniprotError::config(format!(
                "service root '{}' must be an http(s) URL",
                self.service_root
            )));
        }
        if self.timeout_secs == 0 {
            return Err(UniprotError::config("timeout must be at least one second"));
        }
        Ok(())
    }

    /// Service root without a trailing slash
    pub fn service_root(&self) -> &str {
        self.service_root.trim().trim_end_matches('/')
    }
}
