//! Client configuration.
//!
//! The configuration file maps environment names to connection settings:
//!
//! ```yaml
//! dev:
//!   url: http://localhost:8089
//!   username: admin
//!   password: admin
//! prod:
//!   url: https://aspace.example.org/api
//!   username: maintenance
//!   password: secret
//! ```
//!
//! One environment is selected at startup and the rest of the file is ignored.

use crate::{AspaceError, AspaceResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Connection settings for a single ArchivesSpace environment.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    pub url: String,
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ClientConfig {
    /// Reads `path` and returns the settings for `environment`.
    ///
    /// # Errors
    ///
    /// Returns an `AspaceError` if:
    /// - the file cannot be read ([`AspaceError::ConfigRead`]),
    /// - the YAML is malformed ([`AspaceError::ConfigParse`]),
    /// - the environment is missing or has an empty url/username ([`AspaceError::Config`]).
    pub fn from_file(path: &Path, environment: &str) -> AspaceResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(AspaceError::ConfigRead)?;
        Self::from_yaml(&raw, environment)
    }

    /// Parses YAML text and returns the settings for `environment`.
    pub fn from_yaml(raw: &str, environment: &str) -> AspaceResult<Self> {
        let mut environments: HashMap<String, ClientConfig> =
            serde_yaml::from_str(raw).map_err(AspaceError::ConfigParse)?;

        let mut cfg = environments.remove(environment).ok_or_else(|| {
            AspaceError::Config(format!(
                "environment '{}' not found in client configuration",
                environment
            ))
        })?;

        cfg.url = cfg.url.trim().trim_end_matches('/').to_string();
        if cfg.url.is_empty() {
            return Err(AspaceError::Config(format!(
                "environment '{}' has an empty url",
                environment
            )));
        }
        if cfg.username.trim().is_empty() {
            return Err(AspaceError::Config(format!(
                "environment '{}' has an empty username",
                environment
            )));
        }

        Ok(cfg)
    }
}
