//! Configuration file layer for the NeuroAdapt binary.
//!
//! Connection settings live in a TOML file next to the invocation (path
//! overridable with `--config`). Only `endpoint` is mandatory; every other
//! field carries the default the original deployment shipped with. The
//! binary never starts with an invalid configuration.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tokio::fs;

/// Connection settings read from the configuration file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Base URL of the chat-completion resource.
    pub endpoint: String,
    /// Value of the `api-version` query parameter.
    pub api_version: String,
    /// Deployment requests are addressed to.
    pub model: String,
    /// Path of the file holding the API key.
    pub key_file: String,
    /// Upper bound in seconds for one request/response round trip.
    pub request_timeout_secs: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_version: String::from("2024-02-01"),
            model: String::from("gpt-4o"),
            key_file: String::from("api.txt"),
            request_timeout_secs: 120,
        }
    }
}

impl FileConfig {
    /// Loads the configuration from `path` and validates it.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse configuration file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the loaded values for consistency.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.endpoint.is_empty() {
            errors.push("endpoint must not be empty");
        }
        if self.api_version.is_empty() {
            errors.push("api_version must not be empty");
        }
        if self.model.is_empty() {
            errors.push("model must not be empty");
        }
        if self.key_file.is_empty() {
            errors.push("key_file must not be empty");
        }
        if self.request_timeout_secs == 0 {
            errors.push("request_timeout_secs must be greater than 0");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            bail!(
                "Configuration validation failed:\n  - {}",
                errors.join("\n  - ")
            )
        }
    }
}
