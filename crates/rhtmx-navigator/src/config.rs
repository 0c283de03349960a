// File: src/config.rs
// Purpose: Configuration parsing from navigator.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Navigator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct NavigatorConfig {
    #[serde(default)]
    pub deeplink: DeepLinkConfig,
}

/// Deep-link handling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeepLinkConfig {
    /// When false every incoming URL is ignored
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Accepted URL schemes, compared case-insensitively (empty: accept all)
    #[serde(default)]
    pub schemes: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            schemes: Vec::new(),
        }
    }
}

impl DeepLinkConfig {
    /// Whether links with this scheme may be translated
    pub fn accepts_scheme(&self, scheme: &str) -> bool {
        self.schemes.is_empty()
            || self
                .schemes
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme))
    }
}

impl NavigatorConfig {
    /// Load configuration from navigator.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: NavigatorConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./navigator.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("navigator.toml")
    }
}
