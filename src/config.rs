//! Doctor configuration
//!
//! Optional TOML file supplying the default target and transport limits;
//! everything has a sensible default so no file is required.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration for a diagnosis run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DoctorConfig {
    /// Default base address of the asset-chain API, used when the CLI is
    /// given none
    pub base_url: Option<String>,

    /// Per-request transport timeout in seconds. The core has no per-case
    /// timeout; this is the only bound on a stalled upstream.
    pub timeout_secs: u64,
}

impl Default for DoctorConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: 30,
        }
    }
}

impl DoctorConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load from `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DoctorConfig::default();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doctor.toml");
        std::fs::write(&path, "base_url = \"http://localhost:1919\"\n").unwrap();

        let config = DoctorConfig::load(&path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1919"));
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        assert!(DoctorConfig::load(Path::new("/nonexistent/doctor.toml")).is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = DoctorConfig::load_or_default(None).unwrap();
        assert_eq!(config, DoctorConfig::default());
    }
}
