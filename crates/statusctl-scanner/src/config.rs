//! Configuration model and loader
//!
//! The configuration lives at `$HOME/.config/statusctl/config.yaml` and lists
//! two kinds of paths:
//!
//! ```yaml
//! collections:
//!   - /home/me/src/work
//! repositories:
//!   - /opt/dotfiles
//! ```
//!
//! Entries are kept exactly as written. They are not checked at load time,
//! and `~` is not expanded.

use crate::error::{ScanError, ScanResult};
use crate::types::SectionKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory under the home directory holding the config file
const CONFIG_DIR: [&str; 2] = [".config", "statusctl"];

/// Config file name
const CONFIG_FILE: &str = "config.yaml";

/// Parsed configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directories whose immediate subdirectories are repositories
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub collections: Vec<String>,
    /// Individual repositories
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub repositories: Vec<String>,
}

impl Config {
    /// Parse a YAML document
    ///
    /// An empty or comment-only document yields an empty configuration.
    pub fn from_yaml(content: &str) -> ScanResult<Self> {
        let has_content = content
            .lines()
            .map(str::trim)
            .any(|line| !line.is_empty() && !line.starts_with('#') && line != "---");
        if !has_content {
            return Ok(Self::default());
        }
        let config: Option<Config> = serde_yml::from_str(content)?;
        Ok(config.unwrap_or_default())
    }

    /// Read and parse the config file at `path`
    pub fn load(path: &Path) -> ScanResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScanError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            collections = config.collections.len(),
            repositories = config.repositories.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Raw entries of one section
    pub fn entries(&self, kind: SectionKind) -> &[String] {
        match kind {
            SectionKind::Collections => &self.collections,
            SectionKind::Repositories => &self.repositories,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.repositories.is_empty()
    }
}

/// Config file location relative to a home directory
pub fn config_path_in(home: &Path) -> PathBuf {
    let mut path = home.to_path_buf();
    path.extend(CONFIG_DIR);
    path.push(CONFIG_FILE);
    path
}

/// Config file location for the current user
pub fn default_config_path() -> ScanResult<PathBuf> {
    let home = dirs::home_dir().ok_or(ScanError::HomeNotFound)?;
    Ok(config_path_in(&home))
}

/// Create an empty config file (and its parent directories) if none exists
///
/// Returns `true` when the file was created.
pub fn ensure_config_exists(path: &Path) -> ScanResult<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::File::create(path)?;
    tracing::info!(path = %path.display(), "created empty config");
    Ok(true)
}
