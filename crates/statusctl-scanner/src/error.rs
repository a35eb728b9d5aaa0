//! Error types for the statusctl scanner

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scanner operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that abort a scan
///
/// Failures while inspecting a single repository never show up here; they are
/// reported as a [`StatusOutcome`](crate::StatusOutcome) instead.
#[derive(Error, Debug)]
pub enum ScanError {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A collection directory could not be listed
    #[error("Cannot read collection {}: {source}", .path.display())]
    CollectionUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A path could not be made absolute
    #[error("Cannot resolve absolute path for {}: {source}", .path.display())]
    PathResolution {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file could not be read
    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse YAML
    #[error("Failed to parse config: {0}")]
    YamlParse(#[from] serde_yml::Error),

    /// Failed to serialize JSON
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Worker pool could not be created
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Home directory not found
    #[error("Home directory not found")]
    HomeNotFound,
}
