//! Per-repository status inspection
//!
//! An inspector turns one path into exactly one [`StatusOutcome`]. Every
//! failure is folded into the outcome so a broken repository cannot stop the
//! rest of a scan.

use git2::{Repository, Status, StatusOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Classification of one inspected path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum StatusOutcome {
    /// Nothing to commit and nothing untracked
    Clean,
    /// Modified, staged, deleted or untracked files present
    Unclean,
    /// Path is missing or is not a usable repository
    RepositoryError,
    /// Anything else, with the underlying error message
    Unexpected(String),
}

impl StatusOutcome {
    /// Report label without padding
    pub fn label(&self) -> &'static str {
        match self {
            StatusOutcome::Clean => "CLEAN",
            StatusOutcome::Unclean => "UNCLEAN",
            StatusOutcome::RepositoryError => "ERROR",
            StatusOutcome::Unexpected(_) => "UNKNOWN",
        }
    }

    /// Error detail, only present for [`StatusOutcome::Unexpected`]
    pub fn detail(&self) -> Option<&str> {
        match self {
            StatusOutcome::Unexpected(detail) => Some(detail),
            _ => None,
        }
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, StatusOutcome::Clean)
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.detail() {
            Some(detail) => write!(f, "{}: {detail}", self.label()),
            None => f.write_str(self.label()),
        }
    }
}

/// Something that can classify the working tree at an absolute path
///
/// Implementations must not panic or return early without an outcome; the
/// scanner calls them from many threads at once.
pub trait Inspect: Sync {
    fn inspect(&self, path: &Path) -> StatusOutcome;
}

impl<F> Inspect for F
where
    F: Fn(&Path) -> StatusOutcome + Sync,
{
    fn inspect(&self, path: &Path) -> StatusOutcome {
        self(path)
    }
}

/// Inspector backed by libgit2
#[derive(Debug, Clone, Copy, Default)]
pub struct GitInspector;

impl GitInspector {
    pub fn new() -> Self {
        Self
    }
}

impl Inspect for GitInspector {
    fn inspect(&self, path: &Path) -> StatusOutcome {
        // `open` only accepts a repository root; no upward discovery
        let repo = match Repository::open(path) {
            Ok(repo) => repo,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "not a repository");
                return StatusOutcome::RepositoryError;
            }
        };

        match count_changes(&repo) {
            Ok(0) => StatusOutcome::Clean,
            Ok(changes) => {
                tracing::debug!(path = %path.display(), changes, "working tree has changes");
                StatusOutcome::Unclean
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "status failed after open");
                StatusOutcome::Unexpected(e.message().to_string())
            }
        }
    }
}

/// Number of status entries that differ from the last commit
///
/// Untracked files are counted, ignored files are not. The index is only
/// read, never refreshed on disk.
fn count_changes(repo: &Repository) -> Result<usize, git2::Error> {
    let mut options = StatusOptions::new();
    options
        .include_untracked(true)
        .recurse_untracked_dirs(false)
        .include_ignored(false)
        .include_unmodified(false);

    let statuses = repo.statuses(Some(&mut options))?;
    Ok(statuses
        .iter()
        .filter(|entry| {
            let status = entry.status();
            status != Status::CURRENT && !status.is_ignored()
        })
        .count())
}
