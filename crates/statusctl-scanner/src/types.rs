//! Shared types for the statusctl scanner

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Section of the configuration a candidate came from
///
/// Sections are reported in the order of their declaration here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Members of a collection directory
    Collections,
    /// Standalone repositories
    Repositories,
}

impl SectionKind {
    /// Header used in reports and listings
    pub fn header(self) -> &'static str {
        match self {
            SectionKind::Collections => "collections",
            SectionKind::Repositories => "repositories",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// A path submitted for inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Path to inspect. Absolute for collection members, as configured for
    /// standalone repositories.
    pub path: PathBuf,
    /// Section the path belongs to
    pub section: SectionKind,
    /// Directory name inside the collection, used for ordering
    pub name: Option<String>,
}

impl Candidate {
    /// Candidate found inside a collection
    pub fn member(path: PathBuf, name: String) -> Self {
        Self {
            path,
            section: SectionKind::Collections,
            name: Some(name),
        }
    }

    /// Candidate taken directly from the repository list
    pub fn repository(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            section: SectionKind::Repositories,
            name: None,
        }
    }
}

/// An ordered group of candidates sharing a header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub kind: SectionKind,
    pub candidates: Vec<Candidate>,
}

impl Section {
    pub fn new(kind: SectionKind, candidates: Vec<Candidate>) -> Self {
        Self { kind, candidates }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
