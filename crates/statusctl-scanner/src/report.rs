//! Report types for scan results

use crate::inspect::StatusOutcome;
use crate::types::{Candidate, SectionKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete result of a scan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Sections in report order
    pub sections: Vec<SectionReport>,
    /// Counts per outcome over all sections
    pub summary: Summary,
    /// When the scan finished
    pub scanned_at: DateTime<Utc>,
}

impl Report {
    pub fn new(sections: Vec<SectionReport>, scanned_at: DateTime<Utc>) -> Self {
        let summary = sections
            .iter()
            .flat_map(|s| &s.entries)
            .fold(Summary::default(), |mut summary, entry| {
                summary.record(&entry.outcome);
                summary
            });
        Self {
            sections,
            summary,
            scanned_at,
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    /// Section of the given kind, if it was scanned
    pub fn section(&self, kind: SectionKind) -> Option<&SectionReport> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// All entries, in report order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }
}

/// Inspected entries of one section, in submission order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub kind: SectionKind,
    pub entries: Vec<Entry>,
}

/// One inspected path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Absolute path that was inspected, or the configured path if it could
    /// not be resolved
    pub path: PathBuf,
    /// Directory name within its collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub outcome: StatusOutcome,
}

impl Entry {
    pub fn new(candidate: &Candidate, path: PathBuf, outcome: StatusOutcome) -> Self {
        Self {
            path,
            name: candidate.name.clone(),
            outcome,
        }
    }
}

/// Outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub clean: usize,
    pub unclean: usize,
    pub error: usize,
    pub unknown: usize,
}

impl Summary {
    fn record(&mut self, outcome: &StatusOutcome) {
        match outcome {
            StatusOutcome::Clean => self.clean += 1,
            StatusOutcome::Unclean => self.unclean += 1,
            StatusOutcome::RepositoryError => self.error += 1,
            StatusOutcome::Unexpected(_) => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.clean + self.unclean + self.error + self.unknown
    }

    /// Whether every inspected path was clean
    pub fn all_clean(&self) -> bool {
        self.clean == self.total()
    }
}
