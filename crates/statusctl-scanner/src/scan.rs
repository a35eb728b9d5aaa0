//! Scan coordination
//!
//! Each section is inspected in parallel on a rayon pool and joined before the
//! next one starts. Results are collected by index, so the report keeps the
//! submission order no matter which inspection finishes first.

use crate::config::Config;
use crate::error::ScanResult;
use crate::expand::{plan, resolve_absolute};
use crate::inspect::{GitInspector, Inspect, StatusOutcome};
use crate::report::{Entry, Report, SectionReport};
use crate::types::{Candidate, Section};
use chrono::Utc;
use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};

/// The main scanner struct
#[derive(Debug, Default)]
pub struct Scanner<I = GitInspector> {
    inspector: I,
    /// Worker count; `None` uses the global rayon pool
    jobs: Option<usize>,
}

impl Scanner {
    /// Create a scanner backed by git
    #[must_use]
    pub fn new() -> Self {
        Self {
            inspector: GitInspector::new(),
            jobs: None,
        }
    }
}

impl<I: Inspect> Scanner<I> {
    /// Replace the inspector
    #[must_use]
    pub fn with_inspector<J: Inspect>(self, inspector: J) -> Scanner<J> {
        Scanner {
            inspector,
            jobs: self.jobs,
        }
    }

    /// Limit the number of concurrent inspections
    ///
    /// `None` or `Some(0)` falls back to the global pool.
    #[must_use]
    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs.filter(|&n| n > 0);
        self
    }

    /// Expand and scan a whole configuration
    ///
    /// # Errors
    /// Returns an error if a collection cannot be expanded; no repository is
    /// inspected in that case.
    pub fn scan_config(&self, config: &Config) -> ScanResult<Report> {
        self.scan_config_each(config, |_| {})
    }

    /// Expand and scan a whole configuration, handing each section to
    /// `on_section` as soon as it has been joined
    pub fn scan_config_each<F>(&self, config: &Config, on_section: F) -> ScanResult<Report>
    where
        F: FnMut(&SectionReport),
    {
        let sections = plan(config)?;
        self.scan_each(sections, on_section)
    }

    /// Scan prepared sections
    pub fn scan(&self, sections: Vec<Section>) -> ScanResult<Report> {
        self.scan_each(sections, |_| {})
    }

    /// Scan prepared sections, handing each one to `on_section` as soon as it
    /// has been joined
    pub fn scan_each<F>(&self, sections: Vec<Section>, mut on_section: F) -> ScanResult<Report>
    where
        F: FnMut(&SectionReport),
    {
        let pool = match self.jobs {
            Some(jobs) => Some(rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?),
            None => None,
        };

        let total: usize = sections.iter().map(Section::len).sum();
        tracing::info!(
            sections = sections.len(),
            candidates = total,
            jobs = ?self.jobs,
            "starting scan"
        );

        let mut reports = Vec::with_capacity(sections.len());
        for section in sections {
            let report = match &pool {
                Some(pool) => pool.install(|| self.scan_section(&section)),
                None => self.scan_section(&section),
            };
            on_section(&report);
            reports.push(report);
        }

        let report = Report::new(reports, Utc::now());
        let summary = report.summary();
        tracing::info!(?summary, all_clean = summary.all_clean(), "scan complete");
        Ok(report)
    }

    /// Inspect every candidate of one section and wait for all of them
    pub fn scan_section(&self, section: &Section) -> SectionReport {
        let entries: Vec<Entry> = section
            .candidates
            .par_iter()
            .map(|candidate| self.inspect_candidate(candidate))
            .collect();
        debug_assert_eq!(entries.len(), section.candidates.len());

        SectionReport {
            kind: section.kind,
            entries,
        }
    }

    fn inspect_candidate(&self, candidate: &Candidate) -> Entry {
        let path = match resolve_absolute(&candidate.path) {
            Ok(path) => path,
            Err(e) => {
                return Entry::new(
                    candidate,
                    candidate.path.clone(),
                    StatusOutcome::Unexpected(e.to_string()),
                )
            }
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.inspector.inspect(&path)))
            .unwrap_or_else(|_| StatusOutcome::Unexpected("inspection panicked".to_string()));
        tracing::debug!(path = %path.display(), outcome = outcome.label(), "inspected");

        Entry::new(candidate, path, outcome)
    }
}
