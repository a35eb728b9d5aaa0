//! statusctl scanner - working-tree status of many Git repositories
//!
//! This crate expands a configuration of repositories and collections of
//! repositories into candidate paths, inspects each one concurrently and
//! produces an ordered report. It never writes to any repository.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::needless_pass_by_value
)]

pub mod config;
pub mod error;
pub mod expand;
pub mod inspect;
pub mod output;
pub mod report;
pub mod scan;
pub mod types;

pub use config::Config;
pub use error::{ScanError, ScanResult};
pub use inspect::{GitInspector, Inspect, StatusOutcome};
pub use report::{Entry, Report, SectionReport, Summary};
pub use scan::Scanner;
pub use types::{Candidate, Section, SectionKind};
