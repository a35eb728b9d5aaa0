//! Plain text output formatter
//!
//! ```text
//!
//! collections:
//!   CLEAN    /home/me/src/work/api
//!   UNCLEAN  /home/me/src/work/web
//!
//! repositories:
//!   ERROR    /home/me/old
//!   UNKNOWN  /home/me/bare.git: cannot status bare repository
//!
//! ```

use crate::config::Config;
use crate::report::{Entry, Report, SectionReport};
use crate::types::SectionKind;
use std::fmt::Write;

/// Width of the outcome column, padding included
const LABEL_WIDTH: usize = 9;

/// Render a whole report
pub fn to_text(report: &Report) -> String {
    let mut output = String::new();
    for section in &report.sections {
        output.push_str(&section_text(section));
    }
    output.push('\n');
    output
}

/// Render one section: a blank line, the header and one line per entry
pub fn section_text(section: &SectionReport) -> String {
    let mut output = header(section.kind);
    for entry in &section.entries {
        output.push_str(&entry_line(entry));
    }
    output
}

/// Render the raw configuration without scanning anything
pub fn config_listing(config: &Config) -> String {
    let mut output = String::new();
    for kind in [SectionKind::Collections, SectionKind::Repositories] {
        output.push_str(&header(kind));
        for raw in config.entries(kind) {
            let _ = writeln!(output, "  {raw}");
        }
    }
    output.push('\n');
    output
}

fn header(kind: SectionKind) -> String {
    format!("\n{kind}:\n")
}

fn entry_line(entry: &Entry) -> String {
    let mut line = format!(
        "  {:<width$}{}",
        entry.outcome.label(),
        entry.path.display(),
        width = LABEL_WIDTH
    );
    if let Some(detail) = entry.outcome.detail() {
        let _ = write!(line, ": {detail}");
    }
    line.push('\n');
    line
}
