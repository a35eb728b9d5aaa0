//! Handles: statusctl run

use crate::OutputFormat;
use anyhow::Context;
use statusctl_scanner::output::{section_text, to_json};
use statusctl_scanner::{Config, Scanner};
use std::io::{self, Write};
use std::path::Path;

/// Scan every configured path and print the report
///
/// Text output is streamed one section at a time; JSON is printed once the
/// whole scan is done.
pub fn execute(
    config_path: &Path,
    format: OutputFormat,
    jobs: Option<usize>,
) -> anyhow::Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    let scanner = Scanner::new().with_jobs(jobs);

    match format {
        OutputFormat::Text => {
            let mut out = io::stdout().lock();
            let mut write_result = Ok(());
            scanner.scan_config_each(&config, |section| {
                if write_result.is_ok() {
                    write_result = out
                        .write_all(section_text(section).as_bytes())
                        .and_then(|()| out.flush());
                }
            })?;
            write_result?;
            writeln!(out)?;
        }
        OutputFormat::Json => {
            let report = scanner.scan_config(&config)?;
            println!("{}", to_json(&report)?);
        }
    }

    Ok(())
}
