//! Handles: statusctl list

use anyhow::Context;
use statusctl_scanner::output::config_listing;
use statusctl_scanner::Config;
use std::path::Path;

/// Print the configured paths without scanning them
pub fn execute(config_path: &Path) -> anyhow::Result<()> {
    let config = Config::load(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    print!("{}", config_listing(&config));
    Ok(())
}
