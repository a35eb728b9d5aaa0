//! statusctl CLI - keep track of many Git repositories at once
//!
//! Provides `statusctl run` and `statusctl list`.

mod commands;
mod logging;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use statusctl_scanner::config::{default_config_path, ensure_config_exists};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statusctl")]
#[command(about = "statusctl - working-tree status for all of your Git repositories")]
#[command(long_about = "statusctl - working-tree status for all of your Git repositories

The config file ($HOME/.config/statusctl/config.yaml) is split into `collections`
and `repositories`, both lists of paths. Each entry in `collections` is a
directory whose immediate subdirectories are Git repositories. Each entry in
`repositories` is a single Git repository.")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file to use instead of $HOME/.config/statusctl/config.yaml
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the Git status of every collection and repository
    #[command(visible_alias = "r")]
    Run {
        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Maximum number of repositories inspected at once
        #[arg(short, long, value_name = "N")]
        jobs: Option<usize>,
    },
    /// List the contents of the config file
    #[command(visible_alias = "l")]
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path()?,
    };

    if ensure_config_exists(&config_path)? {
        eprintln!(
            "Created empty config file at {}. Add collections and repositories to it, then run again.",
            config_path.display()
        );
        return Ok(());
    }

    match cli.command {
        Commands::Run { format, jobs } => commands::run::execute(&config_path, format, jobs),
        Commands::List => commands::list::execute(&config_path),
    }
}
