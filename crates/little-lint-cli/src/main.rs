//! little-lint CLI tool.
//!
//! Usage:
//! ```bash
//! little-lint check [OPTIONS] [PATHS]...
//! little-lint list-rules
//! little-lint init
//! ```
//!
//! Exit codes: 0 when no violations are found, 2 when some are, 1 on
//! usage, I/O or syntax errors.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

use commands::check::CheckArgs;

/// Style checker for Python source files
#[derive(Parser)]
#[command(name = "little-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check Python files for style violations
    Check {
        /// Files or directories to check (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only report these violation kinds (comma-separated names or codes)
        #[arg(long)]
        select: Option<String>,

        /// Never report these violation kinds (comma-separated names or codes)
        #[arg(long)]
        ignore: Option<String>,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List available rules and violation kinds
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version also arrive here
            let code = if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Check {
            paths,
            format,
            select,
            ignore,
            exclude,
            no_color,
        } => {
            let args = CheckArgs {
                paths,
                format,
                select,
                ignore,
                exclude,
                no_color,
            };
            let outcome = commands::check::run(&args, cli.config.as_deref())?;
            Ok(outcome.exit_code())
        }
        Commands::ListRules => {
            commands::list_rules::run()?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Init { force } => {
            commands::init::run(force)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
