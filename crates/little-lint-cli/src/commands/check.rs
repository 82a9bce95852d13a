//! Check command implementation.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use little_lint::{Config, LintResult, Linter, LinterError, ScanError, Violation};
use miette::{NamedSource, Report};

use crate::config_resolver;
use crate::OutputFormat;

/// Directories never descended into.
const SKIPPED_DIRS: &[&str] = &[".venv", "venv", "__pycache__", ".idea", ".git"];

/// Options of the `check` subcommand.
#[derive(Debug, Clone)]
pub struct CheckArgs {
    /// Files or directories to check.
    pub paths: Vec<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated kinds replacing the configured `select`.
    pub select: Option<String>,
    /// Comma-separated kinds replacing the configured `ignore`.
    pub ignore: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Never emit color codes.
    pub no_color: bool,
}

/// How a check run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every file parsed and nothing was reported.
    Clean,
    /// At least one violation was reported.
    Violations,
    /// At least one file could not be read or parsed.
    Failed,
}

impl Outcome {
    /// Process exit code for this outcome.
    #[must_use]
    pub fn exit_code(self) -> ExitCode {
        match self {
            Self::Clean => ExitCode::SUCCESS,
            Self::Violations => ExitCode::from(2),
            Self::Failed => ExitCode::from(1),
        }
    }
}

/// Runs the check command.
pub fn run(args: &CheckArgs, config_path: Option<&Path>) -> Result<Outcome> {
    let start = start_dir(&args.paths);
    let source = config_resolver::resolve(&start, config_path);
    let project_dir = source.project_root().map_or(start, Path::to_path_buf);

    let mut config = source.load()?;
    apply_overrides(&mut config, args, &project_dir);

    let linter = Linter::from_config(&config).context("Failed to build linter")?;
    let files = collect_files(&args.paths, &config);
    tracing::info!(
        "Checking {} file(s) with {} rules",
        files.len(),
        linter.registry().len()
    );

    let mut result = LintResult::new();
    let mut failed = false;
    for file in &files {
        match check_file(&linter, file) {
            Ok(violations) => result.record(file, violations),
            Err(e) => {
                failed = true;
                eprintln!("{e:?}");
            }
        }
    }

    let color = !args.no_color && std::io::stdout().is_terminal();
    super::output::print(&result, args.format, color)?;

    Ok(if failed {
        Outcome::Failed
    } else if result.is_clean() {
        Outcome::Clean
    } else {
        Outcome::Violations
    })
}

/// Checks one file, attaching the file text to syntax errors.
fn check_file(linter: &Linter, path: &Path) -> Result<Vec<Violation>, Report> {
    linter.check_file(path).map_err(|e| match e {
        LinterError::Scan(ScanError::Parse(err)) => {
            let report = Report::new(err);
            match std::fs::read_to_string(path) {
                Ok(source) => report
                    .with_source_code(NamedSource::new(path.display().to_string(), source)),
                Err(_) => report,
            }
        }
        io @ LinterError::Io { .. } => miette::miette!("{io}"),
        other => miette::miette!("{}: {other}", path.display()),
    })
}

/// Directory used to look up the configuration: the first path, or its
/// parent when it is a file.
fn start_dir(paths: &[PathBuf]) -> PathBuf {
    let first = paths.first().map_or(Path::new("."), PathBuf::as_path);
    if first.is_file() {
        first
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    } else {
        first.to_path_buf()
    }
}

/// Folds command-line options into the loaded configuration.
fn apply_overrides(config: &mut Config, args: &CheckArgs, project_dir: &Path) {
    if let Some(select) = &args.select {
        config.select = split_list(select);
    }
    if let Some(ignore) = &args.ignore {
        config.ignore = split_list(ignore);
    }
    config.files.exclude.extend(args.exclude.iter().cloned());

    if config.imports.source_roots.is_empty() {
        tracing::debug!("Using {} as source root", project_dir.display());
        config.imports.source_roots.push(project_dir.to_path_buf());
    }
}

fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Expands `paths` into the Python files to check, sorted.
///
/// Files named explicitly are always checked; directories contribute their
/// `.py` files, honoring `.gitignore` when configured.
fn collect_files(paths: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkBuilder::new(path)
            .git_ignore(config.files.respect_gitignore)
            .require_git(false)
            .hidden(false)
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .map_or(true, |name| !SKIPPED_DIRS.contains(&name))
            })
            .build();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {e}");
                    continue;
                }
            };
            let file = entry.path();
            if file.is_file()
                && file.extension().is_some_and(|ext| ext == "py")
                && !config.is_excluded(file)
            {
                files.push(file.to_path_buf());
            }
        }
    }
    files.sort();
    files.dedup();
    files
}
