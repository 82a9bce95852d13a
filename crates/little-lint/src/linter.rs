//! Python linter wiring the built-in rules to the tree-sitter parser.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use little_lint_core::{
    Config, ConfigError, ImportClassifier, Registry, ScanError, ScanFilter, Scanner, Violation,
};
use little_lint_python::PythonParser;
use little_lint_rules::{default_registry, registry_with, RulesError};
use thiserror::Error;
use tracing::debug;

/// Errors from building or running a [`Linter`].
#[derive(Debug, Error)]
pub enum LinterError {
    /// A built-in rule failed to build or register.
    #[error(transparent)]
    Rules(#[from] RulesError),

    /// The configuration names an unknown violation kind.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The source did not parse.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A source file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

/// A registry of the enabled built-in rules, a Python parser and the
/// configured kind filter.
///
/// Built once, then shared freely: scanning takes `&self` and keeps no
/// state between calls.
#[derive(Debug)]
pub struct Linter {
    registry: Registry,
    parser: PythonParser,
    filter: ScanFilter,
}

impl Linter {
    /// Creates a linter with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in rule fails to build.
    pub fn new() -> Result<Self, LinterError> {
        Self::from_config(&Config::default())
    }

    /// Creates a linter from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to build or `select`/`ignore` names
    /// an unknown kind.
    pub fn from_config(config: &Config) -> Result<Self, LinterError> {
        let registry = default_registry(config)?;
        Ok(Self::with_registry(registry, config.scan_filter()?))
    }

    /// Creates a linter whose import rules use `classifier`.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule fails to build or `select`/`ignore` names
    /// an unknown kind.
    pub fn with_classifier(
        config: &Config,
        classifier: Arc<dyn ImportClassifier>,
    ) -> Result<Self, LinterError> {
        let registry = registry_with(config, classifier)?;
        Ok(Self::with_registry(registry, config.scan_filter()?))
    }

    fn with_registry(registry: Registry, filter: ScanFilter) -> Self {
        debug!("Linter ready: {} rules, filter {:?}", registry.len(), filter);
        Self {
            registry,
            parser: PythonParser::new(),
            filter,
        }
    }

    /// The registered rules.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The kind filter applied by [`Linter::check`].
    #[must_use]
    pub fn filter(&self) -> &ScanFilter {
        &self.filter
    }

    /// Scans `source` with every registered rule, unfiltered.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` does not parse.
    pub fn scan(&self, source: &str) -> Result<Vec<Violation>, ScanError> {
        self.scanner().scan(source)
    }

    /// Scans `source` and applies `filter`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` does not parse.
    pub fn scan_filtered(
        &self,
        source: &str,
        filter: &ScanFilter,
    ) -> Result<Vec<Violation>, ScanError> {
        self.scanner().scan_filtered(source, filter)
    }

    /// Scans `source` and applies the configured filter.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` does not parse.
    pub fn check(&self, source: &str) -> Result<Vec<Violation>, ScanError> {
        self.scan_filtered(source, &self.filter)
    }

    /// Reads and checks one file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Violation>, LinterError> {
        let source = std::fs::read_to_string(path).map_err(|e| LinterError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.check(&source)?)
    }

    fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.registry, &self.parser)
    }
}
