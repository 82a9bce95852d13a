//! Configuration types for little-lint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::filter::ScanFilter;
use crate::types::{UnknownKind, ViolationKind};

/// Top-level configuration for little-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Violation kinds to keep (name, tag or code). Empty keeps all.
    #[serde(default)]
    pub select: Vec<String>,

    /// Violation kinds to drop (name, tag or code).
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File discovery settings.
    #[serde(default)]
    pub files: FilesConfig,

    /// Layout limits used by the built-in rules.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Import classification settings.
    #[serde(default)]
    pub imports: ImportsConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Builds the kind filter described by `select` and `ignore`.
    ///
    /// # Errors
    ///
    /// Returns an error if an entry names no known violation kind.
    pub fn scan_filter(&self) -> Result<ScanFilter, ConfigError> {
        let mut filter = ScanFilter::new();
        if !self.select.is_empty() {
            filter = filter.include_only(parse_kinds(&self.select)?);
        }
        if !self.ignore.is_empty() {
            filter = filter.exclude(parse_kinds(&self.ignore)?);
        }
        Ok(filter)
    }

    /// Returns true if `path` matches one of the `[files] exclude` globs.
    ///
    /// Invalid patterns never match.
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        self.files.exclude.iter().any(|pattern| {
            glob::Pattern::new(pattern).is_ok_and(|p| p.matches_path(path))
        })
    }
}

fn parse_kinds(names: &[String]) -> Result<Vec<ViolationKind>, ConfigError> {
    names
        .iter()
        .map(|name| name.parse::<ViolationKind>().map_err(ConfigError::from))
        .collect()
}

/// File discovery configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesConfig {
    /// Glob patterns to exclude from checking.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Whether to respect .gitignore files.
    #[serde(default = "default_true")]
    pub respect_gitignore: bool,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            respect_gitignore: true,
        }
    }
}

/// Layout limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Maximum line length in characters, tabs counted as four.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Blank lines required around top-level definitions.
    #[serde(default = "default_top_level_blank_lines")]
    pub top_level_blank_lines: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_line_length: default_max_line_length(),
            top_level_blank_lines: default_top_level_blank_lines(),
        }
    }
}

/// Import classification configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportsConfig {
    /// Top-level packages always treated as local.
    #[serde(default)]
    pub known_first_party: Vec<String>,

    /// Top-level packages always treated as third party.
    #[serde(default)]
    pub known_third_party: Vec<String>,

    /// Directories searched for local modules.
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,

    /// Directories searched for installed packages.
    #[serde(default)]
    pub site_packages: Vec<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_max_line_length() -> usize {
    79
}

fn default_top_level_blank_lines() -> usize {
    2
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// `select` or `ignore` names an unknown kind.
    #[error(transparent)]
    UnknownKind(#[from] UnknownKind),
}
