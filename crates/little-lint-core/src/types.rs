//! Core types for style violations and results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Severity level for style violations.
///
/// Each level maps to exactly one display treatment in the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Must be fixed.
    Error,
    /// Should be addressed.
    Warning,
    /// Not recommended, but tolerated.
    Advisory,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Advisory => write!(f, "advisory"),
        }
    }
}

/// The closed set of findings the built-in rules can report.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// Line longer than the configured maximum.
    MaxLineLength,
    /// Line indented with a tab character.
    TabIndentation,
    /// File does not end with a line break.
    NoBlankLineAtEnd,
    /// Line broken after a binary operator instead of before it.
    LineBreakAfterBinaryOperator,
    /// Block comment without a space after `#`.
    CommentWithoutSpace,
    /// Several modules imported by a single `import` statement.
    MultipleImportsOnOneLine,
    /// Module-level import placed after other statements.
    ImportsNotAtTop,
    /// Relative `from . import x` style import.
    RelativeImport,
    /// Import groups out of standard / third-party / local order.
    InvalidImportsOrder,
    /// Imported module could not be located.
    ModuleNotFound,
    /// Top-level function or class not surrounded by blank lines.
    TopLevelDefinitionNotSurrounded,
}

impl ViolationKind {
    /// Every kind, in code order.
    pub const ALL: [Self; 11] = [
        Self::MaxLineLength,
        Self::TabIndentation,
        Self::NoBlankLineAtEnd,
        Self::LineBreakAfterBinaryOperator,
        Self::CommentWithoutSpace,
        Self::MultipleImportsOnOneLine,
        Self::ImportsNotAtTop,
        Self::RelativeImport,
        Self::InvalidImportsOrder,
        Self::ModuleNotFound,
        Self::TopLevelDefinitionNotSurrounded,
    ];

    /// Returns the stable code (e.g., "LL001").
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MaxLineLength => "LL001",
            Self::TabIndentation => "LL002",
            Self::NoBlankLineAtEnd => "LL003",
            Self::LineBreakAfterBinaryOperator => "LL004",
            Self::CommentWithoutSpace => "LL005",
            Self::MultipleImportsOnOneLine => "LL006",
            Self::ImportsNotAtTop => "LL007",
            Self::RelativeImport => "LL008",
            Self::InvalidImportsOrder => "LL009",
            Self::ModuleNotFound => "LL010",
            Self::TopLevelDefinitionNotSurrounded => "LL011",
        }
    }

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MaxLineLength => "max-line-length",
            Self::TabIndentation => "tab-indentation",
            Self::NoBlankLineAtEnd => "no-blank-line-at-end",
            Self::LineBreakAfterBinaryOperator => "line-break-after-binary-operator",
            Self::CommentWithoutSpace => "comment-without-space",
            Self::MultipleImportsOnOneLine => "multiple-imports-on-one-line",
            Self::ImportsNotAtTop => "imports-not-at-top",
            Self::RelativeImport => "relative-import",
            Self::InvalidImportsOrder => "invalid-imports-order",
            Self::ModuleNotFound => "module-not-found",
            Self::TopLevelDefinitionNotSurrounded => "top-level-definition-not-surrounded",
        }
    }

    /// Returns the `CamelCase` tag used in debug output.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MaxLineLength => "MaxLineLength",
            Self::TabIndentation => "TabIndentation",
            Self::NoBlankLineAtEnd => "NoBlankLineAtEnd",
            Self::LineBreakAfterBinaryOperator => "LineBreakAfterBinaryOperator",
            Self::CommentWithoutSpace => "CommentWithoutSpace",
            Self::MultipleImportsOnOneLine => "MultipleImportsOnOneLine",
            Self::ImportsNotAtTop => "ImportsNotAtTop",
            Self::RelativeImport => "RelativeImport",
            Self::InvalidImportsOrder => "InvalidImportsOrder",
            Self::ModuleNotFound => "ModuleNotFound",
            Self::TopLevelDefinitionNotSurrounded => "TopLevelDefinitionNotSurrounded",
        }
    }

    /// Returns the severity every violation of this kind carries.
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::NoBlankLineAtEnd | Self::MultipleImportsOnOneLine | Self::ModuleNotFound => {
                Severity::Error
            }
            Self::RelativeImport => Severity::Advisory,
            Self::MaxLineLength
            | Self::TabIndentation
            | Self::LineBreakAfterBinaryOperator
            | Self::CommentWithoutSpace
            | Self::ImportsNotAtTop
            | Self::InvalidImportsOrder
            | Self::TopLevelDefinitionNotSurrounded => Severity::Warning,
        }
    }

    /// Returns the human-readable explanation attached to violations.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MaxLineLength => "Limit all lines to the maximum line length",
            Self::TabIndentation => "Spaces are the preferred indentation method",
            Self::NoBlankLineAtEnd => "End the file with a line break",
            Self::LineBreakAfterBinaryOperator => {
                "Break lines before binary operators, not after them"
            }
            Self::CommentWithoutSpace => "Block comments should start with '# '",
            Self::MultipleImportsOnOneLine => "Imports should usually be on separate lines",
            Self::ImportsNotAtTop => {
                "Imports are always put at the top of the file, just after any module \
                 comments and docstrings, and before module globals and constants"
            }
            Self::RelativeImport => {
                "Absolute imports are recommended, as they are usually more readable \
                 and give better error messages if the import system is misconfigured"
            }
            Self::InvalidImportsOrder => {
                "Imports should be grouped in order: standard library, \
                 related third party, local application"
            }
            Self::ModuleNotFound => "Module not found",
            Self::TopLevelDefinitionNotSurrounded => {
                "Surround top-level function and class definitions with two blank lines"
            }
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Error returned when a string names no known violation kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown violation kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ViolationKind {
    type Err = UnknownKind;

    /// Accepts the kebab-case name, the `CamelCase` tag or the code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                kind.name().eq_ignore_ascii_case(needle)
                    || kind.tag().eq_ignore_ascii_case(needle)
                    || kind.code().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownKind(needle.to_string()))
    }
}

/// A single reported style defect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// What was found.
    pub kind: ViolationKind,
    /// How serious it is.
    pub severity: Severity,
    /// Line number (1-indexed).
    pub line: usize,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a violation of `kind` at `line`, using the kind's severity and message.
    #[must_use]
    pub fn new(kind: ViolationKind, line: usize) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            line,
            message: kind.message().to_string(),
        }
    }

    /// Returns the code of this violation's kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation in line {}", self.kind, self.line)
    }
}

/// Violations found in one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// Path as given on the command line or found while walking.
    pub path: PathBuf,
    /// Violations in scan order.
    pub violations: Vec<Violation>,
}

/// Result of linting a set of files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Per-file reports, only for files with at least one violation.
    pub files: Vec<FileReport>,
    /// Number of files scanned.
    pub files_checked: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of scanning one file.
    pub fn record(&mut self, path: impl Into<PathBuf>, violations: Vec<Violation>) {
        self.files_checked += 1;
        if !violations.is_empty() {
            self.files.push(FileReport {
                path: path.into(),
                violations,
            });
        }
    }

    /// Iterates over every violation together with its file.
    pub fn violations(&self) -> impl Iterator<Item = (&FileReport, &Violation)> {
        self.files
            .iter()
            .flat_map(|file| file.violations.iter().map(move |v| (file, v)))
    }

    /// Total number of violations.
    #[must_use]
    pub fn total(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }

    /// Counts violations by severity as `(errors, warnings, advisories)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        self.violations()
            .fold((0, 0, 0), |(e, w, a), (_, v)| match v.severity {
                Severity::Error => (e + 1, w, a),
                Severity::Warning => (e, w + 1, a),
                Severity::Advisory => (e, w, a + 1),
            })
    }
}
