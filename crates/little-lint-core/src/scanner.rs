//! Scan engine: runs file, node and line rules over one source text.

use thiserror::Error;
use tracing::debug;

use crate::filter::ScanFilter;
use crate::parser::{ParseError, SourceParser};
use crate::registry::Registry;
use crate::types::Violation;
use crate::walker::TreeWalker;

/// Errors that abort a scan. No partial results are returned.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source text is not syntactically valid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The comment- and decorator-free re-parse requested by a rule failed.
    #[error("rule '{rule}': stripped source does not parse: {source}")]
    StrippedParse {
        /// Rule that asked for the stripped tree.
        rule: String,
        /// Underlying parse error.
        source: ParseError,
    },
}

impl ScanError {
    /// The parse error behind this failure.
    #[must_use]
    pub fn parse_error(&self) -> &ParseError {
        match self {
            Self::Parse(err) | Self::StrippedParse { source: err, .. } => err,
        }
    }
}

/// Runs every registered rule against source texts.
///
/// Results are concatenated in a fixed order: file rules, then node rules
/// in walk order, then line rules by line. Within each group rules fire in
/// registration order.
///
/// The scanner holds no per-call state; a shared reference may scan from
/// several threads at once.
pub struct Scanner<'a> {
    registry: &'a Registry,
    parser: &'a dyn SourceParser,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner over a fully built registry.
    #[must_use]
    pub fn new(registry: &'a Registry, parser: &'a dyn SourceParser) -> Self {
        Self { registry, parser }
    }

    /// Returns the registry this scanner runs.
    #[must_use]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Scans `source` and returns all violations.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] if the text, or its stripped re-parse, does
    /// not parse. File and line rule results are discarded in that case.
    pub fn scan(&self, source: &str) -> Result<Vec<Violation>, ScanError> {
        let tree = self.parser.parse(source)?;

        let mut violations = Vec::new();
        for rule in self.registry.file_rules() {
            rule.check(source).append_to(&mut violations);
        }
        let file_count = violations.len();

        violations.extend(TreeWalker::new(self.registry, self.parser).walk(&tree)?);
        let tree_count = violations.len() - file_count;

        for (index, line) in source.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            for rule in self.registry.line_rules() {
                violations.extend(rule.check(line, index + 1));
            }
        }

        debug!(
            "Scan found {} violations ({} file, {} tree, {} line)",
            violations.len(),
            file_count,
            tree_count,
            violations.len() - file_count - tree_count
        );
        Ok(violations)
    }

    /// Scans `source` and keeps the violations that pass `filter`.
    ///
    /// # Errors
    ///
    /// Same as [`Scanner::scan`].
    pub fn scan_filtered(
        &self,
        source: &str,
        filter: &ScanFilter,
    ) -> Result<Vec<Violation>, ScanError> {
        let violations = self.scan(source)?;
        if filter.is_pass_through() {
            return Ok(violations);
        }
        Ok(filter.apply(&violations))
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("registry", self.registry)
            .field("language", &self.parser.language_id())
            .finish()
    }
}
