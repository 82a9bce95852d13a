//! Rule limiting the length of every line.
//!
//! Tabs count as four characters. Length is measured in characters, not
//! bytes.

use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};

use crate::{RulesError, StyleRule};

/// Rule name for max-line-length.
pub const NAME: &str = "max-line-length";

const INFO: RuleInfo = RuleInfo::new(NAME, "Limits lines to a maximum number of characters");

/// Flags lines longer than a limit.
#[derive(Debug, Clone)]
pub struct MaxLineLength {
    /// Maximum allowed characters per line.
    pub max: usize,
}

impl Default for MaxLineLength {
    fn default() -> Self {
        Self::new()
    }
}

impl MaxLineLength {
    /// Creates the rule with the default limit of 79.
    #[must_use]
    pub fn new() -> Self {
        Self { max: 79 }
    }

    /// Sets the maximum line length.
    #[must_use]
    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// Checks every line of `source`.
    #[must_use]
    pub fn check(&self, source: &str) -> Vec<Violation> {
        source
            .replace('\t', "    ")
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.trim_end_matches('\r').chars().count() > self.max)
            .map(|(index, _)| Violation::new(ViolationKind::MaxLineLength, index + 1))
            .collect()
    }
}

impl StyleRule for MaxLineLength {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_file_rule(INFO, move |source: &str| self.check(source))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(violations: &[Violation]) -> Vec<usize> {
        violations.iter().map(|v| v.line).collect()
    }

    #[test]
    fn flags_only_long_lines() {
        let source = format!("short\n{}\n{}\n", "x".repeat(79), "y".repeat(80));
        assert_eq!(lines(&MaxLineLength::new().check(&source)), vec![3]);
    }

    #[test]
    fn tabs_count_as_four() {
        let source = format!("\t{}\n", "x".repeat(76));
        assert_eq!(lines(&MaxLineLength::new().check(&source)), vec![1]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let source = format!("{}\n", "é".repeat(79));
        assert!(MaxLineLength::new().check(&source).is_empty());
    }

    #[test]
    fn long_comment_lines_are_flagged_too() {
        let source = format!("# {}\n", "c".repeat(80));
        assert_eq!(lines(&MaxLineLength::new().max(79).check(&source)), vec![1]);
    }

    #[test]
    fn custom_limit() {
        assert_eq!(lines(&MaxLineLength::new().max(3).check("abcd\nabc")), vec![1]);
    }
}
