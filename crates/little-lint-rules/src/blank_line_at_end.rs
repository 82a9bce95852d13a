//! Rule requiring a line break at the end of the file.

use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};

use crate::{RulesError, StyleRule};

/// Rule name for blank-line-at-end.
pub const NAME: &str = "blank-line-at-end";

const INFO: RuleInfo = RuleInfo::new(NAME, "Requires the file to end with a line break");

/// Flags files whose last line has content after the final line break.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineAtEnd;

impl BlankLineAtEnd {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks the last line of `source`.
    #[must_use]
    pub fn check(source: &str) -> Option<Violation> {
        let count = source.split('\n').count();
        let last = source.rsplit('\n').next().unwrap_or_default();
        last.chars()
            .any(|c| !c.is_whitespace())
            .then(|| Violation::new(ViolationKind::NoBlankLineAtEnd, count))
    }
}

impl StyleRule for BlankLineAtEnd {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_file_rule(INFO, Self::check)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_final_newline_is_reported_at_line_count() {
        let violation = BlankLineAtEnd::check("\n\ndef some():\n    print('Hello world!')");
        assert_eq!(violation, Some(Violation::new(ViolationKind::NoBlankLineAtEnd, 4)));
    }

    #[test]
    fn trailing_whitespace_only_line_is_fine() {
        assert_eq!(BlankLineAtEnd::check("x = 1\n             "), None);
        assert_eq!(BlankLineAtEnd::check("x = 1\n"), None);
        assert_eq!(BlankLineAtEnd::check(""), None);
    }
}
