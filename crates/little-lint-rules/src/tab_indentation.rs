//! Rule forbidding tab-indented lines.

use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};

use crate::{RulesError, StyleRule};

/// Rule name for tab-indentation.
pub const NAME: &str = "tab-indentation";

const INFO: RuleInfo = RuleInfo::new(NAME, "Requires spaces instead of tabs for indentation");

/// Flags lines that start with a tab character.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabIndentation;

impl TabIndentation {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks every line of `source`.
    #[must_use]
    pub fn check(source: &str) -> Vec<Violation> {
        source
            .split('\n')
            .enumerate()
            .filter(|(_, line)| line.starts_with('\t'))
            .map(|(index, _)| Violation::new(ViolationKind::TabIndentation, index + 1))
            .collect()
    }
}

impl StyleRule for TabIndentation {
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
    fn flags_leading_tabs_only() {
        let violations = TabIndentation::check("if x:\n\tpass\n    y = '\t'\n");
        assert_eq!(violations, vec![Violation::new(ViolationKind::TabIndentation, 2)]);
    }
}
