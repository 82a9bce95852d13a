//! Rule requiring blank lines around top-level functions and classes.
//!
//! Runs on the module re-parsed without comment and decorator lines, so
//! a comment or decorator directly above a definition does not count as
//! a separating line. Violations carry the line numbers of the original
//! text.

use little_lint_core::{
    NodeCategory, NodeCheck, NodeRef, Registry, RuleInfo, RuleOptions, Violation, ViolationKind,
    IGNORE_COMMENTS_AND_DECORATORS,
};

use crate::{RulesError, StyleRule};

/// Rule name for top-level-spacing.
pub const NAME: &str = "top-level-spacing";

const INFO: RuleInfo = RuleInfo::new(
    NAME,
    "Requires blank lines around top-level function and class definitions",
);

/// Checks the gap before each top-level definition, and after it when the
/// next statement is not a definition.
#[derive(Debug, Clone)]
pub struct TopLevelSpacing {
    /// Required number of blank lines.
    pub blank_lines: usize,
}

impl Default for TopLevelSpacing {
    fn default() -> Self {
        Self::new()
    }
}

impl TopLevelSpacing {
    /// Creates the rule with the default of two blank lines.
    #[must_use]
    pub fn new() -> Self {
        Self { blank_lines: 2 }
    }

    /// Sets the required number of blank lines.
    #[must_use]
    pub fn blank_lines(mut self, blank_lines: usize) -> Self {
        self.blank_lines = blank_lines;
        self
    }

    /// Checks the statements of `module`.
    #[must_use]
    pub fn check(&self, module: NodeRef<'_>) -> Vec<Violation> {
        let gap = self.blank_lines + 1;
        let body: Vec<_> = module.children().collect();
        let mut violations = Vec::new();

        for (index, node) in body.iter().enumerate().skip(1) {
            if !node.category().is_definition() {
                continue;
            }

            let previous = body[index - 1];
            if node.line().saturating_sub(previous.end_line()) != gap {
                violations.push(Self::violation(*node));
                continue;
            }

            let Some(next) = body.get(index + 1) else {
                continue;
            };
            if !next.category().is_definition()
                && next.line().saturating_sub(node.end_line()) != gap
            {
                violations.push(Self::violation(*next));
            }
        }
        violations
    }

    fn violation(node: NodeRef<'_>) -> Violation {
        Violation::new(ViolationKind::TopLevelDefinitionNotSurrounded, node.origin_line())
    }
}

impl StyleRule for TopLevelSpacing {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_node_rule(
            INFO,
            &[NodeCategory::Module],
            NodeCheck::node(move |module| self.check(module)),
            RuleOptions::new().with(IGNORE_COMMENTS_AND_DECORATORS, true),
        )?;
        Ok(())
    }
}
