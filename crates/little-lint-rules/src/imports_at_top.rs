//! Rule requiring module-level imports to come before other statements.
//!
//! A module docstring may precede the imports.

use little_lint_core::{
    NodeCategory, NodeCheck, NodeRef, Registry, RuleInfo, RuleOptions, Violation, ViolationKind,
};

use crate::utils::is_docstring;
use crate::{RulesError, StyleRule};

/// Rule name for imports-at-top.
pub const NAME: &str = "imports-at-top";

const INFO: RuleInfo = RuleInfo::new(NAME, "Requires imports at the top of the module");

/// Flags a module-level import preceded by a non-import statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportsAtTop;

impl ImportsAtTop {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks one import statement.
    #[must_use]
    pub fn check(node: NodeRef<'_>) -> Option<Violation> {
        let module = node.parent()?;
        if module.category() != NodeCategory::Module {
            return None;
        }

        let misplaced = module.children().enumerate().any(|(index, statement)| {
            !statement.category().is_import()
                && statement.line() < node.line()
                && !(index == 0 && is_docstring(statement))
        });
        misplaced.then(|| Violation::new(ViolationKind::ImportsNotAtTop, node.line()))
    }
}

impl StyleRule for ImportsAtTop {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_node_rule(
            INFO,
            &[NodeCategory::Import, NodeCategory::ImportFrom],
            NodeCheck::node(Self::check),
            RuleOptions::new(),
        )?;
        Ok(())
    }
}
