//! Rule discouraging relative imports.
//!
//! # Good Patterns
//!
//! ```text
//! from mypkg import sibling
//! ```

use little_lint_core::{
    NodeCategory, NodeCheck, NodeRef, Registry, RuleInfo, RuleOptions, Violation, ViolationKind,
};

use crate::utils::import_target;
use crate::{RulesError, StyleRule};

/// Rule name for no-relative-imports.
pub const NAME: &str = "no-relative-imports";

const INFO: RuleInfo = RuleInfo::new(NAME, "Recommends absolute over relative imports");

/// Flags `from . import x` and `from .m import x`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRelativeImports;

impl NoRelativeImports {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks one `from ... import` statement.
    #[must_use]
    pub fn check(node: NodeRef<'_>) -> Option<Violation> {
        import_target(node)
            .filter(|target| target.is_relative())
            .map(|_| Violation::new(ViolationKind::RelativeImport, node.line()))
    }
}

impl StyleRule for NoRelativeImports {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_node_rule(
            INFO,
            &[NodeCategory::ImportFrom],
            NodeCheck::node(Self::check),
            RuleOptions::new(),
        )?;
        Ok(())
    }
}
