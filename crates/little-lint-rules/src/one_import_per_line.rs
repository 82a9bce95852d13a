//! Rule requiring one module per `import` statement.

use little_lint_core::{
    NodeCategory, NodeCheck, NodeRef, Registry, RuleInfo, RuleOptions, Violation, ViolationKind,
};

use crate::{RulesError, StyleRule};

/// Rule name for one-import-per-line.
pub const NAME: &str = "one-import-per-line";

const INFO: RuleInfo = RuleInfo::new(NAME, "Requires imports on separate lines");

/// Flags `import a, b`. `from m import a, b` is fine.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneImportPerLine;

impl OneImportPerLine {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks one `import` statement.
    #[must_use]
    pub fn check(node: NodeRef<'_>) -> Option<Violation> {
        let names = node
            .children()
            .filter(|c| matches!(c.category(), NodeCategory::DottedName | NodeCategory::Alias))
            .count();
        (names > 1).then(|| Violation::new(ViolationKind::MultipleImportsOnOneLine, node.line()))
    }
}

impl StyleRule for OneImportPerLine {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_node_rule(
            INFO,
            &[NodeCategory::Import],
            NodeCheck::node(Self::check),
            RuleOptions::new(),
        )?;
        Ok(())
    }
}
