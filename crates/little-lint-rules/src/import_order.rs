//! Rule enforcing the grouping order of module-level imports.
//!
//! # Rationale
//!
//! Imports are grouped as `__future__`, standard library, third party,
//! then local modules. An import whose module cannot be located is
//! reported separately and does not take part in the ordering.

use std::sync::Arc;

use little_lint_core::{
    ImportClassifier, NodeCategory, NodeCheck, NodeRef, OriginKind, Registry, RuleInfo,
    RuleOptions, Violation, ViolationKind,
};

use crate::utils::import_target;
use crate::{RulesError, StyleRule};

/// Rule name for import-order.
pub const NAME: &str = "import-order";

const INFO: RuleInfo = RuleInfo::new(
    NAME,
    "Requires imports grouped as future, standard library, third party, local",
);

/// Checks module-level import grouping with an [`ImportClassifier`].
#[derive(Clone)]
pub struct ImportOrder {
    classifier: Arc<dyn ImportClassifier>,
}

impl ImportOrder {
    /// Creates the rule with the given classifier.
    #[must_use]
    pub fn new(classifier: Arc<dyn ImportClassifier>) -> Self {
        Self { classifier }
    }

    /// Checks the imports directly under `module`.
    #[must_use]
    pub fn check(&self, module: NodeRef<'_>) -> Vec<Violation> {
        let mut imports: Vec<_> = module
            .children()
            .filter(|n| n.category().is_import())
            .collect();
        imports.sort_by_key(NodeRef::line);

        let mut violations = Vec::new();
        let mut previous = OriginKind::NotFound;
        for import in imports {
            let origin = import_target(import)
                .map_or(OriginKind::NotFound, |target| self.classifier.classify(&target));

            if origin == OriginKind::NotFound {
                violations.push(Violation::new(ViolationKind::ModuleNotFound, import.line()));
                continue;
            }
            if previous > origin {
                violations.push(Violation::new(ViolationKind::InvalidImportsOrder, import.line()));
            }
            previous = origin;
        }
        violations
    }
}

impl std::fmt::Debug for ImportOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImportOrder").finish_non_exhaustive()
    }
}

impl StyleRule for ImportOrder {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_node_rule(
            INFO,
            &[NodeCategory::Module],
            NodeCheck::node(move |module| self.check(module)),
            RuleOptions::new(),
        )?;
        Ok(())
    }
}
