//! Depth-first rule dispatch over a syntax tree.

use tracing::{debug, trace};

use crate::parser::SourceParser;
use crate::registry::{NodeRuleRecord, Registry};
use crate::scanner::ScanError;
use crate::syntax::{NodeId, NodeRef, ParentLinks, SyntaxTree};
use crate::types::Violation;

/// Re-parse of the source without comment and decorator lines.
struct StrippedTree {
    tree: SyntaxTree,
    links: ParentLinks,
}

/// Visits every node of a tree once, pre-order, and runs the node rules
/// that apply to it.
///
/// Parent links are recorded as the walk descends, so a rule sees the
/// parents of the node it is given and of every ancestor.
pub struct TreeWalker<'a> {
    registry: &'a Registry,
    parser: &'a dyn SourceParser,
}

impl<'a> TreeWalker<'a> {
    /// Creates a walker over the node rules of `registry`.
    ///
    /// `parser` is only used for rules that ask for a comment- and
    /// decorator-free tree.
    #[must_use]
    pub fn new(registry: &'a Registry, parser: &'a dyn SourceParser) -> Self {
        Self { registry, parser }
    }

    /// Walks `tree` and returns the violations in visit order.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::StrippedParse`] if a rule needs the stripped
    /// re-parse and the stripped text does not parse.
    pub fn walk(&self, tree: &SyntaxTree) -> Result<Vec<Violation>, ScanError> {
        let mut violations = Vec::new();
        let mut links = ParentLinks::new(tree);
        let mut stripped: Option<StrippedTree> = None;
        let mut visited = 0usize;

        let mut stack: Vec<(NodeId, Option<NodeId>)> = vec![(tree.root_id(), None)];
        while let Some((id, parent)) = stack.pop() {
            links.set(id, parent);
            visited += 1;

            let category = tree.node(id).category;
            for rule in self.registry.resolve(category) {
                trace!("{} on {} at line {}", rule.info.name, category, tree.node(id).line);
                let output = if rule.flags.ignore_comments_and_decorators {
                    let stripped = self.stripped(&mut stripped, tree.source(), rule)?;
                    rule.check.invoke(stripped.tree.root(&stripped.links))
                } else {
                    rule.check.invoke(NodeRef::new(tree, &links, id))
                };
                output.append_to(&mut violations);
            }

            stack.extend(
                tree.node(id)
                    .children
                    .iter()
                    .rev()
                    .map(|&child| (child, Some(id))),
            );
        }

        debug!(
            "Walked {} nodes, {} node violations",
            visited,
            violations.len()
        );
        Ok(violations)
    }

    fn stripped<'s>(
        &self,
        slot: &'s mut Option<StrippedTree>,
        source: &str,
        rule: &NodeRuleRecord,
    ) -> Result<&'s StrippedTree, ScanError> {
        match slot {
            Some(stripped) => Ok(stripped),
            slot => {
                debug!("Re-parsing without comments and decorators for {}", rule.info.name);
                let tree = self
                    .parser
                    .parse_stripped(source)
                    .map_err(|source| ScanError::StrippedParse {
                        rule: rule.info.name.to_string(),
                        source,
                    })?;
                let links = tree.parent_links();
                Ok(slot.insert(StrippedTree { tree, links }))
            }
        }
    }
}

impl std::fmt::Debug for TreeWalker<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeWalker")
            .field("registry", self.registry)
            .field("language", &self.parser.language_id())
            .finish()
    }
}
