//! Python parser using Tree-sitter.
//!
//! The concrete syntax tree is lowered into a [`SyntaxTree`] shaped like a
//! Python abstract syntax tree: comments and punctuation are dropped,
//! blocks and parentheses are flattened into their parent, and decorated
//! definitions take the position of their `def` or `class` line.

use little_lint_core::{NodeCategory, NodeId, ParseError, SourceParser, SyntaxTree, TreeBuilder};
use tracing::debug;
use tree_sitter::{Language, Node, Parser, Point};

use crate::categories::{category_of, is_leaf};
use crate::strip::{remove_lines, removable_lines};

/// Parses Python source into the little-lint syntax model.
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a new Python parser.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_python::LANGUAGE.into(),
        }
    }

    /// Removes comment-only lines and every line of each decorator.
    ///
    /// Returns the remaining text and, for each kept line, its 1-based line
    /// number in `source`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if `source` is not valid Python.
    pub fn strip_comments_and_decorators(
        &self,
        source: &str,
    ) -> Result<(String, Vec<usize>), ParseError> {
        let tree = self.concrete_tree(source)?;
        let removed = removable_lines(tree.root_node(), source.as_bytes());
        Ok(remove_lines(source, &removed))
    }

    fn concrete_tree(&self, source: &str) -> Result<tree_sitter::Tree, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseError::new(1, 1, format!("python grammar unavailable: {e}")))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new(1, 1, "parser produced no tree"))?;
        let root = tree.root_node();
        if root.has_error() {
            return Err(first_error(root));
        }
        Ok(tree)
    }

    fn parse_with_origins(
        &self,
        source: &str,
        origins: Option<Vec<usize>>,
    ) -> Result<SyntaxTree, ParseError> {
        let concrete = self.concrete_tree(source)?;

        let mut lowering = Lowering {
            src: source.as_bytes(),
            builder: TreeBuilder::new(source, NodeCategory::Module),
        };
        let module = lowering.builder.root();
        lowering.lower_children(concrete.root_node(), module);

        let builder = lowering.builder;
        let tree = match origins {
            Some(origins) => builder.line_origins(origins).build(),
            None => builder.build(),
        };
        debug!("Lowered python source into {} nodes", tree.len());
        Ok(tree)
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PythonParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PythonParser").finish_non_exhaustive()
    }
}

impl SourceParser for PythonParser {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        self.parse_with_origins(source, None)
    }

    fn parse_stripped(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        let (stripped, origins) = self.strip_comments_and_decorators(source)?;
        self.parse_with_origins(&stripped, Some(origins))
    }
}

/// Locates the first error or missing node in pre-order.
fn first_error(root: Node<'_>) -> ParseError {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            let start = node.start_position();
            let message = if node.is_missing() {
                format!("missing {}", node.kind())
            } else {
                "invalid syntax".to_string()
            };
            return ParseError::new(start.row + 1, start.column + 1, message)
                .with_span(node.start_byte(), node.end_byte() - node.start_byte());
        }
        if node.has_error() {
            let mut cursor = node.walk();
            let children: Vec<_> = node.children(&mut cursor).collect();
            stack.extend(children.into_iter().rev());
        }
    }
    let start = root.start_position();
    ParseError::new(start.row + 1, start.column + 1, "invalid syntax")
}

struct Lowering<'s> {
    src: &'s [u8],
    builder: TreeBuilder,
}

impl Lowering<'_> {
    fn push(
        &mut self,
        parent: NodeId,
        category: NodeCategory,
        line_of: Node<'_>,
        extent: Node<'_>,
    ) -> NodeId {
        self.builder.push_child(
            parent,
            category,
            line_of.start_position().row + 1,
            end_line(extent),
            extent.start_byte()..extent.end_byte(),
        )
    }

    fn lower_children(&mut self, node: Node<'_>, parent: NodeId) {
        let mut cursor = node.walk();
        let children: Vec<_> = node.named_children(&mut cursor).collect();
        for child in children {
            self.lower(child, parent);
        }
    }

    fn lower(&mut self, node: Node<'_>, parent: NodeId) {
        if node.is_extra() {
            return;
        }
        match node.kind() {
            "block" | "parenthesized_expression" => self.lower_children(node, parent),
            "import_prefix" => {}
            "decorated_definition" => self.lower_decorated(node, parent),
            "expression_statement" => self.lower_expression_statement(node, parent),
            "future_import_statement" => self.lower_future_import(node, parent),
            kind => {
                let category = category_of(kind);
                let id = self.push(parent, category, node, node);
                if !is_leaf(category) {
                    self.lower_children(node, id);
                }
            }
        }
    }

    /// `@dec\ndef f(): ...` becomes a definition on the `def` line with the
    /// decorators as its first children.
    fn lower_decorated(&mut self, node: Node<'_>, parent: NodeId) {
        let Some(definition) = node.child_by_field_name("definition") else {
            self.lower_children(node, parent);
            return;
        };
        let id = self.push(parent, category_of(definition.kind()), definition, node);

        let mut cursor = node.walk();
        let decorators: Vec<_> = node
            .named_children(&mut cursor)
            .filter(|child| child.kind() == "decorator")
            .collect();
        for decorator in decorators {
            self.lower(decorator, id);
        }
        self.lower_children(definition, id);
    }

    /// A lone assignment statement is an assignment; anything else is a
    /// bare expression statement.
    fn lower_expression_statement(&mut self, node: Node<'_>, parent: NodeId) {
        let mut cursor = node.walk();
        let named: Vec<_> = node
            .named_children(&mut cursor)
            .filter(|child| !child.is_extra())
            .collect();

        let (category, content) = match named.as_slice() {
            [only] if only.kind() == "assignment" => (NodeCategory::Assign, *only),
            [only] if only.kind() == "augmented_assignment" => (NodeCategory::AugAssign, *only),
            _ => (NodeCategory::Expr, node),
        };
        let id = self.push(parent, category, node, node);
        self.lower_children(content, id);
    }

    /// `from __future__ import x` gets a module child reading `__future__`.
    fn lower_future_import(&mut self, node: Node<'_>, parent: NodeId) {
        let id = self.push(parent, NodeCategory::ImportFrom, node, node);
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children {
            if child.is_named() {
                self.lower(child, id);
            } else if child.utf8_text(self.src).is_ok_and(|t| t == "__future__") {
                self.push(id, NodeCategory::DottedName, child, child);
            }
        }
    }
}

/// Last line (1-indexed) of the last token that is not a comment.
pub(crate) fn end_line(node: Node<'_>) -> usize {
    let start = node.start_position().row;
    let Point { row, column } = last_token(node).end_position();
    if column == 0 && row > start {
        row
    } else {
        row + 1
    }
}

fn last_token(node: Node<'_>) -> Node<'_> {
    let mut current = node;
    loop {
        let mut cursor = current.walk();
        let last = current
            .children(&mut cursor)
            .filter(|child| !child.is_extra())
            .last();
        match last {
            Some(child) => current = child,
            None => return current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use little_lint_core::NodeRef;

    fn parse(src: &str) -> SyntaxTree {
        PythonParser::new().parse(src).unwrap()
    }

    fn shape(node: NodeRef<'_>) -> Vec<(NodeCategory, usize, usize)> {
        node.children()
            .map(|n| (n.category(), n.line(), n.end_line()))
            .collect()
    }

    #[test]
    fn lowers_top_level_statements() {
        let tree = parse("import os\nx = 1\ny += 2\nprint(x)\n");
        let links = tree.parent_links();
        assert_eq!(
            shape(tree.root(&links)),
            vec![
                (NodeCategory::Import, 1, 1),
                (NodeCategory::Assign, 2, 2),
                (NodeCategory::AugAssign, 3, 3),
                (NodeCategory::Expr, 4, 4),
            ]
        );
    }

    #[test]
    fn module_spans_every_line() {
        let tree = parse("a = 1\n\n");
        let links = tree.parent_links();
        let root = tree.root(&links);
        assert_eq!((root.line(), root.end_line()), (1, 3));
    }

    #[test]
    fn import_names_are_children() {
        let tree = parse("import sys, os.path as p\n");
        let links = tree.parent_links();
        let import = tree.root(&links).child(0).unwrap();
        let names: Vec<_> = import.children().map(|n| (n.category(), n.text())).collect();
        assert_eq!(
            names,
            vec![
                (NodeCategory::DottedName, "sys"),
                (NodeCategory::Alias, "os.path as p"),
            ]
        );
    }

    #[test]
    fn relative_import_module_keeps_dots() {
        let tree = parse("from ..pkg import mod\n");
        let links = tree.parent_links();
        let import = tree.root(&links).child(0).unwrap();
        assert_eq!(import.category(), NodeCategory::ImportFrom);
        let module = import.child(0).unwrap();
        assert_eq!(module.category(), NodeCategory::RelativeImport);
        assert_eq!(module.text(), "..pkg");
    }

    #[test]
    fn future_import_reads_as_import_from() {
        let tree = parse("from __future__ import annotations\n");
        let links = tree.parent_links();
        let import = tree.root(&links).child(0).unwrap();
        assert_eq!(import.category(), NodeCategory::ImportFrom);
        let module = import.child(0).unwrap();
        assert_eq!((module.category(), module.text()), (NodeCategory::DottedName, "__future__"));
    }

    #[test]
    fn decorated_definition_sits_on_def_line() {
        let tree = parse("@cache\n@trace(level=1)\ndef f():\n    return 1\n");
        let links = tree.parent_links();
        let def = tree.root(&links).child(0).unwrap();
        assert_eq!(def.category(), NodeCategory::FunctionDef);
        assert_eq!((def.line(), def.end_line()), (3, 4));
        let decorators = def
            .children()
            .filter(|n| n.category() == NodeCategory::Decorator)
            .count();
        assert_eq!(decorators, 2);
    }

    #[test]
    fn blocks_are_flattened_and_comments_dropped() {
        let tree = parse("class C:\n    # note\n    x = 1\n\n    def m(self):\n        pass\n    # trailing\n");
        let links = tree.parent_links();
        let class = tree.root(&links).child(0).unwrap();
        assert_eq!(class.category(), NodeCategory::ClassDef);
        assert_eq!((class.line(), class.end_line()), (1, 6));

        let body: Vec<_> = class
            .children()
            .map(|n| n.category())
            .filter(|c| c.supertypes() == [NodeCategory::Statement])
            .collect();
        assert_eq!(body, vec![NodeCategory::Assign, NodeCategory::FunctionDef]);
    }

    #[test]
    fn docstring_is_expression_with_constant() {
        let tree = parse("\"\"\"Module docs.\n\nMore.\n\"\"\"\nimport os\n");
        let links = tree.parent_links();
        let doc = tree.root(&links).child(0).unwrap();
        assert_eq!((doc.category(), doc.line(), doc.end_line()), (NodeCategory::Expr, 1, 4));
        assert_eq!(doc.child(0).map(|c| c.category()), Some(NodeCategory::Constant));
    }

    #[test]
    fn syntax_error_reports_position() {
        let err = PythonParser::new().parse("x = 1\ndef (:\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert!(err.column >= 1);
    }

    #[test]
    fn stripped_parse_maps_lines_back() {
        let source = "# header\nimport os\n\n@dataclass\nclass C:\n    pass\n";
        let tree = PythonParser::new().parse_stripped(source).unwrap();
        let links = tree.parent_links();
        let lines: Vec<_> = tree
            .root(&links)
            .children()
            .map(|n| (n.category(), n.line(), n.origin_line()))
            .collect();
        assert_eq!(
            lines,
            vec![
                (NodeCategory::Import, 1, 2),
                (NodeCategory::ClassDef, 3, 5),
            ]
        );
    }
}
