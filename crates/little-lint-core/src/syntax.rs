//! Syntax tree model consumed by node rules.
//!
//! A [`SyntaxTree`] is an arena of nodes produced by a [`SourceParser`]. Nodes
//! never point at their parents: parent relations are kept in a separate
//! [`ParentLinks`] table that the tree walker fills while it descends, so that
//! rules can look upward without the tree ever containing cycles.
//!
//! [`SourceParser`]: crate::SourceParser

use std::fmt;
use std::ops::Range;

/// Discriminant of a syntax node, used to key node-rule lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeCategory {
    /// Root of a parsed file.
    Module,

    /// Abstract: any statement.
    Statement,
    /// `import a, b`
    Import,
    /// `from a import b`
    ImportFrom,
    /// `def f(): ...`
    FunctionDef,
    /// `class C: ...`
    ClassDef,
    /// `x = 1`
    Assign,
    /// `x += 1`
    AugAssign,
    /// Bare expression statement (calls, docstrings).
    Expr,
    /// `return`
    Return,
    /// `del`
    Delete,
    /// `pass`
    Pass,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `raise`
    Raise,
    /// `assert`
    Assert,
    /// `global`
    Global,
    /// `nonlocal`
    Nonlocal,
    /// `if`
    If,
    /// `for`
    For,
    /// `while`
    While,
    /// `with`
    With,
    /// `try`
    Try,
    /// `match`
    Match,
    /// `type X = ...`
    TypeAlias,

    /// Abstract: any expression.
    Expression,
    /// Identifier.
    Name,
    /// `a.b`
    Attribute,
    /// `f(x)`
    Call,
    /// String, number, `True`/`False`/`None`.
    Constant,
    /// `a + b`
    BinOp,
    /// `a and b`
    BoolOp,
    /// `a < b`
    Compare,
    /// `-a`, `not a`
    UnaryOp,
    /// `lambda: ...`
    Lambda,
    /// `a if c else b`
    IfExp,
    /// List, tuple, set or dict display.
    Collection,
    /// Comprehension or generator expression.
    Comprehension,
    /// `a[b]`
    Subscript,
    /// `await a`
    Await,
    /// `yield a`
    Yield,
    /// `*a`, `**a`
    Starred,
    /// `a := b`
    NamedExpr,

    /// Dotted module path inside an import.
    DottedName,
    /// `a as b` inside an import.
    Alias,
    /// Leading-dot module of a relative import.
    RelativeImport,
    /// `*` in `from a import *`.
    Wildcard,
    /// `@decorator` attached to a definition.
    Decorator,
    /// Parameter or argument list.
    Arguments,
    /// `name=value` argument.
    Keyword,
    /// `elif`, `else`, `except`, `finally`, `case` clause.
    Clause,
    /// Anything without a dedicated category.
    Other,
}

impl NodeCategory {
    /// Declared supertypes of this category, one level deep.
    ///
    /// A rule registered for a supertype also applies to every category
    /// listing it here.
    #[must_use]
    pub const fn supertypes(self) -> &'static [NodeCategory] {
        match self {
            Self::Import
            | Self::ImportFrom
            | Self::FunctionDef
            | Self::ClassDef
            | Self::Assign
            | Self::AugAssign
            | Self::Expr
            | Self::Return
            | Self::Delete
            | Self::Pass
            | Self::Break
            | Self::Continue
            | Self::Raise
            | Self::Assert
            | Self::Global
            | Self::Nonlocal
            | Self::If
            | Self::For
            | Self::While
            | Self::With
            | Self::Try
            | Self::Match
            | Self::TypeAlias => &[Self::Statement],
            Self::Name
            | Self::Attribute
            | Self::Call
            | Self::Constant
            | Self::BinOp
            | Self::BoolOp
            | Self::Compare
            | Self::UnaryOp
            | Self::Lambda
            | Self::IfExp
            | Self::Collection
            | Self::Comprehension
            | Self::Subscript
            | Self::Await
            | Self::Yield
            | Self::Starred
            | Self::NamedExpr => &[Self::Expression],
            Self::Module
            | Self::Statement
            | Self::Expression
            | Self::DottedName
            | Self::Alias
            | Self::RelativeImport
            | Self::Wildcard
            | Self::Decorator
            | Self::Arguments
            | Self::Keyword
            | Self::Clause
            | Self::Other => &[],
        }
    }

    /// Returns true for `Import` and `ImportFrom`.
    #[must_use]
    pub const fn is_import(self) -> bool {
        matches!(self, Self::Import | Self::ImportFrom)
    }

    /// Returns true for top-level definitions (`def` and `class`).
    #[must_use]
    pub const fn is_definition(self) -> bool {
        matches!(self, Self::FunctionDef | Self::ClassDef)
    }
}

impl fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Returns the arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Stored data for a single node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Category used for rule lookup.
    pub category: NodeCategory,
    /// First line (1-indexed) in the parsed text.
    pub line: usize,
    /// Last line (1-indexed) in the parsed text.
    pub end_line: usize,
    /// Byte range in the parsed text.
    pub span: Range<usize>,
    /// Direct children in source order.
    pub children: Vec<NodeId>,
}

/// A parsed source file.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    source: String,
    nodes: Vec<NodeData>,
    line_origins: Option<Vec<usize>>,
}

impl SyntaxTree {
    /// Returns the root node id.
    #[must_use]
    pub const fn root_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Returns the text this tree was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes, which a built tree never is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the stored data of a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    /// Maps a line of the parsed text back to the line of the original input.
    ///
    /// Identity for trees parsed from unmodified text.
    #[must_use]
    pub fn origin_line(&self, line: usize) -> usize {
        self.line_origins
            .as_ref()
            .and_then(|origins| origins.get(line.checked_sub(1)?).copied())
            .unwrap_or(line)
    }

    /// Builds parent links for the whole tree in one pass.
    #[must_use]
    pub fn parent_links(&self) -> ParentLinks {
        let mut links = ParentLinks::new(self);
        for (index, node) in self.nodes.iter().enumerate() {
            for &child in &node.children {
                links.set(child, Some(NodeId(index)));
            }
        }
        links
    }

    /// Returns a handle on the root with the given parent links.
    #[must_use]
    pub fn root<'a>(&'a self, links: &'a ParentLinks) -> NodeRef<'a> {
        NodeRef::new(self, links, self.root_id())
    }
}

/// Incremental construction of a [`SyntaxTree`].
///
/// The root is created with the builder; further nodes are pushed and then
/// attached to a parent in source order.
#[derive(Debug)]
pub struct TreeBuilder {
    source: String,
    nodes: Vec<NodeData>,
    line_origins: Option<Vec<usize>>,
}

impl TreeBuilder {
    /// Starts a tree whose root has the given category and covers the whole text.
    #[must_use]
    pub fn new(source: impl Into<String>, root: NodeCategory) -> Self {
        let source = source.into();
        let end_line = source.split('\n').count();
        let len = source.len();
        Self {
            source,
            nodes: vec![NodeData {
                category: root,
                line: 1,
                end_line,
                span: 0..len,
                children: Vec::new(),
            }],
            line_origins: None,
        }
    }

    /// Returns the root id.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Adds a detached node and returns its id.
    pub fn push(
        &mut self,
        category: NodeCategory,
        line: usize,
        end_line: usize,
        span: Range<usize>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            category,
            line,
            end_line: end_line.max(line),
            span,
            children: Vec::new(),
        });
        id
    }

    /// Appends `child` to the children of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Pushes a node and attaches it to `parent` in one step.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        category: NodeCategory,
        line: usize,
        end_line: usize,
        span: Range<usize>,
    ) -> NodeId {
        let id = self.push(category, line, end_line, span);
        self.attach(parent, id);
        id
    }

    /// Records, for each line of the text, the line it came from in the original input.
    #[must_use]
    pub fn line_origins(mut self, origins: Vec<usize>) -> Self {
        self.line_origins = Some(origins);
        self
    }

    /// Finishes the tree.
    #[must_use]
    pub fn build(self) -> SyntaxTree {
        SyntaxTree {
            source: self.source,
            nodes: self.nodes,
            line_origins: self.line_origins,
        }
    }
}

/// Side table from node to parent, filled during a walk.
#[derive(Debug, Clone)]
pub struct ParentLinks {
    parents: Vec<Option<NodeId>>,
}

impl ParentLinks {
    /// Creates an empty table sized for `tree`.
    #[must_use]
    pub fn new(tree: &SyntaxTree) -> Self {
        Self {
            parents: vec![None; tree.len()],
        }
    }

    /// Records the parent of `node`.
    pub fn set(&mut self, node: NodeId, parent: Option<NodeId>) {
        self.parents[node.0] = parent;
    }

    /// Returns the recorded parent of `node`, if any.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.0).copied().flatten()
    }
}

/// Borrowed handle on a node, with access to its tree and parent links.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SyntaxTree,
    links: &'a ParentLinks,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// Creates a handle.
    #[must_use]
    pub fn new(tree: &'a SyntaxTree, links: &'a ParentLinks, id: NodeId) -> Self {
        Self { tree, links, id }
    }

    fn with_id(self, id: NodeId) -> Self {
        Self { id, ..self }
    }

    fn data(&self) -> &'a NodeData {
        self.tree.node(self.id)
    }

    /// Returns the node id.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the tree this node belongs to.
    #[must_use]
    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// Returns the node category.
    #[must_use]
    pub fn category(&self) -> NodeCategory {
        self.data().category
    }

    /// First line in the parsed text.
    #[must_use]
    pub fn line(&self) -> usize {
        self.data().line
    }

    /// Last line in the parsed text.
    #[must_use]
    pub fn end_line(&self) -> usize {
        self.data().end_line
    }

    /// First line mapped back to the original input.
    #[must_use]
    pub fn origin_line(&self) -> usize {
        self.tree.origin_line(self.line())
    }

    /// Source text covered by the node.
    #[must_use]
    pub fn text(&self) -> &'a str {
        self.tree.source.get(self.data().span.clone()).unwrap_or("")
    }

    /// Direct children in source order.
    pub fn children(self) -> impl DoubleEndedIterator<Item = NodeRef<'a>> + ExactSizeIterator {
        self.data().children.iter().map(move |&id| self.with_id(id))
    }

    /// Child at `index`, if present.
    #[must_use]
    pub fn child(self, index: usize) -> Option<NodeRef<'a>> {
        self.data().children.get(index).map(|&id| self.with_id(id))
    }

    /// Parent node, if it has been linked.
    #[must_use]
    pub fn parent(self) -> Option<NodeRef<'a>> {
        self.links.get(self.id).map(|id| self.with_id(id))
    }

    /// Ancestors from the parent upward.
    pub fn ancestors(self) -> impl Iterator<Item = NodeRef<'a>> {
        std::iter::successors(self.parent(), |node| node.parent())
    }

    /// Topmost linked ancestor, or the node itself.
    #[must_use]
    pub fn root(self) -> NodeRef<'a> {
        self.ancestors().last().unwrap_or(self)
    }

    /// All nodes below this one in pre-order, excluding the node itself.
    pub fn descendants(self) -> impl Iterator<Item = NodeRef<'a>> {
        let mut stack: Vec<NodeId> = self.data().children.iter().rev().copied().collect();
        std::iter::from_fn(move || {
            let id = stack.pop()?;
            stack.extend(self.tree.node(id).children.iter().rev().copied());
            Some(self.with_id(id))
        })
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("category", &self.category())
            .field("line", &self.line())
            .field("end_line", &self.end_line())
            .finish()
    }
}
