//! Rule plug-in types.
//!
//! A rule is a pure function registered once into one of the three
//! collections of a [`Registry`](crate::Registry):
//!
//! - file rules receive the whole source text,
//! - line rules receive one line and its 1-based number,
//! - node rules receive a syntax node, optionally with the source text.
//!
//! Whatever a rule returns is normalized into a [`RuleOutput`].

use crate::syntax::NodeRef;
use crate::types::Violation;

/// Normalized result of a single rule invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RuleOutput {
    /// Nothing found.
    #[default]
    Empty,
    /// Exactly one violation.
    One(Violation),
    /// Any number of violations.
    Many(Vec<Violation>),
}

impl RuleOutput {
    /// Appends the contained violations to `out`.
    pub fn append_to(self, out: &mut Vec<Violation>) {
        match self {
            Self::Empty => {}
            Self::One(v) => out.push(v),
            Self::Many(vs) => out.extend(vs),
        }
    }

    /// Converts into a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<Violation> {
        let mut out = Vec::new();
        self.append_to(&mut out);
        out
    }

    /// Returns true if no violation is contained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::One(_) => false,
            Self::Many(vs) => vs.is_empty(),
        }
    }
}

impl From<Violation> for RuleOutput {
    fn from(v: Violation) -> Self {
        Self::One(v)
    }
}

impl From<Option<Violation>> for RuleOutput {
    fn from(v: Option<Violation>) -> Self {
        v.map_or(Self::Empty, Self::One)
    }
}

impl From<Vec<Violation>> for RuleOutput {
    fn from(vs: Vec<Violation>) -> Self {
        Self::Many(vs)
    }
}

impl From<()> for RuleOutput {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

/// Checker of a whole-file rule.
pub type FileCheck = Box<dyn Fn(&str) -> RuleOutput + Send + Sync>;

/// Checker of a per-line rule.
pub type LineCheck = Box<dyn Fn(&str, usize) -> Option<Violation> + Send + Sync>;

/// Checker of a node rule, tagged with its calling convention.
pub enum NodeCheck {
    /// Called with the node only.
    Node(Box<dyn Fn(NodeRef<'_>) -> RuleOutput + Send + Sync>),
    /// Called with the node and the text its tree was parsed from.
    WithSource(Box<dyn Fn(NodeRef<'_>, &str) -> RuleOutput + Send + Sync>),
}

impl NodeCheck {
    /// Wraps a checker that only needs the node.
    pub fn node<F, O>(check: F) -> Self
    where
        F: Fn(NodeRef<'_>) -> O + Send + Sync + 'static,
        O: Into<RuleOutput>,
    {
        Self::Node(Box::new(move |node: NodeRef<'_>| check(node).into()))
    }

    /// Wraps a checker that also reads the source text.
    pub fn with_source<F, O>(check: F) -> Self
    where
        F: Fn(NodeRef<'_>, &str) -> O + Send + Sync + 'static,
        O: Into<RuleOutput>,
    {
        Self::WithSource(Box::new(move |node: NodeRef<'_>, source: &str| {
            check(node, source).into()
        }))
    }

    /// Returns true if the checker takes the source text.
    #[must_use]
    pub fn wants_source(&self) -> bool {
        matches!(self, Self::WithSource(_))
    }

    /// Invokes the checker with the argument shape it declared.
    pub fn invoke(&self, node: NodeRef<'_>) -> RuleOutput {
        match self {
            Self::Node(check) => check(node),
            Self::WithSource(check) => check(node, node.tree().source()),
        }
    }
}

impl std::fmt::Debug for NodeCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node(_) => f.write_str("NodeCheck::Node"),
            Self::WithSource(_) => f.write_str("NodeCheck::WithSource"),
        }
    }
}

/// Static description of a rule, shown by `list-rules` and used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Unique kebab-case name (e.g., "one-import-per-line").
    pub name: &'static str,
    /// Brief description of what the rule checks.
    pub description: &'static str,
}

impl RuleInfo {
    /// Creates rule metadata.
    #[must_use]
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}
