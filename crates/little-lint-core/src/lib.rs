//! # little-lint-core
//!
//! Language-neutral engine of the little-lint style checker.
//!
//! This crate provides:
//!
//! - [`Violation`] and [`ViolationKind`] for representing findings
//! - [`Registry`] holding whole-file, per-line and per-node rules
//! - [`SyntaxTree`] with a [`ParentLinks`] side-table for upward lookup
//! - [`TreeWalker`] dispatching node rules by category, with inheritance
//! - [`Scanner`] merging file, tree and line results, and [`ScanFilter`]
//! - [`SourceParser`] and [`ImportClassifier`], implemented by other crates
//!
//! ## Example
//!
//! ```ignore
//! use little_lint_core::{NodeCategory, NodeCheck, Registry, RuleInfo, RuleOptions, Scanner};
//!
//! let mut registry = Registry::new();
//! registry.register_node_rule(
//!     RuleInfo::new("my-rule", "Flags every import"),
//!     &[NodeCategory::Import],
//!     NodeCheck::node(|node| Violation::new(ViolationKind::ImportsNotAtTop, node.line())),
//!     RuleOptions::new(),
//! )?;
//!
//! let violations = Scanner::new(&registry, &parser).scan("import os\n")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classify;
mod config;
mod filter;
mod parser;
mod registry;
mod rule;
mod scanner;
mod syntax;
mod types;
mod walker;

pub use classify::{ImportClassifier, ImportTarget, OriginKind};
pub use config::{Config, ConfigError, FilesConfig, ImportsConfig, LayoutConfig, RuleConfig};
pub use filter::{KindSet, ScanFilter};
pub use parser::{ParseError, SourceParser};
pub use registry::{
    FileRuleRecord, LineRuleRecord, NodeRuleFlags, NodeRuleRecord, Registry, RegistryError,
    RuleOptions, IGNORE_COMMENTS_AND_DECORATORS, KNOWN_OPTIONS,
};
pub use rule::{FileCheck, LineCheck, NodeCheck, RuleInfo, RuleOutput};
pub use scanner::{ScanError, Scanner};
pub use syntax::{NodeCategory, NodeData, NodeId, NodeRef, ParentLinks, SyntaxTree, TreeBuilder};
pub use types::{FileReport, LintResult, Severity, UnknownKind, Violation, ViolationKind};
pub use walker::TreeWalker;
