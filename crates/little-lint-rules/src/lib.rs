//! # little-lint-rules
//!
//! Built-in style rules for little-lint.
//!
//! ## Available Rules
//!
//! | Rule | Kind | Reports |
//! |------|------|---------|
//! | `max-line-length` | file | LL001 lines over the limit (tabs count as 4) |
//! | `tab-indentation` | file | LL002 lines starting with a tab |
//! | `blank-line-at-end` | file | LL003 missing final line break |
//! | `break-after-binary-operator` | line | LL004 line ending in a binary operator |
//! | `comment-spacing` | line | LL005 block comment without a space after `#` |
//! | `one-import-per-line` | node | LL006 `import a, b` |
//! | `imports-at-top` | node | LL007 import after other module statements |
//! | `no-relative-imports` | node | LL008 `from . import x` |
//! | `import-order` | node | LL009 group order, LL010 module not found |
//! | `top-level-spacing` | node | LL011 blank lines around top-level definitions |
//!
//! ## Usage
//!
//! ```ignore
//! use little_lint_core::Config;
//! use little_lint_rules::default_registry;
//!
//! let registry = default_registry(&Config::default())?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blank_line_at_end;
mod break_after_binary_operator;
mod classifier;
mod comment_spacing;
mod import_order;
mod imports_at_top;
mod max_line_length;
mod no_relative_imports;
mod one_import_per_line;
mod presets;
mod stdlib;
mod tab_indentation;
mod top_level_spacing;
mod utils;

pub use blank_line_at_end::BlankLineAtEnd;
pub use break_after_binary_operator::BreakAfterBinaryOperator;
pub use classifier::ModuleResolver;
pub use comment_spacing::CommentSpacing;
pub use import_order::ImportOrder;
pub use imports_at_top::ImportsAtTop;
pub use max_line_length::MaxLineLength;
pub use no_relative_imports::NoRelativeImports;
pub use one_import_per_line::OneImportPerLine;
pub use presets::{all_rules, default_registry, registry_with, rule_infos};
pub use stdlib::is_stdlib_module;
pub use tab_indentation::TabIndentation;
pub use top_level_spacing::TopLevelSpacing;

/// Re-export core types for convenience.
pub use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};

use little_lint_core::RegistryError;
use thiserror::Error;

/// A built-in rule that knows how to add itself to a [`Registry`].
pub trait StyleRule: Send + Sync {
    /// Returns the rule's name and description.
    fn info(&self) -> RuleInfo;

    /// Registers the rule under its [`RuleInfo`].
    ///
    /// # Errors
    ///
    /// Returns an error if the registry rejects the rule.
    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError>;
}

/// Boxed rule for collections.
pub type StyleRuleBox = Box<dyn StyleRule>;

/// Errors raised while building the built-in rules.
#[derive(Debug, Error)]
pub enum RulesError {
    /// The registry rejected a rule.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A rule's pattern failed to compile.
    #[error("invalid rule pattern: {0}")]
    Pattern(#[from] regex::Error),
}
