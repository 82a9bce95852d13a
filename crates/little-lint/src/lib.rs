//! # little-lint
//!
//! Style linter for Python source built on tree-sitter.
//!
//! This is the facade crate that re-exports the engine, the Python parser
//! binding and the built-in rules.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use little_lint::{Linter, ViolationKind};
//!
//! let linter = Linter::new()?;
//! let violations = linter.scan("import sys, os\n")?;
//! assert_eq!(violations[0].kind, ViolationKind::MultipleImportsOnOneLine);
//! ```
//!
//! ## Configuration
//!
//! ```rust,ignore
//! use little_lint::{Config, Linter};
//!
//! let config = Config::from_file("little-lint.toml".as_ref())?;
//! let linter = Linter::from_config(&config)?;
//! let violations = linter.check("x = 1\n")?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Re-export core types and traits
pub use little_lint_core::*;

/// Built-in rules and the default import classifier.
pub mod rules {
    pub use little_lint_rules::*;
}

/// Python parser binding.
pub mod python {
    pub use little_lint_python::*;
}

mod linter;

pub use linter::{Linter, LinterError};
