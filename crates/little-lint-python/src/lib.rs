//! # little-lint-python
//!
//! Python binding for little-lint: parses source with tree-sitter-python
//! and lowers it into the [`little_lint_core::SyntaxTree`] model.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod categories;
mod parser;
mod strip;

pub use categories::category_of;
pub use parser::PythonParser;
