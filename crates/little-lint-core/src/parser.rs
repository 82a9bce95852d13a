//! Parser interface implemented by language bindings.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::syntax::SyntaxTree;

/// Source text that is not syntactically valid.
#[derive(Debug, Clone, Error, Diagnostic, PartialEq, Eq)]
#[error("syntax error at line {line}, column {column}: {message}")]
#[diagnostic(code(little_lint::parse))]
pub struct ParseError {
    /// Line of the first error (1-indexed).
    pub line: usize,
    /// Column of the first error (1-indexed).
    pub column: usize,
    /// What went wrong.
    pub message: String,
    /// Byte span of the offending text.
    #[label("{message}")]
    pub span: SourceSpan,
}

impl ParseError {
    /// Creates a parse error at a position.
    #[must_use]
    pub fn new(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            column,
            message: message.into(),
            span: SourceSpan::from((0, 0)),
        }
    }

    /// Sets the byte span of the offending text.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.span = SourceSpan::from((offset, length));
        self
    }
}

/// Turns source text into a [`SyntaxTree`].
///
/// Implementations must be usable from several threads at once; any
/// per-parse state is created inside the call.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"python"`).
    fn language_id(&self) -> &'static str;

    /// Parses the full text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text is not syntactically valid.
    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError>;

    /// Parses the text with comment-only and decorator lines removed.
    ///
    /// The returned tree maps its lines back to the original text through
    /// [`SyntaxTree::origin_line`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the stripped text is not syntactically valid.
    fn parse_stripped(&self, source: &str) -> Result<SyntaxTree, ParseError>;
}
