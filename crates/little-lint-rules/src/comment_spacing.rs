//! Rule requiring a space after the `#` of block comments.

use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};

use crate::{RulesError, StyleRule};

/// Rule name for comment-spacing.
pub const NAME: &str = "comment-spacing";

const INFO: RuleInfo = RuleInfo::new(NAME, "Requires block comments to start with '# '");

/// Flags comment lines such as `#text`.
///
/// Only lines consisting of a comment are checked. A bare `#` and a
/// shebang on the first line are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentSpacing;

impl CommentSpacing {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Checks one line.
    #[must_use]
    pub fn check(line: &str, number: usize) -> Option<Violation> {
        let rest = line.trim_start().strip_prefix('#')?;
        if number == 1 && rest.starts_with('!') {
            return None;
        }
        let rest = rest.trim_start_matches('#');
        match rest.chars().next() {
            None | Some(' ' | '\t') => None,
            Some(_) => Some(Violation::new(ViolationKind::CommentWithoutSpace, number)),
        }
    }
}

impl StyleRule for CommentSpacing {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_line_rule(INFO, Self::check)?;
        Ok(())
    }
}
