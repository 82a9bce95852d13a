//! Rule preferring line breaks before binary operators.
//!
//! # Detected Patterns
//!
//! ```text
//! income = (gross_wages +
//!           taxable_interest)
//! ```
//!
//! # Good Patterns
//!
//! ```text
//! income = (gross_wages
//!           + taxable_interest)
//! ```

use little_lint_core::{Registry, RuleInfo, Violation, ViolationKind};
use regex::Regex;

use crate::utils::{code_part, is_comment_line};
use crate::{RulesError, StyleRule};

/// Rule name for break-after-binary-operator.
pub const NAME: &str = "break-after-binary-operator";

const INFO: RuleInfo = RuleInfo::new(NAME, "Prefers breaking lines before binary operators");

/// An operand followed by an arithmetic operator at the end of the code.
const TRAILING_OPERATOR: &str = r"(\w+|[)\]])\s*(\*\*|//|[-+*/%@])\s*$";

/// Words after which a trailing `*` or `-` is not a binary operator
/// (`from m import *`, `x if y else -`).
const KEYWORDS: &[&str] = &[
    "and", "await", "else", "if", "import", "in", "is", "lambda", "not", "or", "return", "yield",
];

/// Flags code lines that end with a binary operator.
#[derive(Debug, Clone)]
pub struct BreakAfterBinaryOperator {
    pattern: Regex,
}

impl BreakAfterBinaryOperator {
    /// Creates the rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the operator pattern fails to compile.
    pub fn new() -> Result<Self, RulesError> {
        Ok(Self {
            pattern: Regex::new(TRAILING_OPERATOR)?,
        })
    }

    /// Checks one line.
    #[must_use]
    pub fn check(&self, line: &str, number: usize) -> Option<Violation> {
        if is_comment_line(line) {
            return None;
        }
        let captures = self.pattern.captures(code_part(line))?;
        let operand = captures.get(1).map_or("", |m| m.as_str());
        (!KEYWORDS.contains(&operand))
            .then(|| Violation::new(ViolationKind::LineBreakAfterBinaryOperator, number))
    }
}

impl StyleRule for BreakAfterBinaryOperator {
    fn info(&self) -> RuleInfo {
        INFO
    }

    fn register(self: Box<Self>, registry: &mut Registry) -> Result<(), RulesError> {
        registry.register_line_rule(INFO, move |line: &str, number| self.check(line, number))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flagged(line: &str) -> bool {
        BreakAfterBinaryOperator::new().unwrap().check(line, 1).is_some()
    }

    #[test]
    fn operator_at_end_is_flagged() {
        assert!(flagged("5 + "));
        assert!(flagged("income = (gross_wages +"));
        assert!(flagged("          (dividends - qualified_dividends) -"));
        assert!(flagged("total = base **"));
        assert!(flagged("x = items[0] //  # halve"));
    }

    #[test]
    fn operator_at_start_is_fine() {
        assert!(!flagged("+ 5"));
        assert!(!flagged("          + taxable_interest"));
        assert!(!flagged("          - student_loan_interest)"));
    }

    #[test]
    fn comments_and_strings_are_ignored() {
        assert!(!flagged("# a +"));
        assert!(!flagged("x = 1  # a +"));
        assert!(!flagged("raise ValueError(\"values are %s, %s\" %"));
        assert!(!flagged("from pyflakes_cannot_handle import * # LINE 10"));
    }

    #[test]
    fn reports_given_line_number() {
        let rule = BreakAfterBinaryOperator::new().unwrap();
        assert_eq!(rule.check("a +", 7).map(|v| v.line), Some(7));
    }
}
