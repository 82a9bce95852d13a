//! Helpers shared by the built-in rules.

use little_lint_core::{ImportTarget, NodeCategory, NodeRef};

/// Returns the part of `line` before a `#` comment, ignoring `#` inside
/// string literals opened on the same line.
#[must_use]
pub fn code_part(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (index, ch) in line.char_indices() {
        match quote {
            Some(_) if escaped => escaped = false,
            Some(_) if ch == '\\' => escaped = true,
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None if ch == '#' => return &line[..index],
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None => {}
        }
    }
    line
}

/// Returns true if the first non-blank character of `line` is `#`.
#[must_use]
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// The module an `import` or `from ... import` statement refers to.
///
/// For `import a, b` this is the first module, `a`.
#[must_use]
pub fn import_target(node: NodeRef<'_>) -> Option<ImportTarget> {
    let first = node.children().find(|child| {
        matches!(
            child.category(),
            NodeCategory::DottedName | NodeCategory::Alias | NodeCategory::RelativeImport
        )
    })?;
    let module = match first.category() {
        NodeCategory::Alias => first
            .children()
            .find(|c| c.category() == NodeCategory::DottedName)?,
        _ => first,
    };
    Some(ImportTarget::parse(module.text()))
}

/// Returns true for a statement consisting of a single string literal.
#[must_use]
pub fn is_docstring(node: NodeRef<'_>) -> bool {
    if node.category() != NodeCategory::Expr || node.children().len() != 1 {
        return false;
    }
    node.child(0).is_some_and(|child| {
        child.category() == NodeCategory::Constant
            && child.text().ends_with(['"', '\''])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_comment() {
        assert_eq!(code_part("x = 1  # note"), "x = 1  ");
        assert_eq!(code_part("# only"), "");
        assert_eq!(code_part("no comment"), "no comment");
    }

    #[test]
    fn hash_inside_string_is_code() {
        assert_eq!(code_part("s = '# not' # yes"), "s = '# not' ");
        assert_eq!(code_part(r##"s = "a\"#b" + t"##), r##"s = "a\"#b" + t"##);
    }

    #[test]
    fn detects_comment_lines() {
        assert!(is_comment_line("    # indented"));
        assert!(!is_comment_line("x  # trailing"));
    }
}
