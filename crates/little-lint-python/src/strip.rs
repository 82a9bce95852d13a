//! Removal of comment and decorator lines before a re-parse.

use std::collections::BTreeSet;

use tree_sitter::Node;

use crate::parser::end_line;

/// Collects the 1-based lines of `root` that hold only a comment or belong
/// to a decorator.
///
/// A decorator spanning several lines contributes its whole range, so the
/// remaining text still parses.
pub(crate) fn removable_lines(root: Node<'_>, src: &[u8]) -> BTreeSet<usize> {
    let mut lines = BTreeSet::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        match node.kind() {
            "decorator" => {
                lines.extend(node.start_position().row + 1..=end_line(node));
            }
            "comment" if starts_its_line(node, src) => {
                lines.insert(node.start_position().row + 1);
            }
            _ => {
                let mut cursor = node.walk();
                stack.extend(node.children(&mut cursor));
            }
        }
    }
    lines
}

fn starts_its_line(node: Node<'_>, src: &[u8]) -> bool {
    let start = node.start_byte();
    let line_start = start - node.start_position().column;
    src.get(line_start..start)
        .is_some_and(|head| head.iter().all(|b| matches!(b, b' ' | b'\t' | b'\x0c')))
}

/// Drops the `removed` lines from `source`.
///
/// Returns the remaining text, each kept line terminated by `\n`, and for
/// each kept line its 1-based line number in `source`.
pub(crate) fn remove_lines(source: &str, removed: &BTreeSet<usize>) -> (String, Vec<usize>) {
    let mut stripped = String::with_capacity(source.len());
    let mut origins = Vec::new();

    for (index, line) in source.split('\n').enumerate() {
        if removed.contains(&(index + 1)) {
            continue;
        }
        stripped.push_str(line);
        stripped.push('\n');
        origins.push(index + 1);
    }

    (stripped, origins)
}
