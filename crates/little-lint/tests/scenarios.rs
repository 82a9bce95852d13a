//! End-to-end scenarios: Python source in, violations out.

use little_lint::{
    Linter, NodeCategory, NodeCheck, Registry, RegistryError, RuleInfo, RuleOptions,
    ScanFilter, Severity, Violation, ViolationKind,
};

fn linter() -> Linter {
    Linter::new().unwrap()
}

fn found(violations: &[Violation]) -> Vec<(ViolationKind, usize)> {
    violations.iter().map(|v| (v.kind, v.line)).collect()
}

/// Trips most of the built-in rules at once.
const MESSY: &str = "import sys, os\nx = 1\nimport json\nfrom . import sibling\ndef f():\n\treturn (1 +\n\t        2)\n#bad\ny = 2";

#[test]
fn multiple_imports_on_one_line() {
    let violations = linter().scan("import sys, os\n").unwrap();
    assert_eq!(
        found(&violations),
        vec![(ViolationKind::MultipleImportsOnOneLine, 1)]
    );
}

#[test]
fn import_after_statement_is_not_at_top() {
    let violations = linter().scan("x = 1\nimport os\n").unwrap();
    assert_eq!(found(&violations), vec![(ViolationKind::ImportsNotAtTop, 2)]);
}

#[test]
fn relative_import_is_advisory() {
    let violations = linter().scan("from . import sibling\n").unwrap();
    assert_eq!(found(&violations), vec![(ViolationKind::RelativeImport, 1)]);
    assert_eq!(violations[0].severity, Severity::Advisory);
}

#[test]
fn missing_final_line_break_is_reported_at_line_count() {
    let violations = linter().scan("import os\nx = 1").unwrap();
    assert_eq!(found(&violations), vec![(ViolationKind::NoBlankLineAtEnd, 2)]);
}

#[test]
fn single_stdlib_import_is_clean() {
    assert!(linter().scan("import os\n\n").unwrap().is_empty());
}

#[test]
fn line_rules_report_literal_line_numbers() {
    let source = "import os\n\nvalue = (1 +\n         2)\n#tight\n";
    let violations = linter().scan(source).unwrap();
    assert_eq!(
        found(&violations),
        vec![
            (ViolationKind::LineBreakAfterBinaryOperator, 3),
            (ViolationKind::CommentWithoutSpace, 5)
        ]
    );
}

#[test]
fn results_merge_file_then_tree_then_line() {
    let violations = linter().scan(MESSY).unwrap();
    let group = |kind: ViolationKind| match kind {
        ViolationKind::MaxLineLength
        | ViolationKind::TabIndentation
        | ViolationKind::NoBlankLineAtEnd => 0,
        ViolationKind::LineBreakAfterBinaryOperator | ViolationKind::CommentWithoutSpace => 2,
        _ => 1,
    };
    let groups: Vec<_> = violations.iter().map(|v| group(v.kind)).collect();
    let mut sorted = groups.clone();
    sorted.sort_unstable();
    assert_eq!(groups, sorted);
    assert!(groups.contains(&0) && groups.contains(&1) && groups.contains(&2));
}

#[test]
fn scan_is_deterministic() {
    let linter = linter();
    assert_eq!(linter.scan(MESSY).unwrap(), linter.scan(MESSY).unwrap());
}

#[test]
fn include_only_is_a_subset_of_that_kind() {
    let linter = linter();
    let all = linter.scan(MESSY).unwrap();
    let filter = ScanFilter::new().include_only(ViolationKind::ImportsNotAtTop);
    let only = linter.scan_filtered(MESSY, &filter).unwrap();

    assert_eq!(only.len(), 2);
    assert!(only.iter().all(|v| v.kind == ViolationKind::ImportsNotAtTop));
    assert!(only.iter().all(|v| all.contains(v)));
}

#[test]
fn exclude_removes_every_violation_of_that_kind() {
    let linter = linter();
    let kinds = [ViolationKind::TabIndentation, ViolationKind::RelativeImport];
    let rest = linter
        .scan_filtered(MESSY, &ScanFilter::new().exclude(kinds))
        .unwrap();

    assert!(!rest.is_empty());
    assert!(rest.iter().all(|v| !kinds.contains(&v.kind)));
}

#[test]
fn include_and_exclude_of_same_kinds_is_empty() {
    let kinds = [ViolationKind::ImportsNotAtTop, ViolationKind::TabIndentation];
    let filter = ScanFilter::new().include_only(kinds).exclude(kinds);
    assert!(linter().scan_filtered(MESSY, &filter).unwrap().is_empty());
}

#[test]
fn include_then_exclude_is_intersection_then_difference() {
    let linter = linter();
    let all = linter.scan(MESSY).unwrap();
    let include = [
        ViolationKind::TabIndentation,
        ViolationKind::ImportsNotAtTop,
        ViolationKind::RelativeImport,
    ];
    let exclude = [ViolationKind::RelativeImport];

    let expected: Vec<_> = all
        .into_iter()
        .filter(|v| include.contains(&v.kind) && !exclude.contains(&v.kind))
        .collect();
    let filter = ScanFilter::new().include_only(include).exclude(exclude);
    assert_eq!(linter.scan_filtered(MESSY, &filter).unwrap(), expected);
}

#[test]
fn multi_line_decorators_are_stripped_whole() {
    let source = "import pytest\n\n\n@pytest.mark.parametrize(\n    \"x\", [1, 2]\n)\ndef test_x(x):\n    assert x\n";
    let filter = ScanFilter::new().exclude(ViolationKind::ModuleNotFound);
    let violations = linter().scan_filtered(source, &filter).unwrap();
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn spacing_after_multi_line_decorator_uses_original_lines() {
    let source = "import os\n\n\n@decorate(\n    \"x\",\n    [1, 2],\n)\ndef first():\n    pass\n\n@decorate(\n    1,\n)\ndef second():\n    pass\n";
    let violations = linter().scan(source).unwrap();
    assert_eq!(
        found(&violations),
        vec![(ViolationKind::TopLevelDefinitionNotSurrounded, 14)]
    );
}

#[test]
fn syntax_error_fails_the_scan() {
    let err = linter().scan("def broken(:\n\tpass").unwrap_err();
    assert_eq!(err.parse_error().line, 1);
}

#[test]
fn unknown_rule_option_fails_registration() {
    let mut registry = Registry::new();
    let result = registry.register_node_rule(
        RuleInfo::new("custom", "Custom rule"),
        &[NodeCategory::Module],
        NodeCheck::node(|_| ()),
        RuleOptions::new().with("ignore_comments", true),
    );
    assert!(matches!(result, Err(RegistryError::UnknownOption { .. })));
    assert!(registry.is_empty());
}

#[test]
fn linter_is_shared_across_threads() {
    let linter = linter();
    let expected = linter.scan(MESSY).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| linter.scan(MESSY).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

/// A module following every convention the built-in rules check.
const CORRECT: &str = r##"
import os
import sys  # alphabetical

import some_third_party_lib  # 3rd party stuff next
import some_third_party_other_lib  # alphabetical

import local_stuff  # local stuff last
import more_local_stuff
from pyflakes_cannot_handle import * # LINE 10


_a_global_var = 2  # so it won't get imported by 'from foo import *'
_b_global_var = 3

A_CONSTANT = 'ugh.'


# 2 empty lines between top-level funcs + classes
def naming_convention(): # LINE 20
    """Write docstrings for ALL public classes, funcs and methods.
    """
    if x == 4:  # x is blue <== USEFUL 1-liner comment (2 spaces before #)
        x, y = y, x  # inverse x and y <== USELESS COMMENT (1 space after #)
    c = (a + b) * (a - b)  # operator spacing should improve readability.
    dict['key'] = dict[0] = {'x': 2, 'cat': 'not a dog'}


class NamingConvention(object): # LINE 31
    """First line of a docstring is short and next to the quotes.

    Class and exception names are CapWords.

    Closing quotes are on their own line
    """

    a = 2
    b = 4
    _internal_variable = 3
    class_ = 'foo'  # trailing underscore to avoid conflict with builtin

    # this will trigger name mangling to further discourage use from outside
    # this is also very useful if you intend your class to be subclassed, and
    # the children might also use the same var name for something else; e.g.
    # for simple variables like 'a' above. Name mangling will ensure that
    # *your* a and the children's a will not collide.
    __internal_var = 4

    # NEVER use double leading and trailing underscores for your own names
    __nooooooodontdoit__ = 0

    # don't call anything (because some fonts are hard to distiguish):
    l = 1
    O = 2
    I = 3

    # some examples of how to wrap code to conform to 79-columns limit:
    def __init__(self, width, height,
                 color='black', emphasis=None, highlight=0):
        if width == 0 and height == 0 and \
           color == 'red' and emphasis == 'strong' or \
           highlight > 100:
            raise ValueError('sorry, you lose')
        if width == 0 and height == 0 and (color == 'red' or
                                           emphasis is None):
            raise ValueError("I don't think so -- values are %s, %s" %
                             (width, height))
        Blob.__init__(self, width, height,
                      color, emphasis, highlight)

    # empty lines within method to enhance readability; no set rule
    short_foo_dict = {'loooooooooooooooooooong_element_name': 'cat',
                      'other_element': 'dog'}

    long_foo_dict_with_many_elements = {
        'foo': 'cat',
        'bar': 'dog'
    }

    # 1 empty line between in-class def'ns
    def foo_method(self, x, y=None):
        """Method and function names are lower_case_with_underscores.

        Always use self as first arg.
        """
        pass

    @classmethod
    def bar(cls):
        """Use cls!"""
        pass


"""
Common naming convention names:
snake_case
MACRO_CASE
camelCase
CapWords
"""

# Newline at end of file

"##;

#[test]
fn conventional_module_has_no_violations() {
    let filter = ScanFilter::new().exclude(ViolationKind::ModuleNotFound);
    let violations = linter().scan_filtered(CORRECT, &filter).unwrap();
    assert!(violations.is_empty(), "{violations:?}");
}
