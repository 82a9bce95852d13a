//! Mapping from tree-sitter-python node kinds to node categories.

use little_lint_core::NodeCategory;

/// Returns the category of a named tree-sitter-python node kind.
///
/// Kinds with special lowering (blocks, decorated definitions, expression
/// statements, `__future__` imports) are handled by the lowering pass and
/// never reach this table.
#[must_use]
pub fn category_of(kind: &str) -> NodeCategory {
    use NodeCategory as C;

    match kind {
        "module" => C::Module,

        "import_statement" => C::Import,
        "import_from_statement" | "future_import_statement" => C::ImportFrom,
        "function_definition" => C::FunctionDef,
        "class_definition" => C::ClassDef,
        "assignment" => C::Assign,
        "augmented_assignment" => C::AugAssign,
        "expression_statement" | "print_statement" | "exec_statement" => C::Expr,
        "return_statement" => C::Return,
        "delete_statement" => C::Delete,
        "pass_statement" => C::Pass,
        "break_statement" => C::Break,
        "continue_statement" => C::Continue,
        "raise_statement" => C::Raise,
        "assert_statement" => C::Assert,
        "global_statement" => C::Global,
        "nonlocal_statement" => C::Nonlocal,
        "if_statement" => C::If,
        "for_statement" => C::For,
        "while_statement" => C::While,
        "with_statement" => C::With,
        "try_statement" => C::Try,
        "match_statement" => C::Match,
        "type_alias_statement" => C::TypeAlias,

        "identifier" => C::Name,
        "attribute" => C::Attribute,
        "call" => C::Call,
        "string" | "concatenated_string" | "integer" | "float" | "true" | "false" | "none"
        | "ellipsis" => C::Constant,
        "binary_operator" => C::BinOp,
        "boolean_operator" => C::BoolOp,
        "comparison_operator" => C::Compare,
        "unary_operator" | "not_operator" => C::UnaryOp,
        "lambda" => C::Lambda,
        "conditional_expression" => C::IfExp,
        "list" | "tuple" | "set" | "dictionary" | "expression_list" => C::Collection,
        "list_comprehension" | "set_comprehension" | "dictionary_comprehension"
        | "generator_expression" => C::Comprehension,
        "subscript" => C::Subscript,
        "await" => C::Await,
        "yield" => C::Yield,
        "list_splat" | "dictionary_splat" => C::Starred,
        "named_expression" => C::NamedExpr,

        "dotted_name" => C::DottedName,
        "aliased_import" => C::Alias,
        "relative_import" => C::RelativeImport,
        "wildcard_import" => C::Wildcard,
        "decorator" => C::Decorator,
        "parameters" | "lambda_parameters" | "argument_list" => C::Arguments,
        "keyword_argument" => C::Keyword,
        "elif_clause" | "else_clause" | "except_clause" | "except_group_clause"
        | "finally_clause" | "case_clause" => C::Clause,

        _ => C::Other,
    }
}

/// Returns true for categories whose tree-sitter children are not lowered.
///
/// Strings keep their interpolations and escapes as text only; import
/// paths are read through their text.
#[must_use]
pub fn is_leaf(category: NodeCategory) -> bool {
    matches!(
        category,
        NodeCategory::Name
            | NodeCategory::Constant
            | NodeCategory::DottedName
            | NodeCategory::RelativeImport
            | NodeCategory::Wildcard
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statements_map_to_statement_subcategories() {
        for kind in ["import_statement", "if_statement", "function_definition", "pass_statement"] {
            assert_eq!(category_of(kind).supertypes(), &[NodeCategory::Statement], "{kind}");
        }
    }

    #[test]
    fn expressions_map_to_expression_subcategories() {
        for kind in ["identifier", "call", "string", "binary_operator", "lambda"] {
            assert_eq!(category_of(kind).supertypes(), &[NodeCategory::Expression], "{kind}");
        }
    }

    #[test]
    fn unknown_kinds_fall_back_to_other() {
        assert_eq!(category_of("type_parameter"), NodeCategory::Other);
        assert_eq!(category_of("pattern"), NodeCategory::Other);
    }
}
