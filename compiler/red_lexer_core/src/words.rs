//! Ruby word tables.
//!
//! Identifiers are matched by a single logos pattern and resolved here, in
//! the same order the host Ruby lexer tries its word rules:
//!
//! 1. reserved keywords
//! 2. pseudo keywords (`self`, `nil`, declarations like `attr_reader`)
//! 3. word operators (`and`, `or`, `not`)
//! 4. builtin methods, unless the identifier follows a `.`
//!
//! Each table is sorted so lookups can binary search.

use red_ir::Category;

/// Words that open a declaration whose name gets a dedicated category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Declaration {
    /// `def name` → `Name.Function`
    Function,
    /// `class Name` → `Name.Class`
    Class,
    /// `module Name` → `Name.Namespace`
    Module,
}

const KEYWORDS: &[&str] = &[
    "BEGIN", "END", "alias", "begin", "break", "case", "class", "def", "defined?", "do", "else",
    "elsif", "end", "ensure", "for", "if", "in", "module", "next", "redo", "rescue", "retry",
    "return", "super", "then", "undef", "unless", "until", "when", "while", "yield",
];

const PSEUDO_KEYWORDS: &[&str] = &[
    "__ENCODING__",
    "__FILE__",
    "__LINE__",
    "__method__",
    "attr",
    "attr_accessor",
    "attr_reader",
    "attr_writer",
    "extend",
    "false",
    "include",
    "module_function",
    "nil",
    "private",
    "protected",
    "public",
    "self",
    "true",
];

const WORD_OPERATORS: &[&str] = &["and", "not", "or"];

/// Builtin methods and classes. `name` is here because the host lexer
/// lists it; the RedRuby rule set undoes that for hash keys.
const BUILTINS: &[&str] = &[
    "Array",
    "Float",
    "Integer",
    "String",
    "__id__",
    "__send__",
    "abort",
    "ancestors",
    "at_exit",
    "autoload",
    "binding",
    "callcc",
    "caller",
    "catch",
    "chomp",
    "chop",
    "class_eval",
    "class_variables",
    "clone",
    "const_defined?",
    "const_get",
    "const_missing",
    "const_set",
    "constants",
    "display",
    "dup",
    "eval",
    "exec",
    "exit",
    "fail",
    "fork",
    "format",
    "freeze",
    "getc",
    "gets",
    "global_variables",
    "gsub",
    "hash",
    "id",
    "included_modules",
    "inspect",
    "instance_eval",
    "instance_method",
    "instance_methods",
    "instance_variable_get",
    "instance_variable_set",
    "instance_variables",
    "lambda",
    "load",
    "local_variables",
    "loop",
    "method",
    "method_missing",
    "methods",
    "module_eval",
    "name",
    "object_id",
    "open",
    "p",
    "print",
    "printf",
    "private_class_method",
    "private_instance_methods",
    "private_methods",
    "proc",
    "protected_instance_methods",
    "protected_methods",
    "public_class_method",
    "public_instance_methods",
    "public_methods",
    "putc",
    "puts",
    "raise",
    "rand",
    "readline",
    "readlines",
    "require",
    "require_relative",
    "scan",
    "select",
    "send",
    "set_trace_func",
    "singleton_methods",
    "sleep",
    "split",
    "sprintf",
    "srand",
    "sub",
    "syscall",
    "system",
    "taint",
    "test",
    "throw",
    "to_a",
    "to_s",
    "trace_var",
    "trap",
    "untaint",
    "untrace_var",
    "warn",
];

#[inline]
fn contains(table: &[&str], word: &str) -> bool {
    table.binary_search(&word).is_ok()
}

/// Resolve an identifier to a fixed word category.
///
/// Returns `None` for ordinary identifiers, which the caller lexes as
/// `Name`, `Name.Constant`, a symbol key, or a declared name.
pub(crate) fn lookup(word: &str, after_dot: bool) -> Option<Category> {
    if after_dot {
        return None;
    }
    if contains(KEYWORDS, word) {
        Some(Category::Keyword)
    } else if contains(PSEUDO_KEYWORDS, word) {
        Some(Category::KeywordPseudo)
    } else if contains(WORD_OPERATORS, word) {
        Some(Category::OperatorWord)
    } else if contains(BUILTINS, word) {
        Some(Category::NameBuiltin)
    } else {
        None
    }
}

/// The declaration opened by a keyword, if any.
pub(crate) fn declaration(keyword: &str) -> Option<Declaration> {
    match keyword {
        "def" => Some(Declaration::Function),
        "class" => Some(Declaration::Class),
        "module" => Some(Declaration::Module),
        _ => None,
    }
}

#[cfg(test)]
mod tests;
