use super::*;
use pretty_assertions::assert_eq;

#[test]
fn tables_are_sorted() {
    for table in [KEYWORDS, PSEUDO_KEYWORDS, WORD_OPERATORS, BUILTINS] {
        for pair in table.windows(2) {
            assert!(pair[0] < pair[1], "table not sorted: {:?}", pair);
        }
    }
}

#[test]
fn keywords_resolve_first() {
    assert_eq!(lookup("def", false), Some(Category::Keyword));
    assert_eq!(lookup("defined?", false), Some(Category::Keyword));
    assert_eq!(lookup("end", false), Some(Category::Keyword));
}

#[test]
fn pseudo_keywords() {
    assert_eq!(lookup("self", false), Some(Category::KeywordPseudo));
    assert_eq!(lookup("nil", false), Some(Category::KeywordPseudo));
    assert_eq!(lookup("attr_reader", false), Some(Category::KeywordPseudo));
}

#[test]
fn word_operators() {
    assert_eq!(lookup("and", false), Some(Category::OperatorWord));
    assert_eq!(lookup("not", false), Some(Category::OperatorWord));
}

#[test]
fn builtins_include_name() {
    assert_eq!(lookup("puts", false), Some(Category::NameBuiltin));
    assert_eq!(lookup("name", false), Some(Category::NameBuiltin));
    assert_eq!(lookup("Array", false), Some(Category::NameBuiltin));
}

#[test]
fn nothing_resolves_after_dot() {
    assert_eq!(lookup("name", true), None);
    assert_eq!(lookup("class", true), None);
}

#[test]
fn ordinary_identifiers_are_unresolved() {
    assert_eq!(lookup("record", false), None);
    assert_eq!(lookup("Account", false), None);
}

#[test]
fn declarations() {
    assert_eq!(declaration("def"), Some(Declaration::Function));
    assert_eq!(declaration("class"), Some(Declaration::Class));
    assert_eq!(declaration("module"), Some(Declaration::Module));
    assert_eq!(declaration("if"), None);
}
