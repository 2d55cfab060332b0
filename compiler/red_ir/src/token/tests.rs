use super::*;
use pretty_assertions::assert_eq;

#[test]
fn with_category_keeps_position_and_text() {
    let raw = Token::new(7, Category::Name, "record");
    let promoted = raw.with_category(Category::Keyword);
    assert_eq!(promoted.pos, 7);
    assert_eq!(promoted.text, "record");
    assert_eq!(promoted.category, Category::Keyword);
    // The source token is untouched.
    assert_eq!(raw.category, Category::Name);
}

#[test]
fn end_is_exclusive() {
    assert_eq!(Token::new(3, Category::Name, "abc").end(), 6);
    assert_eq!(Token::new(3, Category::Text, "").end(), 3);
}

#[test]
fn trivia_is_any_text() {
    assert!(Token::new(0, Category::Whitespace, " ").is_trivia());
    assert!(Token::new(0, Category::Text, "\n").is_trivia());
    assert!(!Token::new(0, Category::Punctuation, ",").is_trivia());
}

#[test]
fn is_checks_exact_category() {
    let tok = Token::new(0, Category::Punctuation, "(");
    assert!(tok.is(Category::Punctuation, "("));
    assert!(!tok.is(Category::Operator, "("));
    assert!(!tok.is(Category::Punctuation, "["));
}

#[test]
fn debug_and_display_formats() {
    let tok = Token::new(12, Category::NameClass, "Account");
    assert_eq!(format!("{tok:?}"), "Name.Class \"Account\" @ 12");
    assert_eq!(
        format!("{tok}"),
        "    12  Name.Class                   \"Account\""
    );
}
