use super::*;
use pretty_assertions::assert_eq;
use red_ir::Category as C;

/// Helper: tokenize and keep `(category, text)` pairs, dropping whitespace.
fn lex(source: &str) -> Vec<(Category, &str)> {
    RubyTokens::new(source)
        .filter(|t| !t.is_trivia())
        .map(|t| (t.category, t.text))
        .collect()
}

/// Helper: tokenize and keep every token.
fn lex_all(source: &str) -> Vec<Token<'_>> {
    RubyTokens::new(source).collect()
}

// === Symbol boundaries ===

#[test]
fn qualified_constant_is_not_a_symbol() {
    assert_eq!(
        lex("X::Y"),
        vec![
            (C::NameConstant, "X"),
            (C::Operator, "::"),
            (C::NameConstant, "Y"),
        ]
    );
}

#[test]
fn deep_qualified_name() {
    assert_eq!(
        lex("A::B::C"),
        vec![
            (C::NameConstant, "A"),
            (C::Operator, "::"),
            (C::NameConstant, "B"),
            (C::Operator, "::"),
            (C::NameConstant, "C"),
        ]
    );
}

#[test]
fn hash_key_is_symbol_and_punctuation() {
    assert_eq!(
        lex("{ owner: User }"),
        vec![
            (C::Punctuation, "{"),
            (C::StringSymbol, "owner"),
            (C::Punctuation, ":"),
            (C::NameConstant, "User"),
            (C::Punctuation, "}"),
        ]
    );
}

#[test]
fn symbol_key_positions_are_contiguous() {
    let tokens = lex_all("key:1");
    assert_eq!(tokens[0], Token::new(0, C::StringSymbol, "key"));
    assert_eq!(tokens[1], Token::new(3, C::Punctuation, ":"));
    assert_eq!(tokens[2], Token::new(4, C::NumberInteger, "1"));
}

#[test]
fn symbol_key_does_not_swallow_next_symbol() {
    // Without splitting the colon off, `:b` would lex as a symbol.
    assert_eq!(
        lex("a:b"),
        vec![
            (C::StringSymbol, "a"),
            (C::Punctuation, ":"),
            (C::Name, "b"),
        ]
    );
}

#[test]
fn builtin_name_key_stays_builtin() {
    // The host lexer resolves builtins before symbol keys; the RedRuby
    // rule set repairs this case downstream.
    assert_eq!(
        lex("name: 'x'"),
        vec![
            (C::NameBuiltin, "name"),
            (C::Punctuation, ":"),
            (C::StringSingle, "'x'"),
        ]
    );
}

#[test]
fn leading_colon_symbols() {
    assert_eq!(
        lex(":c :ok? :\"quoted\""),
        vec![
            (C::StringSymbol, ":c"),
            (C::StringSymbol, ":ok?"),
            (C::StringSymbol, ":\"quoted\""),
        ]
    );
}

// === Words ===

#[test]
fn keywords_and_pseudo_keywords() {
    assert_eq!(
        lex("if self then nil end"),
        vec![
            (C::Keyword, "if"),
            (C::KeywordPseudo, "self"),
            (C::Keyword, "then"),
            (C::KeywordPseudo, "nil"),
            (C::Keyword, "end"),
        ]
    );
}

#[test]
fn plain_identifiers_are_names() {
    assert_eq!(
        lex("record requires foo"),
        vec![(C::Name, "record"), (C::Name, "requires"), (C::Name, "foo")]
    );
}

#[test]
fn builtins_only_without_receiver() {
    assert_eq!(
        lex("puts x.puts"),
        vec![
            (C::NameBuiltin, "puts"),
            (C::Name, "x"),
            (C::Operator, "."),
            (C::Name, "puts"),
        ]
    );
}

#[test]
fn def_names_a_function() {
    assert_eq!(
        lex("def render(view)"),
        vec![
            (C::Keyword, "def"),
            (C::NameFunction, "render"),
            (C::Punctuation, "("),
            (C::Name, "view"),
            (C::Punctuation, ")"),
        ]
    );
}

#[test]
fn def_self_method() {
    assert_eq!(
        lex("def self.name"),
        vec![
            (C::Keyword, "def"),
            (C::KeywordPseudo, "self"),
            (C::Operator, "."),
            (C::NameFunction, "name"),
        ]
    );
}

#[test]
fn class_and_module_names() {
    assert_eq!(
        lex("module Red class Account < Base"),
        vec![
            (C::Keyword, "module"),
            (C::NameNamespace, "Red"),
            (C::Keyword, "class"),
            (C::NameClass, "Account"),
            (C::Operator, "<"),
            (C::NameConstant, "Base"),
        ]
    );
}

#[test]
fn singleton_class_is_not_a_name() {
    assert_eq!(
        lex("class << self"),
        vec![
            (C::Keyword, "class"),
            (C::Operator, "<<"),
            (C::KeywordPseudo, "self"),
        ]
    );
}

// === Literals and variables ===

#[test]
fn literals() {
    assert_eq!(
        lex(r#"1 2.5 0xff 0b10 "a\"b" 'c' `ls`"#),
        vec![
            (C::NumberInteger, "1"),
            (C::NumberFloat, "2.5"),
            (C::NumberHex, "0xff"),
            (C::NumberBin, "0b10"),
            (C::StringDouble, r#""a\"b""#),
            (C::StringSingle, "'c'"),
            (C::StringBacktick, "`ls`"),
        ]
    );
}

#[test]
fn range_is_not_a_float() {
    assert_eq!(
        lex("1..2"),
        vec![
            (C::NumberInteger, "1"),
            (C::Operator, ".."),
            (C::NumberInteger, "2"),
        ]
    );
}

#[test]
fn variables() {
    assert_eq!(
        lex("@a @@b $c"),
        vec![
            (C::NameVariableInstance, "@a"),
            (C::NameVariableClass, "@@b"),
            (C::NameVariableGlobal, "$c"),
        ]
    );
}

#[test]
fn brackets_are_operators_and_parens_punctuation() {
    assert_eq!(
        lex("[a](b)"),
        vec![
            (C::Operator, "["),
            (C::Name, "a"),
            (C::Operator, "]"),
            (C::Punctuation, "("),
            (C::Name, "b"),
            (C::Punctuation, ")"),
        ]
    );
}

// === Comments ===

#[test]
fn line_comment() {
    assert_eq!(
        lex("x # note\ny"),
        vec![
            (C::Name, "x"),
            (C::CommentSingle, "# note"),
            (C::Name, "y"),
        ]
    );
}

#[test]
fn block_comment_runs_to_end_marker() {
    let source = "=begin\nrecord X\n=end\nrecord";
    assert_eq!(
        lex(source),
        vec![
            (C::CommentMultiline, "=begin\nrecord X\n=end"),
            (C::Name, "record"),
        ]
    );
}

#[test]
fn unterminated_block_comment_takes_the_rest() {
    assert_eq!(
        lex("=begin\nnever closed"),
        vec![(C::CommentMultiline, "=begin\nnever closed")]
    );
}

#[test]
fn begin_after_assignment_is_a_keyword() {
    assert_eq!(
        lex("x=begin\n1\nend\n"),
        vec![
            (C::Name, "x"),
            (C::Operator, "="),
            (C::Keyword, "begin"),
            (C::NumberInteger, "1"),
            (C::Keyword, "end"),
        ]
    );
    let tokens = lex_all("x =begin");
    assert_eq!(tokens[2], Token::new(2, C::Operator, "="));
    assert_eq!(tokens[3], Token::new(3, C::Keyword, "begin"));
}

#[test]
fn begin_marker_needs_whitespace_after() {
    assert_eq!(
        lex("=beginning\n"),
        vec![(C::Operator, "="), (C::Name, "beginning")]
    );
}

#[test]
fn block_comment_after_code_on_earlier_line() {
    assert_eq!(
        lex("x = 1\n=begin\nnote\n=end\ny"),
        vec![
            (C::Name, "x"),
            (C::Operator, "="),
            (C::NumberInteger, "1"),
            (C::CommentMultiline, "=begin\nnote\n=end"),
            (C::Name, "y"),
        ]
    );
}

// === Coverage ===

#[test]
fn unknown_bytes_become_errors() {
    assert_eq!(lex("\u{1}"), vec![(C::Error, "\u{1}")]);
    assert_eq!(lex("é"), vec![(C::Error, "é")]);
}

#[test]
fn tokens_cover_source_exactly() {
    let sources = [
        "",
        "x",
        "record Account do\n  refs owner: User\nend\n",
        "X::Y::Z",
        "{ name: 'a', b: :c }",
        "=begin\n x\n=end\n",
        "x=begin\n1\nend\n",
        "é ü \u{1}",
    ];
    for source in sources {
        let mut expected_pos = 0;
        let mut rebuilt = String::new();
        for tok in lex_all(source) {
            assert_eq!(tok.pos, expected_pos, "gap before {tok:?} in {source:?}");
            assert!(!tok.text.is_empty(), "empty token in {source:?}");
            expected_pos = tok.end();
            rebuilt.push_str(tok.text);
        }
        assert_eq!(rebuilt, source);
    }
}

#[test]
fn ruby_lexer_forwards_options() {
    let lexer = RubyLexer::new(LexerOptions {
        tab_size: 2,
        ..LexerOptions::default()
    });
    assert_eq!(lexer.options().tab_size, 2);
    let prepared = lexer.prepare("\tx");
    let texts: Vec<&str> = lexer.tokens(&prepared).map(|t| t.text).collect();
    assert_eq!(texts, vec!["  ", "x", "\n"]);
}

mod proptest_coverage {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_input_is_covered(source in "[ -~\n\té]{0,64}") {
            let mut pos = 0;
            for tok in RubyTokens::new(&source) {
                prop_assert_eq!(tok.pos, pos);
                prop_assert!(!tok.text.is_empty());
                pos = tok.end();
            }
            prop_assert_eq!(pos, source.len());
        }
    }
}
