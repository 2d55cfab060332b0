use std::cell::RefCell;

use super::*;
use pretty_assertions::assert_eq;
use red_ir::Category as C;

use crate::rule_sets::{RED, SLANG};

fn stream(parts: &[(C, &'static str)]) -> Vec<Token<'static>> {
    let mut pos = 0;
    parts
        .iter()
        .map(|&(category, text)| {
            let token = Token::new(pos, category, text);
            pos += text.len();
            token
        })
        .collect()
}

/// Leaves tokens alone.
struct PassThrough;

impl Reclassify for PassThrough {
    fn lookahead(&self) -> usize {
        3
    }

    fn reclassify<'s>(&self, token: Token<'s>, _cx: &mut RuleContext<'_, 's>) -> Token<'s> {
        token
    }
}

/// Records what each call could see: `(current, peek(1), prev)`.
#[derive(Default)]
struct Spy {
    lookahead: usize,
    seen: RefCell<Vec<(String, Option<String>, Option<String>)>>,
}

impl Reclassify for Spy {
    fn lookahead(&self) -> usize {
        self.lookahead
    }

    fn reclassify<'s>(&self, token: Token<'s>, cx: &mut RuleContext<'_, 's>) -> Token<'s> {
        self.seen.borrow_mut().push((
            token.text.to_owned(),
            cx.window.peek(1).map(|t| t.text.to_owned()),
            cx.window.prev().map(|t| t.text.to_owned()),
        ));
        token
    }
}

fn owned(text: &str) -> Option<String> {
    Some(text.to_owned())
}

#[test]
fn pass_through_is_identity() {
    let input = stream(&[
        (C::Name, "a"),
        (C::Whitespace, " "),
        (C::Operator, "+"),
        (C::Whitespace, " "),
        (C::Name, "b"),
    ]);
    let output: Vec<Token<'_>> = Reclassifier::new(input.clone(), &PassThrough).collect();
    assert_eq!(output, input);
}

#[test]
fn empty_input_yields_nothing() {
    let mut tokens = Reclassifier::new(Vec::new(), &PassThrough);
    assert_eq!(tokens.next(), None);
    assert_eq!(tokens.next(), None);
}

#[test]
fn every_call_sees_its_window() {
    let spy = Spy {
        lookahead: 1,
        ..Spy::default()
    };
    let input = stream(&[(C::Name, "a"), (C::Whitespace, " "), (C::Name, "b")]);
    let output: Vec<Token<'_>> = Reclassifier::new(input, &spy).collect();

    assert_eq!(output.len(), 3);
    assert_eq!(
        spy.seen.into_inner(),
        vec![
            ("a".to_owned(), owned(" "), None),
            (" ".to_owned(), owned("b"), owned("a")),
            // drained: no lookahead left, whitespace not remembered
            ("b".to_owned(), None, owned("a")),
        ]
    );
}

#[test]
fn short_input_drains_through_rules() {
    let spy = Spy {
        lookahead: 10,
        ..Spy::default()
    };
    let input = stream(&[(C::Name, "a"), (C::Name, "b")]);
    let output: Vec<Token<'_>> = Reclassifier::new(input, &spy).collect();

    assert_eq!(output.len(), 2);
    assert_eq!(
        spy.seen.into_inner(),
        vec![("a".to_owned(), owned("b"), None), ("b".to_owned(), None, owned("a"))]
    );
}

#[test]
fn lookbehind_sees_finalized_category() {
    // `record` is promoted before `Account` is decided.
    let input = stream(&[
        (C::Name, "record"),
        (C::Whitespace, " "),
        (C::NameConstant, "Account"),
    ]);
    let output: Vec<C> = Reclassifier::new(input, &RED).map(|t| t.category).collect();
    assert_eq!(output, vec![C::Keyword, C::Whitespace, C::NameClass]);
}

#[test]
fn size_hint_counts_buffered_tokens() {
    let input = stream(&[(C::Name, "a"), (C::Name, "b"), (C::Name, "c")]);
    let mut tokens = Reclassifier::new(input, &PassThrough);
    assert_eq!(tokens.size_hint(), (3, Some(3)));
    tokens.next();
    assert_eq!(tokens.size_hint(), (2, Some(2)));
    assert_eq!(tokens.count(), 2);
}

#[test]
fn source_is_pulled_lazily() {
    let pulled = RefCell::new(0);
    let source = (0..100).map(|pos| {
        *pulled.borrow_mut() += 1;
        Token::new(pos, C::Name, "x")
    });
    let mut tokens = Reclassifier::new(source, &PassThrough);
    tokens.next();
    // current token plus three of lookahead
    assert_eq!(*pulled.borrow(), 4);
}

#[test]
fn approved_name_claimed_by_earlier_rule_leaves_cache() {
    // Slang promotes `data` before Arby's symbol-list rule is consulted.
    let input = stream(&[
        (C::Name, "f"),
        (C::Punctuation, "("),
        (C::Name, "a"),
        (C::Punctuation, ","),
        (C::Whitespace, " "),
        (C::Name, "data"),
        (C::Punctuation, ","),
        (C::Whitespace, " "),
        (C::StringSymbol, ":c"),
        (C::Punctuation, ")"),
    ]);
    let mut tokens = Reclassifier::new(input, &SLANG);
    let head: Vec<(C, &str)> = tokens.by_ref().take(3).map(|t| (t.category, t.text)).collect();
    assert_eq!(head[2], (C::StringSymbol, "a"));
    assert_eq!(tokens.symbols.len(), 1);

    let rest: Vec<(C, &str)> = tokens.by_ref().take(3).map(|t| (t.category, t.text)).collect();
    assert_eq!(rest[2], (C::Keyword, "data"));
    assert!(tokens.symbols.is_empty());
    assert_eq!(tokens.count(), 4);
}
