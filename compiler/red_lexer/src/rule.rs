//! Contextual rewrite rules.
//!
//! A rule is a predicate over the current token and its window paired with
//! the category to rewrite it to. Rule sets list rules in priority order and
//! the first one that answers wins.

use red_ir::{Category, Token};

use crate::symbol_list::{self, Scan, SymbolCache};
use crate::window::Window;

/// What a rule may consult while deciding on one token.
pub struct RuleContext<'a, 's> {
    /// Upcoming raw tokens and previously finalized ones.
    pub window: &'a Window<'s>,
    /// Names approved by an earlier symbol-list scan.
    pub symbols: &'a mut SymbolCache<'s>,
    /// The current token was one of those names. Its cache entry is already
    /// consumed, whichever rule ends up deciding.
    pub approved: bool,
}

type Words = &'static [&'static str];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    /// A token of category `from` whose text is listed becomes `to`.
    Promote {
        from: Category,
        words: Words,
        to: Category,
    },
    /// A listed `Name.Builtin` directly followed by punctuation is really a
    /// hash key: `name: 'x'`.
    SymbolKey { words: Words },
    /// A token of category `from` right after one of the listed keywords
    /// becomes `to`: `record Account`.
    AfterKeyword {
        from: Category,
        keywords: Words,
        to: Category,
    },
    /// A `Name.Constant` after any keyword and before one of `brackets` is
    /// a declared class: `component Server [`.
    DeclarationBeforeBracket { brackets: Words },
    /// A listed `Name` becomes `to` only if one of `openers` follows on the
    /// same line: `all x do`, `some(y) {`.
    BlockOpener {
        words: Words,
        openers: Words,
        to: Category,
    },
    /// `Name` items of a bracketed list that ends in a symbol are symbols.
    SymbolList,
}

impl Rule {
    /// Short label used in trace output.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Promote { .. } => "promote",
            Rule::SymbolKey { .. } => "symbol-key",
            Rule::AfterKeyword { .. } => "after-keyword",
            Rule::DeclarationBeforeBracket { .. } => "declaration-before-bracket",
            Rule::BlockOpener { .. } => "block-opener",
            Rule::SymbolList => "symbol-list",
        }
    }

    /// The category `token` should take, or `None` if this rule does not
    /// apply. Missing context (a short window near the end of input) never
    /// matches.
    pub fn apply<'s>(&self, token: &Token<'s>, cx: &mut RuleContext<'_, 's>) -> Option<Category> {
        match *self {
            Rule::Promote { from, words, to } => {
                (token.category == from && listed(words, token.text)).then_some(to)
            }

            Rule::SymbolKey { words } => {
                let keyed = token.category == Category::NameBuiltin
                    && listed(words, token.text)
                    && cx
                        .window
                        .peek(1)
                        .is_some_and(|next| next.category == Category::Punctuation);
                keyed.then_some(Category::StringSymbol)
            }

            Rule::AfterKeyword { from, keywords, to } => {
                let declared = token.category == from
                    && cx.window.prev().is_some_and(|prev| {
                        prev.category == Category::Keyword && listed(keywords, prev.text)
                    });
                declared.then_some(to)
            }

            Rule::DeclarationBeforeBracket { brackets } => {
                let declared = token.category == Category::NameConstant
                    && cx
                        .window
                        .prev()
                        .is_some_and(|prev| prev.category == Category::Keyword)
                    && cx
                        .window
                        .next_significant()
                        .is_some_and(|next| listed(brackets, next.text));
                declared.then_some(Category::NameClass)
            }

            Rule::BlockOpener { words, openers, to } => {
                if token.category != Category::Name || !listed(words, token.text) {
                    return None;
                }
                opens_block(cx.window, openers).then_some(to)
            }

            Rule::SymbolList => symbol_list(token, cx),
        }
    }
}

fn listed(words: Words, text: &str) -> bool {
    words.iter().any(|w| *w == text)
}

/// Look ahead on the current line for a `do` keyword or a `{`.
fn opens_block(window: &Window<'_>, openers: Words) -> bool {
    for next in window.upcoming() {
        if next.is_trivia() {
            if next.text.contains('\n') {
                return false;
            }
            continue;
        }
        let opener = next.category.is_a(Category::Keyword) || next.category == Category::Punctuation;
        if opener && listed(openers, next.text) {
            return true;
        }
    }
    false
}

fn symbol_list<'s>(token: &Token<'s>, cx: &mut RuleContext<'_, 's>) -> Option<Category> {
    if cx.approved {
        return Some(Category::StringSymbol);
    }
    if token.category != Category::Name {
        return None;
    }
    let opened = cx
        .window
        .prev()
        .is_some_and(|prev| prev.text == "[" || prev.text == "(");
    if !opened {
        return None;
    }

    match symbol_list::scan(cx.window) {
        Scan::Symbols(names) => {
            tracing::debug!(pos = token.pos, approved = names.len(), "symbol list");
            cx.symbols.approve(names);
            Some(Category::StringSymbol)
        }
        outcome @ (Scan::Broken | Scan::Inconclusive) => {
            tracing::debug!(pos = token.pos, ?outcome, "not a symbol list");
            cx.symbols.clear();
            None
        }
    }
}
