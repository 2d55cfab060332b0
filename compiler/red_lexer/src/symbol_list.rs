//! Forward scan for bracketed symbol lists.
//!
//! In `[a, b, :c]` only `:c` lexes as a symbol, but the whole list is one.
//! When a `Name` follows `[` or `(`, the scan walks the lookahead window
//! alternating comma and item. Reaching an item that is already a symbol
//! approves the names seen on the way; they are cached and recategorized
//! when they come out of the window themselves.
//!
//! Any other token, or running out of window, ends the scan without a match
//! and clears the cache.

use red_ir::{Category, Token};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::window::Window;

/// Names approved by an earlier scan, keyed by `(position, text)`.
#[derive(Clone, Debug, Default)]
pub struct SymbolCache<'s> {
    approved: FxHashSet<(usize, &'s str)>,
}

impl<'s> SymbolCache<'s> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.approved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approved.is_empty()
    }

    pub(crate) fn approve(&mut self, tokens: impl IntoIterator<Item = Token<'s>>) {
        self.approved
            .extend(tokens.into_iter().map(|t| (t.pos, t.text)));
    }

    /// Remove `token` from the cache, reporting whether it was approved.
    pub(crate) fn take(&mut self, token: &Token<'s>) -> bool {
        self.approved.remove(&(token.pos, token.text))
    }

    pub(crate) fn clear(&mut self) {
        self.approved.clear();
    }
}

/// Outcome of a forward scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Scan<'s> {
    /// A symbol closes the list; carries the names to approve.
    Symbols(SmallVec<[Token<'s>; 4]>),
    /// The comma-separated pattern broke.
    Broken,
    /// The window ran out first.
    Inconclusive,
}

/// Scan the upcoming tokens after a `Name` that opened a list.
pub(crate) fn scan<'s>(window: &Window<'s>) -> Scan<'s> {
    let mut provisional = SmallVec::new();
    let mut want_item = false;

    for token in window.upcoming().filter(|t| !t.is_trivia()) {
        if want_item {
            if token.category.is_a(Category::StringSymbol) {
                return Scan::Symbols(provisional);
            }
            if token.category != Category::Name {
                return Scan::Broken;
            }
            provisional.push(*token);
            want_item = false;
        } else if token.is(Category::Punctuation, ",") {
            want_item = true;
        } else {
            return Scan::Broken;
        }
    }
    Scan::Inconclusive
}
