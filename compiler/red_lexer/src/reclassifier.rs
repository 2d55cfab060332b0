//! The streaming reclassifier.
//!
//! Pulls raw tokens into a [`Window`] until it holds the current token plus
//! `K` upcoming ones, then pops the oldest, lets the rules decide its
//! category, remembers it for lookbehind and yields it. At end of input the
//! remaining buffered tokens go through the same path with a shrinking
//! lookahead.
//!
//! A name approved by a symbol-list scan leaves the cache as soon as it is
//! popped, even when a higher-priority rule claims it.
//!
//! Output is one-to-one with input: same count, order, positions and texts.
//! Only categories change. All state lives in the iterator, so independent
//! streams never observe each other.

use std::iter::{Fuse, FusedIterator};

use red_ir::Token;

use crate::rule::RuleContext;
use crate::rule_set::RuleSet;
use crate::symbol_list::SymbolCache;
use crate::window::Window;

/// Decides the final category of one token given its window.
///
/// Implementors must provide [`reclassify`](Reclassify::reclassify); there
/// is no pass-through default.
pub trait Reclassify {
    /// Upcoming tokens the rules may inspect.
    fn lookahead(&self) -> usize;

    fn reclassify<'s>(&self, token: Token<'s>, cx: &mut RuleContext<'_, 's>) -> Token<'s>;
}

/// Iterator adapter applying a [`Reclassify`] to a raw token stream.
pub struct Reclassifier<'r, 's, I, R: ?Sized = RuleSet> {
    source: Fuse<I>,
    rules: &'r R,
    window: Window<'s>,
    symbols: SymbolCache<'s>,
}

impl<'r, 's, I, R> Reclassifier<'r, 's, I, R>
where
    I: Iterator<Item = Token<'s>>,
    R: Reclassify + ?Sized,
{
    pub fn new(source: impl IntoIterator<IntoIter = I>, rules: &'r R) -> Self {
        Reclassifier {
            source: source.into_iter().fuse(),
            rules,
            window: Window::new(rules.lookahead()),
            symbols: SymbolCache::new(),
        }
    }

    /// Top up the window. Returns once it is full or input has run out.
    fn fill(&mut self) {
        while !self.window.is_full() {
            match self.source.next() {
                Some(token) => self.window.push(token),
                None => break,
            }
        }
    }
}

impl<'r, 's, I, R> Iterator for Reclassifier<'r, 's, I, R>
where
    I: Iterator<Item = Token<'s>>,
    R: Reclassify + ?Sized,
{
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        self.fill();
        let token = self.window.pop()?;
        let approved = self.symbols.take(&token);
        let mut cx = RuleContext {
            window: &self.window,
            symbols: &mut self.symbols,
            approved,
        };
        let token = self.rules.reclassify(token, &mut cx);
        self.window.remember(token);
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let buffered = self.window.len();
        let (low, high) = self.source.size_hint();
        (
            low.saturating_add(buffered),
            high.and_then(|high| high.checked_add(buffered)),
        )
    }
}

impl<'r, 's, I, R> FusedIterator for Reclassifier<'r, 's, I, R>
where
    I: Iterator<Item = Token<'s>>,
    R: Reclassify + ?Sized,
{
}

#[cfg(test)]
mod tests;
