//! Bounded lookahead and lookbehind buffers.
//!
//! ```text
//!   lookbehind (finalized)      current      lookahead (raw)
//!   [ … prev ]                  token        [ peek(1) … peek(K) ]
//! ```
//!
//! The lookahead queue holds up to `1 + K` raw tokens: the one about to be
//! processed plus `K` upcoming ones. The lookbehind keeps the most recent
//! *finalized* token, skipping whitespace and other `Text`.

use std::collections::VecDeque;

use red_ir::Token;

/// Sliding token window owned by one reclassifier.
#[derive(Clone, Debug)]
pub struct Window<'s> {
    ahead: VecDeque<Token<'s>>,
    /// `1 + K`.
    ahead_capacity: usize,
    behind: Option<Token<'s>>,
}

impl<'s> Window<'s> {
    /// A window seeing `lookahead` tokens ahead and one token behind.
    pub fn new(lookahead: usize) -> Self {
        let ahead_capacity = lookahead + 1;
        Window {
            ahead: VecDeque::with_capacity(ahead_capacity),
            ahead_capacity,
            behind: None,
        }
    }

    /// `K`: how many tokens past the current one rules may inspect.
    pub fn lookahead(&self) -> usize {
        self.ahead_capacity - 1
    }

    /// The queue holds the current token plus a full lookahead.
    pub fn is_full(&self) -> bool {
        self.ahead.len() >= self.ahead_capacity
    }

    /// Number of buffered, not yet processed tokens.
    pub fn len(&self) -> usize {
        self.ahead.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ahead.is_empty()
    }

    /// Append a raw token to the lookahead queue.
    pub fn push(&mut self, token: Token<'s>) {
        debug_assert!(!self.is_full(), "push into a full window");
        self.ahead.push_back(token);
    }

    /// Take the oldest buffered token for processing.
    pub fn pop(&mut self) -> Option<Token<'s>> {
        self.ahead.pop_front()
    }

    /// The `n`-th upcoming token (`1 ≤ n ≤ K`) relative to the token being
    /// processed. `None` past the end of the buffered input.
    pub fn peek(&self, n: usize) -> Option<&Token<'s>> {
        n.checked_sub(1).and_then(|index| self.ahead.get(index))
    }

    /// Upcoming tokens in order, trivia included.
    pub fn upcoming(&self) -> impl Iterator<Item = &Token<'s>> + '_ {
        self.ahead.iter()
    }

    /// First upcoming token that is not whitespace or text.
    pub fn next_significant(&self) -> Option<&Token<'s>> {
        self.upcoming().find(|t| !t.is_trivia())
    }

    /// Most recently finalized non-trivia token.
    pub fn prev(&self) -> Option<&Token<'s>> {
        self.behind.as_ref()
    }

    /// Record a finalized token. Trivia is not remembered.
    pub fn remember(&mut self, token: Token<'s>) {
        if !token.is_trivia() {
            self.behind = Some(token);
        }
    }
}
