//! Positioned, categorized source slices.

use std::fmt;

use crate::Category;

/// A token: byte offset into the source, category, and the exact matched text.
///
/// Tokens are values. Reclassification produces a new token through
/// [`Token::with_category`]; position and text never change.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub pos: usize,
    pub category: Category,
    pub text: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(pos: usize, category: Category, text: &'src str) -> Self {
        Token {
            pos,
            category,
            text,
        }
    }

    /// Same position and text under a different category.
    #[inline]
    #[must_use]
    pub const fn with_category(self, category: Category) -> Self {
        Token { category, ..self }
    }

    /// Byte offset one past the end of the token.
    #[inline]
    pub const fn end(&self) -> usize {
        self.pos + self.text.len()
    }

    /// Whitespace and plain text carry no meaning for neighbour rules.
    #[inline]
    pub fn is_trivia(&self) -> bool {
        self.category.is_a(Category::Text)
    }

    /// `true` if the token has exactly `category` and `text`.
    #[inline]
    pub fn is(&self, category: Category, text: &str) -> bool {
        self.category == category && self.text == text
    }
}

impl fmt::Debug for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} @ {}", self.category, self.text, self.pos)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}  {:<28} {:?}", self.pos, self.category, self.text)
    }
}

#[cfg(test)]
mod tests;
