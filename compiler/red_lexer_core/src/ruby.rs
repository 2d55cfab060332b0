//! Ruby tokenizer driver.
//!
//! Wraps the logos scanner and resolves what a single pattern cannot:
//! keyword tables, names following `def`/`class`/`module`, and symbol keys.
//!
//! # Symbol keys
//!
//! An identifier directly followed by one `:` is a hash key and lexes as
//! `(Literal.String.Symbol, name)` then `(Punctuation, ":")`. A following
//! `::` does not count, so `X::Y` stays `Name.Constant`, `Operator`,
//! `Name.Constant` instead of `X` / `:` / `:Y`.

use std::borrow::Cow;

use logos::Logos;
use red_ir::{Category, Token};

use crate::raw_token::RawToken;
use crate::words::{self, Declaration};
use crate::LexerOptions;

/// The base tokenizer: a Ruby lexer bound to a set of options.
#[derive(Clone, Copy, Debug, Default)]
pub struct RubyLexer {
    options: LexerOptions,
}

impl RubyLexer {
    pub fn new(options: LexerOptions) -> Self {
        RubyLexer { options }
    }

    pub fn options(&self) -> &LexerOptions {
        &self.options
    }

    /// Normalise input text according to the options.
    pub fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.options.prepare(text)
    }

    /// Lazily tokenize already prepared source.
    pub fn tokens<'s>(&self, source: &'s str) -> RubyTokens<'s> {
        RubyTokens::new(source)
    }
}

/// Lazy token stream over one source text.
///
/// Tokens are contiguous: concatenating their texts reproduces the source.
pub struct RubyTokens<'s> {
    lexer: logos::Lexer<'s, RawToken>,
    /// The `:` split off a symbol key, emitted on the next call.
    pending: Option<Token<'s>>,
    /// The previous token was `.` or `&.`.
    after_dot: bool,
    /// A `def`, `class` or `module` keyword is waiting for its name.
    declaration: Option<Declaration>,
}

impl<'s> RubyTokens<'s> {
    pub fn new(source: &'s str) -> Self {
        RubyTokens {
            lexer: RawToken::lexer(source),
            pending: None,
            after_dot: false,
            declaration: None,
        }
    }

    fn word(&mut self, start: usize, text: &'s str, constant: bool) -> Token<'s> {
        let declaration = self.declaration.take();
        let fixed = words::lookup(text, self.after_dot);

        if fixed == Some(Category::Keyword) {
            self.declaration = words::declaration(text);
            return Token::new(start, Category::Keyword, text);
        }
        // `def self.name`
        if text == "self" && declaration == Some(Declaration::Function) {
            self.declaration = declaration;
            return Token::new(start, Category::KeywordPseudo, text);
        }
        match declaration {
            Some(Declaration::Function) => return Token::new(start, Category::NameFunction, text),
            Some(Declaration::Class) if constant => {
                return Token::new(start, Category::NameClass, text);
            }
            Some(Declaration::Module) if constant => {
                return Token::new(start, Category::NameNamespace, text);
            }
            _ => {}
        }

        if let Some(category) = fixed {
            return Token::new(start, category, text);
        }

        if self.at_symbol_key() {
            let colon = start + text.len();
            self.lexer.bump(1);
            self.pending = Some(Token::new(colon, Category::Punctuation, ":"));
            return Token::new(start, Category::StringSymbol, text);
        }

        let category = if constant {
            Category::NameConstant
        } else {
            Category::Name
        };
        Token::new(start, category, text)
    }

    fn at_symbol_key(&self) -> bool {
        let rest = self.lexer.remainder();
        rest.starts_with(':') && !rest.starts_with("::")
    }

    /// `=begin` opens a comment only at the start of a line and before
    /// whitespace.
    fn opens_block_comment(&self, start: usize) -> bool {
        let at_line_start = start == 0 || self.lexer.source()[..start].ends_with('\n');
        let rest = self.lexer.remainder();
        at_line_start && (rest.is_empty() || rest.starts_with(char::is_whitespace))
    }

    /// Emit the `=` of a mid-line `=begin` and resume lexing at the word.
    fn assignment(&mut self, start: usize) -> Token<'s> {
        let source = self.lexer.source();
        let mut lexer = RawToken::lexer(source);
        lexer.bump(start + 1);
        self.lexer = lexer;
        Token::new(start, Category::Operator, &source[start..=start])
    }

    /// Extend a `=begin` token through the matching `=end` line.
    fn block_comment(&mut self, start: usize) -> Token<'s> {
        let rest = self.lexer.remainder();
        let len = match rest.find("\n=end") {
            Some(at) => {
                let after = at + "\n=end".len();
                after + rest[after..].find('\n').unwrap_or(rest.len() - after)
            }
            None => rest.len(),
        };
        self.lexer.bump(len);
        Token::new(start, Category::CommentMultiline, self.lexer.slice())
    }

    fn track(&mut self, raw: Result<RawToken, ()>) {
        self.after_dot = matches!(raw, Ok(RawToken::Dot));
        match raw {
            Ok(RawToken::Whitespace | RawToken::Dot | RawToken::Ident | RawToken::Constant) => {}
            _ => self.declaration = None,
        }
    }
}

impl<'s> Iterator for RubyTokens<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Token<'s>> {
        if let Some(colon) = self.pending.take() {
            self.after_dot = false;
            self.declaration = None;
            return Some(colon);
        }

        let raw = self.lexer.next()?;
        let start = self.lexer.span().start;
        let text = self.lexer.slice();
        let token = match raw {
            Ok(RawToken::Ident) => self.word(start, text, false),
            Ok(RawToken::Constant) => self.word(start, text, true),
            Ok(RawToken::BlockCommentStart) if self.opens_block_comment(start) => {
                self.block_comment(start)
            }
            Ok(RawToken::BlockCommentStart) => self.assignment(start),
            Ok(kind) => Token::new(start, kind.category(), text),
            Err(()) => {
                tracing::trace!(pos = start, text, "unrecognised input");
                Token::new(start, Category::Error, text)
            }
        };
        self.track(raw);
        Some(token)
    }
}

#[cfg(test)]
mod tests;
