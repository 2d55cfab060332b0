//! Base tokenizer for the Red lexers.
//!
//! Turns Ruby source text into a lazy stream of [`Token`]s. The stream is
//! the raw input of the reclassifier in `red_lexer`, which relabels tokens
//! for the Ruby-hosted DSLs.
//!
//! ```text
//! text → LexerOptions::prepare → RubyLexer (logos) → Token stream
//! ```
//!
//! This crate knows nothing about rule sets; it only mirrors the host Ruby
//! lexer, with one change to symbol boundaries so qualified names such as
//! `X::Y` lex as constants around a `::` operator.

mod options;
mod raw_token;
mod ruby;
mod words;

pub use options::{LexerOptions, OptionsError};
pub use red_ir::{Category, Token};
pub use ruby::{RubyLexer, RubyTokens};
