//! Raw Ruby tokens produced by logos.
//!
//! Identifiers are a single pattern; keyword and builtin resolution happens
//! in the driver (see `words`). Multi-line `=begin`/`=end` comments are
//! matched by their opening marker and extended by the driver.

use logos::Logos;
use red_ir::Category;

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RawToken {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[regex(r"#[^\n]*")]
    LineComment,

    #[token("=begin")]
    BlockCommentStart,

    #[regex(r"[a-z_][a-zA-Z0-9_]*[?!]?")]
    Ident,

    #[regex(r"[A-Z][a-zA-Z0-9_]*")]
    Constant,

    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    InstanceVar,

    #[regex(r"@@[a-zA-Z_][a-zA-Z0-9_]*")]
    ClassVar,

    #[regex(r"\$[a-zA-Z_][a-zA-Z0-9_]*")]
    #[regex(r"\$[0-9]+")]
    GlobalVar,

    #[regex(r":[a-zA-Z_][a-zA-Z0-9_]*[?!=]?")]
    #[regex(r#":"([^"\\]|\\.)*""#)]
    Symbol,

    #[regex(r#""([^"\\]|\\.)*""#)]
    DoubleString,

    #[regex(r"'([^'\\]|\\.)*'")]
    SingleString,

    #[regex(r"`[^`]*`")]
    Backtick,

    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    HexInt,

    #[regex(r"0[bB][01][01_]*")]
    BinInt,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    Float,

    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[token(".")]
    #[token("&.")]
    Dot,

    #[token("::")]
    #[token("[")]
    #[token("]")]
    #[token("..")]
    #[token("...")]
    #[token("**")]
    #[token("*")]
    #[token("+")]
    #[token("-")]
    #[token("/")]
    #[token("%")]
    #[token("^")]
    #[token("~")]
    #[token("!")]
    #[token("?")]
    #[token("&")]
    #[token("|")]
    #[token("&&")]
    #[token("||")]
    #[token("<")]
    #[token(">")]
    #[token("<<")]
    #[token(">>")]
    #[token("<=")]
    #[token(">=")]
    #[token("<=>")]
    #[token("=")]
    #[token("==")]
    #[token("===")]
    #[token("!=")]
    #[token("=~")]
    #[token("!~")]
    #[token("=>")]
    #[token("->")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("/=")]
    #[token("||=")]
    #[token("&&=")]
    #[token("<<=")]
    Operator,

    #[token("(")]
    #[token(")")]
    #[token("{")]
    #[token("}")]
    #[token(";")]
    #[token(",")]
    #[token(":")]
    #[token("\\")]
    Punctuation,

    /// Non-ASCII runs the Ruby patterns do not cover.
    #[regex(r"[^\x00-\x7F]+")]
    NonAscii,
}

impl RawToken {
    /// Category for tokens whose kind alone decides it.
    ///
    /// Identifiers and constants are resolved by the driver and never reach
    /// this function with a meaningful answer; they map to their defaults.
    pub(crate) fn category(self) -> Category {
        match self {
            RawToken::Whitespace => Category::Whitespace,
            RawToken::LineComment => Category::CommentSingle,
            RawToken::BlockCommentStart => Category::CommentMultiline,
            RawToken::Ident => Category::Name,
            RawToken::Constant => Category::NameConstant,
            RawToken::InstanceVar => Category::NameVariableInstance,
            RawToken::ClassVar => Category::NameVariableClass,
            RawToken::GlobalVar => Category::NameVariableGlobal,
            RawToken::Symbol => Category::StringSymbol,
            RawToken::DoubleString => Category::StringDouble,
            RawToken::SingleString => Category::StringSingle,
            RawToken::Backtick => Category::StringBacktick,
            RawToken::HexInt => Category::NumberHex,
            RawToken::BinInt => Category::NumberBin,
            RawToken::Float => Category::NumberFloat,
            RawToken::Int => Category::NumberInteger,
            RawToken::Dot | RawToken::Operator => Category::Operator,
            RawToken::Punctuation => Category::Punctuation,
            RawToken::NonAscii => Category::Error,
        }
    }
}
