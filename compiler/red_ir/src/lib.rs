//! Shared vocabulary for the Red lexers.
//!
//! - [`Category`]: the closed, hierarchical taxonomy of lexical kinds
//! - [`Token`]: `(position, category, text)` triples produced by the base
//!   tokenizer and re-emitted by the reclassifier

mod category;
mod token;

pub use category::{Category, UnknownCategory};
pub use token::Token;
