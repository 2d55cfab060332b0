//! Contextual token reclassification for Red, Arby, Slang and Sunny.
//!
//! These languages are Ruby DSLs: their source is valid Ruby, so a Ruby
//! tokenizer produces the right tokens with the wrong categories. This crate
//! wraps that token stream and relabels it.
//!
//! ```text
//! RubyTokens ──► Reclassifier ──► Token stream
//!                  │  Window: [prev] current [peek(1) … peek(K)]
//!                  └─ RuleSet chain: own rules → fallback rules → …
//! ```
//!
//! # Guarantees
//!
//! - One output token per input token, in order, with the same position and
//!   text. Only the category changes.
//! - A token no rule matches comes out unchanged.
//! - Buffers and caches belong to one stream; streams never share state.
//!
//! # Example
//!
//! ```
//! use red_lexer::{rule_sets, Category, LexerOptions, RedLexer};
//!
//! let lexer = RedLexer::new(&rule_sets::RED, LexerOptions::default());
//! let classes: Vec<&str> = lexer
//!     .tokens("record Account do\nend\n")
//!     .filter(|t| t.category == Category::NameClass)
//!     .map(|t| t.text)
//!     .collect();
//! assert_eq!(classes, ["Account"]);
//! ```

mod lexer;
mod reclassifier;
mod registry;
mod rule;
mod rule_set;
pub mod rule_sets;
mod symbol_list;
mod window;

pub use lexer::{RedLexer, RedTokens};
pub use reclassifier::{Reclassifier, Reclassify};
pub use red_lexer_core::{LexerOptions, OptionsError};
pub use red_ir::{Category, Token};
pub use registry::{find_by_name, find_for_filename, guess, scores, LookupError, ALL_RULE_SETS};
pub use rule::{Rule, RuleContext};
pub use rule_set::{Analysis, RuleSet};
pub use symbol_list::SymbolCache;
pub use window::Window;
