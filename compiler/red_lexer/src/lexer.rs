//! A base Ruby tokenizer composed with one rule set.

use std::borrow::Cow;

use red_lexer_core::{LexerOptions, RubyLexer, RubyTokens};

use crate::reclassifier::Reclassifier;
use crate::registry::{self, LookupError};
use crate::rule_set::RuleSet;

/// Tokenizer for one DSL.
///
/// Cheap to copy. Each call to [`tokens`](RedLexer::tokens) starts a fresh,
/// independent stream.
#[derive(Clone, Copy, Debug)]
pub struct RedLexer {
    rule_set: &'static RuleSet,
    base: RubyLexer,
}

/// Token stream produced by [`RedLexer::tokens`].
pub type RedTokens<'s> = Reclassifier<'static, 's, RubyTokens<'s>>;

impl RedLexer {
    /// Bind `rule_set` to a base tokenizer configured with `options`.
    pub fn new(rule_set: &'static RuleSet, options: LexerOptions) -> Self {
        RedLexer {
            rule_set,
            base: RubyLexer::new(options),
        }
    }

    /// Like [`new`](RedLexer::new), looking the rule set up by name or alias.
    pub fn by_name(name: &str, options: LexerOptions) -> Result<Self, LookupError> {
        registry::find_by_name(name).map(|rule_set| Self::new(rule_set, options))
    }

    pub fn rule_set(&self) -> &'static RuleSet {
        self.rule_set
    }

    pub fn options(&self) -> &LexerOptions {
        self.base.options()
    }

    /// Apply the base tokenizer's input normalisation.
    pub fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.base.prepare(text)
    }

    /// Lazily tokenize and reclassify prepared `source`.
    pub fn tokens<'s>(&self, source: &'s str) -> RedTokens<'s> {
        tracing::debug!(
            rule_set = self.rule_set.name,
            lookahead = self.rule_set.window_lookahead(),
            len = source.len(),
            "tokenizing"
        );
        Reclassifier::new(self.base.tokens(source), self.rule_set)
    }

    /// Confidence that `text` is written in this lexer's language.
    pub fn analyse_text(&self, text: &str) -> f32 {
        self.rule_set.analyse_text(text)
    }
}
