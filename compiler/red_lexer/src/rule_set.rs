//! Rule sets: one DSL's rules plus the rule set it extends.
//!
//! Dispatch is an explicit walk over the fallback chain. A derived rule set
//! tries its own rules first, in order, then hands the token to its parent.
//! The first rule that answers decides the category.

use std::iter;

use red_ir::Token;

use crate::reclassifier::Reclassify;
use crate::rule::{Rule, RuleContext};

/// Auto-detection data for [`RuleSet::analyse_text`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Analysis {
    /// Interpreter names that make a `#!` first line a certain match.
    pub shebang: &'static [&'static str],
    /// Declaration words that earn `marker_bonus` when a line starts with one.
    pub markers: &'static [&'static str],
    pub marker_bonus: f32,
    /// Added to the parent's score, usually a small negative nudge so a
    /// derived language only wins with evidence of its own.
    pub offset: f32,
}

impl Analysis {
    pub const NONE: Analysis = Analysis {
        shebang: &[],
        markers: &[],
        marker_bonus: 0.0,
        offset: 0.0,
    };
}

/// A named, immutable bundle of rules for one language.
#[derive(Debug)]
pub struct RuleSet {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    /// `*.ext` globs.
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
    /// Tokens of lookahead this rule set's own rules need.
    pub lookahead: usize,
    pub rules: &'static [Rule],
    /// Consulted for tokens none of `rules` rewrites.
    pub fallback: Option<&'static RuleSet>,
    pub analysis: Analysis,
}

impl RuleSet {
    /// This rule set followed by its ancestors.
    pub fn chain(&self) -> impl Iterator<Item = &RuleSet> {
        iter::successors(Some(self), |rule_set| rule_set.fallback)
    }

    /// Lookahead the whole chain needs.
    pub fn window_lookahead(&self) -> usize {
        self.chain().map(|rule_set| rule_set.lookahead).max().unwrap_or(0)
    }

    /// Confidence in `[0, 1]` that `text` is written in this language.
    pub fn analyse_text(&self, text: &str) -> f32 {
        let inherited = self.fallback.map_or(0.0, |parent| parent.analyse_text(text));
        let analysis = &self.analysis;
        if has_shebang(text, analysis.shebang) {
            return 1.0;
        }
        let mut score = inherited + analysis.offset;
        if starts_declaration(text, analysis.markers) {
            score += analysis.marker_bonus;
        }
        score.clamp(0.0, 1.0)
    }

    /// Whether `file_name` matches one of the `*.ext` globs.
    pub fn matches_filename(&self, file_name: &str) -> bool {
        self.filenames.iter().any(|glob| match glob.strip_prefix('*') {
            Some(suffix) => file_name.ends_with(suffix),
            None => file_name == *glob,
        })
    }
}

impl Reclassify for RuleSet {
    fn lookahead(&self) -> usize {
        self.window_lookahead()
    }

    fn reclassify<'s>(&self, token: Token<'s>, cx: &mut RuleContext<'_, 's>) -> Token<'s> {
        for rule_set in self.chain() {
            for rule in rule_set.rules {
                if let Some(category) = rule.apply(&token, cx) {
                    if category != token.category {
                        tracing::trace!(
                            rule_set = rule_set.name,
                            rule = rule.name(),
                            pos = token.pos,
                            text = token.text,
                            from = %token.category,
                            to = %category,
                            "reclassified"
                        );
                    }
                    return token.with_category(category);
                }
            }
        }
        token
    }
}

fn has_shebang(text: &str, interpreters: &[&str]) -> bool {
    let Some(line) = text.lines().next().and_then(|l| l.strip_prefix("#!")) else {
        return false;
    };
    line.split(|c: char| c == '/' || c.is_whitespace())
        .any(|word| {
            interpreters.iter().any(|name| {
                word.strip_prefix(name)
                    .is_some_and(|version| version.chars().all(|c| c.is_ascii_digit() || c == '.'))
            })
        })
}

fn starts_declaration(text: &str, markers: &[&str]) -> bool {
    text.lines().any(|line| {
        let line = line.trim_start();
        markers.iter().any(|marker| {
            line.strip_prefix(marker)
                .is_some_and(|rest| rest.starts_with(char::is_whitespace))
        })
    })
}
