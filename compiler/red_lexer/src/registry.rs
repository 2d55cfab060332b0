//! Lookup of rule sets by name, file name or content.

use std::path::Path;

use crate::rule_set::RuleSet;
use crate::rule_sets::{ARBY, RED, RUBY, SLANG, SUNNY};

/// Every built-in rule set, base languages first.
pub static ALL_RULE_SETS: &[&RuleSet] = &[&RUBY, &RED, &ARBY, &SLANG, &SUNNY];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("no lexer named `{0}`")]
    UnknownName(String),

    #[error("no lexer for file name `{0}`")]
    UnknownFilename(String),

    #[error("no lexer recognises the given text")]
    NoMatch,
}

/// Find a rule set by name or alias, ignoring case.
pub fn find_by_name(name: &str) -> Result<&'static RuleSet, LookupError> {
    ALL_RULE_SETS
        .iter()
        .copied()
        .find(|rule_set| {
            rule_set.name.eq_ignore_ascii_case(name)
                || rule_set.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| LookupError::UnknownName(name.to_owned()))
}

/// Find the rule set whose file name globs match the last component of
/// `path`.
pub fn find_for_filename(path: &Path) -> Result<&'static RuleSet, LookupError> {
    let unknown = || LookupError::UnknownFilename(path.display().to_string());
    let file_name = path.file_name().and_then(|name| name.to_str()).ok_or_else(unknown)?;
    ALL_RULE_SETS
        .iter()
        .copied()
        .find(|rule_set| rule_set.matches_filename(file_name))
        .ok_or_else(unknown)
}

/// Score `text` against every rule set.
pub fn scores(text: &str) -> impl Iterator<Item = (&'static RuleSet, f32)> + '_ {
    ALL_RULE_SETS
        .iter()
        .map(move |&rule_set| (rule_set, rule_set.analyse_text(text)))
}

/// Pick the rule set most confident about `text`. The earliest registered
/// wins ties; a best score of zero is no match.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn guess(text: &str) -> Result<&'static RuleSet, LookupError> {
    let mut best: Option<(&'static RuleSet, f32)> = None;
    for (rule_set, score) in scores(text) {
        tracing::debug!(rule_set = rule_set.name, score, "analysed");
        let better = match best {
            Some((_, top)) => score > top,
            None => true,
        };
        if better {
            best = Some((rule_set, score));
        }
    }
    match best {
        Some((rule_set, score)) if score > 0.0 => Ok(rule_set),
        _ => Err(LookupError::NoMatch),
    }
}
