//! Lexer option bag.
//!
//! Options are given by the host as `key=value` pairs and forwarded
//! unchanged from the composition layer to the base tokenizer. They only
//! affect how the input text is normalised before tokenizing.

use std::borrow::Cow;

/// Error while reading lexer options from `key=value` pairs.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unknown lexer option `{0}`")]
    UnknownOption(String),
    #[error("invalid value `{value}` for lexer option `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("expected `key=value`, found `{0}`")]
    Malformed(String),
}

/// Text preparation options shared by every lexer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines (`stripnl`).
    pub strip_newlines: bool,
    /// Strip all leading and trailing whitespace (`stripall`).
    pub strip_all: bool,
    /// Make sure the text ends with a newline (`ensurenl`).
    pub ensure_newline: bool,
    /// Expand tabs to this many columns; `0` leaves tabs alone (`tabsize`).
    pub tab_size: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            strip_newlines: true,
            strip_all: false,
            ensure_newline: true,
            tab_size: 0,
        }
    }
}

impl LexerOptions {
    /// Build options from `key=value` pairs, starting from the defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = LexerOptions::default();
        for (key, value) in pairs {
            options.set(key, value)?;
        }
        Ok(options)
    }

    /// Parse a single `key=value` argument and apply it.
    pub fn set_arg(&mut self, arg: &str) -> Result<(), OptionsError> {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| OptionsError::Malformed(arg.to_owned()))?;
        self.set(key.trim(), value.trim())
    }

    /// Apply one option.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        };
        match key {
            "stripnl" => self.strip_newlines = parse_bool(value).ok_or_else(invalid)?,
            "stripall" => self.strip_all = parse_bool(value).ok_or_else(invalid)?,
            "ensurenl" => self.ensure_newline = parse_bool(value).ok_or_else(invalid)?,
            "tabsize" => self.tab_size = value.parse().map_err(|_| invalid())?,
            _ => return Err(OptionsError::UnknownOption(key.to_owned())),
        }
        Ok(())
    }

    /// Normalise `text` for tokenizing.
    ///
    /// Line endings become `\n`, then stripping, tab expansion and the final
    /// newline are applied in that order. Token positions refer to the
    /// prepared text. Returns the input unchanged (borrowed) when nothing
    /// applies.
    pub fn prepare<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut out: Cow<'t, str> = if text.contains('\r') {
            Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
        } else {
            Cow::Borrowed(text)
        };

        if self.strip_all {
            out = trim_cow(out, str::trim);
        } else if self.strip_newlines {
            out = trim_cow(out, |s| s.trim_matches('\n'));
        }

        if self.tab_size > 0 && out.contains('\t') {
            out = Cow::Owned(expand_tabs(&out, self.tab_size));
        }

        if self.ensure_newline && !out.ends_with('\n') {
            out.to_mut().push('\n');
        }
        out
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Some(true),
        "0" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

fn trim_cow<'t>(text: Cow<'t, str>, trim: impl Fn(&str) -> &str) -> Cow<'t, str> {
    match text {
        Cow::Borrowed(s) => Cow::Borrowed(trim(s)),
        Cow::Owned(s) => {
            let trimmed = trim(&s);
            if trimmed.len() == s.len() {
                Cow::Owned(s)
            } else {
                Cow::Owned(trimmed.to_owned())
            }
        }
    }
}

/// Replace tabs with spaces up to the next multiple of `size` columns.
/// Columns restart after every newline.
fn expand_tabs(text: &str, size: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let pad = size - column % size;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
