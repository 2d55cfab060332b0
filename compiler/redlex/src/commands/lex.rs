//! `redlex lex`: print the reclassified token stream of a file.

use std::io::{self, Write};
use std::path::Path;

use red_lexer::{find_by_name, find_for_filename, guess, LexerOptions, LookupError, RedLexer, RuleSet};

use super::{exit_on_write_error, read_file};

/// Parsed arguments of `redlex lex`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexArgs {
    pub path: String,
    /// `--lexer=<name>`
    pub lexer: Option<String>,
    /// `-O key=value`, in order.
    pub options: Vec<String>,
}

/// Parse the arguments following `lex`.
pub fn parse_lex_args(args: &[String]) -> Result<LexArgs, String> {
    let mut path = None;
    let mut lexer = None;
    let mut options = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(name) = arg.strip_prefix("--lexer=") {
            lexer = Some(name.to_string());
        } else if arg == "--lexer" || arg == "-l" {
            i += 1;
            let name = args.get(i).ok_or_else(|| format!("missing value for '{arg}'"))?;
            lexer = Some(name.clone());
        } else if arg == "-O" {
            i += 1;
            let option = args.get(i).ok_or("missing value for '-O'")?;
            options.push(option.clone());
        } else if let Some(option) = arg.strip_prefix("-O") {
            options.push(option.to_string());
        } else if arg.starts_with('-') {
            return Err(format!("unknown option '{arg}'"));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
        i += 1;
    }

    let path = path.ok_or("missing file path")?;
    Ok(LexArgs {
        path,
        lexer,
        options,
    })
}

/// Choose a rule set from an explicit name, then the file name, then the
/// content.
pub fn select_rule_set(
    lexer: Option<&str>,
    path: &str,
    content: &str,
) -> Result<&'static RuleSet, LookupError> {
    if let Some(name) = lexer {
        return find_by_name(name);
    }
    find_for_filename(Path::new(path)).or_else(|_| guess(content))
}

/// Write one line per token: position, category, text.
pub fn write_tokens(out: &mut impl Write, lexer: &RedLexer, source: &str) -> io::Result<()> {
    for token in lexer.tokens(source) {
        writeln!(out, "{token}")?;
    }
    Ok(())
}

/// Lex a file and print its token stream.
pub fn lex_file(args: &LexArgs) {
    let content = read_file(&args.path);

    let mut options = LexerOptions::default();
    for option in &args.options {
        if let Err(e) = options.set_arg(option) {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    let rule_set = match select_rule_set(args.lexer.as_deref(), &args.path, &content) {
        Ok(rule_set) => rule_set,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("Run `redlex lexers` to see available lexers, then pass --lexer=<name>.");
            std::process::exit(1);
        }
    };

    let lexer = RedLexer::new(rule_set, options);
    let source = lexer.prepare(&content);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    exit_on_write_error(
        writeln!(out, "Tokens for '{}' ({}):", args.path, rule_set.name)
            .and_then(|()| write_tokens(&mut out, &lexer, &source)),
    );
}
