//! `redlex guess`: score a file against every rule set.

use std::io::{self, Write};

use red_lexer::{guess, scores};

use super::{exit_on_write_error, read_file};

/// Write each rule set's score, then the pick.
pub fn write_scores(out: &mut impl Write, content: &str) -> io::Result<()> {
    for (rule_set, score) in scores(content) {
        writeln!(out, "{:<10} {score:.2}", rule_set.name)?;
    }
    match guess(content) {
        Ok(rule_set) => writeln!(out, "best: {}", rule_set.name),
        Err(e) => writeln!(out, "best: none ({e})"),
    }
}

pub fn guess_file(path: &str) {
    let content = read_file(path);
    exit_on_write_error(write_scores(&mut io::stdout().lock(), &content));
}
