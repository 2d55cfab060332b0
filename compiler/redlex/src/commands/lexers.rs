//! `redlex lexers`: list registered rule sets.

use std::io::{self, Write};

use red_lexer::ALL_RULE_SETS;

use super::exit_on_write_error;

/// Write a table of rule sets with their aliases, file globs, MIME types and
/// parent.
pub fn write_lexers(out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:<10} {:<20} {:<10} {:<16} extends",
        "name", "aliases", "files", "mimetypes"
    )?;
    for rule_set in ALL_RULE_SETS {
        writeln!(
            out,
            "{:<10} {:<20} {:<10} {:<16} {}",
            rule_set.name,
            rule_set.aliases.join(", "),
            rule_set.filenames.join(", "),
            rule_set.mimetypes.join(", "),
            rule_set.fallback.map_or("-", |parent| parent.name),
        )?;
    }
    Ok(())
}

pub fn list_lexers() {
    exit_on_write_error(write_lexers(&mut io::stdout().lock()));
}
