//! Command handlers for the `redlex` CLI.
//!
//! Each submodule implements one command. Shared helpers such as
//! `read_file` live here in the module root.

mod guess;
mod lex;
mod lexers;

pub use guess::{guess_file, write_scores};
pub use lex::{lex_file, parse_lex_args, select_rule_set, write_tokens, LexArgs};
pub use lexers::{list_lexers, write_lexers};

/// Read a source file, exiting with a message on failure.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Report a failed write to stdout (usually a closed pipe) and exit.
pub(crate) fn exit_on_write_error(result: std::io::Result<()>) {
    if let Err(e) = result {
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("error writing output: {e}");
        }
        std::process::exit(1);
    }
}
