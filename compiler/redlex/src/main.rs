//! `redlex`: tokenize Red, Arby, Slang and Sunny sources.

use redlex::commands::{guess_file, lex_file, list_lexers, parse_lex_args};

fn main() {
    redlex::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let lex_args = match parse_lex_args(&args[2..]) {
                Ok(lex_args) => lex_args,
                Err(msg) => {
                    eprintln!("error: {msg}");
                    eprintln!("Usage: redlex lex <file> [--lexer=<name>] [-O key=value ...]");
                    std::process::exit(1);
                }
            };
            lex_file(&lex_args);
        }
        "lexers" => {
            list_lexers();
        }
        "guess" => {
            if args.len() < 3 {
                eprintln!("Usage: redlex guess <file>");
                std::process::exit(1);
            }
            guess_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("redlex {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("redlex: token reclassifier for Ruby-hosted DSLs");
    println!();
    println!("Usage: redlex <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize a file and print one token per line");
    println!("  lexers               List the available lexers");
    println!("  guess <file>         Score a file against every lexer");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --lexer=<name>       Lexer name or alias (default: from file name, then content)");
    println!("  -O <key=value>       Lexer option: stripnl, stripall, ensurenl, tabsize");
    println!();
    println!("Examples:");
    println!("  redlex lex model.red");
    println!("  redlex lex model.rb --lexer=arby -O tabsize=4");
    println!("  RUST_LOG=red_lexer=trace redlex lex model.red");
}
