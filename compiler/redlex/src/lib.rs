//! Command-line front end for the Red lexers.
//!
//! The binary lives in `main.rs`; command handlers live here so they can be
//! tested without spawning a process.

pub mod commands;
mod tracing_setup;

pub use tracing_setup::init_tracing;
