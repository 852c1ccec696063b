//! tcsh-dealias: expand tcsh aliases in a command line without running it.
//!
//! Given an alias table captured from tcsh (`alias > alias.txt`) and a
//! command line, this crate produces the command line tcsh would actually
//! execute: aliases substituted recursively, `!` history references inside
//! alias bodies resolved against the words the alias was invoked with, and
//! backtick sub-commands expanded on their own.
//!
//! # Architecture
//!
//! - **[`parse`]** — String primitives and the quote-aware simple-command tokenizer.
//! - **[`expand`]** — Expansion engine: alias recursion, history references, backticks.
//! - **[`alias`]** — Alias table and the loader for tcsh `alias` output.
//! - **[`config`]** — Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]** — stderr / file logger setup.

/// Alias table and loader.
pub mod alias;
/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Alias and history expansion engine.
pub mod expand;
/// Logger initialisation.
pub mod logging;
/// String primitives, tokenizer, token types.
pub mod parse;

pub use alias::AliasTable;
pub use expand::Expander;

/// Fully expand `command` against `aliases` with default settings.
///
/// This is the main entry point for tests and simple usage. For
/// configured depth or delimiters, build an [`Expander`] directly.
pub fn dealias(command: &str, aliases: &AliasTable) -> String {
    Expander::new(aliases).expand_line(command)
}
