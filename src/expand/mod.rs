//! Alias expansion engine.
//!
//! [`Expander`] walks a command line the way tcsh does before running it:
//! split into simple commands, substitute aliases in each (resolving `!`
//! history references against the alias invocation), re-split whatever the
//! substitution produced, and recurse, up to a depth ceiling.

pub mod history;

pub use history::{HistoryContext, WordRange, arg_substring, replace_history};

use crate::alias::AliasTable;
use crate::config::ExpansionConfig;
use crate::parse::text::{self, WHITESPACE};
use crate::parse::{Token, split_into_simple_commands};

/// Recursion depth at which alias expansion gives up (tcsh reports "Alias
/// loop"; we return the text reached so far).
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Largest depth ceiling accepted. Each level is a stack frame, so the
/// ceiling must stay well inside the main thread's stack.
pub const MAX_DEPTH_LIMIT: usize = 256;

/// Expands aliases against a read-only [`AliasTable`].
///
/// Holds no mutable state, so one expander can serve any number of
/// independent command lines.
#[derive(Debug, Clone)]
pub struct Expander<'a> {
    aliases: &'a AliasTable,
    max_depth: usize,
    delimiters: String,
}

impl<'a> Expander<'a> {
    /// Expander with the default depth ceiling and whitespace set.
    pub fn new(aliases: &'a AliasTable) -> Self {
        Self {
            aliases,
            max_depth: DEFAULT_MAX_DEPTH,
            delimiters: WHITESPACE.to_string(),
        }
    }

    /// Expander configured from the `[expansion]` config section.
    pub fn from_config(aliases: &'a AliasTable, config: &ExpansionConfig) -> Self {
        Self::new(aliases)
            .with_max_depth(config.max_depth)
            .with_delimiters(config.word_delimiters.clone())
    }

    /// Set the depth ceiling, clamped to [`MAX_DEPTH_LIMIT`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.min(MAX_DEPTH_LIMIT);
        self
    }

    /// Characters that separate alias arguments for history references.
    pub fn with_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Effective depth ceiling, after clamping.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Expand aliases in a single simple command.
    ///
    /// The first word is looked up; if it names an alias, the body has its
    /// history references resolved, is re-split into simple commands, and
    /// each piece is expanded one level deeper. The leading piece is only
    /// re-expanded when its first word differs from the alias name, so
    /// `ls` → `ls -F` stops after one step. A trailing space on `command`
    /// is carried over to the result.
    pub fn expand_aliases(&self, command: &str, depth: usize) -> String {
        if depth >= self.max_depth {
            log::debug!("alias expansion stopped at depth {depth}: {command}");
            return command.to_string();
        }
        if text::is_blank(command) {
            return command.to_string();
        }

        let ends_with_space = command.ends_with(' ');
        let (head, rest) = text::split_after_first_word(command);
        let Some(body) = self.aliases.get(&head) else {
            return command.to_string();
        };

        let resolved = HistoryContext::new(&head, &rest, &self.delimiters).replace(body);
        log::trace!("alias {head} [depth {depth}]: {command} -> {resolved}");

        let mut tokens = split_into_simple_commands(&resolved).into_iter();
        let mut result = match tokens.next() {
            Some(first) => {
                let (new_head, _) = text::split_after_first_word(&resolved);
                if new_head != head {
                    self.expand_token(&first, depth + 1)
                } else {
                    first.as_str().to_string()
                }
            }
            None => String::new(),
        };

        for token in tokens {
            result.push(' ');
            result.push_str(&self.expand_token(&token, depth + 1));
        }

        if ends_with_space {
            result.push(' ');
        }

        result
    }

    /// Expand aliases in every simple command of `command`.
    ///
    /// Operators are copied through; no separators are added, since the
    /// tokens already carry the spacing that matters.
    pub fn dealias_command(&self, command: &str) -> String {
        split_into_simple_commands(command)
            .iter()
            .map(|token| self.expand_token(token, 0))
            .collect()
    }

    /// Expand aliases inside backtick sub-commands.
    ///
    /// The text is cut at every backtick. Even-numbered pieces lie outside
    /// backticks and are kept as they are; odd-numbered pieces are dealiased
    /// and wrapped in a fresh pair of backticks.
    pub fn process_backticks(&self, command: &str) -> String {
        command
            .split('`')
            .enumerate()
            .map(|(i, piece)| {
                if i % 2 == 0 {
                    piece.to_string()
                } else {
                    format!("`{}`", self.dealias_command(piece))
                }
            })
            .collect()
    }

    /// Full expansion of a command line as tcsh would hand it to `exec`:
    /// aliases, then backtick sub-commands, then removal of unescaped `"`
    /// and of the backslash in `\!`.
    pub fn expand_line(&self, command: &str) -> String {
        let dealiased = self.dealias_command(command);
        let with_subcommands = self.process_backticks(&dealiased);
        let unquoted = text::remove_unescaped_quotes(&with_subcommands);
        text::unescape(&unquoted, '!')
    }

    fn expand_token(&self, token: &Token, depth: usize) -> String {
        match token {
            Token::Fragment(fragment) => self.expand_aliases(fragment, depth),
            Token::Operator(op) => op.as_str().to_string(),
        }
    }
}
