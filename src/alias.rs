//! Alias table and the loader for tcsh `alias` output.
//!
//! The table is produced by running `alias > alias.txt` inside tcsh: one
//! alias per line, name first, then whitespace, then the expansion. tcsh
//! wraps expansions containing special characters in `( … )`.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use crate::parse::text;

/// Alias name → expansion body. Names are case-sensitive.
///
/// Built once and then only read. Inserting a name that already exists
/// replaces the earlier body, matching tcsh where the last `alias` wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define (or redefine) an alias.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) {
        self.entries.insert(name.into(), body.into());
    }

    /// Expansion body for `name`, if defined.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse the text of tcsh `alias` output.
    ///
    /// Each body has one enclosing `( … )` pair and every unescaped `"`
    /// removed. Lines without both a name and a body are reported and
    /// skipped; blank lines are ignored.
    pub fn parse(source: &str) -> Self {
        let mut table = Self::new();

        for line in source.lines() {
            if text::is_blank(line) {
                continue;
            }

            let (name, body) = text::split_after_first_word(line);
            if name.is_empty() || body.is_empty() {
                log::warn!("Ignoring unexpected entry in alias table: {line}");
                continue;
            }

            let body = text::strip_enclosing(&body, '(', ')');
            let body = text::remove_unescaped_quotes(&body);
            log::trace!("alias {name} = {body}");
            table.insert(name, body);
        }

        table
    }

    /// Read and parse an alias file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let table = Self::parse(&source);
        log::debug!("loaded {} aliases from {}", table.len(), path.display());
        Ok(table)
    }
}

impl<N: Into<String>, B: Into<String>> FromIterator<(N, B)> for AliasTable {
    fn from_iter<I: IntoIterator<Item = (N, B)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, body) in iter {
            table.insert(name, body);
        }
        table
    }
}
