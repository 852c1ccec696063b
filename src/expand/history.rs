//! `!` history references inside alias bodies.
//!
//! tcsh records the command line in its history before expanding aliases, so
//! within an alias body "history" means the invocation being expanded: word 0
//! is the alias name and words 1..=N are the arguments typed after it.
//!
//! Supported designators (the `:` after `!` is optional except where shown):
//!
//! | reference        | words        |
//! |------------------|--------------|
//! | `!!`, `!#`, `!:` | 0..=N        |
//! | `!*`             | 1..=N        |
//! | `!$`             | N            |
//! | `!^`             | 1            |
//! | `!^-m`, `!^-$`   | 1..=m, 1..=N |
//! | `!^-`            | 1..=N-1      |
//! | `!-m`, `!-$`     | 0..=m, 0..=N |
//! | `!-`             | 0..=N-1      |
//! | `!:n`            | n            |
//! | `!:n*`, `!:n-$`  | n..=N        |
//! | `!:n-m`          | n..=m        |
//! | `!:n-`           | n..=N-1      |

use crate::parse::text::{self, WHITESPACE};

/// Inclusive range of invocation words selected by a history reference.
///
/// Signed because the "all but last" forms can reach `-1` when there are no
/// arguments; such ranges select nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordRange {
    pub first: i64,
    pub last: i64,
}

impl WordRange {
    pub fn new(first: i64, last: i64) -> Self {
        Self { first, last }
    }
}

/// The invocation an alias body's history references are resolved against.
#[derive(Debug)]
pub struct HistoryContext<'a> {
    /// Name the alias was invoked by (word 0).
    alias: &'a str,
    /// Argument text exactly as typed, appended when the body has no references.
    args: &'a str,
    /// `args` split into words 1..=N.
    words: Vec<String>,
}

impl<'a> HistoryContext<'a> {
    /// Build a context, splitting `args` on any character in `delimiters`.
    pub fn new(alias: &'a str, args: &'a str, delimiters: &str) -> Self {
        Self {
            alias,
            args,
            words: text::split_words(args, delimiters),
        }
    }

    /// Number of argument words (N).
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Join the invocation words selected by `range` with single spaces.
    ///
    /// Returns an empty string unless `first <= last <= N`.
    pub fn arg_substring(&self, range: WordRange) -> String {
        let WordRange { first, last } = range;
        if first < 0 || first > last || last > self.word_count() as i64 {
            return String::new();
        }

        let mut parts: Vec<&str> = Vec::new();
        let from = if first == 0 {
            parts.push(self.alias);
            1
        } else {
            first
        };
        parts.extend(
            self.words[(from - 1) as usize..last as usize]
                .iter()
                .map(String::as_str),
        );

        text::trim(&parts.join(" "))
    }

    /// Replace every history reference in `body` with the words it selects.
    ///
    /// A body without any reference gets the typed arguments appended after
    /// a space instead. The result is trimmed.
    pub fn replace(&self, body: &str) -> String {
        let bytes = body.as_bytes();
        let last = self.word_count() as i64;
        let mut out = String::with_capacity(body.len() + self.args.len());
        let mut copied = 0;
        let mut found = false;
        let mut i = 0;

        // A reference needs at least one character after the `!`.
        while i + 1 < bytes.len() {
            if bytes[i] == b'!'
                && let Some((range, used)) = parse_designator(&bytes[i + 1..], last)
            {
                out.push_str(&body[copied..i]);
                out.push_str(&self.arg_substring(range));
                found = true;
                i += 1 + used;
                copied = i;
            } else {
                i += 1;
            }
        }
        out.push_str(&body[copied..]);

        if !found {
            out.push(' ');
            out.push_str(self.args);
        }

        text::trim(&out)
    }
}

/// Resolve `!` references in `body` against an alias invocation, splitting
/// `args` on the default whitespace set.
pub fn replace_history(body: &str, alias: &str, args: &str) -> String {
    HistoryContext::new(alias, args, WHITESPACE).replace(body)
}

/// Words `first..=last` of the invocation `alias args`, where word 0 is the
/// alias name. Out-of-range requests yield an empty string.
pub fn arg_substring(first: i64, last: i64, alias: &str, args: &str) -> String {
    HistoryContext::new(alias, args, WHITESPACE).arg_substring(WordRange::new(first, last))
}

/// Parse a designator starting just past a `!`.
///
/// Returns the selected range and how many bytes the designator occupies,
/// counting an optional leading `:`. `None` means the `!` is literal text.
fn parse_designator(spec: &[u8], last: i64) -> Option<(WordRange, usize)> {
    let colon = spec.first() == Some(&b':');
    let body = if colon { &spec[1..] } else { spec };

    let (range, used) = match body.first().copied() {
        Some(b'!' | b'#') => (WordRange::new(0, last), 1),
        Some(b'*') => (WordRange::new(1, last), 1),
        Some(b'$') => (WordRange::new(last, last), 1),
        Some(b'^') if body.get(1) == Some(&b'-') => {
            let (end, tail) = range_end(&body[2..], last);
            (WordRange::new(1, end), 2 + tail)
        }
        Some(b'^') => (WordRange::new(1, 1), 1),
        Some(b'-') => {
            let (end, tail) = range_end(&body[1..], last);
            (WordRange::new(0, end), 1 + tail)
        }
        _ if colon => match leading_number(body) {
            Some((n, digits)) => match body.get(digits).copied() {
                Some(b'*') => (WordRange::new(n, last), digits + 1),
                Some(b'-') => {
                    let (end, tail) = range_end(&body[digits + 1..], last);
                    (WordRange::new(n, end), digits + 1 + tail)
                }
                _ => (WordRange::new(n, n), digits),
            },
            // bare `!:` is the whole invocation, like `!#`
            None => (WordRange::new(0, last), 0),
        },
        _ => return None,
    };

    Some((range, usize::from(colon) + used))
}

/// Resolve the text after a range's `-`: a number, `$` for the last word, or
/// nothing, which stops one short of the last word.
fn range_end(rest: &[u8], last: i64) -> (i64, usize) {
    if let Some((end, digits)) = leading_number(rest) {
        (end, digits)
    } else if rest.first() == Some(&b'$') {
        (last, 1)
    } else {
        (last - 1, 0)
    }
}

/// Value and length of the run of ASCII digits at the start of `bytes`.
/// Values too large to represent saturate, which puts them out of range.
fn leading_number(bytes: &[u8]) -> Option<(i64, usize)> {
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    let value = bytes[..digits].iter().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some((value, digits))
}
