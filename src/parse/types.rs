//! Types produced by the tokenizer and consumed by the expander.

use std::fmt;

/// Control operator separating simple commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `&&` — run next only if previous succeeded
    And,
    /// `||` — run next only if previous failed
    Or,
    /// `;` — run next unconditionally
    Semi,
    /// `|` — pipe stdout
    Pipe,
    /// `|&` — pipe stdout+stderr
    PipeErr,
    /// `&` — run in background
    Background,
    /// `(` — open subshell
    OpenParen,
    /// `)` — close subshell
    CloseParen,
}

impl Operator {
    /// The operator's shell syntax.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::And => "&&",
            Operator::Or => "||",
            Operator::Semi => ";",
            Operator::Pipe => "|",
            Operator::PipeErr => "|&",
            Operator::Background => "&",
            Operator::OpenParen => "(",
            Operator::CloseParen => ")",
        }
    }

    /// Recognise a two-character operator starting at `c`.
    pub(crate) fn pair(c: u8, next: u8) -> Option<Self> {
        match (c, next) {
            (b'&', b'&') => Some(Operator::And),
            (b'|', b'|') => Some(Operator::Or),
            (b'|', b'&') => Some(Operator::PipeErr),
            _ => None,
        }
    }

    /// Recognise a single-character operator.
    pub(crate) fn single(c: u8) -> Option<Self> {
        match c {
            b'|' => Some(Operator::Pipe),
            b'&' => Some(Operator::Background),
            b';' => Some(Operator::Semi),
            b'(' => Some(Operator::OpenParen),
            b')' => Some(Operator::CloseParen),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One element of a tokenized command line.
///
/// Fragments and operators interleave in source order. A fragment may be
/// empty when two operators sit back to back (`a;;b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text of a simple command, with leading spaces/tabs stepped over.
    Fragment(String),
    /// A control operator, kept as its own token.
    Operator(Operator),
}

impl Token {
    /// The token's source text.
    pub fn as_str(&self) -> &str {
        match self {
            Token::Fragment(text) => text,
            Token::Operator(op) => op.as_str(),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
