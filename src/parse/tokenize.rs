use super::types::{Operator, Token};

/// Break a command line into simple-command fragments and control operators.
///
/// Single quotes, double quotes and backticks each toggle a region in which
/// the operator characters `| & ( ) ;` are ordinary text. A backslash stops
/// the next quote character from toggling; the backslash itself stays in the
/// fragment. Unbalanced quotes are not an error: the region simply runs to
/// the end of the input.
///
/// Spaces and tabs at the start of a fragment are stepped over; spacing
/// anywhere else is kept verbatim. Operators always flush the pending
/// fragment, even when it is empty.
pub fn split_into_simple_commands(command: &str) -> Vec<Token> {
    let bytes = command.as_bytes();
    let len = bytes.len();
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut i = 0;
    let (mut esc, mut sq, mut dq, mut bq) = (false, false, false, false);

    while i < len {
        let c = bytes[i];
        let prev = if i > 0 { bytes[i - 1] } else { 0 };
        let next = bytes.get(i + 1).copied().unwrap_or(0);

        match c {
            b'\\' => {
                // `\\` is a literal pair, unlike tcsh's own scanner which
                // re-arms the escape on every backslash
                esc = !esc;
                i += 1;
            }
            b'\'' | b'"' | b'`' => {
                if esc {
                    esc = false;
                } else {
                    match c {
                        b'\'' => sq = !sq,
                        b'"' => dq = !dq,
                        _ => bq = !bq,
                    }
                }
                i += 1;
            }
            b'|' | b'&' | b'(' | b')' | b';' => {
                esc = false;
                if sq || dq || bq {
                    i += 1;
                    continue;
                }

                if let Some(op) = Operator::pair(c, next) {
                    tokens.push(Token::Fragment(command[start..i].to_string()));
                    tokens.push(Token::Operator(op));
                    i += 2;
                    start = i;
                } else if prev == b'>' && c == b'&' {
                    // `>&` redirect, not a background operator
                    i += 1;
                } else if let Some(op) = Operator::single(c) {
                    tokens.push(Token::Fragment(command[start..i].to_string()));
                    tokens.push(Token::Operator(op));
                    i += 1;
                    start = i;
                }
            }
            b' ' | b'\t' => {
                if start == i {
                    start += 1;
                }
                esc = false;
                i += 1;
            }
            _ => {
                esc = false;
                i += 1;
            }
        }
    }

    if start != i {
        tokens.push(Token::Fragment(command[start..i].to_string()));
    }

    tokens
}
