//! String primitives shared by the tokenizer, the history resolver and the
//! alias loader.
//!
//! Every function returns a freshly owned `String`; inputs are never
//! modified. Positions are byte offsets: all the syntax handled here is
//! ASCII, so slicing next to a matched delimiter never splits a UTF-8
//! sequence.

/// Characters that delimit words in alias arguments.
pub const WHITESPACE: &str = " \x0c\n\r\t\x0b";

/// C `isspace` over a single byte: space, `\t`, `\n`, `\v`, `\f`, `\r`.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// True when `s` is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.bytes().all(is_space)
}

/// Copy part of `s` between two relative positions.
///
/// A non-negative position counts from the start, a negative one from the
/// end (`-1` is the last byte). An `end` of `0` means the end of the string.
/// Both bounds are clamped into `0..=len`; an empty or inverted range yields
/// an empty string.
pub fn slice(s: &str, begin: isize, end: isize) -> String {
    let len = s.len() as isize;
    let begin = if begin >= 0 { begin } else { len + begin }.clamp(0, len);
    let end = if end > 0 { end } else { len + end }.clamp(0, len);

    if begin < end {
        String::from_utf8_lossy(&s.as_bytes()[begin as usize..end as usize]).into_owned()
    } else {
        String::new()
    }
}

/// Remove leading and trailing whitespace.
pub fn trim(s: &str) -> String {
    s.trim_matches(|c: char| c.is_ascii() && is_space(c as u8))
        .to_string()
}

/// If `s` starts with `left` and ends with `right`, return what lies between
/// them; otherwise return `s` unchanged. Both delimiters must be ASCII.
pub fn strip_enclosing(s: &str, left: char, right: char) -> String {
    debug_assert!(left.is_ascii() && right.is_ascii());
    if s.starts_with(left) && s.ends_with(right) {
        slice(s, 1, -1)
    } else {
        s.to_string()
    }
}

/// Delete every `"` that is not preceded by a backslash.
///
/// A backslash and the character after it are copied through as a pair, so
/// `\"` survives intact (backslash included).
pub fn remove_unescaped_quotes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push(c);
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            }
            '"' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Replace every `\<ch>` with `<ch>`. A bare `<ch>` is left alone.
pub fn unescape(s: &str, ch: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev = None;
    for c in s.chars() {
        if c == ch && prev == Some('\\') {
            out.pop();
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Split `text` into words separated by any character of `delimiters`.
///
/// Double quotes toggle a quoted region in which delimiters are ordinary
/// characters. The quote characters themselves are dropped and empty words
/// are never produced.
pub fn split_words(text: &str, delimiters: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut word = String::new();
    let mut in_quote = false;

    for c in text.chars() {
        if c == '"' {
            in_quote = !in_quote;
        } else if in_quote || !delimiters.contains(c) {
            word.push(c);
        } else if !word.is_empty() {
            words.push(std::mem::take(&mut word));
        }
    }
    if !word.is_empty() {
        words.push(word);
    }

    words
}

/// Split `text` at its first whitespace run into `(first word, remainder)`.
///
/// The remainder is returned verbatim (quotes and internal spacing intact).
pub fn split_after_first_word(text: &str) -> (String, String) {
    let bytes = text.as_bytes();
    let head_end = bytes
        .iter()
        .position(|&b| is_space(b))
        .unwrap_or(bytes.len());
    let rest_start = bytes[head_end..]
        .iter()
        .position(|&b| !is_space(b))
        .map_or(bytes.len(), |p| head_end + p);

    (text[..head_end].to_string(), text[rest_start..].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_from_start() {
        assert_eq!(slice("abcdef", 1, 3), "bc");
    }

    #[test]
    fn slice_negative_positions() {
        assert_eq!(slice("abcdef", -3, -1), "de");
        assert_eq!(slice("abcdef", 1, -1), "bcde");
    }

    #[test]
    fn slice_zero_end_means_end_of_string() {
        assert_eq!(slice("abcdef", 2, 0), "cdef");
    }

    #[test]
    fn slice_clamps_out_of_range() {
        assert_eq!(slice("abc", -10, 100), "abc");
        assert_eq!(slice("abc", 5, 0), "");
    }

    #[test]
    fn slice_inverted_is_empty() {
        assert_eq!(slice("abcdef", 4, 2), "");
    }

    #[test]
    fn trim_all_whitespace_kinds() {
        assert_eq!(trim(" \t\x0b\x0cls -l\r\n"), "ls -l");
        assert_eq!(trim("  "), "");
    }

    #[test]
    fn strip_brackets() {
        assert_eq!(strip_enclosing("(ls -l)", '(', ')'), "ls -l");
        assert_eq!(strip_enclosing("ls -l", '(', ')'), "ls -l");
        assert_eq!(strip_enclosing("(ls", '(', ')'), "(ls");
    }

    #[test]
    fn strip_single_quote_char() {
        assert_eq!(strip_enclosing("\"", '"', '"'), "");
    }

    #[test]
    fn remove_quotes_keeps_escaped() {
        assert_eq!(remove_unescaped_quotes(r#"echo "a" \"b\""#), r#"echo a \"b\""#);
    }

    #[test]
    fn remove_quotes_trailing_backslash() {
        assert_eq!(remove_unescaped_quotes("a\\"), "a\\");
    }

    #[test]
    fn unescape_bang() {
        assert_eq!(unescape(r"echo \!\! !", '!'), "echo !! !");
    }

    #[test]
    fn unescape_leaves_other_escapes() {
        assert_eq!(unescape(r"a\$b\!", '!'), r"a\$b!");
    }

    #[test]
    fn split_words_on_whitespace() {
        assert_eq!(split_words("  -l\t/tmp  ", WHITESPACE), vec!["-l", "/tmp"]);
    }

    #[test]
    fn split_words_respects_double_quotes() {
        assert_eq!(
            split_words(r#"-r "foo bar" baz"#, WHITESPACE),
            vec!["-r", "foo bar", "baz"]
        );
    }

    #[test]
    fn split_words_empty() {
        assert!(split_words("", WHITESPACE).is_empty());
        assert!(split_words(r#""""#, WHITESPACE).is_empty());
    }

    #[test]
    fn split_words_custom_delimiters() {
        assert_eq!(split_words("a`b``c", "`"), vec!["a", "b", "c"]);
    }

    #[test]
    fn first_word_and_rest() {
        assert_eq!(
            split_after_first_word("grep  -r \"a b\" "),
            ("grep".to_string(), "-r \"a b\" ".to_string())
        );
    }

    #[test]
    fn first_word_only() {
        assert_eq!(
            split_after_first_word("ls"),
            ("ls".to_string(), String::new())
        );
    }

    #[test]
    fn first_word_leading_whitespace() {
        assert_eq!(
            split_after_first_word("\tls"),
            (String::new(), "ls".to_string())
        );
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(!is_blank(" x "));
    }
}
