//! Structural edits on an existing test file.
//!
//! Cases are inserted before the closing brace of the last top-level block
//! (the namespace). Braces inside string and character literals and inside
//! `//` and `/* */` comments are not counted.

use std::sync::LazyLock;

use regex::Regex;

static CASE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"TYPED_TEST\s*\(\s*[A-Za-z_]\w*\s*,\s*([A-Za-z_]\w*)\s*\)").expect("Invalid regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Code,
    LineComment,
    BlockComment,
    StringLiteral,
    CharLiteral,
}

/// Braces and code positions found by [`scan`].
#[derive(Debug, Default)]
struct BraceScan {
    /// Byte offset of the most recent `}` that brought the depth back to zero.
    last_top_level_close: Option<usize>,
    /// Byte offset of the last character outside comments and whitespace.
    last_code_char: Option<usize>,
}

/// Whether a `'` following `word` opens a character literal.
///
/// A `'` glued to a number is a digit separator (`1'000`). Only the encoding
/// prefixes `L`, `u`, `U` and `u8` may directly precede a character literal.
fn opens_char_literal(word: &str) -> bool {
    word.is_empty() || matches!(word, "L" | "u" | "U" | "u8")
}

const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

fn scan(text: &str) -> Result<BraceScan, String> {
    let mut state = ScanState::Code;
    let mut depth: usize = 0;
    let mut result = BraceScan::default();
    let mut word_start: Option<usize> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match state {
            ScanState::Code => match ch {
                '/' if chars.peek().is_some_and(|&(_, next)| next == '/') => {
                    chars.next();
                    word_start = None;
                    state = ScanState::LineComment;
                }
                '/' if chars.peek().is_some_and(|&(_, next)| next == '*') => {
                    chars.next();
                    word_start = None;
                    state = ScanState::BlockComment;
                }
                _ => {
                    if !ch.is_whitespace() {
                        result.last_code_char = Some(idx);
                    }
                    let word = word_start.map_or("", |start| &text[start..idx]);
                    if is_word_char(ch) {
                        word_start.get_or_insert(idx);
                        continue;
                    }
                    if ch == '\'' && !opens_char_literal(word) {
                        continue;
                    }
                    word_start = None;
                    match ch {
                        '"' => state = ScanState::StringLiteral,
                        '\'' => state = ScanState::CharLiteral,
                        '{' => depth += 1,
                        '}' => {
                            depth = depth.checked_sub(1).ok_or_else(|| {
                                format!("unbalanced braces: unexpected `}}` at byte {idx}")
                            })?;
                            if depth == 0 {
                                result.last_top_level_close = Some(idx);
                            }
                        }
                        _ => {}
                    }
                }
            },
            ScanState::LineComment => {
                if ch == '\n' {
                    state = ScanState::Code;
                }
            }
            ScanState::BlockComment => {
                if ch == '*' && chars.peek().is_some_and(|&(_, next)| next == '/') {
                    chars.next();
                    state = ScanState::Code;
                }
            }
            ScanState::StringLiteral | ScanState::CharLiteral => {
                result.last_code_char = Some(idx);
                let quote = if state == ScanState::StringLiteral { '"' } else { '\'' };
                if ch == '\\' {
                    chars.next();
                } else if ch == quote || ch == '\n' {
                    state = ScanState::Code;
                }
            }
        }
    }

    if depth != 0 {
        return Err(format!("unbalanced braces: {depth} block(s) left open"));
    }
    Ok(result)
}

/// Byte offset of the closing brace new cases are inserted before.
///
/// # Errors
/// Returns a human-readable reason if the braces are unbalanced or the last
/// code character is not a top-level `}`.
pub fn insertion_point(text: &str) -> Result<usize, String> {
    let scan = scan(text)?;
    match (scan.last_top_level_close, scan.last_code_char) {
        (Some(close), Some(last)) if close == last => Ok(close),
        (None, _) => Err("no closing brace found".to_string()),
        _ => Err("content follows the last closing brace".to_string()),
    }
}

/// Insert `case_text` before the final top-level `}` of `text`.
///
/// The case is separated from the preceding content by one blank line and
/// followed by a newline, so repeated inserts stay readable.
///
/// # Errors
/// See [`insertion_point`].
pub fn insert_case(text: &str, case_text: &str) -> Result<String, String> {
    let idx = insertion_point(text)?;
    let head = text[..idx].trim_end();
    let mut out = String::with_capacity(text.len() + case_text.len() + 3);
    out.push_str(head);
    out.push_str("\n\n");
    out.push_str(case_text);
    out.push('\n');
    out.push_str(&text[idx..]);
    Ok(out)
}

/// Names of the `TYPED_TEST` cases already present in `text`, in file order.
#[must_use]
pub fn case_names(text: &str) -> Vec<String> {
    CASE_NAME_PATTERN
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
