//! Lexical normalization for C-like source text.
//!
//! Two small scanners shared by the descriptor and source-table parsers:
//!
//! - [`strip`]: removes comments, whitespace, and configurable literal
//!   tokens in two linear passes, producing a compact buffer that the
//!   record splitter can consume without worrying about layout.
//! - [`matching_delimiter`]: finds the close matching an opening delimiter
//!   at arbitrary nesting depth, with explicit bounds checking.
//!
//! Both operate on ASCII structure only; non-ASCII bytes inside identifiers
//! pass through untouched.

use crate::error::{FsmError, Result};

/// Literal tokens removed from state-table initializers by default.
///
/// Generated tables cast state/callback function pointers through `(void*)`;
/// the cast carries no information for table recovery.
pub const DEFAULT_STRIP_TOKENS: &[&str] = &["(void*)"];

/// Strip line comments, block comments, whitespace, and literal tokens.
///
/// Two linear passes, comments strictly before tokens:
/// - pass 1 drops `//` to end of line and `/*` to the first following `*/`
///   (block comments do not nest; an unterminated block comment consumes
///   the rest of the input);
/// - pass 2 drops any of `tokens` found at the scan position, whole, and
///   every whitespace character.
///
/// The ordering means a token interrupted by a comment is reassembled and
/// stripped, while a token interrupted by whitespace is not. Input with
/// nothing to strip comes back unchanged.
pub fn strip(text: &str, tokens: &[&str]) -> String {
    strip_tokens(&strip_comments(text), tokens)
}

/// Pass 1: remove comments, keep everything else (whitespace included).
fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if rest.starts_with("//") {
            i += match rest.find('\n') {
                Some(n) => n + 1,
                None => rest.len(),
            };
            continue;
        }
        if rest.starts_with("/*") {
            i += match rest[2..].find("*/") {
                Some(n) => n + 4,
                None => rest.len(),
            };
            continue;
        }

        // Both arms above consume whole chars, so `i` is a char boundary.
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        i += c.len_utf8();
    }

    out
}

/// Pass 2: remove literal tokens and whitespace.
fn strip_tokens(text: &str, tokens: &[&str]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    'scan: while i < text.len() {
        let rest = &text[i..];

        for token in tokens {
            if rest.starts_with(token) {
                i += token.len();
                continue 'scan;
            }
        }

        let Some(c) = rest.chars().next() else { break };
        if !c.is_whitespace() {
            out.push(c);
        }
        i += c.len_utf8();
    }

    out
}

/// Find the index one past the delimiter matching `text[open_idx]`.
///
/// The depth counter starts at 1 on consuming the opening delimiter,
/// increments on each further `open`, decrements on each `close`, and the
/// match is the position where it reaches 0. The caller guarantees that
/// `open` actually sits at `open_idx`.
///
/// Running past the end of `text` without closing yields
/// [`FsmError::UnmatchedDelimiter`] instead of scanning out of bounds.
pub fn matching_delimiter(text: &str, open_idx: usize, open: u8, close: u8) -> Result<usize> {
    let bytes = text.as_bytes();
    debug_assert_eq!(bytes.get(open_idx), Some(&open));

    let mut depth = 1usize;
    let mut i = open_idx + 1;
    while i < bytes.len() {
        if bytes[i] == open {
            depth += 1;
        } else if bytes[i] == close {
            depth -= 1;
            if depth == 0 {
                return Ok(i + 1);
            }
        }
        i += 1;
    }

    Err(FsmError::UnmatchedDelimiter {
        context: format!(
            "no `{}` closing the `{}` at offset {} (depth {} at end of input)",
            close as char, open as char, open_idx, depth
        ),
    })
}
