//! Logical line assembly.
//!
//! Responsibilities:
//! - Split text into natural lines on `\n`, `\r` or `\r\n`.
//! - Drop blank lines and `#`/`!` comment lines.
//! - Join backslash-continued lines into one logical line.
//!
//! Does NOT handle:
//! - Key/value separation or escape decoding (see `escape.rs` and `mod.rs`).
//!
//! Invariants:
//! - Leading space, tab and form feed are stripped from every natural line,
//!   including continuation lines.
//! - Comment detection only applies to the first natural line of a logical
//!   line; continuation lines starting with `#` are ordinary text.
//! - A continuation backslash at end of input is dropped.
//! - A continuation from a line with no content yet does not join: the next
//!   natural line is treated as the start of a new logical line, so it may be
//!   blank or a comment.

/// A comment-free, continuation-joined line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LogicalLine {
    /// 1-based number of the natural line this logical line starts on.
    pub number: usize,
    /// Raw text with escapes still encoded.
    pub text: String,
}

pub(crate) fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{000C}')
}

fn trim_leading(line: &str) -> &str {
    line.trim_start_matches(is_whitespace)
}

/// True when the line ends in an odd number of backslashes.
fn ends_with_continuation(line: &str) -> bool {
    let trailing = line.bytes().rev().take_while(|&b| b == b'\\').count();
    trailing % 2 == 1
}

fn natural_lines(input: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut rest = input;
    let mut number = 0;

    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        number += 1;

        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        let line = &rest[..end];
        let next = if rest[end..].starts_with("\r\n") {
            end + 2
        } else if end < rest.len() {
            end + 1
        } else {
            end
        };
        rest = &rest[next..];

        Some((number, line))
    })
}

/// Assemble logical lines from properties text.
pub(crate) fn logical_lines(input: &str) -> Vec<LogicalLine> {
    let mut lines = Vec::new();
    let mut natural = natural_lines(input);
    let mut pending = natural.next();

    while let Some((number, raw)) = pending.take() {
        let first = trim_leading(raw);
        if first.is_empty() || first.starts_with(['#', '!']) {
            pending = natural.next();
            continue;
        }

        let mut text = String::with_capacity(first.len());
        let mut segment = first;
        loop {
            if !ends_with_continuation(segment) {
                text.push_str(segment);
                break;
            }
            text.push_str(&segment[..segment.len() - 1]);
            match natural.next() {
                // Nothing collected yet: the next line starts afresh.
                Some(line) if text.is_empty() => {
                    pending = Some(line);
                    break;
                }
                Some((_, next)) => segment = trim_leading(next),
                None => break,
            }
        }

        if pending.is_none() {
            lines.push(LogicalLine { number, text });
            pending = natural.next();
        }
    }

    lines
}
