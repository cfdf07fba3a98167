//! Java properties text format.
//!
//! Responsibilities:
//! - Decode raw file bytes as ISO-8859-1 (the default) or UTF-8.
//! - Parse `key=value`, `key:value` and `key value` assignments into a flat table.
//! - Read a single properties file from disk.
//!
//! Does NOT handle:
//! - Discovering files or filtering them by name (see `loader`).
//! - Merging several files together (see `loader::builder`).
//!
//! Invariants:
//! - The key ends at the first unescaped `=`, `:`, space, tab or form feed.
//! - Whitespace and at most one `=`/`:` between key and value are skipped;
//!   trailing whitespace of the value is preserved.
//! - A later assignment of the same key within one text replaces the earlier one.
//! - Parsing is all-or-nothing: any malformed escape fails the whole text.

mod error;
mod escape;
mod lines;

use std::collections::BTreeMap;
use std::path::Path;

pub use error::{ParseError, PropertiesError};

use escape::unescape;
use lines::{is_whitespace, logical_lines};

/// Flat key/value table produced by parsing and merging.
pub type PropertyTable = BTreeMap<String, String>;

/// Character encoding used to turn file bytes into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ISO-8859-1: every byte maps to the code point of the same value.
    /// Non-Latin characters are expected to be written as `\uXXXX` escapes.
    #[default]
    Latin1,
    /// UTF-8; invalid sequences fail the file.
    Utf8,
}

/// Decode raw bytes into text.
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String, ParseError> {
    match encoding {
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        Encoding::Utf8 => std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| ParseError::InvalidUtf8 {
                valid_up_to: e.valid_up_to(),
            }),
    }
}

/// Parse properties text into a table.
///
/// # Examples
///
/// ```
/// let table = parrot::properties::parse("# settings\nname = parrot\ncolor:green").unwrap();
/// assert_eq!(table.get("name").map(String::as_str), Some("parrot"));
/// assert_eq!(table.get("color").map(String::as_str), Some("green"));
/// ```
pub fn parse(text: &str) -> Result<PropertyTable, ParseError> {
    let mut table = PropertyTable::new();

    for line in logical_lines(text) {
        let (raw_key, raw_value) = split_entry(&line.text);
        let key = unescape(raw_key, line.number)?;
        let value = unescape(raw_value, line.number)?;
        table.insert(key, value);
    }

    Ok(table)
}

/// Read, decode and parse the properties file at `path`.
pub fn read_file(path: &Path, encoding: Encoding) -> Result<PropertyTable, PropertiesError> {
    let bytes = std::fs::read(path).map_err(|e| PropertiesError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    decode(&bytes, encoding)
        .and_then(|text| parse(&text))
        .map_err(|e| PropertiesError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Split a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut preceding_backslash = false;

    for (idx, c) in line.char_indices() {
        if !preceding_backslash {
            if matches!(c, '=' | ':') {
                key_end = idx;
                value_start = idx + 1;
                has_separator = true;
                break;
            }
            if is_whitespace(c) {
                key_end = idx;
                value_start = idx + 1;
                break;
            }
        }
        preceding_backslash = c == '\\' && !preceding_backslash;
    }

    let rest = &line[value_start..];
    let mut offset = rest.len();
    for (idx, c) in rest.char_indices() {
        if is_whitespace(c) {
            continue;
        }
        if !has_separator && matches!(c, '=' | ':') {
            has_separator = true;
            continue;
        }
        offset = idx;
        break;
    }

    (&line[..key_end], &rest[offset..])
}
