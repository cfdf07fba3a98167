//! Backslash escape decoding for keys and values.

use super::error::ParseError;

/// Decode `\t`, `\n`, `\r`, `\f`, `\uXXXX` and `\c` escapes.
///
/// Consecutive `\u` escapes are collected as UTF-16 code units so surrogate
/// pairs combine into one char; an unpaired surrogate decodes to U+FFFD.
pub(crate) fn unescape(raw: &str, line: usize) -> Result<String, ParseError> {
    let mut out = String::with_capacity(raw.len());
    let mut units: Vec<u16> = Vec::new();
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }

        let Some(escaped) = chars.next() else {
            break;
        };

        if escaped == 'u' {
            let unit = read_code_unit(&mut chars)
                .ok_or(ParseError::MalformedUnicodeEscape { line })?;
            units.push(unit);
            continue;
        }

        flush_units(&mut units, &mut out);
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{000C}',
            other => other,
        });
    }

    flush_units(&mut units, &mut out);
    Ok(out)
}

fn read_code_unit(chars: &mut std::str::Chars<'_>) -> Option<u16> {
    let mut value: u16 = 0;
    for _ in 0..4 {
        let digit = chars.next()?.to_digit(16)?;
        value = (value << 4) | digit as u16;
    }
    Some(value)
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}
