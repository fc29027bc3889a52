//! Stateless cursor primitives over `(buffer, offset)`.
//!
//! Each function scans a run or one spec construct starting at `offset` and
//! returns the offset just past it. None of them mutate the buffer or retain
//! state; the caller owns the cursor.

use super::char_code::{
    is_bom, is_digit, is_hex_digit, is_name, is_uppercase_letter, is_valid_escape, is_white_space,
};

/// Read the code unit at `offset`, or the 0 sentinel past the end.
///
/// Known deviation from CSS Syntax § 3.3: the sentinel collides with a
/// literal U+0000 NULL in the input, so every lookahead treats an embedded
/// NUL as end of input instead of replacing it with U+FFFD.
#[must_use]
pub fn char_code(source: &[u16], offset: usize) -> u16 {
    source.get(offset).copied().unwrap_or(0)
}

/// Width in code units of the newline starting at `offset` (2 for CRLF).
///
/// `code` must be the unit at `offset`.
#[must_use]
pub fn newline_length(source: &[u16], offset: usize, code: u16) -> usize {
    if code == 0x000D && char_code(source, offset + 1) == 0x000A {
        2
    } else {
        1
    }
}

/// ASCII case-insensitive comparison of the unit at `offset` against a
/// lowercase reference unit. False past the end of the buffer.
#[must_use]
pub fn cmp_char(source: &[u16], offset: usize, reference_code: u16) -> bool {
    let Some(&code) = source.get(offset) else {
        return false;
    };

    // code.to_lowercase() for A..Z
    let code = if is_uppercase_letter(code) {
        code | 32
    } else {
        code
    };

    code == reference_code
}

/// ASCII case-insensitive equality between the span `start..end` and a fixed
/// lowercase reference. Only the uppercase-letter range of the buffer side is
/// folded.
#[must_use]
pub fn cmp_str(source: &[u16], start: usize, end: usize, reference: &[u16]) -> bool {
    if end - start != reference.len() || end > source.len() {
        return false;
    }

    for (index, &reference_code) in reference.iter().enumerate() {
        let code = source[start + index];
        let code = if is_uppercase_letter(code) {
            code | 32
        } else {
            code
        };

        if code != reference_code {
            return false;
        }
    }

    true
}

/// First offset at or after `offset` that is not whitespace, or the buffer
/// length.
#[must_use]
pub fn find_white_space_end(source: &[u16], mut offset: usize) -> usize {
    while offset < source.len() {
        if !is_white_space(source[offset]) {
            break;
        }
        offset += 1;
    }
    offset
}

/// First offset at or after `offset` that is not a decimal digit, or the
/// buffer length.
#[must_use]
pub fn find_decimal_number_end(source: &[u16], mut offset: usize) -> usize {
    while offset < source.len() {
        if !is_digit(source[offset]) {
            break;
        }
        offset += 1;
    }
    offset
}

/// [§ 4.3.7 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
///
/// `offset` points at the U+005C REVERSE SOLIDUS (\); the caller has already
/// verified that it starts a valid escape. Returns the offset just past the
/// escape. The escaped value itself is never materialized, only the span
/// advances.
#[must_use]
pub fn consume_escaped(source: &[u16], mut offset: usize) -> usize {
    // The backslash and the verified unit after it are consumed together.
    offset += 2;

    // hex digit
    if is_hex_digit(char_code(source, offset - 1)) {
        // Consume as many hex digits as possible, but no more than 5.
        // Note that this means 1-6 hex digits have been consumed in total.
        let max_offset = source.len().min(offset + 5);
        while offset < max_offset {
            if !is_hex_digit(source[offset]) {
                break;
            }
            offset += 1;
        }

        // If the next input code point is whitespace, consume it as well.
        let code = char_code(source, offset);
        if is_white_space(code) {
            offset += newline_length(source, offset, code);
        }
    }

    offset
}

/// [§ 4.3.11 Consume a name](https://www.w3.org/TR/css-syntax-3/#consume-name)
///
/// "This algorithm does not do the verification of the first few code points
/// that are necessary to ensure the returned code points would constitute an
/// `<ident-token>`. If that is the intended use, ensure that the stream
/// starts with an identifier before calling this algorithm."
#[must_use]
pub fn consume_name(source: &[u16], mut offset: usize) -> usize {
    // Repeatedly consume the next input code point from the stream:
    while offset < source.len() {
        let code = source[offset];

        // name code point
        if is_name(code) {
            offset += 1;
            continue;
        }

        // the stream starts with a valid escape
        if is_valid_escape(code, char_code(source, offset + 1)) {
            // Consume an escaped code point.
            offset = consume_escaped(source, offset);
            continue;
        }

        // anything else
        // Reconsume the current input code point. Return result.
        break;
    }

    offset
}

/// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
///
/// Scans the full numeric grammar (sign, integer part, fraction, exponent)
/// and returns the end offset of the literal's span. No float conversion is
/// performed. A malformed partial exponent (a trailing `e` with no digit) is
/// not consumed; the scan stops at the last offset that parsed validly.
#[must_use]
pub fn consume_number(source: &[u16], mut offset: usize) -> usize {
    if offset >= source.len() {
        return offset;
    }

    // If the next input code point is U+002B PLUS SIGN (+) or
    // U+002D HYPHEN-MINUS (-), consume it.
    let mut code = source[offset];
    if code == 0x002B || code == 0x002D {
        offset += 1;
    }

    if offset < source.len() {
        code = source[offset];

        // While the next input code point is a digit, consume it.
        if is_digit(code) {
            offset = find_decimal_number_end(source, offset + 1);
            code = char_code(source, offset);
        }

        // If the next 2 input code points are U+002E FULL STOP (.)
        // followed by a digit, consume them.
        if offset + 1 < source.len() && code == 0x002E && is_digit(source[offset + 1]) {
            offset += 2;

            // While the next input code point is a digit, consume it.
            offset = find_decimal_number_end(source, offset);
        }
    }

    // An exponent part: U+0045 (E) or U+0065 (e), optionally followed by
    // U+002D HYPHEN-MINUS (-) or U+002B PLUS SIGN (+), followed by a digit.
    if cmp_char(source, offset, 0x0065 /* e */) && offset + 1 < source.len() {
        let mut sign = 0;
        let mut code = source[offset + 1];
        let mut exhausted = false;

        if code == 0x002D || code == 0x002B {
            sign = 1;
            if offset + 2 < source.len() {
                code = source[offset + 2];
            } else {
                exhausted = true;
            }
        }

        if !exhausted && is_digit(code) {
            // While the next input code point is a digit, consume it.
            offset = find_decimal_number_end(source, offset + 1 + sign + 1);
        }
    }

    offset
}

/// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
///
/// "Its sole use is to consume enough of the input stream to reach a
/// recovery point where normal tokenizing can resume." Advances past a valid
/// escape when one is found, otherwise consumes every code unit up to and
/// including an unescaped U+0029 RIGHT PARENTHESIS ()), or up to EOF.
#[must_use]
pub fn consume_bad_url_remnants(source: &[u16], mut offset: usize) -> usize {
    // Repeatedly consume the next input code point from the stream:
    while offset < source.len() {
        let code = source[offset];

        // U+0029 RIGHT PARENTHESIS ())
        if code == 0x0029 {
            offset += 1;
            break;
        }

        if is_valid_escape(code, char_code(source, offset + 1)) {
            // Consume an escaped code point. This allows an escaped right
            // parenthesis ("\)") to be encountered without ending the token.
            offset = consume_escaped(source, offset);
            continue;
        }

        // anything else
        offset += 1;
    }

    offset
}

/// Offset of the first tokenizable unit: 1 when the buffer opens with a
/// byte-order mark in either byte order, 0 otherwise.
#[must_use]
pub fn first_unit_offset(source: &[u16]) -> usize {
    usize::from(is_bom(char_code(source, 0)))
}
