//! Code-unit classification per [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#tokenizer-definitions).
//!
//! All predicates operate on a single UTF-16 code unit, not a decoded code
//! point. A non-ASCII character that needs a surrogate pair is therefore seen
//! as two units, each classified as a name-start unit.

/// Classification of a single code unit for tokenizer dispatch.
///
/// ASCII units either map to one of the synthetic classes or pass through as
/// [`CharCategory::Other`] so the dispatch loop can match exact delimiter
/// characters. Every unit at or above U+0080 is a name-start unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharCategory {
    /// The 0 sentinel returned by reads past the end of the buffer.
    Eof,
    /// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
    WhiteSpace,
    /// "A code point between U+0030 DIGIT ZERO (0) and U+0039 DIGIT NINE (9)."
    Digit,
    /// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
    NameStart,
    /// [Non-printable code point](https://www.w3.org/TR/css-syntax-3/#non-printable-code-point).
    NonPrintable,
    /// Any other ASCII unit, carried through for exact-delimiter dispatch.
    Other(u16),
}

/// "A code point between U+0030 DIGIT ZERO (0) and U+0039 DIGIT NINE (9)."
#[must_use]
pub const fn is_digit(code: u16) -> bool {
    code >= 0x0030 && code <= 0x0039
}

/// "A digit, or a code point between U+0041 LATIN CAPITAL LETTER A (A) and
/// U+0046 LATIN CAPITAL LETTER F (F), or a code point between U+0061 LATIN
/// SMALL LETTER A (a) and U+0066 LATIN SMALL LETTER F (f)."
#[must_use]
pub const fn is_hex_digit(code: u16) -> bool {
    is_digit(code)
        || (code >= 0x0041 && code <= 0x0046)
        || (code >= 0x0061 && code <= 0x0066)
}

/// "A code point between U+0041 LATIN CAPITAL LETTER A (A) and U+005A LATIN
/// CAPITAL LETTER Z (Z)."
#[must_use]
pub const fn is_uppercase_letter(code: u16) -> bool {
    code >= 0x0041 && code <= 0x005A
}

/// "A code point between U+0061 LATIN SMALL LETTER A (a) and U+007A LATIN
/// SMALL LETTER Z (z)."
#[must_use]
pub const fn is_lowercase_letter(code: u16) -> bool {
    code >= 0x0061 && code <= 0x007A
}

/// "An uppercase letter or a lowercase letter."
#[must_use]
pub const fn is_letter(code: u16) -> bool {
    is_uppercase_letter(code) || is_lowercase_letter(code)
}

/// "A code point with a value equal to or greater than U+0080 \<control\>."
///
/// This is the broad legacy reading: every unit at or above U+0080 counts,
/// including unpaired surrogate halves.
#[must_use]
pub const fn is_non_ascii(code: u16) -> bool {
    code >= 0x0080
}

/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
#[must_use]
pub const fn is_name_start(code: u16) -> bool {
    is_letter(code) || is_non_ascii(code) || code == 0x005F
}

/// "A name-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
#[must_use]
pub const fn is_name(code: u16) -> bool {
    is_name_start(code) || is_digit(code) || code == 0x002D
}

/// "A code point between U+0000 NULL and U+0008 BACKSPACE, or U+000B LINE
/// TABULATION, or a code point between U+000E SHIFT OUT and U+001F
/// INFORMATION SEPARATOR ONE, or U+007F DELETE."
#[must_use]
pub const fn is_non_printable(code: u16) -> bool {
    code <= 0x0008 || code == 0x000B || (code >= 0x000E && code <= 0x001F) || code == 0x007F
}

/// "U+000A LINE FEED."
///
/// The input is not preprocessed, so U+000D CARRIAGE RETURN and U+000C FORM
/// FEED are recognized here as well instead of being folded to LF up front.
#[must_use]
pub const fn is_newline(code: u16) -> bool {
    code == 0x000A || code == 0x000D || code == 0x000C
}

/// "A newline, U+0009 CHARACTER TABULATION, or U+0020 SPACE."
#[must_use]
pub const fn is_white_space(code: u16) -> bool {
    is_newline(code) || code == 0x0020 || code == 0x0009
}

/// A byte-order mark in either byte order (U+FEFF or U+FFFE).
#[must_use]
pub const fn is_bom(code: u16) -> bool {
    code == 0xFEFF || code == 0xFFFE
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
///
/// True exactly when `first` is U+005C REVERSE SOLIDUS (\) and `second` is
/// neither a newline nor the 0 end-of-input sentinel.
#[must_use]
pub const fn is_valid_escape(first: u16, second: u16) -> bool {
    // If the first code point is not U+005C REVERSE SOLIDUS (\), return false.
    if first != 0x005C {
        return false;
    }

    // Otherwise, if the second code point is a newline or EOF, return false.
    if is_newline(second) || second == 0 {
        return false;
    }

    // Otherwise, return true.
    true
}

/// [§ 4.3.9 Check if three code points would start an identifier](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
#[must_use]
pub const fn is_identifier_start(first: u16, second: u16, third: u16) -> bool {
    // Look at the first code point:

    // U+002D HYPHEN-MINUS
    if first == 0x002D {
        // If the second code point is a name-start code point or a
        // U+002D HYPHEN-MINUS, or the second and third code points are a
        // valid escape, return true. Otherwise, return false.
        return is_name_start(second) || second == 0x002D || is_valid_escape(second, third);
    }

    // name-start code point
    if is_name_start(first) {
        return true;
    }

    // U+005C REVERSE SOLIDUS (\)
    if first == 0x005C {
        // If the first and second code points are a valid escape, return true.
        return is_valid_escape(first, second);
    }

    // anything else
    false
}

/// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
///
/// Returns how many of the three units took part in the decision (a
/// match-length hint), or 0 when the units do not start a number.
#[must_use]
pub const fn is_number_start(first: u16, second: u16, third: u16) -> u8 {
    // Look at the first code point:

    // U+002B PLUS SIGN (+)
    // U+002D HYPHEN-MINUS (-)
    if first == 0x002B || first == 0x002D {
        // If the second code point is a digit, return true.
        if is_digit(second) {
            return 2;
        }

        // Otherwise, if the second code point is a U+002E FULL STOP (.)
        // and the third code point is a digit, return true.
        // Otherwise, return false.
        return if second == 0x002E && is_digit(third) { 3 } else { 0 };
    }

    // U+002E FULL STOP (.)
    if first == 0x002E {
        // If the second code point is a digit, return true. Otherwise, return false.
        return if is_digit(second) { 2 } else { 0 };
    }

    // digit
    if is_digit(first) {
        return 1;
    }

    // anything else
    0
}

/// ASCII dispatch table, built once at compile time and never mutated, so it
/// is freely shared across concurrent tokenizer instances.
static CATEGORY: [CharCategory; 0x80] = build_category_table();

#[allow(clippy::cast_lossless)]
const fn build_category_table() -> [CharCategory; 0x80] {
    let mut table = [CharCategory::Eof; 0x80];
    let mut code: u16 = 1;
    while code < 0x80 {
        table[code as usize] = if is_white_space(code) {
            CharCategory::WhiteSpace
        } else if is_digit(code) {
            CharCategory::Digit
        } else if is_name_start(code) {
            CharCategory::NameStart
        } else if is_non_printable(code) {
            CharCategory::NonPrintable
        } else {
            // Direct mapping for delimiters and other punctuation.
            CharCategory::Other(code)
        };
        code += 1;
    }
    table
}

/// Classify one code unit for tokenizer dispatch.
///
/// Total and O(1). The 0 sentinel classifies as [`CharCategory::Eof`], which
/// means a literal U+0000 in the input is indistinguishable from end of
/// input; see the scanner's sentinel accessor for the known deviation.
#[must_use]
pub fn char_code_category(code: u16) -> CharCategory {
    if code < 0x80 {
        CATEGORY[usize::from(code)]
    } else {
        CharCategory::NameStart
    }
}
