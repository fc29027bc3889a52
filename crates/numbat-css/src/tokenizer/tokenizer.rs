//! [§ 4.3 Tokenizer Algorithms](https://www.w3.org/TR/css-syntax-3/#tokenizer-algorithms)
//!
//! Single-pass tokenizer over a UTF-16 code-unit buffer. One token is
//! produced per step; each token is a `(kind, start, end)` record whose span
//! indexes the caller's buffer. No EOF token is ever emitted; the stream
//! simply ends.

use super::char_code::{
    CharCategory, char_code_category, is_identifier_start, is_name, is_newline, is_number_start,
    is_valid_escape,
};
use super::scan::{
    char_code, cmp_str, consume_bad_url_remnants, consume_escaped, consume_name, consume_number,
    find_white_space_end, first_unit_offset, newline_length,
};
use super::token::{Token, TokenKind};

/// The `url` keyword, matched ASCII case-insensitively.
const URL: [u16; 3] = [0x75, 0x72, 0x6C];

/// A resumable tokenizer over an immutable code-unit buffer.
///
/// The only state is the scan cursor. Tokens are delivered strictly in input
/// order with no read-ahead beyond the lookahead each consumer itself
/// requires, so a caller may stop driving the iterator after any token.
///
/// The sequence is single-pass and not restartable; retokenizing requires a
/// fresh `Tokenizer` over the same buffer.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    /// The input buffer. Indices are code-unit offsets, never byte or
    /// code-point offsets.
    source: &'a [u16],
    /// Start offset of the next token.
    offset: usize,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over `source`, skipping one leading byte-order
    /// mark if present.
    #[must_use]
    pub fn new(source: &'a [u16]) -> Self {
        Self {
            source,
            offset: first_unit_offset(source),
        }
    }

    /// [§ 4.3.1 Consume a token](https://www.w3.org/TR/css-syntax-3/#consume-token)
    ///
    /// Classifies the unit at the cursor, dispatches, and leaves the cursor
    /// just past the consumed token. The caller has checked that at least
    /// one unit remains.
    fn consume_token(&mut self) -> TokenKind {
        let code = self.source[self.offset];

        match char_code_category(code) {
            // whitespace
            // "Consume as much whitespace as possible. Return a <whitespace-token>."
            CharCategory::WhiteSpace => {
                self.offset = find_white_space_end(self.source, self.offset + 1);
                TokenKind::WhiteSpace
            }

            // digit
            // "Reconsume the current input code point, consume a numeric token, and return it."
            CharCategory::Digit => self.consume_numeric_token(),

            // name-start code point (letters, `_`, every unit >= U+0080)
            // "Reconsume the current input code point, consume an ident-like token, and return it."
            CharCategory::NameStart => self.consume_ident_like_token(),

            CharCategory::Other(code) => self.consume_delimiter_or_compound(code),

            // anything else (including an embedded NUL, which classifies as
            // the end-of-input sentinel)
            // "Return a <delim-token> with its value set to the current input code point."
            CharCategory::Eof | CharCategory::NonPrintable => {
                self.offset += 1;
                TokenKind::Delim
            }
        }
    }

    /// Dispatch over the exact ASCII delimiter characters the category table
    /// passes through.
    fn consume_delimiter_or_compound(&mut self, code: u16) -> TokenKind {
        match code {
            // U+0022 QUOTATION MARK (")
            // U+0027 APOSTROPHE (')
            // "Consume a string token and return it."
            0x0022 | 0x0027 => self.consume_string_token(0),

            // U+0023 NUMBER SIGN (#)
            0x0023 => {
                // "If the next input code point is a name code point or the
                // next two input code points are a valid escape, then:
                // create a <hash-token>; consume a name, and set the
                // <hash-token>'s value to the returned string."
                if is_name(char_code(self.source, self.offset + 1))
                    || is_valid_escape(
                        char_code(self.source, self.offset + 1),
                        char_code(self.source, self.offset + 2),
                    )
                {
                    self.offset = consume_name(self.source, self.offset + 1);
                    TokenKind::Hash
                } else {
                    // "Otherwise, return a <delim-token>."
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+0028 LEFT PARENTHESIS (()
            0x0028 => {
                self.offset += 1;
                TokenKind::LeftParenthesis
            }

            // U+0029 RIGHT PARENTHESIS ())
            0x0029 => {
                self.offset += 1;
                TokenKind::RightParenthesis
            }

            // U+002B PLUS SIGN (+)
            // U+002E FULL STOP (.)
            // "If the input stream starts with a number, reconsume the
            // current input code point, consume a numeric token, and return
            // it. Otherwise, return a <delim-token>."
            0x002B | 0x002E => {
                if self.starts_number(code) {
                    self.consume_numeric_token()
                } else {
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+002C COMMA (,)
            0x002C => {
                self.offset += 1;
                TokenKind::Comma
            }

            // U+002D HYPHEN-MINUS (-)
            0x002D => self.consume_hyphen_minus(),

            // U+002F SOLIDUS (/)
            0x002F => {
                // "If the next input code point is U+002A ASTERISK (*),
                // consume them and all following code points up to and
                // including the first U+002A ASTERISK (*) followed by
                // U+002F SOLIDUS (/), or up to an EOF code point."
                if char_code(self.source, self.offset + 1) == 0x002A {
                    self.consume_comment()
                } else {
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+003A COLON (:)
            0x003A => {
                self.offset += 1;
                TokenKind::Colon
            }

            // U+003B SEMICOLON (;)
            0x003B => {
                self.offset += 1;
                TokenKind::Semicolon
            }

            // U+003C LESS-THAN SIGN (<)
            0x003C => {
                // "If the next 3 input code points are U+0021 EXCLAMATION
                // MARK U+002D HYPHEN-MINUS U+002D HYPHEN-MINUS (!--),
                // consume them and return a <CDO-token>."
                if char_code(self.source, self.offset + 1) == 0x0021
                    && char_code(self.source, self.offset + 2) == 0x002D
                    && char_code(self.source, self.offset + 3) == 0x002D
                {
                    self.offset += 4;
                    TokenKind::CDO
                } else {
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+0040 COMMERCIAL AT (@)
            0x0040 => {
                // "If the next 3 input code points would start an identifier,
                // consume a name, create an <at-keyword-token> with its value
                // set to the returned value, and return it."
                if is_identifier_start(
                    char_code(self.source, self.offset + 1),
                    char_code(self.source, self.offset + 2),
                    char_code(self.source, self.offset + 3),
                ) {
                    self.offset = consume_name(self.source, self.offset + 1);
                    TokenKind::AtKeyword
                } else {
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+005B LEFT SQUARE BRACKET ([)
            0x005B => {
                self.offset += 1;
                TokenKind::LeftSquareBracket
            }

            // U+005C REVERSE SOLIDUS (\)
            0x005C => {
                // "If the input stream starts with a valid escape, reconsume
                // the current input code point, consume an ident-like token,
                // and return it."
                if is_valid_escape(code, char_code(self.source, self.offset + 1)) {
                    self.consume_ident_like_token()
                } else {
                    // "Otherwise, this is a parse error. Return a <delim-token>."
                    self.offset += 1;
                    TokenKind::Delim
                }
            }

            // U+005D RIGHT SQUARE BRACKET (])
            0x005D => {
                self.offset += 1;
                TokenKind::RightSquareBracket
            }

            // U+007B LEFT CURLY BRACKET ({)
            0x007B => {
                self.offset += 1;
                TokenKind::LeftCurlyBracket
            }

            // U+007D RIGHT CURLY BRACKET (})
            0x007D => {
                self.offset += 1;
                TokenKind::RightCurlyBracket
            }

            // anything else
            // "Return a <delim-token> with its value set to the current input code point."
            _ => {
                self.offset += 1;
                TokenKind::Delim
            }
        }
    }

    /// The three-way U+002D HYPHEN-MINUS (-) dispatch: number, CDC,
    /// identifier, or delimiter.
    fn consume_hyphen_minus(&mut self) -> TokenKind {
        // "If the input stream starts with a number, reconsume the current
        // input code point, consume a numeric token, and return it."
        if self.starts_number(0x002D) {
            return self.consume_numeric_token();
        }

        // "Otherwise, if the next 2 input code points are
        // U+002D HYPHEN-MINUS U+003E GREATER-THAN SIGN (->), consume them
        // and return a <CDC-token>."
        if char_code(self.source, self.offset + 1) == 0x002D
            && char_code(self.source, self.offset + 2) == 0x003E
        {
            self.offset += 3;
            return TokenKind::CDC;
        }

        // "Otherwise, if the input stream starts with an identifier,
        // reconsume the current input code point, consume an ident-like
        // token, and return it."
        if is_identifier_start(
            0x002D,
            char_code(self.source, self.offset + 1),
            char_code(self.source, self.offset + 2),
        ) {
            return self.consume_ident_like_token();
        }

        // "Otherwise, return a <delim-token>."
        self.offset += 1;
        TokenKind::Delim
    }

    /// 3-unit lookahead: does the stream at the cursor start a number?
    fn starts_number(&self, code: u16) -> bool {
        is_number_start(
            code,
            char_code(self.source, self.offset + 1),
            char_code(self.source, self.offset + 2),
        ) != 0
    }

    /// [§ 4.3.2 Consume comments](https://www.w3.org/TR/css-syntax-3/#consume-comment)
    ///
    /// The cursor is at the `/` of an opening `/*`. An unterminated comment
    /// spans to end of input and is still a single `Comment` token.
    fn consume_comment(&mut self) -> TokenKind {
        let mut index = self.offset + 2;
        let mut end = self.source.len();
        while index + 1 < self.source.len() {
            if self.source[index] == 0x002A && self.source[index + 1] == 0x002F {
                end = index + 2;
                break;
            }
            index += 1;
        }
        self.offset = end;
        TokenKind::Comment
    }

    /// [§ 4.3.3 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> TokenKind {
        // "Consume a number and let number be the result."
        self.offset = consume_number(self.source, self.offset);

        // "If the next 3 input code points would start an identifier, then:
        // create a <dimension-token> with the same value and type flag as
        // number. Consume a name. Set the <dimension-token>'s unit to the
        // returned value. Return the <dimension-token>."
        if is_identifier_start(
            char_code(self.source, self.offset),
            char_code(self.source, self.offset + 1),
            char_code(self.source, self.offset + 2),
        ) {
            self.offset = consume_name(self.source, self.offset);
            return TokenKind::Dimension;
        }

        // "Otherwise, if the next input code point is
        // U+0025 PERCENTAGE SIGN (%), consume it. Create a
        // <percentage-token> and return it."
        if char_code(self.source, self.offset) == 0x0025 {
            self.offset += 1;
            return TokenKind::Percentage;
        }

        // "Otherwise, create a <number-token> and return it."
        TokenKind::Number
    }

    /// [§ 4.3.4 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> TokenKind {
        let name_start_offset = self.offset;

        // "Consume a name, and let string be the result."
        self.offset = consume_name(self.source, self.offset);

        // "If string's value is an ASCII case-insensitive match for 'url',
        // and the next input code point is U+0028 LEFT PARENTHESIS ((),
        // consume it."
        if cmp_str(self.source, name_start_offset, self.offset, &URL)
            && char_code(self.source, self.offset) == 0x0028
        {
            // "While the next two input code points are whitespace, consume
            // the next input code point."
            self.offset = find_white_space_end(self.source, self.offset + 1);

            // "If the next one or two input code points are U+0022 QUOTATION
            // MARK ("), U+0027 APOSTROPHE ('), or whitespace followed by
            // either, then create a <function-token> with its value set to
            // string and return it."
            let next = char_code(self.source, self.offset);
            if next == 0x0022 || next == 0x0027 {
                // The function token spans exactly `url(`; the cursor
                // rewinds so the quoted value is tokenized separately as a
                // <string-token> on the next iteration.
                self.offset = name_start_offset + 4;
                return TokenKind::Function;
            }

            // "Otherwise, consume a url token, and return it."
            return self.consume_url_token();
        }

        // "Otherwise, if the next input code point is
        // U+0028 LEFT PARENTHESIS ((), consume it. Create a
        // <function-token> with its value set to string and return it."
        if char_code(self.source, self.offset) == 0x0028 {
            self.offset += 1;
            return TokenKind::Function;
        }

        // "Otherwise, create an <ident-token> with its value set to string
        // and return it."
        TokenKind::Ident
    }

    /// [§ 4.3.5 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    ///
    /// `ending_code_point` denotes the quote that ends the string; pass 0 to
    /// use the current input code point (which is then consumed). Reaching
    /// end of input with no terminator still yields a valid `String` token;
    /// callers needing strict EOF detection compare the token's end offset
    /// to the buffer length.
    fn consume_string_token(&mut self, ending_code_point: u16) -> TokenKind {
        let ending_code_point = if ending_code_point == 0 {
            let quote = char_code(self.source, self.offset);
            self.offset += 1;
            quote
        } else {
            ending_code_point
        };

        while self.offset < self.source.len() {
            let code = self.source[self.offset];

            // ending code point
            // "Return the <string-token>."
            if code == ending_code_point {
                self.offset += 1;
                return TokenKind::String;
            }

            match char_code_category(code) {
                // newline
                // "This is a parse error. Reconsume the current input code
                // point, create a <bad-string-token>, and return it."
                CharCategory::WhiteSpace if is_newline(code) => {
                    // The newline is left for the next tokenizer iteration.
                    return TokenKind::BadString;
                }

                // U+005C REVERSE SOLIDUS (\)
                CharCategory::Other(0x005C) => {
                    // "If the next input code point is EOF, do nothing."
                    if self.offset + 1 < self.source.len() {
                        let next_code = char_code(self.source, self.offset + 1);

                        if is_newline(next_code) {
                            // "Otherwise, if the next input code point is a
                            // newline, consume it."
                            self.offset +=
                                newline_length(self.source, self.offset + 1, next_code);
                        } else if is_valid_escape(code, next_code) {
                            // "Otherwise, (the stream starts with a valid
                            // escape) consume an escaped code point."
                            self.offset = consume_escaped(self.source, self.offset) - 1;
                        }
                    }
                }

                // anything else
                // "Append the current input code point to the <string-token>'s value."
                _ => {}
            }

            self.offset += 1;
        }

        // EOF
        // "This is a parse error. Return the <string-token>."
        TokenKind::String
    }

    /// [§ 4.3.6 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    ///
    /// "This algorithm assumes that the initial `url(` has already been
    /// consumed," and that it is consuming an unquoted value like
    /// `url(foo)`; the quoted form is handled by
    /// [`Self::consume_ident_like_token`].
    fn consume_url_token(&mut self) -> TokenKind {
        // "Consume as much whitespace as possible."
        self.offset = find_white_space_end(self.source, self.offset);

        // "Repeatedly consume the next input code point from the stream:"
        while self.offset < self.source.len() {
            let code = self.source[self.offset];

            match char_code_category(code) {
                // U+0029 RIGHT PARENTHESIS ())
                // "Return the <url-token>."
                CharCategory::Other(0x0029) => {
                    self.offset += 1;
                    return TokenKind::Url;
                }

                // whitespace
                CharCategory::WhiteSpace => {
                    // "Consume as much whitespace as possible."
                    self.offset = find_white_space_end(self.source, self.offset);

                    // "If the next input code point is U+0029 RIGHT
                    // PARENTHESIS ()) or EOF, consume it and return the
                    // <url-token> (if EOF was encountered, this is a parse
                    // error);"
                    if char_code(self.source, self.offset) == 0x0029
                        || self.offset >= self.source.len()
                    {
                        if self.offset < self.source.len() {
                            self.offset += 1;
                        }
                        return TokenKind::Url;
                    }

                    // "otherwise, consume the remnants of a bad url, create
                    // a <bad-url-token>, and return it."
                    self.offset = consume_bad_url_remnants(self.source, self.offset);
                    return TokenKind::BadUrl;
                }

                // U+0022 QUOTATION MARK (")
                // U+0027 APOSTROPHE (')
                // U+0028 LEFT PARENTHESIS (()
                // non-printable code point
                // "This is a parse error. Consume the remnants of a bad url,
                // create a <bad-url-token>, and return it."
                CharCategory::Other(0x0022 | 0x0027 | 0x0028) | CharCategory::NonPrintable => {
                    self.offset = consume_bad_url_remnants(self.source, self.offset);
                    return TokenKind::BadUrl;
                }

                // U+005C REVERSE SOLIDUS (\)
                CharCategory::Other(0x005C) => {
                    // "If the stream starts with a valid escape, consume an
                    // escaped code point."
                    if is_valid_escape(code, char_code(self.source, self.offset + 1)) {
                        self.offset = consume_escaped(self.source, self.offset);
                        continue;
                    }

                    // "Otherwise, this is a parse error. Consume the
                    // remnants of a bad url, create a <bad-url-token>, and
                    // return it."
                    self.offset = consume_bad_url_remnants(self.source, self.offset);
                    return TokenKind::BadUrl;
                }

                // anything else
                // "Append the current input code point to the <url-token>'s value."
                _ => self.offset += 1,
            }
        }

        // EOF
        // "This is a parse error. Return the <url-token>."
        TokenKind::Url
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.offset >= self.source.len() {
            return None;
        }

        let start = self.offset;
        let kind = self.consume_token();
        Some(Token::new(kind, start, self.offset))
    }
}

/// Tokenize `source`, reporting each token in input order through a
/// synchronous sink.
///
/// The sink is called once per token; the tokenizer does not scan ahead
/// while a call is in flight. No collection is materialized.
pub fn tokenize<F>(source: &[u16], mut on_token: F)
where
    F: FnMut(Token),
{
    for token in Tokenizer::new(source) {
        on_token(token);
    }
}
