//! CSS token records per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! "The output of the tokenization step is a stream of zero or more of the
//! following tokens: `<ident-token>`, `<function-token>`, `<at-keyword-token>`,
//! `<hash-token>`, `<string-token>`, `<bad-string-token>`, `<url-token>`,
//! `<bad-url-token>`, `<delim-token>`, `<number-token>`, `<percentage-token>`,
//! `<dimension-token>`, `<whitespace-token>`, `<CDO-token>`, `<CDC-token>`,
//! `<colon-token>`, `<semicolon-token>`, `<comma-token>`, `<[-token>`,
//! `<]-token>`, `<(-token>`, `<)-token>`, `<{-token>`, and `<}-token>`."
//!
//! A token never stores decoded text. It records only the half-open span of
//! code-unit offsets it covers, deferring string and escape decoding to the
//! consumer of the stream.

use core::fmt;

use serde::Serialize;

/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
///
/// The closed set of lexical token kinds. Discriminants are a stable wire
/// format (0 is the never-emitted EOF and stays unassigned), so callers may
/// persist or transmit them as `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum TokenKind {
    /// "`<ident-token>`"
    Ident = 1,

    /// "`<function-token>`" - a name followed by U+0028 LEFT PARENTHESIS
    Function = 2,

    /// "`<at-keyword-token>`" - a name preceded by U+0040 COMMERCIAL AT (@)
    AtKeyword = 3,

    /// "`<hash-token>`" - a name preceded by U+0023 NUMBER SIGN (#)
    Hash = 4,

    /// "`<string-token>`"
    String = 5,

    /// "`<bad-string-token>`" - "represents a parsing error"
    BadString = 6,

    /// "`<url-token>`"
    Url = 7,

    /// "`<bad-url-token>`" - "represents a parsing error"
    BadUrl = 8,

    /// "`<delim-token>`" - "has a value composed of a single code point"
    Delim = 9,

    /// "`<number-token>`"
    Number = 10,

    /// "`<percentage-token>`"
    Percentage = 11,

    /// "`<dimension-token>`"
    Dimension = 12,

    /// "`<whitespace-token>`" - "represents one or more whitespace code points"
    WhiteSpace = 13,

    /// "`<CDO-token>`" - the character sequence U+003C U+0021 U+002D U+002D (`<!--`)
    CDO = 14,

    /// "`<CDC-token>`" - the character sequence U+002D U+002D U+003E (`-->`)
    CDC = 15,

    /// "`<colon-token>`" - U+003A COLON (:)
    Colon = 16,

    /// "`<semicolon-token>`" - U+003B SEMICOLON (;)
    Semicolon = 17,

    /// "`<comma-token>`" - U+002C COMMA (,)
    Comma = 18,

    /// "`<[-token>`" - U+005B LEFT SQUARE BRACKET ([)
    LeftSquareBracket = 19,

    /// "`<]-token>`" - U+005D RIGHT SQUARE BRACKET (])
    RightSquareBracket = 20,

    /// "`<(-token>`" - U+0028 LEFT PARENTHESIS (()
    LeftParenthesis = 21,

    /// "`<)-token>`" - U+0029 RIGHT PARENTHESIS ())
    RightParenthesis = 22,

    /// "`<{-token>`" - U+007B LEFT CURLY BRACKET ({)
    LeftCurlyBracket = 23,

    /// "`<}-token>`" - U+007D RIGHT CURLY BRACKET (})
    RightCurlyBracket = 24,

    /// A comment, including an unterminated `/*` run spanning to end of input.
    Comment = 25,
}

impl TokenKind {
    /// The stable wire ordinal of this kind.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns true for the recoverable parse-error kinds.
    ///
    /// "Parse error (recoverable): a spec-defined malformed-input condition
    /// that still yields a token rather than aborting tokenization."
    #[must_use]
    pub const fn is_parse_error(self) -> bool {
        matches!(self, Self::BadString | Self::BadUrl)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ident => "ident-token",
            Self::Function => "function-token",
            Self::AtKeyword => "at-keyword-token",
            Self::Hash => "hash-token",
            Self::String => "string-token",
            Self::BadString => "bad-string-token",
            Self::Url => "url-token",
            Self::BadUrl => "bad-url-token",
            Self::Delim => "delim-token",
            Self::Number => "number-token",
            Self::Percentage => "percentage-token",
            Self::Dimension => "dimension-token",
            Self::WhiteSpace => "whitespace-token",
            Self::CDO => "CDO-token",
            Self::CDC => "CDC-token",
            Self::Colon => "colon-token",
            Self::Semicolon => "semicolon-token",
            Self::Comma => "comma-token",
            Self::LeftSquareBracket => "[-token",
            Self::RightSquareBracket => "]-token",
            Self::LeftParenthesis => "(-token",
            Self::RightParenthesis => ")-token",
            Self::LeftCurlyBracket => "{-token",
            Self::RightCurlyBracket => "}-token",
            Self::Comment => "comment-token",
        })
    }
}

/// One emitted token: a kind and the half-open span of code-unit offsets it
/// covers in the input buffer.
///
/// Successive tokens partition the input: the `start` of each token equals
/// the `end` of the previous one, with no gaps and no overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The lexical kind of this token.
    pub kind: TokenKind,
    /// Code-unit offset of the first unit of the token.
    pub start: usize,
    /// Code-unit offset one past the last unit of the token.
    pub end: usize,
}

impl Token {
    /// Create a token from a kind and its span.
    #[must_use]
    pub const fn new(kind: TokenKind, start: usize, end: usize) -> Self {
        Self { kind, start, end }
    }

    /// Length of the token in code units.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the token covers no code units.
    ///
    /// Never the case for emitted tokens; provided for span arithmetic.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Borrow the code units this token covers from its source buffer.
    #[must_use]
    pub fn units<'a>(&self, source: &'a [u16]) -> &'a [u16] {
        &source[self.start..self.end]
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} {}..{}>", self.kind, self.start, self.end)
    }
}
