//! CSS tokenizer over UTF-16 code units for the Numbat CSS tooling.
//!
//! # Scope
//!
//! This crate implements:
//! - **CSS Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - All 25 token kinds: ident, function, at-keyword, hash, string,
//!     bad-string, url, bad-url, delim, number, percentage, dimension,
//!     whitespace, CDO, CDC, the structural punctuation, and comments
//!   - Spec error recovery: malformed input always yields a token
//!     (bad-string, bad-url) and tokenizing resumes; nothing is thrown
//!   - Escape sequences and the full numeric grammar (span-only; no value
//!     decoding)
//! - **Offset-to-location mapping** for diagnostics built on top of the
//!   token stream
//!
//! # Representation
//!
//! The input is an immutable slice of 16-bit code units, matching the UTF-16
//! representation of the web platform this tokenizer is paired with. A
//! surrogate pair is two lexer-visible units, each classified as a
//! name-start unit; the lexer never decodes code points. Tokens are
//! `(kind, start, end)` span records over that buffer - the token stream
//! partitions the input exactly, and decoding of string or escape content is
//! left to the consumer.
//!
//! # Not implemented
//!
//! - CSSOM / parse-tree construction, selector and property grammars
//! - Input decoding from bytes to code units
//! - Preprocessing: CR/LF normalization and NUL replacement (CR and FF are
//!   recognized as newlines at the point of use instead; an embedded NUL
//!   behaves as end-of-input in lookahead, a known deviation from the spec's
//!   preprocessing step)

/// CSS tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
