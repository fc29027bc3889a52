//! CSS tokenizer module.

/// Code-unit classification per [CSS Syntax Level 3 § 4.2](https://www.w3.org/TR/css-syntax-3/#tokenizer-definitions).
pub mod char_code;
/// Offset-to-line/column mapping for diagnostics.
pub mod location;
/// Stateless cursor primitives shared by the token consumers.
pub mod scan;
/// CSS token kinds and span records per [CSS Syntax Level 3 § 4](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod token;
/// CSS tokenizer implementation.
pub mod tokenizer;

pub use char_code::{CharCategory, char_code_category};
pub use location::{OffsetToLocation, SourceLocation};
pub use token::{Token, TokenKind};
pub use tokenizer::{Tokenizer, tokenize};
