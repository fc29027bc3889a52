//! Integration tests for the CSS tokenizer.

use numbat_css::tokenizer::scan::first_unit_offset;
use numbat_css::tokenizer::{Token, TokenKind, Tokenizer, tokenize};

/// Helper to tokenize a string and return the span records.
fn tokens(input: &str) -> Vec<Token> {
    let source: Vec<u16> = input.encode_utf16().collect();
    Tokenizer::new(&source).collect()
}

/// Helper to tokenize a string and return only the kinds.
fn kinds(input: &str) -> Vec<TokenKind> {
    tokens(input).iter().map(|token| token.kind).collect()
}

/// Tokens partition the input: contiguous spans, no gaps, no overlaps,
/// covering exactly the buffer (minus a leading BOM).
fn assert_partition(input: &str) {
    let source: Vec<u16> = input.encode_utf16().collect();
    let mut expected_start = first_unit_offset(&source);
    for token in Tokenizer::new(&source) {
        assert_eq!(token.start, expected_start, "gap or overlap in {input:?}");
        assert!(token.end > token.start, "empty token in {input:?}");
        expected_start = token.end;
    }
    assert_eq!(expected_start, source.len(), "input not covered: {input:?}");
}

#[test]
fn test_empty_input() {
    assert!(tokens("").is_empty());
}

#[test]
fn test_no_eof_token() {
    // The stream simply ends; no EOF token is ever emitted.
    let all = tokens("a");
    assert_eq!(all, vec![Token::new(TokenKind::Ident, 0, 1)]);
}

#[test]
fn test_whitespace() {
    assert_eq!(
        tokens("   \t\n  "),
        vec![Token::new(TokenKind::WhiteSpace, 0, 7)]
    );
}

#[test]
fn test_ident() {
    assert_eq!(tokens("color"), vec![Token::new(TokenKind::Ident, 0, 5)]);
}

#[test]
fn test_ident_with_hyphen() {
    assert_eq!(
        tokens("background-color"),
        vec![Token::new(TokenKind::Ident, 0, 16)]
    );
}

#[test]
fn test_ident_with_underscore() {
    assert_eq!(tokens("_private"), vec![Token::new(TokenKind::Ident, 0, 8)]);
}

#[test]
fn test_custom_property_name() {
    // `--` starts an ident sequence.
    assert_eq!(tokens("--var"), vec![Token::new(TokenKind::Ident, 0, 5)]);
}

#[test]
fn test_non_ascii_ident() {
    // U+00E9 is one code unit and a name-start unit.
    assert_eq!(tokens("caf\u{e9}"), vec![Token::new(TokenKind::Ident, 0, 4)]);
}

#[test]
fn test_surrogate_pair_is_two_name_units() {
    // The lexer sees code units, so an astral character is two name-start
    // units inside one ident span.
    assert_eq!(
        tokens("a\u{1F600}"),
        vec![Token::new(TokenKind::Ident, 0, 3)]
    );
}

#[test]
fn test_ident_with_escape() {
    // "\61 bc" - hex escape, its terminating space, then name units.
    assert_eq!(tokens("\\61 bc"), vec![Token::new(TokenKind::Ident, 0, 6)]);
}

#[test]
fn test_invalid_escape_is_delim() {
    // A backslash before a newline does not start an escape.
    assert_eq!(
        tokens("\\\n"),
        vec![
            Token::new(TokenKind::Delim, 0, 1),
            Token::new(TokenKind::WhiteSpace, 1, 2),
        ]
    );
}

#[test]
fn test_function() {
    assert_eq!(tokens("rgb("), vec![Token::new(TokenKind::Function, 0, 4)]);
}

#[test]
fn test_at_keyword() {
    assert_eq!(tokens("@media"), vec![Token::new(TokenKind::AtKeyword, 0, 6)]);
}

#[test]
fn test_at_without_identifier_is_delim() {
    assert_eq!(
        kinds("@ x"),
        vec![TokenKind::Delim, TokenKind::WhiteSpace, TokenKind::Ident]
    );
}

#[test]
fn test_hash() {
    assert_eq!(tokens("#header"), vec![Token::new(TokenKind::Hash, 0, 7)]);
}

#[test]
fn test_hash_numeric() {
    // A digit is a name unit, so #123 is still a hash token.
    assert_eq!(tokens("#123"), vec![Token::new(TokenKind::Hash, 0, 4)]);
}

#[test]
fn test_hash_with_escape() {
    assert_eq!(tokens("#\\31 23"), vec![Token::new(TokenKind::Hash, 0, 7)]);
}

#[test]
fn test_hash_without_name_is_delim() {
    assert_eq!(
        kinds("# x"),
        vec![TokenKind::Delim, TokenKind::WhiteSpace, TokenKind::Ident]
    );
}

#[test]
fn test_string_double_quote() {
    assert_eq!(
        tokens("\"hello world\""),
        vec![Token::new(TokenKind::String, 0, 13)]
    );
}

#[test]
fn test_string_single_quote() {
    assert_eq!(tokens("'hi'"), vec![Token::new(TokenKind::String, 0, 4)]);
}

#[test]
fn test_string_with_escaped_quote() {
    assert_eq!(
        tokens("\"a\\\"b\""),
        vec![Token::new(TokenKind::String, 0, 6)]
    );
}

#[test]
fn test_string_unterminated_runs_to_eof() {
    // Running to end of buffer with no terminator is still a <string-token>;
    // strict callers compare the end offset to the buffer length.
    assert_eq!(tokens("'abc"), vec![Token::new(TokenKind::String, 0, 4)]);
}

#[test]
fn test_string_interrupted_by_newline() {
    // The bad-string ends before the newline; the newline starts the next
    // (whitespace) token.
    assert_eq!(
        tokens("'ab\nc'"),
        vec![
            Token::new(TokenKind::BadString, 0, 3),
            Token::new(TokenKind::WhiteSpace, 3, 4),
            Token::new(TokenKind::Ident, 4, 5),
            Token::new(TokenKind::String, 5, 6),
        ]
    );
}

#[test]
fn test_string_with_escaped_newline() {
    // A backslash-newline pair is consumed as a line continuation.
    assert_eq!(tokens("'a\\\nb'"), vec![Token::new(TokenKind::String, 0, 6)]);
}

#[test]
fn test_string_with_escaped_crlf() {
    assert_eq!(
        tokens("'a\\\r\nb'"),
        vec![Token::new(TokenKind::String, 0, 7)]
    );
}

#[test]
fn test_string_trailing_backslash_at_eof() {
    // "If the next input code point is EOF, do nothing."
    assert_eq!(tokens("'a\\"), vec![Token::new(TokenKind::String, 0, 3)]);
}

#[test]
fn test_number_integer() {
    assert_eq!(tokens("12"), vec![Token::new(TokenKind::Number, 0, 2)]);
}

#[test]
fn test_number_signed() {
    assert_eq!(tokens("+12"), vec![Token::new(TokenKind::Number, 0, 3)]);
    assert_eq!(tokens("-12"), vec![Token::new(TokenKind::Number, 0, 3)]);
}

#[test]
fn test_number_fraction() {
    assert_eq!(tokens("1.5"), vec![Token::new(TokenKind::Number, 0, 3)]);
    assert_eq!(tokens(".5"), vec![Token::new(TokenKind::Number, 0, 2)]);
    assert_eq!(tokens("+.5"), vec![Token::new(TokenKind::Number, 0, 3)]);
}

#[test]
fn test_lone_full_stop_is_delim() {
    assert_eq!(tokens("."), vec![Token::new(TokenKind::Delim, 0, 1)]);
}

#[test]
fn test_lone_plus_is_delim() {
    assert_eq!(tokens("+"), vec![Token::new(TokenKind::Delim, 0, 1)]);
}

#[test]
fn test_number_exponent() {
    assert_eq!(tokens("1e3"), vec![Token::new(TokenKind::Number, 0, 3)]);
    assert_eq!(tokens("1E3"), vec![Token::new(TokenKind::Number, 0, 3)]);
    assert_eq!(tokens("1e-3"), vec![Token::new(TokenKind::Number, 0, 4)]);
    assert_eq!(tokens("2.5e+2"), vec![Token::new(TokenKind::Number, 0, 6)]);
}

#[test]
fn test_partial_exponent_backtracks() {
    // A trailing `e` with no digit is not part of the number span; the `e`
    // then starts an identifier, so the numeric consumer picks it up as a
    // dimension unit instead.
    assert_eq!(tokens("1e"), vec![Token::new(TokenKind::Dimension, 0, 2)]);
    assert_eq!(
        tokens("1e+"),
        vec![
            Token::new(TokenKind::Dimension, 0, 2),
            Token::new(TokenKind::Delim, 2, 3),
        ]
    );
}

#[test]
fn test_dimension() {
    // Number part "1", full span "1px".
    assert_eq!(tokens("1px"), vec![Token::new(TokenKind::Dimension, 0, 3)]);
    assert_eq!(
        tokens("10.5rem"),
        vec![Token::new(TokenKind::Dimension, 0, 7)]
    );
}

#[test]
fn test_dimension_after_exponent() {
    assert_eq!(tokens("1e3px"), vec![Token::new(TokenKind::Dimension, 0, 5)]);
}

#[test]
fn test_percentage() {
    assert_eq!(tokens("1%"), vec![Token::new(TokenKind::Percentage, 0, 2)]);
}

#[test]
fn test_cdo_cdc() {
    assert_eq!(tokens("<!--"), vec![Token::new(TokenKind::CDO, 0, 4)]);
    assert_eq!(tokens("-->"), vec![Token::new(TokenKind::CDC, 0, 3)]);
}

#[test]
fn test_incomplete_cdo_is_delims() {
    assert_eq!(
        kinds("<!-"),
        vec![TokenKind::Delim, TokenKind::Delim, TokenKind::Delim]
    );
}

#[test]
fn test_comment() {
    assert_eq!(tokens("/* c */"), vec![Token::new(TokenKind::Comment, 0, 7)]);
    assert_eq!(tokens("/**/"), vec![Token::new(TokenKind::Comment, 0, 4)]);
}

#[test]
fn test_comment_unterminated_runs_to_eof() {
    assert_eq!(
        tokens("/* unterminated"),
        vec![Token::new(TokenKind::Comment, 0, 15)]
    );
}

#[test]
fn test_comment_between_idents() {
    assert_eq!(
        tokens("a/*x*/b"),
        vec![
            Token::new(TokenKind::Ident, 0, 1),
            Token::new(TokenKind::Comment, 1, 6),
            Token::new(TokenKind::Ident, 6, 7),
        ]
    );
}

#[test]
fn test_lone_solidus_is_delim() {
    assert_eq!(tokens("/"), vec![Token::new(TokenKind::Delim, 0, 1)]);
}

#[test]
fn test_structural_tokens() {
    assert_eq!(
        kinds("([{}]);,:"),
        vec![
            TokenKind::LeftParenthesis,
            TokenKind::LeftSquareBracket,
            TokenKind::LeftCurlyBracket,
            TokenKind::RightCurlyBracket,
            TokenKind::RightSquareBracket,
            TokenKind::RightParenthesis,
            TokenKind::Semicolon,
            TokenKind::Comma,
            TokenKind::Colon,
        ]
    );
}

#[test]
fn test_unknown_ascii_is_delim() {
    for input in ["$", "^", "~", "|", "=", "!", "?", "`"] {
        assert_eq!(kinds(input), vec![TokenKind::Delim], "for {input:?}");
    }
}

#[test]
fn test_url_unquoted() {
    assert_eq!(
        tokens("url(foo.png)"),
        vec![Token::new(TokenKind::Url, 0, 12)]
    );
}

#[test]
fn test_url_with_inner_whitespace() {
    assert_eq!(
        tokens("url( foo.png )"),
        vec![Token::new(TokenKind::Url, 0, 14)]
    );
}

#[test]
fn test_url_empty() {
    assert_eq!(tokens("url()"), vec![Token::new(TokenKind::Url, 0, 5)]);
}

#[test]
fn test_url_case_insensitive() {
    assert_eq!(tokens("URL(x)"), vec![Token::new(TokenKind::Url, 0, 6)]);
    assert_eq!(tokens("Url(x)"), vec![Token::new(TokenKind::Url, 0, 6)]);
}

#[test]
fn test_url_unterminated_runs_to_eof() {
    assert_eq!(tokens("url(foo"), vec![Token::new(TokenKind::Url, 0, 7)]);
    assert_eq!(tokens("url("), vec![Token::new(TokenKind::Url, 0, 4)]);
}

#[test]
fn test_url_quoted_becomes_function() {
    // The function token spans exactly `url(`; the quoted value and the
    // closing parenthesis are tokenized separately.
    assert_eq!(
        tokens("url(\"foo.png\")"),
        vec![
            Token::new(TokenKind::Function, 0, 4),
            Token::new(TokenKind::String, 4, 13),
            Token::new(TokenKind::RightParenthesis, 13, 14),
        ]
    );
}

#[test]
fn test_url_whitespace_then_quote_becomes_function() {
    // The rewind leaves the whitespace for the next iteration.
    assert_eq!(
        tokens("url( 'x')"),
        vec![
            Token::new(TokenKind::Function, 0, 4),
            Token::new(TokenKind::WhiteSpace, 4, 5),
            Token::new(TokenKind::String, 5, 8),
            Token::new(TokenKind::RightParenthesis, 8, 9),
        ]
    );
}

#[test]
fn test_non_url_function_is_not_special() {
    assert_eq!(
        tokens("calc(1)"),
        vec![
            Token::new(TokenKind::Function, 0, 5),
            Token::new(TokenKind::Number, 5, 6),
            Token::new(TokenKind::RightParenthesis, 6, 7),
        ]
    );
}

#[test]
fn test_bad_url_inner_whitespace() {
    assert_eq!(
        tokens("url(foo bar)"),
        vec![Token::new(TokenKind::BadUrl, 0, 12)]
    );
}

#[test]
fn test_bad_url_stray_quote() {
    assert_eq!(
        tokens("url(a\"b)"),
        vec![Token::new(TokenKind::BadUrl, 0, 8)]
    );
}

#[test]
fn test_bad_url_stray_parenthesis() {
    assert_eq!(
        tokens("url(a(b)c"),
        vec![
            Token::new(TokenKind::BadUrl, 0, 8),
            Token::new(TokenKind::Ident, 8, 9),
        ]
    );
}

#[test]
fn test_bad_url_non_printable() {
    assert_eq!(
        tokens("url(\u{7f})"),
        vec![Token::new(TokenKind::BadUrl, 0, 6)]
    );
}

#[test]
fn test_bad_url_invalid_escape() {
    assert_eq!(
        tokens("url(a\\\n)"),
        vec![Token::new(TokenKind::BadUrl, 0, 8)]
    );
}

#[test]
fn test_url_escaped_parenthesis_does_not_terminate() {
    assert_eq!(
        tokens("url(a\\)b)"),
        vec![Token::new(TokenKind::Url, 0, 9)]
    );
}

#[test]
fn test_bad_url_escape_at_eof_stays_in_bounds() {
    let source: Vec<u16> = "url((\\a".encode_utf16().collect();
    let all: Vec<Token> = Tokenizer::new(&source).collect();
    assert_eq!(all, vec![Token::new(TokenKind::BadUrl, 0, 7)]);
}

#[test]
fn test_hyphen_dispatch() {
    assert_eq!(tokens("-5"), vec![Token::new(TokenKind::Number, 0, 2)]);
    assert_eq!(tokens("-x"), vec![Token::new(TokenKind::Ident, 0, 2)]);
    assert_eq!(
        kinds("- "),
        vec![TokenKind::Delim, TokenKind::WhiteSpace]
    );
}

#[test]
fn test_bom_is_skipped() {
    let with_bom = tokens("\u{feff}body");
    let without = tokens("body");
    assert_eq!(with_bom, vec![Token::new(TokenKind::Ident, 1, 5)]);
    assert_eq!(without, vec![Token::new(TokenKind::Ident, 0, 4)]);
    // Same kinds, spans shifted by the BOM width, no delim for the BOM.
    assert_eq!(
        with_bom.iter().map(|t| t.kind).collect::<Vec<_>>(),
        without.iter().map(|t| t.kind).collect::<Vec<_>>()
    );
}

#[test]
fn test_reversed_bom_is_skipped() {
    assert_eq!(tokens("\u{fffe}a"), vec![Token::new(TokenKind::Ident, 1, 2)]);
}

#[test]
fn test_bom_alone_yields_nothing() {
    assert!(tokens("\u{feff}").is_empty());
}

#[test]
fn test_embedded_nul_is_delim() {
    // Known deviation: a literal U+0000 classifies as the end-of-input
    // sentinel and falls through to a delim token.
    assert_eq!(
        tokens("a\u{0}b"),
        vec![
            Token::new(TokenKind::Ident, 0, 1),
            Token::new(TokenKind::Delim, 1, 2),
            Token::new(TokenKind::Ident, 2, 3),
        ]
    );
}

#[test]
fn test_declaration_sequence() {
    assert_eq!(
        kinds("a { color: #fff; margin: 1px -2px; }"),
        vec![
            TokenKind::Ident,
            TokenKind::WhiteSpace,
            TokenKind::LeftCurlyBracket,
            TokenKind::WhiteSpace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::WhiteSpace,
            TokenKind::Hash,
            TokenKind::Semicolon,
            TokenKind::WhiteSpace,
            TokenKind::Ident,
            TokenKind::Colon,
            TokenKind::WhiteSpace,
            TokenKind::Dimension,
            TokenKind::WhiteSpace,
            TokenKind::Dimension,
            TokenKind::Semicolon,
            TokenKind::WhiteSpace,
            TokenKind::RightCurlyBracket,
        ]
    );
}

#[test]
fn test_partition_property() {
    for input in [
        "",
        "a { color: red; }",
        "'ab\nc'",
        "\"unterminated",
        "url(foo bar)",
        "url(\"foo.png\")",
        "url(a\\)b)",
        "url((\\a",
        "/* unterminated",
        "\u{feff}@media (min-width: 1e3px) { .x { } }",
        "1e+ .5% -->\t<!-- #\\31 23",
        "a\u{0}b\\",
        "caf\u{e9} \u{1F600} 'q\\\r\nr'",
        "- -- -3 -x -\\61",
        "@ # . + < / \\\n",
    ] {
        assert_partition(input);
    }
}

#[test]
fn test_sink_matches_iterator() {
    let source: Vec<u16> = "a { b: url(c) 1px }".encode_utf16().collect();
    let mut sunk = Vec::new();
    tokenize(&source, |token| sunk.push(token));
    let iterated: Vec<Token> = Tokenizer::new(&source).collect();
    assert_eq!(sunk, iterated);
}

#[test]
fn test_token_units_borrow_source() {
    let source: Vec<u16> = "1px".encode_utf16().collect();
    let all: Vec<Token> = Tokenizer::new(&source).collect();
    assert_eq!(String::from_utf16_lossy(all[0].units(&source)), "1px");
}

#[test]
fn test_stable_ordinals() {
    // Wire-format ordinals must never move.
    assert_eq!(TokenKind::Ident.ordinal(), 1);
    assert_eq!(TokenKind::Function.ordinal(), 2);
    assert_eq!(TokenKind::BadUrl.ordinal(), 8);
    assert_eq!(TokenKind::WhiteSpace.ordinal(), 13);
    assert_eq!(TokenKind::Comment.ordinal(), 25);
}

#[test]
fn test_parse_error_kinds() {
    assert!(TokenKind::BadString.is_parse_error());
    assert!(TokenKind::BadUrl.is_parse_error());
    assert!(!TokenKind::String.is_parse_error());
    assert!(!TokenKind::Url.is_parse_error());
}

#[test]
fn test_token_display() {
    let token = Token::new(TokenKind::Ident, 0, 5);
    assert_eq!(token.to_string(), "<ident-token 0..5>");
    assert_eq!(TokenKind::CDO.to_string(), "CDO-token");
    assert_eq!(TokenKind::LeftSquareBracket.to_string(), "[-token");
    // The curly-bracket names are brace-escaped at the derive level and must
    // still render as single literal braces.
    assert_eq!(TokenKind::LeftCurlyBracket.to_string(), "{-token");
    assert_eq!(TokenKind::RightCurlyBracket.to_string(), "}-token");
}

#[test]
fn test_token_serialization() {
    let token = Token::new(TokenKind::Percentage, 3, 5);
    let json = serde_json::to_value(token).expect("token serializes");
    assert_eq!(
        json,
        serde_json::json!({ "kind": "Percentage", "start": 3, "end": 5 })
    );
}
