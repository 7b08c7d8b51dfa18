//! Integration tests for the lexer
//!
//! Tests tokenization of Sepro source code.

use sepro_language::{KEYWORDS, Lexer, Token, TokenKind};

fn tokenize(source: &str) -> Vec<Token> {
    Lexer::tokenize(source, KEYWORDS)
}

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_empty() {
    let tokens = tokenize("");
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_empty());
}

#[test]
fn tokenize_keyword_uppercases() {
    let tokens = tokenize("where Nothing");
    assert!(tokens[0].is_keyword("WHERE"));
    assert_eq!(tokens[1].text, "NOTHING");
}

#[test]
fn tokenize_identifier_preserves_case() {
    let tokens = tokenize("Open oPEN");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "Open");
    assert_eq!(tokens[1].text, "oPEN");
}

#[test]
fn tokenize_custom_keyword_set() {
    let tokens = Lexer::tokenize("react with", ["REACT"]);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
}

#[test]
fn tokenize_integer() {
    let tokens = tokenize("1024");
    assert_eq!(tokens[0].kind, TokenKind::IntLiteral);
    assert_eq!(tokens[0].int_value(), Some(1024));
}

#[test]
fn tokenize_string_literals() {
    let tokens = tokenize(r#""plain" "" """doc "string" here""""#);
    assert_eq!(tokens[0].string_value().as_deref(), Some("plain"));
    assert_eq!(tokens[1].string_value().as_deref(), Some(""));
    assert_eq!(tokens[2].string_value().as_deref(), Some(r#"doc "string" here"#));
    assert!(tokens[3].is_empty());
}

#[test]
fn tokenize_operators() {
    let tokens = tokenize("a.b,c");
    let ops: Vec<&str> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Operator)
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(ops, [".", ","]);
}

// =============================================================================
// Comments
// =============================================================================

#[test]
fn comments_are_skipped() {
    let tokens = tokenize("# header\nCONCEPT # trailing\n# another\nfoo");
    assert_eq!(tokens.len(), 3);
    assert!(tokens[0].is_keyword("CONCEPT"));
    assert_eq!(tokens[1].text, "foo");
    assert_eq!(tokens[1].pos.line, 4);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn number_followed_by_letter_is_error() {
    let tokens = tokenize("CONCEPT 3d");
    assert_eq!(tokens.len(), 2);
    assert!(
        tokens[1]
            .kind
            .same_kind(&TokenKind::Error(String::new()))
    );
    assert!(matches!(&tokens[1].kind, TokenKind::Error(m) if m == "invalid character in number"));
}

#[test]
fn number_followed_by_underscore_is_error() {
    let tokens = tokenize("3_");
    assert!(tokens[0].is_error());
}

#[test]
fn unterminated_triple_string_is_error() {
    let tokens = tokenize("\"\"\"never\nclosed\"\"");
    assert!(
        matches!(&tokens[0].kind, TokenKind::Error(m) if m == "unexpected end of input in a string")
    );
    assert_eq!(tokens[0].pos.line, 1);
}

#[test]
fn unexpected_character_reports_it() {
    let tokens = tokenize("WHERE ;");
    assert!(matches!(&tokens[1].kind, TokenKind::Error(m) if m.contains(';')));
    assert_eq!(tokens[1].pos.column, 7);
}

#[test]
fn stops_after_first_error() {
    let tokens = tokenize("a ! b ! c");
    assert_eq!(tokens.len(), 2);
    assert!(tokens[1].is_error());
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn positions_are_token_starts() {
    let tokens = tokenize("WHERE a\n  DO NOTHING");
    let positions: Vec<(u32, u32)> = tokens.iter().map(|t| (t.pos.line, t.pos.column)).collect();
    assert_eq!(positions, [(1, 1), (1, 7), (2, 3), (2, 6), (2, 13)]);
}

#[test]
fn string_position_is_opening_quote() {
    let tokens = tokenize("x \"abc\" y");
    assert_eq!(tokens[1].pos.column, 3);
    assert_eq!(tokens[2].pos.column, 9);
}
