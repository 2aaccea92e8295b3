//! Edge case tests for loxi-lex.

use crate::{Lexer, Token, TokenKind};
use loxi_util::Handler;
use proptest::prelude::*;

fn scan(source: &str) -> Vec<Token> {
    let handler = Handler::new();
    Lexer::new(source, &handler).scan_tokens()
}

#[test]
fn test_edge_whitespace_only() {
    let tokens = scan("   \t\r\n  \n  ");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
    assert_eq!(tokens[0].line, 3);
}

#[test]
fn test_edge_comments_only() {
    let tokens = scan("// one\n// two");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_edge_single_char_ident() {
    let tokens = scan("x");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, "x");
}

#[test]
fn test_edge_long_identifier() {
    let name = "a".repeat(10000);
    let tokens = scan(&name);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].lexeme, name);
}

#[test]
fn test_edge_case_sensitivity() {
    let tokens = scan("Var var");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::Var);
}

#[test]
fn test_edge_nested_delimiters() {
    let tokens = scan("((()))");
    let lefts = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::LeftParen)
        .count();
    assert_eq!(lefts, 3);
    assert_eq!(tokens.len(), 7);
}

#[test]
fn test_edge_adjacent_tokens_without_spaces() {
    let tokens = scan("var x=1;");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_edge_string_holding_every_delimiter() {
    let tokens = scan("\"(){};,.\"");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::String);
}

#[test]
fn test_edge_unexpected_multibyte_character() {
    let handler = Handler::new();
    let tokens = Lexer::new("é1", &handler).scan_tokens();
    assert_eq!(handler.error_count(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Number);
}

#[test]
fn test_edge_unterminated_string_swallows_rest_of_input() {
    let handler = Handler::new();
    let tokens = Lexer::new("1 \"rest var x", &handler).scan_tokens();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Number, TokenKind::Eof]);
    assert_eq!(handler.error_count(), 1);
}

proptest! {
    #[test]
    fn prop_scan_never_panics(source in any::<String>()) {
        let handler = Handler::new();
        let _ = Lexer::new(&source, &handler).scan_tokens();
    }

    #[test]
    fn prop_exactly_one_eof_and_it_is_last(source in any::<String>()) {
        let tokens = scan(&source);
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        prop_assert_eq!(eofs, 1);
        prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        prop_assert_eq!(tokens.last().unwrap().lexeme.as_str(), "");
    }

    #[test]
    fn prop_lines_non_decreasing(source in any::<String>()) {
        let tokens = scan(&source);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line <= pair[1].line);
        }
    }

    #[test]
    fn prop_non_eof_lexemes_are_source_slices(source in "[ -~\\n]{0,80}") {
        for token in scan(&source) {
            if token.kind != TokenKind::Eof {
                prop_assert!(source.contains(token.lexeme.as_str()));
            }
        }
    }
}
