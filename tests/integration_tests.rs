//! Integration tests for end-to-end scanning.
//!
//! These tests cover the full token sequences the scanner produces for
//! small programs, the driver-facing rendering of tokens, and the
//! file-level entry point.

use minic_lexer::lexer::scanner::tokenize_str;
use minic_lexer::lexer::tokens::TokenKind;
use minic_lexer::tokenize_file;

#[test]
fn test_scan_declaration() {
    let tokens = tokenize_str("int x = 10;");

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].text, "int");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "x");
    assert_eq!(tokens[2].kind, TokenKind::Assignment);
    assert_eq!(tokens[3].kind, TokenKind::Number);
    assert_eq!(tokens[3].text, "10");
    assert_eq!(tokens[4].kind, TokenKind::Semicolon);
    assert_eq!(tokens[5].kind, TokenKind::EOF);
}

#[test]
fn test_scan_comparison_with_exponent() {
    let tokens = tokenize_str("x <= 3.14e-2");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].text, "x");
    assert_eq!(tokens[1].kind, TokenKind::LessEquals);
    assert_eq!(tokens[2].kind, TokenKind::Number);
    assert_eq!(tokens[2].text, "3.14e-2");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_scan_with_trailing_comment() {
    let tokens = tokenize_str("a != b // trailing");

    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].kind, TokenKind::NotEquals);
    assert_eq!(tokens[2].kind, TokenKind::Identifier);
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_scan_trailing_point_number() {
    // Pinned resolution: the point stays in the number's text.
    let tokens = tokenize_str("5.");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Number);
    assert_eq!(tokens[0].text, "5.");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_scan_malformed_input() {
    let tokens = tokenize_str("$");

    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Error);
    assert_eq!(tokens[0].text, "$");
    assert_eq!(tokens[1].kind, TokenKind::EOF);
}

#[test]
fn test_token_rendering() {
    let tokens = tokenize_str("int x = 10; $");

    assert_eq!(format!("{}", tokens[0]), "keyword : int");
    assert_eq!(format!("{}", tokens[1]), "identifier : x");
    assert_eq!(format!("{}", tokens[2]), "= : =");
    assert_eq!(format!("{}", tokens[3]), "num : 10");
    assert_eq!(format!("{}", tokens[4]), "; : ;");
    assert_eq!(format!("{}", tokens[5]), "Error : $");
    assert_eq!(format!("{}", tokens[6]), "EOF : EOF");
}

#[test]
fn test_scan_sample_file() {
    let tokens = tokenize_file("tests/sample.mc").unwrap();

    assert_eq!(tokens.len(), 30);
    assert_eq!(tokens[0].kind, TokenKind::Keyword);
    assert_eq!(tokens[0].text, "int");
    assert_eq!(tokens[1].kind, TokenKind::Identifier);
    assert_eq!(tokens[1].text, "main");
    assert_eq!(tokens[5].kind, TokenKind::Keyword);
    assert_eq!(tokens[5].text, "float");
    assert_eq!(tokens[8].kind, TokenKind::Number);
    assert_eq!(tokens[8].text, "3.14e-2");
    assert_eq!(tokens[13].kind, TokenKind::LessEquals);
    assert_eq!(tokens[17].kind, TokenKind::Keyword);
    assert_eq!(tokens[17].text, "print");
    assert_eq!(tokens[25].kind, TokenKind::Keyword);
    assert_eq!(tokens[25].text, "return");
    assert_eq!(tokens[29].kind, TokenKind::EOF);
}

#[test]
fn test_scan_sample_file_positions() {
    let tokens = tokenize_file("tests/sample.mc").unwrap();

    // `int` opens the file, `float` opens the second line.
    assert_eq!((tokens[0].line, tokens[0].col), (1, 1));
    assert_eq!((tokens[5].line, tokens[5].col), (2, 5));
}

#[test]
fn test_tokenize_file_missing_path() {
    let result = tokenize_file("tests/no_such_file.mc");

    assert!(result.is_err());
}
