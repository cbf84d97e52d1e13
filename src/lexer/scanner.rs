use std::io::Read;

use super::source::CharSource;
use super::tokens::{Token, TokenKind, MAX_TEXT_LEN, RESERVED_LOOKUP};

/// Hand-written scanner for the language.
///
/// Consumes bytes from a [`CharSource`] and classifies them into tokens.
/// `next_token` never fails out-of-band: malformed input degrades to
/// `TokenKind::Error` tokens and scanning continues from the next byte.
pub struct Scanner<R> {
    source: CharSource<R>,
}

impl<R: Read> Scanner<R> {
    pub fn new(input: R) -> Scanner<R> {
        Scanner {
            source: CharSource::new(input),
        }
    }

    /// Scans everything up to and including the EOF token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = vec![];

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EOF;
            tokens.push(token);

            if done {
                break;
            }
        }

        tokens
    }

    /// Produces the next token from the stream.
    pub fn next_token(&mut self) -> Token {
        let Some(ch) = self.skip_ws_and_comments() else {
            return Token::new(TokenKind::EOF, "EOF", self.source.line(), self.source.col());
        };

        let line = self.source.line();
        let col = self.source.col().max(1);

        if ch.is_ascii_alphabetic() || ch == b'_' {
            return self.scan_identifier_or_keyword(ch, line, col);
        }

        if ch.is_ascii_digit() {
            return self.scan_number(ch, line, col);
        }

        match ch {
            b'.' => Token::new(TokenKind::Error, ".", line, col),
            b'(' => Token::new(TokenKind::OpenParen, "(", line, col),
            b')' => Token::new(TokenKind::CloseParen, ")", line, col),
            b'{' => Token::new(TokenKind::OpenCurly, "{", line, col),
            b'}' => Token::new(TokenKind::CloseCurly, "}", line, col),
            b';' => Token::new(TokenKind::Semicolon, ";", line, col),
            b',' => Token::new(TokenKind::Comma, ",", line, col),
            b'+' => Token::new(TokenKind::Plus, "+", line, col),
            b'-' => Token::new(TokenKind::Dash, "-", line, col),
            b'*' => Token::new(TokenKind::Star, "*", line, col),
            b'/' => Token::new(TokenKind::Slash, "/", line, col),
            b'=' => self.two_char_op(TokenKind::Equals, TokenKind::Assignment, "=", line, col),
            b'!' => self.two_char_op(TokenKind::NotEquals, TokenKind::Error, "!", line, col),
            b'<' => self.two_char_op(TokenKind::LessEquals, TokenKind::Less, "<", line, col),
            b'>' => self.two_char_op(TokenKind::GreaterEquals, TokenKind::Greater, ">", line, col),
            other => Token::new(TokenKind::Error, (other as char).to_string(), line, col),
        }
    }

    /// Skips whitespace and comments, returning the first significant byte
    /// (already consumed), or `None` at end of stream. An unterminated
    /// block comment swallows the remainder of the input.
    fn skip_ws_and_comments(&mut self) -> Option<u8> {
        loop {
            let ch = self.source.next()?;

            if ch.is_ascii_whitespace() {
                continue;
            }

            if ch == b'/' {
                match self.source.next() {
                    Some(b'/') => {
                        while let Some(c) = self.source.next() {
                            if c == b'\n' {
                                break;
                            }
                        }
                    }
                    Some(b'*') => {
                        let mut prev = 0u8;
                        loop {
                            let cur = self.source.next()?;
                            if prev == b'*' && cur == b'/' {
                                break;
                            }
                            prev = cur;
                        }
                    }
                    other => {
                        self.source.pushback(other);
                        return Some(b'/');
                    }
                }
                continue;
            }

            return Some(ch);
        }
    }

    fn scan_identifier_or_keyword(&mut self, first: u8, line: usize, col: usize) -> Token {
        let mut text = String::new();
        push_bounded(&mut text, first);

        loop {
            match self.source.next() {
                Some(c) if c.is_ascii_alphanumeric() || c == b'_' => push_bounded(&mut text, c),
                other => {
                    self.source.pushback(other);
                    break;
                }
            }
        }

        let kind = if RESERVED_LOOKUP.contains(text.as_str()) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, text, line, col)
    }

    fn scan_number(&mut self, first: u8, line: usize, col: usize) -> Token {
        let mut text = String::new();
        push_bounded(&mut text, first);

        let mut ch = self.scan_digits(&mut text);

        if ch == Some(b'.') {
            // The point is committed before the follower is checked; a
            // non-digit follower leaves it in the text ("5." scans as one
            // number) and becomes the lookahead for the rest of the scan.
            push_bounded(&mut text, b'.');

            match self.source.next() {
                Some(c) if c.is_ascii_digit() => {
                    push_bounded(&mut text, c);
                    ch = self.scan_digits(&mut text);
                }
                other => ch = other,
            }
        }

        if let Some(marker @ (b'e' | b'E')) = ch {
            let mark = text.len();
            push_bounded(&mut text, marker);

            let mut ch2 = self.source.next();
            if let Some(sign @ (b'+' | b'-')) = ch2 {
                push_bounded(&mut text, sign);
                ch2 = self.source.next();
            }

            match ch2 {
                Some(c) if c.is_ascii_digit() => {
                    push_bounded(&mut text, c);
                    ch = self.scan_digits(&mut text);
                }
                other => {
                    // Malformed exponent: truncate the speculative marker
                    // and sign out of the text and re-deliver only the
                    // final unconsumed byte.
                    text.truncate(mark);
                    self.source.pushback(other);
                    return Token::new(TokenKind::Number, text, line, col);
                }
            }
        }

        self.source.pushback(ch);
        Token::new(TokenKind::Number, text, line, col)
    }

    /// Consumes a digit run into `text`, returning the first non-digit.
    fn scan_digits(&mut self, text: &mut String) -> Option<u8> {
        loop {
            match self.source.next() {
                Some(c) if c.is_ascii_digit() => push_bounded(text, c),
                other => return other,
            }
        }
    }

    /// Resolves `= ! < >` against a trailing `=`, pushing the peeked byte
    /// back when it does not complete the two-character form.
    fn two_char_op(
        &mut self,
        matched: TokenKind,
        fallback: TokenKind,
        fallback_text: &str,
        line: usize,
        col: usize,
    ) -> Token {
        let ch = self.source.next();

        if ch == Some(b'=') {
            Token::new(matched, matched.name(), line, col)
        } else {
            self.source.pushback(ch);
            Token::new(fallback, fallback_text, line, col)
        }
    }
}

/// Scans an in-memory source to completion.
pub fn tokenize_str(source: &str) -> Vec<Token> {
    Scanner::new(source.as_bytes()).tokenize()
}

fn push_bounded(text: &mut String, ch: u8) {
    if text.len() < MAX_TEXT_LEN {
        text.push(ch as char);
    }
}
