//! Core lexer implementation: the cursor-driven dispatch loop.

use loxi_util::{Handler, Span};

use crate::cursor::Cursor;
use crate::lexer::identifier::is_ident_start;
use crate::token::{Literal, Token, TokenKind};

/// Scanner for Lox source text.
///
/// One `Lexer` performs one pass over one in-memory source text, reporting
/// malformed input to the shared [`Handler`] and never failing fatally. The
/// source is borrowed for the duration of the scan and never mutated.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Sink for malformed-input reports.
    pub(crate) handler: &'a Handler,

    /// Byte offset of the current lexeme's first character.
    pub(crate) token_start: usize,

    /// Line where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column where the current lexeme starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`, reporting errors to `handler`.
    pub fn new(source: &'a str, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Scans the whole source eagerly.
    ///
    /// The returned sequence is never empty and always ends with exactly one
    /// [`TokenKind::Eof`] token whose lexeme is empty and whose line is the
    /// line count after the full source was consumed. Malformed input is
    /// reported to the handler and produces no token; scanning continues.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let at_end = token.kind == TokenKind::Eof;
            tokens.push(token);
            if at_end {
                break;
            }
        }
        tokens
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace and comments, then dispatches on the next character.
    /// Characters that match no token class are reported and skipped, so a
    /// single pass surfaces every independent error. Returns
    /// [`TokenKind::Eof`] once the source is exhausted.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace_and_comments();

            self.token_start = self.cursor.position();
            self.token_start_line = self.cursor.line();
            self.token_start_column = self.cursor.column();

            if self.cursor.is_at_end() {
                return Token::new(TokenKind::Eof, String::new(), None, self.cursor.line());
            }

            let token = match self.cursor.current_char() {
                '(' => self.lex_single(TokenKind::LeftParen),
                ')' => self.lex_single(TokenKind::RightParen),
                '{' => self.lex_single(TokenKind::LeftBrace),
                '}' => self.lex_single(TokenKind::RightBrace),
                ',' => self.lex_single(TokenKind::Comma),
                '.' => self.lex_single(TokenKind::Dot),
                '-' => self.lex_single(TokenKind::Minus),
                '+' => self.lex_single(TokenKind::Plus),
                ';' => self.lex_single(TokenKind::Semicolon),
                '*' => self.lex_single(TokenKind::Star),
                // Comment starts were consumed above, so a surviving slash
                // is the division operator.
                '/' => self.lex_single(TokenKind::Slash),
                '!' => Some(self.lex_bang()),
                '=' => Some(self.lex_equal()),
                '<' => Some(self.lex_less()),
                '>' => Some(self.lex_greater()),
                '"' => self.lex_string(),
                c if c.is_ascii_digit() => Some(self.lex_number()),
                c if is_ident_start(c) => Some(self.lex_identifier()),
                _ => {
                    self.cursor.advance();
                    self.report_error("Unexpected character.");
                    None
                },
            };

            if let Some(token) = token {
                return token;
            }
        }
    }

    /// Consumes one character and emits its fixed token.
    fn lex_single(&mut self, kind: TokenKind) -> Option<Token> {
        self.cursor.advance();
        Some(self.make_token(kind))
    }

    /// Builds a token spanning from the current lexeme start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start).to_owned(),
            None,
            self.token_start_line,
        )
    }

    /// Builds a literal-carrying token spanning the current lexeme.
    pub(crate) fn make_literal_token(&self, kind: TokenKind, literal: Literal) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start).to_owned(),
            Some(literal),
            self.token_start_line,
        )
    }

    /// Reports a lexical error spanning the current lexeme.
    pub(crate) fn report_error(&self, message: &str) {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        self.handler.error(message, span);
    }

    /// Line number of the next token to be scanned (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.kind == TokenKind::Eof {
            None
        } else {
            Some(token)
        }
    }
}
