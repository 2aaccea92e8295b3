//! One-or-two-character operator lexing.
//!
//! `!`, `=`, `<` and `>` each check whether the next character is `=`; if so
//! it is consumed and the two-character form is emitted.

use crate::token::TokenKind;
use crate::Lexer;
use crate::Token;

impl<'a> Lexer<'a> {
    /// Lexes `!` or `!=`.
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::BangEqual)
        } else {
            self.make_token(TokenKind::Bang)
        }
    }

    /// Lexes `=` or `==`.
    pub(crate) fn lex_equal(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::EqualEqual)
        } else {
            self.make_token(TokenKind::Equal)
        }
    }

    /// Lexes `<` or `<=`.
    pub(crate) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::LessEqual)
        } else {
            self.make_token(TokenKind::Less)
        }
    }

    /// Lexes `>` or `>=`.
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_char('=') {
            self.make_token(TokenKind::GreaterEqual)
        } else {
            self.make_token(TokenKind::Greater)
        }
    }
}
