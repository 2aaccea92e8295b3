//! Number literal lexing.

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal, starting at its first digit.
    ///
    /// Consumes a maximal run of digits, then a fractional part only when a
    /// `.` is immediately followed by another digit. A trailing `.` with no
    /// digit after it is left for the dispatch loop to classify on the next
    /// cycle. No sign handling and no exponent notation.
    pub(crate) fn lex_number(&mut self) -> Token {
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            while self.cursor.current_char().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        // A lexeme of this shape always parses as f64.
        let value = self
            .cursor
            .slice_from(self.token_start)
            .parse()
            .unwrap_or(0.0);
        self.make_literal_token(TokenKind::Number, Literal::Number(value))
    }
}
