//! String literal lexing.

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;
use loxi_util::Span;

impl<'a> Lexer<'a> {
    /// Lexes a string literal, starting at the opening `"`.
    ///
    /// Strings may span lines; the cursor bumps the line counter on every
    /// embedded newline. Exactly one token results per well-formed literal,
    /// emitted after the closing quote is consumed: its lexeme includes both
    /// quotes and its literal value is the text strictly between them. The
    /// language has no escape sequences, so the content is taken verbatim.
    ///
    /// If input runs out before a closing quote, an "Unterminated string."
    /// error is reported at the line where the scan ended and no token is
    /// emitted.
    pub(crate) fn lex_string(&mut self) -> Option<Token> {
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '"' {
            self.cursor.advance();
        }

        if self.cursor.is_at_end() {
            let span = Span::new(
                self.token_start,
                self.cursor.position(),
                self.cursor.line(),
                self.cursor.column(),
            );
            self.handler.error("Unterminated string.", span);
            return None;
        }

        self.cursor.advance();

        let lexeme = self.cursor.slice_from(self.token_start);
        let value = lexeme[1..lexeme.len() - 1].to_owned();
        Some(self.make_literal_token(TokenKind::String, Literal::Str(value)))
    }
}
