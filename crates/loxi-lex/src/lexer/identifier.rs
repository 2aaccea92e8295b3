//! Identifier and keyword lexing.

use crate::token::{keyword, Token, TokenKind};
use crate::Lexer;

/// Returns true if `c` can start an identifier.
#[inline]
pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Returns true if `c` can continue an identifier.
#[inline]
pub(crate) fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl<'a> Lexer<'a> {
    /// Lexes an identifier or keyword, starting at its first character.
    ///
    /// Consumes a maximal run of letters, digits, and underscores, then
    /// consults the reserved-word table; identifiers that match come out
    /// tagged as their keyword, everything else as a plain identifier.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start);
        match keyword(text) {
            Some(kind) => self.make_token(kind),
            None => self.make_token(TokenKind::Identifier),
        }
    }
}
