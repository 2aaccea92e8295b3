//! Whitespace and comment skipping.

use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Skips whitespace and `//` line comments.
    ///
    /// Called before dispatching each token. Neither produces a token; the
    /// cursor's line counter advances as the newlines are consumed. A lone
    /// `/` is left in place for the dispatch loop.
    pub(crate) fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current_char() {
                ' ' | '\t' | '\r' | '\n' => {
                    self.cursor.advance();
                },
                '/' if self.cursor.peek_char(1) == '/' => {
                    self.skip_line_comment();
                },
                _ => return,
            }
        }
    }

    /// Skips a line comment up to, but not including, the newline.
    fn skip_line_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();

        while !self.cursor.is_at_end() && self.cursor.current_char() != '\n' {
            self.cursor.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::TokenKind;
    use crate::Lexer;
    use loxi_util::Handler;

    #[test]
    fn test_skip_whitespace() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("   \t  hello", &handler);
        assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
    }

    #[test]
    fn test_line_comment_produces_no_token() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("// comment", &handler).map(|t| t.kind).collect();
        assert!(kinds.is_empty());
    }

    #[test]
    fn test_comment_runs_to_end_of_line_only() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("// comment\n1", &handler);
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_comment_at_end_of_line_of_code() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("1 + 2 // sum", &handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Plus, TokenKind::Number]
        );
    }

    #[test]
    fn test_lone_slash_is_division() {
        let handler = Handler::new();
        let kinds: Vec<_> = Lexer::new("1 / 2", &handler).map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Number, TokenKind::Slash, TokenKind::Number]
        );
    }
}
