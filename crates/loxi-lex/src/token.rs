//! Token definitions and the reserved-word table.

use std::fmt;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// The closed set of token tags produced by the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Single-character tokens.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One or two character tokens.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Keywords.
    And,
    Class,
    Else,
    False,
    For,
    Fun,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End marker: the sentinel final token of every scan.
    Eof,
}

/// Decoded literal payload, present only on string and number tokens.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Literal {
    /// Parsed value of a number token.
    Number(f64),
    /// Content of a string token, quotes stripped.
    Str(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{n}"),
            Literal::Str(s) => write!(f, "{s}"),
        }
    }
}

/// One classified unit of scanner output.
///
/// The lexeme is the exact slice of source text that produced the token,
/// with no normalization; it is empty only for the end marker. `line` is the
/// 1-based line of the lexeme's first character.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Token {
    /// Token tag.
    pub kind: TokenKind,
    /// The run of source characters that make up the token.
    pub lexeme: String,
    /// Decoded payload for string and number tokens.
    pub literal: Option<Literal>,
    /// Line number of the lexeme's first character (1-based).
    pub line: u32,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: String, literal: Option<Literal>, line: u32) -> Self {
        Self {
            kind,
            lexeme,
            literal,
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{:?} {:?} {}", self.kind, self.lexeme, literal),
            None => write!(f, "{:?} {:?}", self.kind, self.lexeme),
        }
    }
}

/// The reserved words of the language.
///
/// Built once on first use and read-only afterwards, so concurrent scans can
/// share it without synchronization.
static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

/// Looks up the keyword kind for an identifier lexeme, if it is reserved.
///
/// # Examples
///
/// ```
/// use loxi_lex::token::{keyword, TokenKind};
///
/// assert_eq!(keyword("var"), Some(TokenKind::Var));
/// assert_eq!(keyword("variable"), None);
/// ```
pub fn keyword(ident: &str) -> Option<TokenKind> {
    let table = KEYWORDS.get_or_init(|| {
        let mut map = FxHashMap::default();
        map.insert("and", TokenKind::And);
        map.insert("class", TokenKind::Class);
        map.insert("else", TokenKind::Else);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("fun", TokenKind::Fun);
        map.insert("if", TokenKind::If);
        map.insert("nil", TokenKind::Nil);
        map.insert("or", TokenKind::Or);
        map.insert("print", TokenKind::Print);
        map.insert("return", TokenKind::Return);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("true", TokenKind::True);
        map.insert("var", TokenKind::Var);
        map.insert("while", TokenKind::While);
        map
    });
    table.get(ident).copied()
}
