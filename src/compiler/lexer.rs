use std::fmt;

use logos::Logos;
use tracing::{debug, warn};

/// The closed set of token categories produced by the lexer.
///
/// Whitespace is skipped and never becomes a token. Every other character
/// lands in exactly one category; anything unrecognised becomes
/// [`TokenKind::Unknown`] so that scanning never aborts.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\n\f\x0B]+")]
pub enum TokenKind {
    /// A run of ASCII letters other than a keyword, such as `x` or `total`.
    #[regex(r"[a-zA-Z]+", priority = 3)]
    Identifier,
    /// `let`
    #[token("let")]
    Keyword,
    /// A run of decimal digits, such as `42`.
    #[regex(r"[0-9]+", priority = 3)]
    Integer,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Any other single non-whitespace character.
    #[regex(r"[^ \t\r\n\f\x0B]", priority = 1)]
    Unknown,
}

impl TokenKind {
    /// Upper-case name used in token listings, e.g. `KEYWORD`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "IDENTIFIER",
            Self::Keyword => "KEYWORD",
            Self::Integer => "INTEGER",
            Self::Assign => "ASSIGN",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Star => "STAR",
            Self::Slash => "SLASH",
            Self::LParen => "LPAREN",
            Self::RParen => "RPAREN",
            Self::Semicolon => "SEMICOLON",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: its category, its exact source text and where it was
/// found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token category.
    pub kind:   TokenKind,
    /// The source text of the token.
    pub lexeme: String,
    /// 1-based source line.
    pub line:   usize,
    /// Byte offset of the first character.
    pub offset: usize,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, offset: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line,
               offset }
    }

    /// Whether this token is the given keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == keyword
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.lexeme)
    }
}

/// Splits the source into tokens.
///
/// The scan is total: characters no rule recognises come back as
/// [`TokenKind::Unknown`] tokens holding that single character, and scanning
/// carries on after them.
///
/// # Example
/// ```
/// use letc::compiler::lexer::{TokenKind, tokenize};
///
/// let kinds: Vec<_> = tokenize("let x = 4 / 2;").into_iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::Keyword,
///             TokenKind::Identifier,
///             TokenKind::Assign,
///             TokenKind::Integer,
///             TokenKind::Slash,
///             TokenKind::Integer,
///             TokenKind::Semicolon]);
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut line = 1;
    let mut scanned = 0;

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        line += source[scanned..span.start].matches('\n').count();
        scanned = span.start;

        let kind = result.unwrap_or(TokenKind::Unknown);
        if kind == TokenKind::Unknown {
            warn!(line, offset = span.start, lexeme = lexer.slice(), "unrecognised character");
        }
        tokens.push(Token::new(kind, lexer.slice(), line, span.start));
    }

    debug!(count = tokens.len(), lines = line, "tokenized source");
    tokens
}

/// Renders a token listing, one token per line as `<index> <KIND> <lexeme>`
/// with 1-based indices.
#[must_use]
pub fn render_tokens(tokens: &[Token]) -> String {
    tokens.iter()
          .enumerate()
          .map(|(i, token)| format!("{} {token}\n", i + 1))
          .collect()
}
