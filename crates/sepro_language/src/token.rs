//! Token types for the Sepro language.
//!
//! Tokens are the output of the lexer and input to the parser.

use crate::position::TextPosition;

/// A token from lexical analysis.
///
/// Equality compares kind and text; the position is ignored.
#[derive(Clone, Debug)]
pub struct Token {
    /// The type of this token.
    pub kind: TokenKind,
    /// Source text of the token. Keywords are uppercased, string literals
    /// hold the raw text between their delimiters.
    pub text: String,
    /// Position where this token starts.
    pub pos: TextPosition,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, pos: TextPosition) -> Self {
        Self {
            kind,
            text: text.into(),
            pos,
        }
    }

    /// Creates an end-of-input token.
    #[must_use]
    pub fn empty(pos: TextPosition) -> Self {
        Self::new(TokenKind::Empty, "", pos)
    }

    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, TokenKind::Empty)
    }

    /// Returns true if this is an error token.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, TokenKind::Error(_))
    }

    /// Returns true if the lexer stops after producing this token.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_empty() || self.is_error()
    }

    /// Returns true if this is the given (uppercase) keyword.
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.text == keyword
    }

    /// Returns true if this is the given single-character operator.
    #[must_use]
    pub fn is_operator(&self, operator: char) -> bool {
        self.kind == TokenKind::Operator && self.text.len() == 1 && self.text.starts_with(operator)
    }

    /// Returns the value of an integer literal.
    ///
    /// Returns `None` for other kinds or when the literal overflows `i64`.
    #[must_use]
    pub fn int_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::IntLiteral => self.text.parse().ok(),
            _ => None,
        }
    }

    /// Returns the content of a string literal with escapes resolved.
    #[must_use]
    pub fn string_value(&self) -> Option<String> {
        match self.kind {
            TokenKind::StringLiteral => Some(unescape(&self.text)),
            _ => None,
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            TokenKind::Empty => f.write_str("end of input"),
            TokenKind::Error(message) => write!(f, "error ({message})"),
            kind => write!(f, "{} '{}'", kind.name(), self.text),
        }
    }
}

/// Token types for the Sepro language.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input
    Empty,
    /// Lexer error with its message
    Error(String),
    /// Identifier like `open` or `Link2`
    Identifier,
    /// Reserved word, stored uppercased
    Keyword,
    /// Decimal integer like `42`
    IntLiteral,
    /// `"..."` or `"""..."""`
    StringLiteral,
    /// One of `. , * = ( ) :`
    Operator,
}

impl TokenKind {
    /// Compares variants only; error messages are ignored.
    #[must_use]
    pub fn same_kind(&self, other: &Self) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "end of input",
            Self::Error(_) => "error",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::IntLiteral => "integer",
            Self::StringLiteral => "string",
            Self::Operator => "operator",
        }
    }
}

/// Resolves backslash escapes in raw string literal text.
fn unescape(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            text.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => text.push('\n'),
            Some('t') => text.push('\t'),
            Some('r') => text.push('\r'),
            Some(other) => text.push(other),
            None => text.push('\\'),
        }
    }
    text
}
