//! Lexer for the Sepro language.
//!
//! The lexer is pull-based: every call to [`Lexer::next_token`] scans one
//! token from the remaining source. Keywords are matched case-insensitively
//! against the set the lexer was built with; identifiers keep their case.

use std::collections::HashSet;

use crate::position::TextPosition;
use crate::token::{Token, TokenKind};

/// Single-character operators.
pub const OPERATORS: [char; 7] = ['.', ',', '*', '=', '(', ')', ':'];

/// Lexer for Sepro source code.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Position of the scan cursor.
    pos: TextPosition,
    /// Uppercased reserved words.
    keywords: HashSet<String>,
    /// The token produced by the last call to `next_token`.
    current: Option<Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source and keyword list.
    ///
    /// Keywords may be given in any case.
    #[must_use]
    pub fn new<K>(source: &'src str, keywords: K) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            source,
            rest: source,
            pos: TextPosition::at_start(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_uppercase())
                .collect(),
            current: None,
        }
    }

    /// Tokenizes `source` up to and including the first empty or error token.
    #[must_use]
    pub fn tokenize<K>(source: &'src str, keywords: K) -> Vec<Token>
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Lexer::new(source, keywords).tokenize_all()
    }

    /// Returns the token produced by the last call to `next_token`.
    #[must_use]
    pub fn current_token(&self) -> Option<&Token> {
        self.current.as_ref()
    }

    /// Returns the position of the scan cursor.
    #[must_use]
    pub fn position(&self) -> TextPosition {
        self.pos
    }

    /// Returns the next token from the source.
    ///
    /// Once an empty or error token has been produced, the same token is
    /// returned on every further call.
    pub fn next_token(&mut self) -> Token {
        if let Some(token) = &self.current {
            if token.is_terminal() {
                return token.clone();
            }
        }
        let token = self.scan_token();
        self.current = Some(token.clone());
        token
    }

    /// Drains the stream into a list, stopping after the first empty or
    /// error token (inclusive).
    pub fn tokenize_all(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_terminal();
            tokens.push(token);
            if done {
                break;
            }
        }
        tokens
    }

    fn scan_token(&mut self) -> Token {
        self.skip_trivia();

        let start = self.pos;
        let Some(c) = self.peek_char() else {
            return Token::empty(start);
        };

        if c.is_ascii_digit() {
            self.scan_number(start)
        } else if is_identifier_start(c) {
            self.scan_identifier(start)
        } else if c == '"' {
            self.scan_string(start)
        } else if OPERATORS.contains(&c) {
            self.advance();
            Token::new(TokenKind::Operator, self.text_from(start), start)
        } else {
            self.advance();
            self.error(format!("unexpected character '{c}'"), start)
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.rest = &self.rest[c.len_utf8()..];
            self.pos = self.pos.advanced(c);
        }
    }

    /// Skips whitespace and `#` line comments.
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.advance();
            } else if c == '#' {
                while let Some(c) = self.peek_char() {
                    self.advance();
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Source text scanned since `start`.
    fn text_from(&self, start: TextPosition) -> &'src str {
        &self.source[start.offset..self.pos.offset]
    }

    fn error(&self, message: impl Into<String>, start: TextPosition) -> Token {
        Token::new(TokenKind::Error(message.into()), self.text_from(start), start)
    }

    /// Scans a decimal integer literal.
    fn scan_number(&mut self, start: TextPosition) -> Token {
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        match self.peek_char() {
            Some(c) if is_identifier_start(c) => {
                self.advance();
                self.error("invalid character in number", start)
            }
            _ => Token::new(TokenKind::IntLiteral, self.text_from(start), start),
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self, start: TextPosition) -> Token {
        while self.peek_char().is_some_and(is_identifier_char) {
            self.advance();
        }
        let text = self.text_from(start);
        let upper = text.to_uppercase();
        if self.keywords.contains(&upper) {
            Token::new(TokenKind::Keyword, upper, start)
        } else {
            Token::new(TokenKind::Identifier, text, start)
        }
    }

    /// Scans a string literal, plain or triple-quoted.
    fn scan_string(&mut self, start: TextPosition) -> Token {
        self.advance(); // consume opening '"'
        let triple = self.rest.starts_with("\"\"");
        if triple {
            self.advance();
            self.advance();
        }
        let content_start = self.pos.offset;

        loop {
            if triple && self.rest.starts_with("\"\"\"") {
                let content = &self.source[content_start..self.pos.offset];
                for _ in 0..3 {
                    self.advance();
                }
                return Token::new(TokenKind::StringLiteral, content, start);
            }
            match self.peek_char() {
                Some('"') if !triple => {
                    let content = &self.source[content_start..self.pos.offset];
                    self.advance();
                    return Token::new(TokenKind::StringLiteral, content, start);
                }
                Some('\\') => {
                    self.advance();
                    if self.peek_char().is_none() {
                        break;
                    }
                    self.advance();
                }
                Some(_) => self.advance(),
                None => break,
            }
        }
        self.error("unexpected end of input in a string", start)
    }
}

/// Returns true if `c` can start an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can appear in an identifier after the first character.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
