//! Error types for the Sepro compiler.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! A compile pass produces at most one [`Error`]; its rendering is the
//! human-readable diagnostic handed back to the caller.

use std::fmt;

use thiserror::Error;

/// The main error type for Sepro operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a lexical error from a message produced by the lexer.
    #[must_use]
    pub fn lexical(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Lexical {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Creates a syntax error.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32, context: String) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            context,
        })
    }

    /// Returns the bare failure reason, without position or source text.
    #[must_use]
    pub fn message(&self) -> &str {
        match &self.kind {
            ErrorKind::Lexical { message, .. } | ErrorKind::Syntax { message, .. } => message,
        }
    }

    /// Returns the 1-based line where the error occurred.
    #[must_use]
    pub fn line(&self) -> u32 {
        match &self.kind {
            ErrorKind::Lexical { line, .. } | ErrorKind::Syntax { line, .. } => *line,
        }
    }

    /// Returns the 1-based column where the error occurred.
    #[must_use]
    pub fn column(&self) -> u32 {
        match &self.kind {
            ErrorKind::Lexical { column, .. } | ErrorKind::Syntax { column, .. } => *column,
        }
    }

    /// Returns true if the error came from the lexer.
    #[must_use]
    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, ErrorKind::Lexical { .. })
    }

    /// Returns true if the error came from the parser.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(self.kind, ErrorKind::Syntax { .. })
    }

    /// Renders the complete diagnostic, prefixed with the source name if known.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        match self.context.as_ref().and_then(|ctx| ctx.source.as_deref()) {
            Some(source) => format!("{source}: {}", self.kind),
            None => self.kind.to_string(),
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The lexer produced an error token.
    #[error("lexical error at {line}:{column}: {message}\n  | {context}")]
    Lexical {
        /// The lexer's message, unchanged.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// An expected keyword, identifier, or operator was not found.
    #[error("syntax error at {line}:{column}: {message}\n  | {context}")]
    Syntax {
        /// Description of what was expected and what was found.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },
}

/// Context about where an error occurred.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorContext {
    /// Source file or buffer label.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<u32>,
    /// Column number in source.
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        Ok(())
    }
}
