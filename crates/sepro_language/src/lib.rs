//! Lexer, parser, and static model for the Sepro rule language.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of Sepro source
//! - [`Parser`] - Recursive-descent parsing of tokens into a [`Model`]
//! - [`Model`] - Concepts, actuators, and worlds handed to an execution engine
//!
//! ```
//! let model = sepro_language::compile("CONCEPT link SLOT next WHERE ALL DO NOTHING").unwrap();
//! assert_eq!(model.concepts.len(), 1);
//! assert_eq!(model.actuators.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod lexer;
pub mod model;
pub mod parser;
pub mod position;
pub mod token;


pub use config::CompilerConfig;
pub use lexer::{Lexer, OPERATORS};
pub use model::{
    Action, Actuator, BindAction, Concept, Model, ObjectContextType, Predicate, SlotPath,
    TagSetPredicate, TagsAction, World, WorldBinding, WorldObject,
};
pub use parser::{KEYWORDS, Parser};
pub use position::TextPosition;
pub use token::{Token, TokenKind};

use sepro_foundation::Result;

/// Compiles source text into a model.
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
pub fn compile(source: &str) -> Result<Model> {
    Parser::new(source).compile()
}

/// Compiles source text into a model with explicit options.
///
/// # Errors
/// Returns the first lexical or syntax error encountered.
pub fn compile_with(source: &str, config: &CompilerConfig) -> Result<Model> {
    Parser::with_config(source, config.clone()).compile()
}
