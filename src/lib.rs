//! Sepro - compiler front end for an artificial-chemistry rule language
//!
//! This crate re-exports all layers of the Sepro front end for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: sepro_language   - Lexer, parser, static model
//! Layer 0: sepro_foundation - Error types, persistent label sets
//! ```
//!
//! The [`Model`](language::Model) returned by [`compile`] is the complete
//! handoff to an execution engine.

pub use sepro_foundation as foundation;
pub use sepro_language as language;

pub use sepro_language::{CompilerConfig, Model, compile, compile_with};
