//! Integration tests for Layer 1: Language
//!
//! Tests for lexer, parser, and the compiled model.

mod lexer;
mod worlds;
