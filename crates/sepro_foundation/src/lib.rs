//! Core error types and persistent collections for Sepro.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with position and source context
//! - [`LabelSet`] - Persistent, deduplicated set of tag and slot names

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;

pub use collections::LabelSet;
pub use error::{Error, ErrorContext, ErrorKind};

/// Result type alias using Sepro's error type.
pub type Result<T> = std::result::Result<T, Error>;
