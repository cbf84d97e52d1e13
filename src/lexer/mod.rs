//! Lexical analysis module.
//!
//! This module contains the hand-written scanner that converts source
//! bytes into a stream of tokens. It handles:
//!
//! - Single-byte lookahead through a pushback-capable character source
//! - Recognition of keywords, identifiers, numeric literals, and operators
//! - Token position tracking for diagnostics
//! - Comments and whitespace handling

pub mod scanner;
pub mod source;
pub mod tokens;
