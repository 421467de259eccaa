//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - One-character-at-a-time scanning with a single char of lookahead
//! - Recognition of keywords, identifiers, literals, and operators
//! - Token position tracking for error reporting
//! - Whitespace handling

pub mod lexer;
pub mod tokens;
