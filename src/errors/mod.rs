//! Error types and error handling for the front end.
//!
//! This module defines the diagnostic types used by the lexer and parser.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each diagnostic class
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
