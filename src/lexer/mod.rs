//! Lexical analysis module.
//!
//! This module contains the scanner that converts Lox source code into a
//! flat stream of tokens. It handles:
//!
//! - Single and double character operators
//! - Number, string and identifier literals, and reserved keywords
//! - Line tracking for diagnostics
//! - Line comments, block comments and whitespace

pub mod lexer;
pub mod tokens;
