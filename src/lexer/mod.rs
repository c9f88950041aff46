//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts program text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered table of regex patterns
//! - Case-insensitive recognition of reserved words
//! - Integer, real and quoted string literals
//! - Line tracking for error reporting
//! - `{ ... }` comments and whitespace

pub mod lexer;
pub mod tokens;
