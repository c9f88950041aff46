//! Error types and error handling.
//!
//! This module defines the single error type used by every phase. It
//! includes:
//!
//! - Error structures with source position and offending lexeme
//! - The numeric catalog of syntax diagnostics
//! - Specific error variants for lexing, parsing and execution
//! - Helpful error tips

pub mod errors;

#[cfg(test)]
mod tests;
