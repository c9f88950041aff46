//! Tree-walking interpreter.
//!
//! Executes a parsed [`Program`](crate::ast::ast::Program) directly, reading
//! and writing variables in the
//! [`SymbolTable`](crate::symbols::symbol_table::SymbolTable) the parser
//! filled in. Every statement and expression evaluates to an `f64`; truth is
//! `1.0` or `0.0` and comparisons use an absolute tolerance of
//! [`EPSILON`](value::EPSILON).
//!
//! - `AND` and `OR` always evaluate both operands
//! - `IF` takes its THEN branch when the condition exceeds `EPSILON`
//! - `WHILE` keeps looping only while its condition is exactly `1.0`
//!
//! `READ` and `WRITE` go through the reader and writer handed to the
//! interpreter, so programs can run against in-memory buffers.

pub mod expr;
pub mod interpreter;
pub mod stmt;
pub mod value;
