//! The program's single, flat symbol scope.
//!
//! The parser inserts every `VAR` declaration here and rejects references
//! to names it does not hold; the interpreter then reads and writes the
//! stored values. Names are unique and never removed.

pub mod symbol_table;
