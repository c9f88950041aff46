//! Recursive-descent parser building the program tree.
//!
//! One function per grammar production, each deciding on a single token of
//! lookahead and never backtracking:
//!
//! ```text
//! program    := PROGRAM IDENT ';' block [ '.' ] EOF
//! block      := { [VAR] IDENT ':' (REAL|INTEGER) ';' } compound
//! compound   := BEGIN statement { ';' statement } END
//! statement  := compound | if | while | read | write | assignment
//! expression := simple_exp [ ('<'|'>'|'='|'<>') simple_exp ]
//! simple_exp := term { ('+'|'-'|OR) term }
//! term       := factor { ('*'|'/'|AND) factor }
//! factor     := FLOATLIT | INTLIT | IDENT | '(' expression ')' | NOT factor | '-' factor
//! ```
//!
//! Declarations are checked while parsing: `VAR` entries go straight into
//! the [`SymbolTable`](crate::symbols::symbol_table::SymbolTable) and every
//! identifier reference is rejected unless already declared. The first
//! error aborts the parse.
//!
//! Statement and factor productions are chosen through lookup tables keyed
//! on the lookahead token kind, filled in by
//! [`create_token_lookups`](lookups::create_token_lookups).

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
