/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: Program, Block and the statement sum type
/// - expressions: The four precedence tiers of expressions and their operators
/// - statements: One struct per statement kind
/// - printer: Indented s-expression dump of a parsed program
pub mod ast;
pub mod expressions;
pub mod printer;
pub mod statements;

#[cfg(test)]
mod tests;
