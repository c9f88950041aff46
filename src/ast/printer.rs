//! Debug dump of a parsed program.
//!
//! Every node becomes a labelled block opened with `(label` and closed with
//! `label)` on its own line, children indented one `"|  "` per level:
//!
//! ```text
//! (program demo
//! |  (block
//! |  |  (compound_stmt
//! |  |  |  (write_stmt ( 'hi' )
//! |  |  |  write_stmt)
//! |  |  compound_stmt)
//! |  block)
//! program)
//! ```

use std::fmt::Display;

use crate::interpreter::value::format_value;

use super::{
    ast::{Block, Program, Stmt},
    expressions::{Expression, Factor, SimpleExpression, Term},
    statements::{CompoundStmt, WriteOperand},
};

const INDENT: &str = "|  ";

struct TreePrinter {
    out: String,
    depth: usize,
}

impl TreePrinter {
    fn line(&mut self, text: impl Display) {
        self.out.push_str(&INDENT.repeat(self.depth));
        self.out.push_str(&text.to_string());
        self.out.push('\n');
    }

    fn open(&mut self, label: impl Display) {
        self.line(format_args!("({}", label));
        self.depth += 1;
    }

    fn close(&mut self, label: &str) {
        self.depth -= 1;
        self.line(format_args!("{})", label));
    }

    fn program(&mut self, program: &Program) {
        self.open(format_args!("program {}", program.name));
        self.block(&program.block);
        self.close("program");
    }

    fn block(&mut self, block: &Block) {
        self.open("block");
        self.compound(&block.compound);
        self.close("block");
    }

    fn compound(&mut self, compound: &CompoundStmt) {
        self.open("compound_stmt");
        for stmt in &compound.body {
            self.stmt(stmt);
        }
        self.close("compound_stmt");
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Compound(compound) => self.compound(compound),
            Stmt::Write(write) => {
                match &write.operand {
                    WriteOperand::Identifier(name) => self.open(format_args!("write_stmt ( {} )", name)),
                    WriteOperand::Literal(text) => self.open(format_args!("write_stmt ( '{}' )", text)),
                }
                self.close("write_stmt");
            }
            Stmt::Read(read) => {
                self.open(format_args!("read_stmt ( {} )", read.identifier));
                self.close("read_stmt");
            }
            Stmt::Assignment(assignment) => {
                self.open(format_args!("assignment_stmt ( {} := )", assignment.identifier));
                self.expression(&assignment.value);
                self.close("assignment_stmt");
            }
            Stmt::If(if_stmt) => {
                self.open("if_stmt");
                self.expression(&if_stmt.condition);
                self.open("then");
                self.stmt(&if_stmt.then_body);
                self.close("then");
                if let Some(else_body) = &if_stmt.else_body {
                    self.open("else");
                    self.stmt(else_body);
                    self.close("else");
                }
                self.close("if_stmt");
            }
            Stmt::While(while_stmt) => {
                self.open("while_stmt");
                self.expression(&while_stmt.condition);
                self.stmt(&while_stmt.body);
                self.close("while_stmt");
            }
        }
    }

    fn expression(&mut self, expression: &Expression) {
        self.open("expression");
        self.simple_expression(&expression.first);
        if let Some((operator, second)) = &expression.relation {
            self.line(operator);
            self.simple_expression(second);
        }
        self.close("expression");
    }

    fn simple_expression(&mut self, simple: &SimpleExpression) {
        self.open("simple_exp");
        self.term(&simple.first);
        for (operator, term) in &simple.rest {
            self.line(operator);
            self.term(term);
        }
        self.close("simple_exp");
    }

    fn term(&mut self, term: &Term) {
        self.open("term");
        self.factor(&term.first);
        for (operator, factor) in &term.rest {
            self.line(operator);
            self.factor(factor);
        }
        self.close("term");
    }

    fn factor(&mut self, factor: &Factor) {
        match factor {
            Factor::FloatLiteral(value) => self.open(format_args!("factor ( FLOATLIT: {} )", format_value(*value))),
            Factor::IntLiteral(value) => self.open(format_args!("factor ( INTLIT: {} )", value)),
            Factor::Identifier(name) => self.open(format_args!("factor ( IDENT: {} )", name)),
            Factor::Minus(child) => {
                self.open("factor ( - )");
                self.factor(child);
            }
            Factor::Not(child) => {
                self.open("factor ( NOT )");
                self.factor(child);
            }
            Factor::Grouping(expression) => {
                self.open("factor (");
                self.expression(expression);
                self.line(")");
            }
        }
        self.close("factor");
    }
}

/// Renders `program` as an indented tree, one node label per line.
pub fn print_tree(program: &Program) -> String {
    let mut printer = TreePrinter {
        out: String::new(),
        depth: 0,
    };
    printer.program(program);
    printer.out
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", print_tree(self))
    }
}
