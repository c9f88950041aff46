use std::rc::Rc;

use super::{
    ast::{Block, Program, Stmt},
    expressions::{Expression, Factor, RelOp, SimpleExpression, Term},
    printer::print_tree,
    statements::{CompoundStmt, IfStmt, ReadStmt, WhileStmt, WriteOperand, WriteStmt},
};
use crate::{Position, Span};

fn span() -> Span {
    let position = Position::new(0, 1, Rc::new("test.pas".to_string()));
    Span {
        start: position.clone(),
        end: position,
    }
}

fn program(body: Vec<Stmt>) -> Program {
    Program {
        name: "t".to_string(),
        block: Block {
            compound: CompoundStmt { body, span: span() },
        },
        span: span(),
    }
}

#[test]
fn test_print_if_else_and_read() {
    let condition = Expression {
        first: SimpleExpression::from(Term::from(Factor::Identifier("n".to_string()))),
        relation: Some((
            RelOp::NotEqualTo,
            SimpleExpression::from(Term::from(Factor::IntLiteral(0.0))),
        )),
    };
    let tree = program(vec![
        Stmt::Read(ReadStmt {
            identifier: "n".to_string(),
            span: span(),
        }),
        Stmt::If(IfStmt {
            condition,
            then_body: Box::new(Stmt::Write(WriteStmt {
                operand: WriteOperand::Identifier("n".to_string()),
                span: span(),
            })),
            else_body: Some(Box::new(Stmt::Write(WriteStmt {
                operand: WriteOperand::Literal("zero".to_string()),
                span: span(),
            }))),
            span: span(),
        }),
    ]);

    let expected = "\
(program t
|  (block
|  |  (compound_stmt
|  |  |  (read_stmt ( n )
|  |  |  read_stmt)
|  |  |  (if_stmt
|  |  |  |  (expression
|  |  |  |  |  (simple_exp
|  |  |  |  |  |  (term
|  |  |  |  |  |  |  (factor ( IDENT: n )
|  |  |  |  |  |  |  factor)
|  |  |  |  |  |  term)
|  |  |  |  |  simple_exp)
|  |  |  |  |  <>
|  |  |  |  |  (simple_exp
|  |  |  |  |  |  (term
|  |  |  |  |  |  |  (factor ( INTLIT: 0 )
|  |  |  |  |  |  |  factor)
|  |  |  |  |  |  term)
|  |  |  |  |  simple_exp)
|  |  |  |  expression)
|  |  |  |  (then
|  |  |  |  |  (write_stmt ( n )
|  |  |  |  |  write_stmt)
|  |  |  |  then)
|  |  |  |  (else
|  |  |  |  |  (write_stmt ( 'zero' )
|  |  |  |  |  write_stmt)
|  |  |  |  else)
|  |  |  if_stmt)
|  |  compound_stmt)
|  block)
program)
";
    assert_eq!(print_tree(&tree), expected);
    assert_eq!(tree.to_string(), expected);
}

#[test]
fn test_print_while_with_not() {
    let tree = program(vec![Stmt::While(WhileStmt {
        condition: Factor::Not(Box::new(Factor::FloatLiteral(0.5))).into(),
        body: Box::new(Stmt::Compound(CompoundStmt {
            body: vec![],
            span: span(),
        })),
        span: span(),
    })]);

    let dump = print_tree(&tree);
    assert!(dump.contains("|  |  |  (while_stmt\n"));
    assert!(dump.contains("(factor ( NOT )\n"));
    assert!(dump.contains("(factor ( FLOATLIT: 0.5 )\n"));
    assert!(dump.contains("|  |  |  |  (compound_stmt\n|  |  |  |  compound_stmt)\n"));
    assert!(dump.contains("|  |  |  while_stmt)\n"));
}
