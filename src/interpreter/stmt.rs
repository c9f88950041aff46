use crate::{
    ast::{
        ast::Stmt,
        statements::{CompoundStmt, WriteOperand},
    },
    errors::errors::{Error, ErrorImpl},
};

use super::{
    expr::eval_expression,
    interpreter::Interpreter,
    value::{format_value, is_exactly_true, EPSILON},
};

pub fn eval_statement(interpreter: &mut Interpreter, statement: &Stmt) -> Result<f64, Error> {
    interpreter.set_position(statement.get_span().start.clone());

    match statement {
        Stmt::Compound(compound) => eval_compound(interpreter, compound),
        Stmt::Write(write) => {
            let text = match &write.operand {
                WriteOperand::Identifier(name) => format_value(interpreter.load(name)?),
                WriteOperand::Literal(text) => text.clone(),
            };

            interpreter.write_line(&text)?;
            Ok(0.0)
        }
        Stmt::Read(read) => {
            let word = interpreter.read_word()?;
            let Ok(value) = word.parse::<f64>() else {
                return Err(Error::with_lexeme(
                    ErrorImpl::InvalidInput { token: word.clone() },
                    interpreter.get_position().clone(),
                    word,
                ));
            };

            interpreter.store(&read.identifier, value)
        }
        Stmt::Assignment(assignment) => {
            let value = eval_expression(interpreter, &assignment.value)?;
            interpreter.store(&assignment.identifier, value)
        }
        Stmt::If(if_stmt) => {
            if eval_expression(interpreter, &if_stmt.condition)? > EPSILON {
                eval_statement(interpreter, &if_stmt.then_body)
            } else if let Some(else_body) = &if_stmt.else_body {
                eval_statement(interpreter, else_body)
            } else {
                Ok(0.0)
            }
        }
        Stmt::While(while_stmt) => {
            let mut result = 0.0;
            while is_exactly_true(eval_expression(interpreter, &while_stmt.condition)?) {
                result = eval_statement(interpreter, &while_stmt.body)?;
            }

            Ok(result)
        }
    }
}

/// Runs each statement in order, returning the last one's value.
pub fn eval_compound(interpreter: &mut Interpreter, compound: &CompoundStmt) -> Result<f64, Error> {
    let mut result = 0.0;
    for statement in &compound.body {
        result = eval_statement(interpreter, statement)?;
    }

    Ok(result)
}
