use crate::{
    ast::expressions::{AddOp, Expression, Factor, MulOp, RelOp, SimpleExpression, Term},
    errors::errors::Error,
};

use super::{
    interpreter::Interpreter,
    value::{truth, EPSILON},
};

pub fn eval_expression(interpreter: &mut Interpreter, expression: &Expression) -> Result<f64, Error> {
    let first = eval_simple_expression(interpreter, &expression.first)?;

    match &expression.relation {
        Some((operator, second)) => {
            let second = eval_simple_expression(interpreter, second)?;
            Ok(compare(*operator, first, second))
        }
        None => Ok(first),
    }
}

/// `<` is exact while `>`, `=` and `<>` allow for [`EPSILON`].
pub fn compare(operator: RelOp, lhs: f64, rhs: f64) -> f64 {
    let difference = lhs - rhs;

    truth(match operator {
        RelOp::LessThan => difference < 0.0,
        RelOp::GreaterThan => difference >= EPSILON,
        RelOp::EqualTo => difference.abs() <= EPSILON,
        RelOp::NotEqualTo => difference.abs() > EPSILON,
    })
}

pub fn eval_simple_expression(
    interpreter: &mut Interpreter,
    simple: &SimpleExpression,
) -> Result<f64, Error> {
    let mut result = eval_term(interpreter, &simple.first)?;

    for (operator, term) in &simple.rest {
        let value = eval_term(interpreter, term)?;
        result = match operator {
            AddOp::Plus => result + value,
            AddOp::Minus => result - value,
            AddOp::Or => {
                if result >= EPSILON {
                    1.0
                } else {
                    truth(value >= EPSILON)
                }
            }
        };
    }

    Ok(result)
}

pub fn eval_term(interpreter: &mut Interpreter, term: &Term) -> Result<f64, Error> {
    let mut result = eval_factor(interpreter, &term.first)?;

    for (operator, factor) in &term.rest {
        let value = eval_factor(interpreter, factor)?;
        result = match operator {
            MulOp::Multiply => result * value,
            MulOp::Divide => result / value,
            MulOp::And => truth(result >= EPSILON && value >= EPSILON),
        };
    }

    Ok(result)
}

pub fn eval_factor(interpreter: &mut Interpreter, factor: &Factor) -> Result<f64, Error> {
    match factor {
        Factor::FloatLiteral(value) | Factor::IntLiteral(value) => Ok(*value),
        Factor::Identifier(name) => interpreter.load(name),
        Factor::Minus(child) => Ok(-eval_factor(interpreter, child)?),
        Factor::Not(child) => Ok(truth(eval_factor(interpreter, child)? < EPSILON)),
        Factor::Grouping(expression) => eval_expression(interpreter, expression),
    }
}
