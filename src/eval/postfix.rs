//! Shunting-yard conversion and stack evaluation.
//!
//! ```text
//! tokens:   2  *  (  3  +  4  )
//! postfix:  2  3  4  +  *
//! ```
//!
//! `%` never waits on the operator stack. It goes straight to the output and
//! scales whatever value sits on top of the evaluation stack at that point,
//! so it binds tighter than any binary operator.

use super::EvalError;
use super::token::{BinaryOp, Token};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Postfix {
    Number(f64),
    Op(BinaryOp),
    Percent,
}

/// Operator stack entry.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Op(BinaryOp),
    Open,
}

pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Postfix>, EvalError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Pending> = Vec::new();

    for token in tokens {
        match *token {
            Token::Number(n) => output.push(Postfix::Number(n)),
            Token::Percent => output.push(Postfix::Percent),
            Token::Open => stack.push(Pending::Open),
            Token::Close => {
                while let Some(Pending::Op(op)) = stack.last().copied() {
                    stack.pop();
                    output.push(Postfix::Op(op));
                }
                // A `)` without a partner is dropped.
                if let Some(Pending::Open) = stack.last() {
                    stack.pop();
                }
            }
            Token::Op(incoming) => {
                while let Some(Pending::Op(top)) = stack.last().copied() {
                    if top.precedence() < incoming.precedence() {
                        break;
                    }
                    stack.pop();
                    output.push(Postfix::Op(top));
                }
                stack.push(Pending::Op(incoming));
            }
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Op(op) => output.push(Postfix::Op(op)),
            Pending::Open => return Err(EvalError::InvalidExpression),
        }
    }

    Ok(output)
}

/// Runs the postfix program. The program must leave exactly one value.
pub fn eval_postfix(program: &[Postfix]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for item in program {
        match *item {
            Postfix::Number(n) => stack.push(n),
            Postfix::Percent => {
                let value = stack.pop().ok_or(EvalError::InvalidExpression)?;
                stack.push(value / 100.0);
            }
            Postfix::Op(op) => {
                let (Some(b), Some(a)) = (stack.pop(), stack.pop()) else {
                    return Err(EvalError::InvalidExpression);
                };
                stack.push(op.apply(a, b)?);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(EvalError::InvalidExpression),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::token::tokenize;
    use pretty_assertions::assert_eq;

    fn postfix(expr: &str) -> Result<Vec<Postfix>, EvalError> {
        to_postfix(&tokenize(expr)?)
    }

    #[test]
    fn test_precedence_orders_output() {
        assert_eq!(
            postfix("1+2*3").unwrap(),
            vec![
                Postfix::Number(1.0),
                Postfix::Number(2.0),
                Postfix::Number(3.0),
                Postfix::Op(BinaryOp::Mul),
                Postfix::Op(BinaryOp::Add),
            ]
        );
    }

    #[test]
    fn test_same_precedence_is_left_associative() {
        assert_eq!(
            postfix("8-3-2").unwrap(),
            vec![
                Postfix::Number(8.0),
                Postfix::Number(3.0),
                Postfix::Op(BinaryOp::Sub),
                Postfix::Number(2.0),
                Postfix::Op(BinaryOp::Sub),
            ]
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            postfix("2*(3+4)").unwrap(),
            vec![
                Postfix::Number(2.0),
                Postfix::Number(3.0),
                Postfix::Number(4.0),
                Postfix::Op(BinaryOp::Add),
                Postfix::Op(BinaryOp::Mul),
            ]
        );
    }

    #[test]
    fn test_unclosed_group_is_invalid() {
        assert_eq!(postfix("2*(3+4"), Err(EvalError::InvalidExpression));
        assert_eq!(postfix("(-"), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_stray_close_is_dropped() {
        assert_eq!(postfix("2+3)").unwrap(), postfix("2+3").unwrap());
    }

    #[test]
    fn test_percent_goes_straight_to_output() {
        assert_eq!(
            postfix("2+50%").unwrap(),
            vec![
                Postfix::Number(2.0),
                Postfix::Number(50.0),
                Postfix::Percent,
                Postfix::Op(BinaryOp::Add),
            ]
        );
    }

    #[test]
    fn test_eval_needs_two_operands() {
        let program = [Postfix::Number(1.0), Postfix::Op(BinaryOp::Add)];
        assert_eq!(eval_postfix(&program), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_eval_needs_exactly_one_result() {
        assert_eq!(eval_postfix(&[]), Err(EvalError::InvalidExpression));
        let program = [Postfix::Number(1.0), Postfix::Number(2.0)];
        assert_eq!(eval_postfix(&program), Err(EvalError::InvalidExpression));
    }

    #[test]
    fn test_division_by_zero_short_circuits() {
        let program = [
            Postfix::Number(5.0),
            Postfix::Number(0.0),
            Postfix::Op(BinaryOp::Div),
            Postfix::Op(BinaryOp::Add),
        ];
        assert_eq!(eval_postfix(&program), Err(EvalError::DivisionByZero));
    }
}
