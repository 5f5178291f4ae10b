//! # Expression Evaluator
//!
//! Turns a finished ASCII infix expression into a result string.
//!
//! ```text
//! "2*(3+4)"  →  tokenize  →  to_postfix  →  eval_postfix  →  format_result  →  "14"
//! ```
//!
//! The caller translates the display glyphs `×`/`÷` to `*`/`/` first.
//! Failures are values, not panics: [`evaluate`] renders them as the fixed
//! messages of [`EvalError`].
//!
//! ## Modules
//!
//! - [`token`]: lexing, including the unary-minus rule
//! - [`postfix`]: shunting-yard and the evaluation stack
//! - [`format`]: number rendering

pub mod format;
pub mod postfix;
pub mod token;

use std::fmt;

use log::{debug, trace};

pub use format::format_result;
pub use postfix::{Postfix, eval_postfix, to_postfix};
pub use token::{BinaryOp, Token, tokenize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    /// Operands missing, leftovers on the stack, an unclosed `(`, or a
    /// character outside the expression alphabet.
    InvalidExpression,
    DivisionByZero,
    /// The result is not a finite number.
    Overflow,
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::InvalidExpression => write!(f, "Invalid expression"),
            EvalError::DivisionByZero => write!(f, "Cannot divide by zero"),
            EvalError::Overflow => write!(f, "Result out of range"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates `expr` to its numeric value.
pub fn try_evaluate(expr: &str) -> Result<f64, EvalError> {
    let tokens = tokenize(expr)?;
    trace!("Tokens for {expr:?}: {tokens:?}");

    let program = to_postfix(&tokens)?;
    trace!("Postfix for {expr:?}: {program:?}");

    let value = eval_postfix(&program)?;
    if !value.is_finite() {
        return Err(EvalError::Overflow);
    }
    Ok(value)
}

/// Evaluates `expr` and renders either the number or the error message.
pub fn evaluate(expr: &str) -> String {
    match try_evaluate(expr) {
        Ok(value) => format_result(value),
        Err(e) => {
            debug!("Evaluation of {expr:?} failed: {e}");
            e.to_string()
        }
    }
}
