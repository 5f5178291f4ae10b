//! Tokenizer for ASCII infix expressions.
//!
//! A `-` belongs to the number after it only at the start of the expression
//! or right after `(`, `+`, `-`, `*` or `/`. Everywhere else it is
//! subtraction.

use super::EvalError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Add | BinaryOp::Sub => 1,
            BinaryOp::Mul | BinaryOp::Div => 2,
        }
    }

    /// `a <op> b`, where `b` is the right-hand operand.
    pub fn apply(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            BinaryOp::Add => Ok(a + b),
            BinaryOp::Sub => Ok(a - b),
            BinaryOp::Mul => Ok(a * b),
            BinaryOp::Div if b == 0.0 => Err(EvalError::DivisionByZero),
            BinaryOp::Div => Ok(a / b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Number(f64),
    Op(BinaryOp),
    Open,
    Close,
    Percent,
}

/// Splits `expr` into tokens. Whitespace is dropped; any other character
/// outside the expression alphabet makes the whole expression invalid.
pub fn tokenize(expr: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> = expr.chars().filter(|c| !c.is_whitespace()).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let signed = c == '-'
            && chars.get(i + 1).is_some_and(char::is_ascii_digit)
            && sign_binds_to_number(tokens.last());

        if c.is_ascii_digit() || signed {
            let start = i;
            if signed {
                i += 1;
            }
            i = skip_digits(&chars, i);
            if chars.get(i) == Some(&'.') {
                i = skip_digits(&chars, i + 1);
            }
            let lexeme: String = chars[start..i].iter().collect();
            // "7." is a finished literal with nothing after the point
            let value = lexeme
                .trim_end_matches('.')
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidExpression)?;
            tokens.push(Token::Number(value));
            continue;
        }

        let token = match c {
            '+' => Token::Op(BinaryOp::Add),
            '-' => Token::Op(BinaryOp::Sub),
            '*' => Token::Op(BinaryOp::Mul),
            '/' => Token::Op(BinaryOp::Div),
            '(' => Token::Open,
            ')' => Token::Close,
            '%' => Token::Percent,
            _ => return Err(EvalError::InvalidExpression),
        };
        tokens.push(token);
        i += 1;
    }

    Ok(tokens)
}

fn sign_binds_to_number(previous: Option<&Token>) -> bool {
    matches!(previous, None | Some(Token::Open) | Some(Token::Op(_)))
}

fn skip_digits(chars: &[char], mut i: usize) -> usize {
    while chars.get(i).is_some_and(char::is_ascii_digit) {
        i += 1;
    }
    i
}
