//! # Actions
//!
//! Every key press becomes a `Button`, and `update()` applies it to the
//! `Calculator`. No I/O here; adapters render the state and react to the
//! returned `Effect`.
//!
//! ```text
//! State + Button  →  update()  →  New State (+ Effect)
//! ```
//!
//! This makes everything testable: feed a sequence of presses, assert on the
//! two strings.

use log::{debug, info};

use crate::core::button::Button;
use crate::core::state::Calculator;
use crate::core::validator::{self, Rejection};
use crate::eval;

/// What a press did, beyond the new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// The input changed (or was cleared).
    Edited,
    /// The press was refused; the input is untouched.
    Rejected(Rejection),
    /// `=` replaced the result.
    Evaluated,
}

pub fn update(calc: &mut Calculator, button: Button) -> Effect {
    debug!("Button {button:?} on input {:?}", calc.input);

    let edit = match button {
        Button::Clear => {
            calc.clear();
            return Effect::Edited;
        }
        Button::Equals => {
            calc.result = eval::evaluate(&calc.expression());
            info!("Evaluated {:?} = {:?}", calc.input, calc.result);
            return Effect::Evaluated;
        }
        Button::Sign => Ok(validator::toggle_sign(&calc.input)),
        Button::Digit(d) => validator::append_digit(&calc.input, d, &calc.limits),
        Button::Operator(op) => validator::append_operator(&calc.input, op.glyph()),
        Button::Dot => validator::append_dot(&calc.input),
        Button::Percent => validator::append_percent(&calc.input),
        Button::Parenthesis => validator::press_parenthesis(&calc.input),
        Button::Delete => validator::delete_last(&calc.input),
    };

    match edit {
        Ok(input) => {
            calc.input = input;
            Effect::Edited
        }
        Err(rejection) => {
            debug!("Rejected {button:?}: {rejection}");
            Effect::Rejected(rejection)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::button::Operator;
    use pretty_assertions::assert_eq;

    fn press_all(calc: &mut Calculator, buttons: &[Button]) {
        for b in buttons {
            update(calc, *b);
        }
    }

    #[test]
    fn test_digits_and_operators_build_input() {
        let mut calc = Calculator::default();
        press_all(
            &mut calc,
            &[
                Button::Digit(1),
                Button::Digit(2),
                Button::Operator(Operator::Multiply),
                Button::Digit(3),
            ],
        );
        assert_eq!(calc.input, "12×3");
        assert!(calc.result.is_empty());
    }

    #[test]
    fn test_equals_uses_ascii_expression() {
        let mut calc = Calculator {
            input: "12×3÷4".into(),
            ..Default::default()
        };
        assert_eq!(update(&mut calc, Button::Equals), Effect::Evaluated);
        assert_eq!(calc.result, "9");
        assert_eq!(calc.input, "12×3÷4");
    }

    #[test]
    fn test_rejected_press_leaves_input() {
        let mut calc = Calculator {
            input: "7+".into(),
            ..Default::default()
        };
        let effect = update(&mut calc, Button::Operator(Operator::Minus));
        assert_eq!(effect, Effect::Rejected(Rejection::OperatorNotAllowed));
        assert_eq!(calc.input, "7+");
    }

    #[test]
    fn test_clear_resets_both_strings() {
        let mut calc = Calculator {
            input: "1÷0".into(),
            ..Default::default()
        };
        update(&mut calc, Button::Equals);
        assert_eq!(calc.result, "Cannot divide by zero");
        assert_eq!(update(&mut calc, Button::Clear), Effect::Edited);
        assert!(calc.input.is_empty());
        assert!(calc.result.is_empty());
        // Clearing an empty calculator is harmless
        assert_eq!(update(&mut calc, Button::Clear), Effect::Edited);
    }

    #[test]
    fn test_delete_on_empty_is_rejected() {
        let mut calc = Calculator::default();
        assert_eq!(
            update(&mut calc, Button::Delete),
            Effect::Rejected(Rejection::NothingToDelete)
        );
    }
}
