//! Non-interactive front ends: replaying a typed key sequence, and
//! one-shot evaluation reports.

use log::warn;
use serde::Serialize;

use crate::core::action::{Effect, update};
use crate::core::button::Button;
use crate::core::state::{Calculator, to_ascii};
use crate::core::validator::Rejection;
use crate::eval;

/// Presses every key in `keys` in order. Whitespace is skipped; characters
/// that map to no button are logged and skipped.
///
/// Returns the rejections met along the way, in order.
pub fn replay(calc: &mut Calculator, keys: &str) -> Vec<Rejection> {
    let mut rejections = Vec::new();
    for key in keys.chars().filter(|c| !c.is_whitespace()) {
        let Some(button) = Button::from_key(key) else {
            warn!("No button for key {key:?}, skipping");
            continue;
        };
        if let Effect::Rejected(r) = update(calc, button) {
            rejections.push(r);
        }
    }
    rejections
}

/// Outcome of `tally eval`, serializable for `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub expression: String,
    pub result: String,
    pub ok: bool,
}

/// Evaluates an expression that may still carry display glyphs.
pub fn eval_report(expression: &str) -> EvalReport {
    let ascii = to_ascii(expression);
    let (result, ok) = match eval::try_evaluate(&ascii) {
        Ok(value) => (eval::format_result(value), true),
        Err(e) => (e.to_string(), false),
    };
    EvalReport {
        expression: ascii,
        result,
        ok,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_replay_builds_and_evaluates() {
        let mut calc = Calculator::default();
        let rejections = replay(&mut calc, "12 x 3 =");
        assert!(rejections.is_empty());
        assert_eq!(calc.input, "12×3");
        assert_eq!(calc.result, "36");
    }

    #[test]
    fn test_replay_collects_rejections() {
        let mut calc = Calculator::default();
        let rejections = replay(&mut calc, "+5..");
        assert_eq!(
            rejections,
            vec![Rejection::OperatorNotAllowed, Rejection::DotNotAllowed]
        );
        assert_eq!(calc.input, "5.");
    }

    #[test]
    fn test_replay_skips_unknown_keys() {
        let mut calc = Calculator::default();
        replay(&mut calc, "1q2");
        assert_eq!(calc.input, "12");
    }

    #[test]
    fn test_eval_report_translates_glyphs() {
        let report = eval_report("6×7");
        assert_eq!(
            report,
            EvalReport {
                expression: "6*7".into(),
                result: "42".into(),
                ok: true,
            }
        );
    }

    #[test]
    fn test_eval_report_json() {
        let report = eval_report("1÷0");
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"expression":"1/0","result":"Cannot divide by zero","ok":false}"#
        );
    }
}
