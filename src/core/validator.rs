//! # Input Validator
//!
//! Decides whether a button press may touch the input buffer, and if so what
//! the buffer becomes. Every function here is a pure function of the buffer
//! it is given: nothing is stored between calls, the caller owns the string.
//!
//! The buffer uses display glyphs (`×`, `÷`). A negated number is written as
//! an unclosed group, `(-7`, so the evaluator sees an ordinary signed literal.

use std::fmt;

/// Binary operators as they appear in the buffer.
const OPERATORS: [char; 4] = ['+', '-', '×', '÷'];

/// Prefix that opens a negated group.
const NEGATION: &str = "(-";

/// Length caps on the number currently being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Characters (digits and the point) one number may reach.
    pub max_number_len: usize,
    /// Digits one number may carry after its point.
    pub max_fraction_len: usize,
}

pub const DEFAULT_MAX_NUMBER_LEN: usize = 15;
pub const DEFAULT_MAX_FRACTION_LEN: usize = 10;

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_number_len: DEFAULT_MAX_NUMBER_LEN,
            max_fraction_len: DEFAULT_MAX_FRACTION_LEN,
        }
    }
}

/// Why a press left the buffer untouched.
///
/// These are not errors. The adapter may show the text as a passing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OperatorNotAllowed,
    DotNotAllowed,
    ParenthesisNotAllowed,
    PercentNotAllowed,
    /// A lone `0` may not grow into `00`.
    LeadingZero,
    TooManyDigits { max: usize },
    TooManyFractionDigits { max: usize },
    NothingToDelete,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::OperatorNotAllowed => write!(f, "an operator cannot go here"),
            Rejection::DotNotAllowed => write!(f, "a decimal point cannot go here"),
            Rejection::ParenthesisNotAllowed => write!(f, "a parenthesis cannot go here"),
            Rejection::PercentNotAllowed => write!(f, "% must follow a number or )"),
            Rejection::LeadingZero => write!(f, "a number cannot start with 00"),
            Rejection::TooManyDigits { max } => write!(f, "enter at most {max} digits"),
            Rejection::TooManyFractionDigits { max } => {
                write!(f, "enter at most {max} digits after the decimal point")
            }
            Rejection::NothingToDelete => write!(f, "nothing to delete"),
        }
    }
}

impl std::error::Error for Rejection {}

fn is_operator(c: char) -> bool {
    OPERATORS.contains(&c)
}

fn is_operator_or_open(c: char) -> bool {
    is_operator(c) || c == '('
}

fn last_char(buf: &str) -> Option<char> {
    buf.chars().next_back()
}

// ============================================================================
// Predicates
// ============================================================================

/// An operator needs a left operand: not first, not after another operator,
/// a dangling `.` or an open parenthesis.
pub fn can_append_operator(buf: &str) -> bool {
    match last_char(buf) {
        None => false,
        Some(c) => !(is_operator_or_open(c) || c == '.'),
    }
}

/// At most one point per number, and never straight after an operator or `(`.
pub fn can_append_dot(buf: &str) -> bool {
    match last_char(buf) {
        None => false,
        Some(c) if is_operator_or_open(c) => false,
        Some(_) => {
            let run: String = buf
                .chars()
                .rev()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            !run.contains('.')
        }
    }
}

pub fn can_append_parenthesis(buf: &str, opening: bool) -> bool {
    let last = last_char(buf);
    if opening {
        match last {
            None => true,
            Some(c) => c.is_ascii_digit() || is_operator_or_open(c),
        }
    } else {
        match last {
            None => false,
            Some(c) => open_count(buf) > close_count(buf) && !is_operator_or_open(c),
        }
    }
}

pub fn can_append_percent(buf: &str) -> bool {
    matches!(last_char(buf), Some(c) if c.is_ascii_digit() || c == ')')
}

/// Direction of a Parenthesis press: open when every group is closed or
/// when the buffer waits for an operand.
pub fn opens_group(buf: &str) -> bool {
    open_count(buf) == close_count(buf) || last_char(buf).is_some_and(is_operator_or_open)
}

fn open_count(buf: &str) -> usize {
    buf.matches('(').count()
}

fn close_count(buf: &str) -> usize {
    buf.matches(')').count()
}

// ============================================================================
// Transformations
// ============================================================================

/// The Sign key. Toggles the number at the end of the buffer between plain
/// and `(-` form, or opens/cancels an empty negation.
pub fn toggle_sign(buf: &str) -> String {
    if buf.is_empty() {
        return NEGATION.to_string();
    }

    if let Some(rest) = buf.strip_suffix(NEGATION) {
        return rest.to_string();
    }

    if let Some(start) = trailing_number_start(buf) {
        let (head, number) = buf.split_at(start);
        return match head.strip_suffix(NEGATION) {
            Some(prefix) => format!("{prefix}{number}"),
            None => format!("{head}{NEGATION}{number}"),
        };
    }

    if last_char(buf).is_some_and(is_operator_or_open) {
        return format!("{buf}{NEGATION}");
    }

    buf.to_string()
}

/// Byte offset where a trailing `digits(.digits)?` starts, if the buffer
/// ends with one.
fn trailing_number_start(buf: &str) -> Option<usize> {
    let bytes = buf.as_bytes();
    let digits_before =
        |end: usize| bytes[..end].iter().rev().take_while(|b| b.is_ascii_digit()).count();

    let tail = digits_before(bytes.len());
    if tail == 0 {
        return None;
    }
    let start = bytes.len() - tail;

    if start >= 1 && bytes[start - 1] == b'.' {
        let whole = digits_before(start - 1);
        if whole > 0 {
            return Some(start - 1 - whole);
        }
    }
    Some(start)
}

/// The number being typed: whatever follows the last operator or parenthesis.
fn current_number(buf: &str) -> &str {
    buf.rsplit(|c: char| is_operator(c) || c == '(' || c == ')')
        .next()
        .unwrap_or("")
}

pub fn append_digit(buf: &str, digit: u8, limits: &Limits) -> Result<String, Rejection> {
    let number = current_number(buf);
    let symbol = char::from(b'0' + digit.min(9));

    if let Some((_, fraction)) = number.split_once('.') {
        if number.len() >= limits.max_number_len {
            return Err(Rejection::TooManyDigits { max: limits.max_number_len });
        }
        if fraction.len() >= limits.max_fraction_len {
            return Err(Rejection::TooManyFractionDigits { max: limits.max_fraction_len });
        }
        return Ok(format!("{buf}{symbol}"));
    }

    if number == "0" && symbol == '0' {
        return Err(Rejection::LeadingZero);
    }
    if number.len() >= limits.max_number_len {
        return Err(Rejection::TooManyDigits { max: limits.max_number_len });
    }
    if buf.ends_with(')') {
        return Ok(format!("{buf}×{symbol}"));
    }
    Ok(format!("{buf}{symbol}"))
}

pub fn append_operator(buf: &str, glyph: char) -> Result<String, Rejection> {
    if !can_append_operator(buf) {
        return Err(Rejection::OperatorNotAllowed);
    }
    Ok(format!("{buf}{glyph}"))
}

pub fn append_dot(buf: &str) -> Result<String, Rejection> {
    if !can_append_dot(buf) {
        return Err(Rejection::DotNotAllowed);
    }
    Ok(format!("{buf}."))
}

pub fn append_percent(buf: &str) -> Result<String, Rejection> {
    if !can_append_percent(buf) {
        return Err(Rejection::PercentNotAllowed);
    }
    Ok(format!("{buf}%"))
}

/// The Parenthesis key: picks a direction, checks it, and inserts `×` when
/// a new group directly follows an operand.
pub fn press_parenthesis(buf: &str) -> Result<String, Rejection> {
    let opening = opens_group(buf);
    if !can_append_parenthesis(buf, opening) {
        return Err(Rejection::ParenthesisNotAllowed);
    }
    if !opening {
        return Ok(format!("{buf})"));
    }
    match last_char(buf) {
        Some(c) if c.is_ascii_digit() || c == ')' => Ok(format!("{buf}×(")),
        _ => Ok(format!("{buf}(")),
    }
}

pub fn delete_last(buf: &str) -> Result<String, Rejection> {
    let mut chars = buf.chars();
    match chars.next_back() {
        Some(_) => Ok(chars.as_str().to_string()),
        None => Err(Rejection::NothingToDelete),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_operator_needs_operand() {
        assert!(!can_append_operator(""));
        assert!(!can_append_operator("5+"));
        assert!(!can_append_operator("5×"));
        assert!(!can_append_operator("5."));
        assert!(!can_append_operator("("));
        assert!(can_append_operator("5"));
        assert!(can_append_operator("(5)"));
        assert!(can_append_operator("5%"));
    }

    #[test]
    fn test_dot_once_per_number() {
        assert!(!can_append_dot(""));
        assert!(!can_append_dot("6.78"));
        assert!(!can_append_dot("6÷"));
        assert!(!can_append_dot("("));
        assert!(can_append_dot("6+7"));
        assert!(can_append_dot("1.5+7"));
    }

    #[test]
    fn test_parenthesis_predicates() {
        assert!(can_append_parenthesis("", true));
        assert!(can_append_parenthesis("5", true));
        assert!(can_append_parenthesis("5-", true));
        assert!(!can_append_parenthesis("5.", true));
        assert!(!can_append_parenthesis("", false));
        assert!(!can_append_parenthesis("5", false));
        assert!(!can_append_parenthesis("(5+", false));
        assert!(can_append_parenthesis("(5+3", false));
    }

    #[test]
    fn test_parenthesis_direction_and_implicit_multiply() {
        assert_eq!(press_parenthesis(""), Ok("(".to_string()));
        assert_eq!(press_parenthesis("5"), Ok("5×(".to_string()));
        assert_eq!(press_parenthesis("(5"), Ok("(5)".to_string()));
        assert_eq!(press_parenthesis("(5+"), Ok("(5+(".to_string()));
        assert_eq!(press_parenthesis("(5)"), Err(Rejection::ParenthesisNotAllowed));
    }

    #[test]
    fn test_percent_follows_operand() {
        assert!(!can_append_percent(""));
        assert!(!can_append_percent("5+"));
        assert!(!can_append_percent("5%"));
        assert!(can_append_percent("50"));
        assert!(can_append_percent("(2+3)"));
    }

    #[test]
    fn test_toggle_sign_cases() {
        assert_eq!(toggle_sign(""), "(-");
        assert_eq!(toggle_sign("(-"), "");
        assert_eq!(toggle_sign("(-5"), "5");
        assert_eq!(toggle_sign("5"), "(-5");
        assert_eq!(toggle_sign("3+12.5"), "3+(-12.5");
        assert_eq!(toggle_sign("3+(-12.5"), "3+12.5");
        assert_eq!(toggle_sign("3×"), "3×(-");
        assert_eq!(toggle_sign("3×(-"), "3×");
        assert_eq!(toggle_sign("(3)"), "(3)");
        assert_eq!(toggle_sign("3%"), "3%");
    }

    #[test]
    fn test_toggle_sign_is_an_involution_on_numbers() {
        for buf in ["7", "1+2", "4÷0.25", "(9-3)×8"] {
            assert_eq!(toggle_sign(&toggle_sign(buf)), buf);
        }
    }

    #[test]
    fn test_digit_after_group_inserts_multiply() {
        let limits = Limits::default();
        assert_eq!(append_digit("(2+3)", 4, &limits), Ok("(2+3)×4".to_string()));
        assert_eq!(append_digit("2+", 4, &limits), Ok("2+4".to_string()));
    }

    #[test]
    fn test_digit_rejects_double_leading_zero() {
        let limits = Limits::default();
        assert_eq!(append_digit("0", 0, &limits), Err(Rejection::LeadingZero));
        assert_eq!(append_digit("5+0", 0, &limits), Err(Rejection::LeadingZero));
        assert_eq!(append_digit("0", 7, &limits), Ok("07".to_string()));
        assert_eq!(append_digit("10", 0, &limits), Ok("100".to_string()));
    }

    #[test]
    fn test_digit_limits() {
        let limits = Limits { max_number_len: 5, max_fraction_len: 2 };
        assert_eq!(
            append_digit("12345", 6, &limits),
            Err(Rejection::TooManyDigits { max: 5 })
        );
        assert_eq!(
            append_digit("1.25", 6, &limits),
            Err(Rejection::TooManyFractionDigits { max: 2 })
        );
        assert_eq!(
            append_digit("12.34", 6, &limits),
            Err(Rejection::TooManyDigits { max: 5 })
        );
        // Limits apply to the current number only
        assert_eq!(append_digit("12345+1", 6, &limits), Ok("12345+16".to_string()));
    }

    #[test]
    fn test_delete_last() {
        assert_eq!(delete_last("12×"), Ok("12".to_string()));
        assert_eq!(delete_last("(-"), Ok("(".to_string()));
        assert_eq!(delete_last(""), Err(Rejection::NothingToDelete));
    }

    #[test]
    fn test_rejections_leave_message() {
        assert_eq!(
            Rejection::TooManyDigits { max: 15 }.to_string(),
            "enter at most 15 digits"
        );
    }
}
