//! # Buttons
//!
//! Every key on the keypad is a `Button`. Only digits and the four arithmetic
//! operators carry data; everything else is a bare variant.
//!
//! ```text
//! ┌───┬─────┬───┬───┐
//! │ C │ ( ) │ % │ ÷ │
//! │ 7 │  8  │ 9 │ × │
//! │ 4 │  5  │ 6 │ - │
//! │ 1 │  2  │ 3 │ + │
//! │+/-│  0  │ . │ = │
//! └───┴─────┴───┴───┘   plus ← (Delete)
//! ```

use std::fmt;

/// The four binary operators as they appear on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    /// Glyph appended to the input buffer.
    pub fn glyph(self) -> char {
        match self {
            Operator::Plus => '+',
            Operator::Minus => '-',
            Operator::Multiply => '×',
            Operator::Divide => '÷',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// A single decimal digit, always `0..=9`.
    Digit(u8),
    Operator(Operator),
    Clear,
    Delete,
    Parenthesis,
    Percent,
    Sign,
    Dot,
    Equals,
}

/// Keypad rows, top to bottom. Delete sits above the grid.
pub const LAYOUT: [[Button; 4]; 5] = [
    [
        Button::Clear,
        Button::Parenthesis,
        Button::Percent,
        Button::Operator(Operator::Divide),
    ],
    [
        Button::Digit(7),
        Button::Digit(8),
        Button::Digit(9),
        Button::Operator(Operator::Multiply),
    ],
    [
        Button::Digit(4),
        Button::Digit(5),
        Button::Digit(6),
        Button::Operator(Operator::Minus),
    ],
    [
        Button::Digit(1),
        Button::Digit(2),
        Button::Digit(3),
        Button::Operator(Operator::Plus),
    ],
    [Button::Sign, Button::Digit(0), Button::Dot, Button::Equals],
];

impl Button {
    /// Label printed on the key.
    pub fn label(&self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Operator(op) => op.glyph().to_string(),
            Button::Clear => "C".into(),
            Button::Delete => "←".into(),
            Button::Parenthesis => "( )".into(),
            Button::Percent => "%".into(),
            Button::Sign => "+/-".into(),
            Button::Dot => ".".into(),
            Button::Equals => "=".into(),
        }
    }

    /// Maps a typed key to the button it stands for.
    ///
    /// Both `(` and `)` map to the single Parenthesis key; the validator
    /// decides the direction. `x`/`*` and `/` are accepted as stand-ins for
    /// `×` and `÷`, `~` and `s` for the sign key, `c` for clear and `<` for
    /// delete.
    pub fn from_key(key: char) -> Option<Button> {
        let button = match key {
            '0'..='9' => Button::Digit(key as u8 - b'0'),
            '+' => Button::Operator(Operator::Plus),
            '-' => Button::Operator(Operator::Minus),
            '*' | 'x' | 'X' | '×' => Button::Operator(Operator::Multiply),
            '/' | '÷' => Button::Operator(Operator::Divide),
            '(' | ')' => Button::Parenthesis,
            '%' => Button::Percent,
            '.' => Button::Dot,
            '~' | 's' | 'S' => Button::Sign,
            '=' => Button::Equals,
            'c' | 'C' => Button::Clear,
            '<' => Button::Delete,
            _ => return None,
        };
        Some(button)
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
