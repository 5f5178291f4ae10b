//! # Calculator State
//!
//! The two strings a keypad shows, and the limits that shape typing.
//!
//! ```text
//! Calculator
//! ├── input: String    // expression so far, display glyphs (× ÷)
//! ├── result: String   // last evaluation: a number or an error message
//! └── limits: Limits   // digit caps for the number being typed
//! ```
//!
//! State changes only happen through `update(state, button)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::validator::Limits;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    pub input: String,
    pub result: String,
    pub limits: Limits,
}

impl Calculator {
    pub fn new(limits: Limits) -> Self {
        Self {
            input: String::new(),
            result: String::new(),
            limits,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.limits)
    }

    /// The input with display glyphs swapped for the evaluator's ASCII.
    pub fn expression(&self) -> String {
        to_ascii(&self.input)
    }

    pub fn clear(&mut self) {
        self.input.clear();
        self.result.clear();
    }
}

/// `×` → `*`, `÷` → `/`. Everything else passes through.
pub fn to_ascii(display: &str) -> String {
    display.replace('×', "*").replace('÷', "/")
}
