//! # Core Calculator Logic
//!
//! This module contains Tally's keypad logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Calculator (state)   │
//!                    │  • Button (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • validator (rules)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                  ┌─────────────┴─────────────┐
//!                  ▼                           ▼
//!           ┌────────────┐              ┌────────────┐
//!           │   Keypad   │              │    eval    │
//!           │  Adapter   │              │ (=  press) │
//!           │ (crossterm)│              │            │
//!           └────────────┘              └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `Calculator` struct, the two strings a keypad shows
//! - [`action`]: `update()` and the `Effect` of a press
//! - [`button`]: The `Button` enum, everything that can be pressed
//! - [`validator`]: Whether a press may touch the input, and how
//! - [`config`]: Layered settings

pub mod action;
pub mod button;
pub mod config;
pub mod state;
pub mod validator;

// Re-export commonly used types for convenience
pub use action::{Effect, update};
pub use button::{Button, Operator};
pub use state::Calculator;
