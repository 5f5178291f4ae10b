//! # Keypad Adapter
//!
//! The terminal-specific layer. Reads key presses, feeds them to
//! `core::action::update`, and redraws the input and result lines.
//!
//! This is the only module that knows about crossterm. The screen is
//! redrawn after every event; there is nothing to animate.

mod event;
pub mod script;

use log::info;
use std::io::{Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::Print;
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};

use crate::core::action::{Effect, update};
use crate::core::button::{Button, LAYOUT};
use crate::core::config::ResolvedConfig;
use crate::core::state::Calculator;
use crate::keypad::event::{KeypadEvent, next_event};

pub use event::map_key;

/// Input longer than this is shown on its own line under a marker, the
/// terminal stand-in for shrinking the font.
const LONG_INPUT_BREAKPOINT: usize = 16;

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide)?;
        info!("Terminal modes enabled (raw, alternate screen)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut calc = Calculator::from_config(config);
    let _terminal_mode_guard = TerminalModeGuard::new()?;
    let mut out = stdout();
    let mut notice: Option<String> = None;

    loop {
        draw(&mut out, &calc, notice.as_deref())?;

        match next_event()? {
            Some(KeypadEvent::Quit) => break,
            Some(KeypadEvent::Press(button)) => {
                notice = match update(&mut calc, button) {
                    Effect::Rejected(rejection) => Some(rejection.to_string()),
                    Effect::Edited | Effect::Evaluated => None,
                };
            }
            None => {}
        }
    }

    info!("Keypad closed with input {:?}", calc.input);
    Ok(())
}

fn draw(out: &mut Stdout, calc: &Calculator, notice: Option<&str>) -> std::io::Result<()> {
    queue!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    let mut row: u16 = 0;
    for line in screen_lines(calc, notice) {
        queue!(out, MoveTo(0, row), Print(line))?;
        row += 1;
    }
    out.flush()
}

/// Everything on screen, top to bottom.
fn screen_lines(calc: &Calculator, notice: Option<&str>) -> Vec<String> {
    let mut lines = Vec::new();

    if calc.input.chars().count() > LONG_INPUT_BREAKPOINT {
        lines.push("  …".to_string());
    }
    lines.push(format!("  {}", calc.input));
    lines.push(format!("= {}", calc.result));
    lines.push(notice.map(|n| format!("! {n}")).unwrap_or_default());

    lines.push(format!("{:>24}", Button::Delete.label()));
    for keys in LAYOUT {
        let cells: Vec<String> = keys.iter().map(|b| format!("{:^5}", b.label())).collect();
        lines.push(cells.join(" "));
    }
    lines.push(String::new());
    lines.push("Enter/= evaluate · Backspace delete · c clear · ~ sign · Esc quit".to_string());
    lines
}
