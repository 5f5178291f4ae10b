use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::button::Button;

/// Keypad-level input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadEvent {
    Press(Button),
    Quit,
}

/// Block until the next terminal event and translate it.
///
/// Returns `None` for events the keypad ignores (resize, mouse, unmapped keys).
pub fn next_event() -> std::io::Result<Option<KeypadEvent>> {
    match event::read()? {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            Ok(map_key(key_event))
        }
        _ => Ok(None),
    }
}

pub fn map_key(key_event: KeyEvent) -> Option<KeypadEvent> {
    // Release/repeat events arrive with keyboard enhancement on some terminals
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(KeypadEvent::Quit),
        (_, KeyCode::Esc) => Some(KeypadEvent::Quit),
        (_, KeyCode::Enter) => Some(KeypadEvent::Press(Button::Equals)),
        (_, KeyCode::Backspace) => Some(KeypadEvent::Press(Button::Delete)),
        (_, KeyCode::Delete) => Some(KeypadEvent::Press(Button::Clear)),
        (_, KeyCode::Char(c)) => Button::from_key(c).map(KeypadEvent::Press),
        _ => None,
    }
}
