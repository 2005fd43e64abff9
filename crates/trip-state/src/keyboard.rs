//! Keyboard Shortcuts
//!
//! Maps `KeyboardEvent.key` values to page commands. Shortcuts are global:
//! they fire regardless of which element has focus.

use crate::config::DAY_SHORTCUT_KEYS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    CloseMenu,
    ToggleDay(u8),
}

pub fn key_command(key: &str) -> Option<KeyCommand> {
    if key == "Escape" {
        return Some(KeyCommand::CloseMenu);
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if DAY_SHORTCUT_KEYS.contains(&c) => {
            c.to_digit(10).and_then(|d| u8::try_from(d).ok()).map(KeyCommand::ToggleDay)
        }
        _ => None,
    }
}
