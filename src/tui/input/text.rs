use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::unicode::pop_grapheme;

/// Apply a typing key to a single-line field. Returns true if the key was consumed.
pub(super) fn edit_field(field: &mut String, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            field.push(c);
            true
        }
        KeyCode::Backspace => {
            pop_grapheme(field);
            true
        }
        _ => false,
    }
}
