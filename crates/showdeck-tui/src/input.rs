use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextCard,
    PrevCard,
    /// Jump to card by zero-based index
    JumpTo(usize),
    /// Pause/resume the auto-advance timer
    ToggleAutoAdvance,
    /// Restart the active card's counters
    Replay,
    ToggleHints,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Quit,

        // Card navigation
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::NextCard,
        (KeyCode::Char('n'), KeyModifiers::NONE) => Action::NextCard,
        (KeyCode::Right, KeyModifiers::NONE) => Action::NextCard,
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::PrevCard,
        (KeyCode::Char('p'), KeyModifiers::NONE) => Action::PrevCard,
        (KeyCode::Left, KeyModifiers::NONE) => Action::PrevCard,

        // Direct jump (1-9 map to cards 0-8)
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpTo(c as usize - '1' as usize)
        }

        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::ToggleAutoAdvance,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Replay,
        (KeyCode::Char('?'), KeyModifiers::NONE) => Action::ToggleHints,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('l'))), Action::NextCard);
        assert_eq!(handle_key_event(key(KeyCode::Right)), Action::NextCard);
        assert_eq!(handle_key_event(key(KeyCode::Char('h'))), Action::PrevCard);
        assert_eq!(handle_key_event(key(KeyCode::Left)), Action::PrevCard);
    }

    #[test]
    fn test_digit_jump_is_zero_based() {
        assert_eq!(handle_key_event(key(KeyCode::Char('1'))), Action::JumpTo(0));
        assert_eq!(handle_key_event(key(KeyCode::Char('9'))), Action::JumpTo(8));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
    }

    #[test]
    fn test_unmapped_key_is_none() {
        assert_eq!(handle_key_event(key(KeyCode::Char('z'))), Action::None);
    }
}
