//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Reveal the next student.
    Trigger,
    PrevPeriod,
    NextPeriod,
    /// Select the highlighted period, starting a new draw.
    SelectPeriod,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    ToggleLogs,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(' ' | 'd') => KeyAction::Trigger,
        KeyCode::Enter => KeyAction::SelectPeriod,
        KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => KeyAction::ScrollUp,
        KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => KeyAction::ScrollDown,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::PrevPeriod,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::NextPeriod,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn trigger_keys() {
        assert_eq!(map_key(key(KeyCode::Char(' '))), KeyAction::Trigger);
        assert_eq!(map_key(key(KeyCode::Char('d'))), KeyAction::Trigger);
    }

    #[test]
    fn period_navigation() {
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::PrevPeriod);
        assert_eq!(map_key(key(KeyCode::Char('j'))), KeyAction::NextPeriod);
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::SelectPeriod);
    }

    #[test]
    fn shifted_arrows_scroll_board() {
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        assert_eq!(map_key(up), KeyAction::ScrollUp);
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT);
        assert_eq!(map_key(down), KeyAction::ScrollDown);
    }

    #[test]
    fn page_and_jump_keys() {
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
        assert_eq!(map_key(key(KeyCode::Home)), KeyAction::Home);
        assert_eq!(map_key(key(KeyCode::End)), KeyAction::End);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), KeyAction::None);
    }
}
