//! src/controller/actions.rs
//! ============================================================================
//! # Actions: Centralized Application Commands
//!
//! The `Action` enum abstracts raw terminal events into meaningful commands,
//! giving the event loop a single dispatch surface. Unrecognized keys map to
//! nothing and are silently ignored.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A high-level command the application can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor up.
    MoveSelectionUp,
    /// Move cursor down.
    MoveSelectionDown,
    /// Enter the selected directory.
    EnterSelected,
    /// Go to the parent directory (floored at the root).
    GoToParent,
    /// Toggle selection of the file under the cursor (device mode only).
    ToggleSelect,
    /// Toggle device browser ⇄ host destination browser.
    SwitchMode,
    /// Execute the transfer batch into the current host path.
    ExecuteTransfer,
    /// Quit the application.
    Quit,
}

/// Map one key event to an action; `None` for anything unbound.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),

        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            Some(Action::MoveSelectionUp)
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            Some(Action::MoveSelectionDown)
        }
        (KeyCode::Enter, _) => Some(Action::EnterSelected),
        (KeyCode::Esc, _) => Some(Action::GoToParent),

        (KeyCode::Char('s'), KeyModifiers::NONE) => Some(Action::ToggleSelect),
        (KeyCode::Char('d'), KeyModifiers::NONE) => Some(Action::SwitchMode),
        (KeyCode::Char('e'), KeyModifiers::NONE) => Some(Action::ExecuteTransfer),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn vi_and_arrow_navigation_agree() {
        assert_eq!(map_key(key(KeyCode::Char('j'))), map_key(key(KeyCode::Down)));
        assert_eq!(map_key(key(KeyCode::Char('k'))), map_key(key(KeyCode::Up)));
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), None);
        assert_eq!(map_key(key(KeyCode::F(5))), None);
        assert_eq!(map_key(key(KeyCode::Tab)), None);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ev), Some(Action::Quit));
    }
}
