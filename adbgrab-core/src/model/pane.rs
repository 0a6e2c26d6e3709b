//! src/model/pane.rs
//! ============================================================================
//! # PaneState: Per-Mode Browse State
//!
//! One pane per browse mode. Each pane remembers its own working directory,
//! the last listing snapshot, and its cursor, so toggling between device and
//! host restores exactly where the user left off.

use ratatui::widgets::TableState;

use crate::fs::entry::Entry;

/// Browse state for one mode, generic over the path type
/// (`DevicePath` for the device pane, `PathBuf` for the host pane).
#[derive(Debug, Clone)]
pub struct PaneState<P> {
    /// The working directory for this pane.
    pub cwd: P,

    /// The directory contents as a fresh listing snapshot.
    pub entries: Vec<Entry>,

    /// Cursor index into `entries`.
    pub selected: Option<usize>,

    /// Table state for the ratatui Table widget (selection, scroll).
    pub table_state: TableState,
}

impl<P> PaneState<P> {
    pub fn new(cwd: P) -> Self {
        Self {
            cwd,
            entries: Vec::new(),
            selected: Some(0),
            table_state: TableState::default(),
        }
    }

    /// Replace the listing snapshot and reset the cursor to the top.
    pub fn set_entries(&mut self, entries: Vec<Entry>) {
        self.selected = if entries.is_empty() { None } else { Some(0) };
        self.entries = entries;
        self.table_state = TableState::default();
    }

    /// Replace the listing snapshot but keep the clamped cursor. Used when
    /// re-entering a mode, so each pane's cursor memory survives toggles.
    pub fn update_entries(&mut self, entries: Vec<Entry>) {
        let cursor: Option<usize> = self.selected;
        self.entries = entries;
        self.selected = match cursor {
            _ if self.entries.is_empty() => None,
            Some(idx) => Some(idx.min(self.entries.len() - 1)),
            None => Some(0),
        };
    }

    /// The entry under the cursor, if any.
    pub fn selected_entry(&self) -> Option<&Entry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    pub fn move_selection_up(&mut self) {
        if !self.entries.is_empty() {
            self.selected = Some(self.selected.map_or(0, |s| s.saturating_sub(1)));
        }
    }

    pub fn move_selection_down(&mut self) {
        if !self.entries.is_empty() {
            let last = self.entries.len() - 1;
            self.selected = Some(self.selected.map_or(0, |s| s.saturating_add(1).min(last)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> Entry {
        Entry {
            name: name.to_string(),
            is_dir: false,
            size: Some(1),
        }
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut pane: PaneState<String> = PaneState::new("/".to_string());
        pane.set_entries(vec![file("a"), file("b")]);

        pane.move_selection_up();
        assert_eq!(pane.selected, Some(0));

        pane.move_selection_down();
        pane.move_selection_down();
        pane.move_selection_down();
        assert_eq!(pane.selected, Some(1));
    }

    #[test]
    fn set_entries_resets_cursor() {
        let mut pane: PaneState<String> = PaneState::new("/".to_string());
        pane.set_entries(vec![file("a"), file("b"), file("c")]);
        pane.move_selection_down();
        pane.move_selection_down();

        pane.set_entries(vec![file("x")]);
        assert_eq!(pane.selected, Some(0));

        pane.set_entries(Vec::new());
        assert_eq!(pane.selected, None);
        assert!(pane.selected_entry().is_none());
    }
}
