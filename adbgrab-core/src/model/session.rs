//! src/model/session.rs
//! ============================================================================
//! # Session: The Single Explicit Application State
//!
//! `Session` unifies all state for one interactive run: the active browse
//! mode, one pane per mode (each with its own path and cursor memory), the
//! persistent selection set, and the status/error line. Every component
//! operation takes this object; there are no ambient globals, so tests
//! construct a fresh session per case.

use std::path::PathBuf;

use tracing::{error, info};

use crate::fs::entry::Entry;
use crate::model::nav::{BrowseMode, DevicePath};
use crate::model::pane::PaneState;
use crate::model::selection::SelectionSet;

pub struct Session {
    /// Which browser is currently rendered.
    pub mode: BrowseMode,
    /// Device-side pane (path, listing snapshot, cursor).
    pub device: PaneState<DevicePath>,
    /// Host-side pane.
    pub host: PaneState<PathBuf>,
    /// The host path Host mode opens in; its listing is the curated
    /// destination-picker view.
    pub host_top: PathBuf,
    /// Persistent transfer marks (device file paths).
    pub selection: SelectionSet,
    pub last_error: Option<String>,
    pub last_status: Option<String>,
    pub redraw: bool,
    pub quit: bool,
}

impl Session {
    /// Construct a fresh session: given device root, host top level,
    /// empty selection.
    pub fn new(device_root: DevicePath, host_top: PathBuf) -> Self {
        Self {
            mode: BrowseMode::Device,
            device: PaneState::new(device_root),
            host: PaneState::new(host_top.clone()),
            host_top,
            selection: SelectionSet::new(),
            last_error: None,
            last_status: None,
            redraw: true,
            quit: false,
        }
    }

    /// Set the latest error message (display in the status bar).
    pub fn set_error(&mut self, msg: impl Into<String>) {
        let msg: String = msg.into();
        error!("{msg}");
        self.last_error = Some(msg);
        self.last_status = None;
        self.redraw = true;
    }

    /// Set the latest info/status message (display in the status bar).
    pub fn set_status(&mut self, msg: impl Into<String>) {
        let msg: String = msg.into();
        info!("{msg}");
        self.last_status = Some(msg);
        self.last_error = None;
        self.redraw = true;
    }

    /// Clear error and status messages.
    pub fn clear_msgs(&mut self) {
        self.last_error = None;
        self.last_status = None;
        self.redraw = true;
    }

    /// Flip the active mode, keeping each pane's path and cursor memory.
    pub fn switch_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.redraw = true;
    }

    /// Entries of the currently rendered pane.
    pub fn current_entries(&self) -> &[Entry] {
        match self.mode {
            BrowseMode::Device => &self.device.entries,
            BrowseMode::Host => &self.host.entries,
        }
    }

    /// Cursor index of the currently rendered pane.
    pub fn current_selected(&self) -> Option<usize> {
        match self.mode {
            BrowseMode::Device => self.device.selected,
            BrowseMode::Host => self.host.selected,
        }
    }

    /// Display string of the currently rendered path.
    pub fn current_path_display(&self) -> String {
        match self.mode {
            BrowseMode::Device => self.device.cwd.to_string(),
            BrowseMode::Host => self.host.cwd.display().to_string(),
        }
    }

    /// Absolute device path for an entry of the device pane.
    pub fn device_path_of(&self, entry: &Entry) -> DevicePath {
        self.device.cwd.join(&entry.name)
    }

    pub fn move_selection_up(&mut self) {
        match self.mode {
            BrowseMode::Device => self.device.move_selection_up(),
            BrowseMode::Host => self.host.move_selection_up(),
        }
        self.redraw = true;
    }

    pub fn move_selection_down(&mut self) {
        match self.mode {
            BrowseMode::Device => self.device.move_selection_down(),
            BrowseMode::Host => self.host.move_selection_down(),
        }
        self.redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(
            DevicePath::new("/storage/emulated/0"),
            PathBuf::from("/home/user"),
        )
    }

    #[test]
    fn switch_mode_is_its_own_inverse() {
        let mut s = session();
        s.device.cwd = DevicePath::new("/sdcard/DCIM");
        s.device.selected = Some(3);
        s.host.cwd = PathBuf::from("/home/user/Downloads");

        s.switch_mode();
        assert_eq!(s.mode, BrowseMode::Host);
        s.switch_mode();

        assert_eq!(s.mode, BrowseMode::Device);
        assert_eq!(s.device.cwd, DevicePath::new("/sdcard/DCIM"));
        assert_eq!(s.device.selected, Some(3));
        assert_eq!(s.host.cwd, PathBuf::from("/home/user/Downloads"));
    }

    #[test]
    fn status_and_error_displace_each_other() {
        let mut s = session();
        s.set_error("boom");
        assert!(s.last_error.is_some());

        s.set_status("ok");
        assert!(s.last_error.is_none());
        assert_eq!(s.last_status.as_deref(), Some("ok"));

        s.clear_msgs();
        assert!(s.last_status.is_none());
    }
}
