//! src/controller/event_loop.rs
//! ============================================================================
//! # EventLoop: The Blocking Render/Input Loop
//!
//! Single-threaded and synchronous: draw, block on one key, dispatch,
//! repeat. Every bridge call is a blocking suspension point for the whole
//! loop. Navigation is list-then-commit — the state machine never
//! transitions onto a path whose listing failed; the current view is
//! redisplayed with the failure in the status bar instead.

use std::io::{Stdout, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::bridge::runner::DeviceBridge;
use crate::controller::actions::{Action, map_key};
use crate::fs::lister::Lister;
use crate::model::nav::{BrowseMode, DevicePath};
use crate::model::session::Session;
use crate::transfer::orchestrator::{self, TransferReport};
use crate::view::ui::View;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

pub struct EventLoop<B: DeviceBridge> {
    bridge: B,
    show_hidden: bool,
}

impl<B: DeviceBridge> EventLoop<B> {
    pub fn new(bridge: B, show_hidden: bool) -> Self {
        Self {
            bridge,
            show_hidden,
        }
    }

    fn lister(&self) -> Lister<'_, B> {
        Lister::new(&self.bridge, self.show_hidden)
    }

    /// First device listing after the startup probe. A failure here is
    /// recoverable: the browser opens on an empty view with the cause in
    /// the status bar.
    pub fn load_initial(&self, session: &mut Session) {
        match self.lister().list_device(&session.device.cwd) {
            Ok(entries) => session.device.set_entries(entries),
            Err(e) => session.set_error(e.to_string()),
        }
        session.redraw = true;
    }

    /// Run until quit. Blocks on one terminal event per iteration.
    pub fn run(&self, terminal: &mut AppTerminal, session: &mut Session) -> Result<()> {
        info!("entering interactive loop");

        while !session.quit {
            if session.redraw {
                terminal
                    .draw(|frame| View::redraw(frame, session))
                    .context("Failed to draw terminal")?;
                session.redraw = false;
            }

            match event::read().context("Failed to read terminal event")? {
                TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    let Some(action) = map_key(key) else { continue };
                    debug!("dispatching action: {action:?}");

                    if action == Action::ExecuteTransfer {
                        self.run_transfer(terminal, session)?;
                    } else {
                        self.handle_action(session, action);
                    }
                }
                TermEvent::Resize(..) => session.redraw = true,
                _ => {}
            }
        }

        info!("interactive loop ended");
        Ok(())
    }

    /// Dispatch one non-transfer action against the session.
    pub fn handle_action(&self, session: &mut Session, action: Action) {
        match action {
            Action::MoveSelectionUp => session.move_selection_up(),
            Action::MoveSelectionDown => session.move_selection_down(),
            Action::EnterSelected => self.enter_selected(session),
            Action::GoToParent => self.go_to_parent(session),
            Action::SwitchMode => self.switch_mode(session),
            Action::ToggleSelect => Self::toggle_select(session),
            Action::Quit => {
                session.quit = true;
            }
            // handled by `run`, which owns the terminal
            Action::ExecuteTransfer => {}
        }
    }

    /// Descend into the directory under the cursor (list-then-commit).
    fn enter_selected(&self, session: &mut Session) {
        match session.mode {
            BrowseMode::Device => {
                let Some(entry) = session.device.selected_entry().cloned() else {
                    return;
                };
                if !entry.is_dir {
                    session.set_status(format!("Not a directory: {}", entry.name));
                    return;
                }

                let candidate: DevicePath = session.device.cwd.join(&entry.name);
                match self.lister().list_device(&candidate) {
                    Ok(entries) => {
                        info!("entering device directory {candidate}");
                        session.device.cwd = candidate;
                        session.device.set_entries(entries);
                        session.clear_msgs();
                    }
                    Err(e) => session.set_error(e.to_string()),
                }
            }
            BrowseMode::Host => {
                let Some(entry) = session.host.selected_entry().cloned() else {
                    return;
                };
                if !entry.is_dir {
                    session.set_status(format!("Not a directory: {}", entry.name));
                    return;
                }

                let candidate: PathBuf = session.host.cwd.join(&entry.name);
                match self.lister().list_host(&candidate, &session.host_top) {
                    Ok(entries) => {
                        info!("entering host directory {}", candidate.display());
                        session.host.cwd = candidate;
                        session.host.set_entries(entries);
                        session.clear_msgs();
                    }
                    Err(e) => session.set_error(e.to_string()),
                }
            }
        }
    }

    /// Go to the parent directory. The root is a terminal fixed point:
    /// at the root this is a pure no-op, not an error.
    fn go_to_parent(&self, session: &mut Session) {
        match session.mode {
            BrowseMode::Device => {
                if session.device.cwd.is_root() {
                    debug!("already at device root");
                    return;
                }
                let candidate: DevicePath = session.device.cwd.parent();
                match self.lister().list_device(&candidate) {
                    Ok(entries) => {
                        session.device.cwd = candidate;
                        session.device.set_entries(entries);
                        session.clear_msgs();
                    }
                    Err(e) => session.set_error(e.to_string()),
                }
            }
            BrowseMode::Host => {
                let Some(candidate) = session.host.cwd.parent().map(PathBuf::from) else {
                    debug!("already at host root");
                    return;
                };
                match self.lister().list_host(&candidate, &session.host_top) {
                    Ok(entries) => {
                        session.host.cwd = candidate;
                        session.host.set_entries(entries);
                        session.clear_msgs();
                    }
                    Err(e) => session.set_error(e.to_string()),
                }
            }
        }
    }

    /// Toggle device ⇄ host, restoring the target mode's remembered path
    /// and cursor. The flip only commits when the remembered path still
    /// lists cleanly.
    fn switch_mode(&self, session: &mut Session) {
        match session.mode.toggled() {
            BrowseMode::Host => {
                match self
                    .lister()
                    .list_host(&session.host.cwd, &session.host_top)
                {
                    Ok(entries) => {
                        session.host.update_entries(entries);
                        session.switch_mode();
                        session.clear_msgs();
                    }
                    Err(e) => session.set_error(e.to_string()),
                }
            }
            BrowseMode::Device => match self.lister().list_device(&session.device.cwd) {
                Ok(entries) => {
                    session.device.update_entries(entries);
                    session.switch_mode();
                    session.clear_msgs();
                }
                Err(e) => session.set_error(e.to_string()),
            },
        }
    }

    /// Toggle the transfer mark on the file under the cursor.
    /// Only device-mode file entries are selectable.
    fn toggle_select(session: &mut Session) {
        if session.mode != BrowseMode::Device {
            session.set_status("Selection only works in the device browser");
            return;
        }
        let Some(entry) = session.device.selected_entry().cloned() else {
            return;
        };
        if entry.is_dir {
            session.set_status("Directories cannot be selected");
            return;
        }

        let path: DevicePath = session.device_path_of(&entry);
        let selected: bool = session.selection.toggle(path);
        debug!(
            "{} {} ({} selected)",
            if selected { "selected" } else { "deselected" },
            entry.name,
            session.selection.len()
        );
        session.redraw = true;
    }

    /// Execute the transfer batch. Hands the terminal back to the bridge
    /// for the duration so its native progress output renders untouched,
    /// then waits for a key before restoring the TUI.
    fn run_transfer(&self, terminal: &mut AppTerminal, session: &mut Session) -> Result<()> {
        if session.selection.is_empty() {
            session.set_status("No files selected for transfer");
            return Ok(());
        }

        let sources: Vec<DevicePath> = session.selection.to_vec();
        let dest: PathBuf = session.host.cwd.clone();

        suspend_tui()?;
        let result = orchestrator::execute_batch(&self.bridge, &sources, &dest);

        println!();
        println!("Press any key to return to the browser...");
        wait_for_any_key()?;
        restore_tui(terminal)?;

        match result {
            Ok(report) => Self::apply_transfer_report(session, &report),
            Err(e) => session.set_error(format!("Transfer aborted: {e}")),
        }
        session.redraw = true;
        Ok(())
    }

    /// Selection policy: successes leave the set, failures stay selected
    /// so `e` again retries only what failed.
    pub fn apply_transfer_report(session: &mut Session, report: &TransferReport) {
        for source in report.succeeded() {
            session.selection.remove(source);
        }
        session.set_status(report.summary_line());
    }
}

/// Leave the TUI: cooked mode, main screen. The bridge owns the terminal
/// until [`restore_tui`].
fn suspend_tui() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Re-enter the TUI and force a full repaint.
fn restore_tui(terminal: &mut AppTerminal) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    execute!(stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
    terminal.clear().context("Failed to clear terminal")?;
    Ok(())
}

/// Block until one key press (raw mode, so the pause prompt isn't echoed).
fn wait_for_any_key() -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    loop {
        if let TermEvent::Key(key) = event::read().context("Failed to read terminal event")? {
            if key.kind == KeyEventKind::Press {
                break;
            }
        }
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    Ok(())
}
