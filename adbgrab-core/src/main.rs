//! src/main.rs
//! ============================================================================
//! # ADB File Transfer TUI Application Entry Point
//!
//! A terminal user interface for copying files from an Android device to the
//! host machine over adb: browse the device, mark files, pick a destination,
//! execute the batch. Built with ratatui and crossterm, strictly
//! single-threaded and blocking by design.

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use directories::UserDirs;
use ratatui::{Terminal, backend::CrosstermBackend as Backend};
use tracing::{error, info, warn};

use adbgrab_core::{
    Logger,
    bridge::adb::AdbBridge,
    bridge::runner::DeviceBridge,
    config::Config,
    controller::event_loop::{AppTerminal, EventLoop},
    model::nav::DevicePath,
    model::session::Session,
};

fn main() -> Result<()> {
    // Setup panic handler early
    setup_panic_handler();

    Logger::init_tracing();
    info!("Starting ADB File Transfer TUI");

    // Load configuration
    let config: Config = Config::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {e}");
        Config::default()
    });

    // Probe the bridge before touching the terminal: a missing adb or no
    // attached device aborts with a non-zero exit instead of a broken TUI.
    let bridge = AdbBridge::new(config.adb_path.clone());
    bridge.probe().context("Device bridge unavailable")?;

    let host_top: PathBuf = UserDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/"));

    let mut session = Session::new(DevicePath::new(&config.device_root), host_top);
    let event_loop = EventLoop::new(bridge, config.show_hidden);
    event_loop.load_initial(&mut session);

    // Terminal goes raw only after everything fallible at startup is done.
    let mut app = App {
        terminal: setup_terminal().context("Failed to initialize terminal")?,
    };

    let result: Result<()> = event_loop.run(&mut app.terminal, &mut session);
    drop(app); // restore the terminal before reporting any runtime error
    result.context("Application runtime error")?;

    info!("Application exited cleanly");
    Ok(())
}

/// Owns the terminal so cleanup runs on every exit path.
struct App {
    terminal: AppTerminal,
}

impl Drop for App {
    fn drop(&mut self) {
        if let Err(e) = cleanup_terminal(&mut self.terminal) {
            error!("Failed to cleanup terminal: {e}");
        }
    }
}

/// Initialize terminal in raw mode with alternate screen
fn setup_terminal() -> Result<AppTerminal> {
    enable_raw_mode().context("Failed to enable raw mode")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend: Backend<Stdout> = Backend::new(stdout);
    let terminal: AppTerminal = Terminal::new(backend).context("Failed to create terminal")?;

    info!("Terminal setup complete");
    Ok(terminal)
}

/// Restore terminal to normal mode
fn cleanup_terminal(terminal: &mut AppTerminal) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    info!("Terminal cleanup complete");
    Ok(())
}

/// Setup panic handler for graceful terminal restoration
fn setup_panic_handler() {
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        // Try to restore terminal on panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);

        error!("Application panicked: {panic_info}");
        original_hook(panic_info);
    }));
}
