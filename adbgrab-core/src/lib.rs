//! lib.rs — Library Entry for the ADB File-Pull TUI
//! -----------------------------------------------
//! Exposes the model, bridge, fs, transfer, controller, and view modules.
//! Only re-export what the binary and tests actually need at the root.

pub mod error;

pub mod config;

/// --- State/data models (session, navigation, selection) ---
pub mod model {
    pub mod nav;
    pub use nav::{BrowseMode, DevicePath};

    pub mod pane;
    pub use pane::PaneState;

    pub mod selection;
    pub use selection::SelectionSet;

    pub mod session;
    pub use session::Session;
}

/// --- Device bridge: the external adb collaborator ---
pub mod bridge {
    pub mod runner;
    pub use runner::DeviceBridge;

    pub mod adb;
    pub use adb::AdbBridge;
}

/// --- Listing layer: entries, adapters, host-side scanning ---
pub mod fs {
    pub mod entry;
    pub use entry::Entry;

    pub mod host_scanner;
    pub mod lister;
}

/// --- Transfer batch execution ---
pub mod transfer {
    pub mod orchestrator;
    pub use orchestrator::{PullOutcome, TransferReport};
}

/// --- Controller: actions and the blocking event loop ---
pub mod controller {
    pub mod actions;
    pub use actions::Action;

    pub mod event_loop;
    pub use event_loop::EventLoop;
}

/// --- UI rendering: view orchestrator and components ---
pub mod view {
    pub mod theme;
    pub mod ui;
    pub mod components {
        pub mod entry_table;
        pub mod status_bar;
    }
    pub use components::*;
    pub use ui::View;
}

pub mod logging;
pub use logging::Logger;

pub use error::AppError;
pub use model::{Session, nav::BrowseMode};
