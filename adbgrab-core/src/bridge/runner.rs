//! src/bridge/runner.rs
//! ============================================================================
//! # DeviceBridge: Capability Interface Over the External Bridge
//!
//! The listing adapter and the transfer orchestrator never talk to adb
//! directly; they hold this capability, so tests substitute a scripted
//! implementation and need no connected device.

use std::path::Path;

use crate::error::AppError;
use crate::fs::entry::Entry;
use crate::model::nav::DevicePath;

pub trait DeviceBridge {
    /// Startup probe: bridge reachable and at least one device attached.
    fn probe(&self) -> Result<(), AppError>;

    /// List one device directory. Unsorted, unfiltered raw entries.
    fn list_dir(&self, path: &DevicePath) -> Result<Vec<Entry>, AppError>;

    /// Pull one file into `dest_dir`, streaming the bridge's native
    /// progress output to the terminal unmodified. Blocks until done.
    fn pull(&self, src: &DevicePath, dest_dir: &Path) -> Result<(), AppError>;
}
