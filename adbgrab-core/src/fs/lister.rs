//! src/fs/lister.rs
//! ============================================================================
//! # Lister: The Directory Listing Adapter
//!
//! One entry point per mode, both returning the same shape: a fresh,
//! ordered `Vec<Entry>` or a recoverable listing error. Ordering is
//! directories before files, case-insensitive name order within each group,
//! so navigation stays stable and predictable.

use std::path::Path;

use crate::bridge::runner::DeviceBridge;
use crate::error::AppError;
use crate::fs::entry::Entry;
use crate::fs::host_scanner;
use crate::model::nav::DevicePath;

pub struct Lister<'a, B: DeviceBridge> {
    bridge: &'a B,
    show_hidden: bool,
}

impl<'a, B: DeviceBridge> Lister<'a, B> {
    pub fn new(bridge: &'a B, show_hidden: bool) -> Self {
        Self {
            bridge,
            show_hidden,
        }
    }

    /// List a device directory through the bridge.
    pub fn list_device(&self, path: &DevicePath) -> Result<Vec<Entry>, AppError> {
        let entries: Vec<Entry> = self.bridge.list_dir(path)?;
        Ok(self.finish(entries))
    }

    /// List a host directory (curated at the Host top level).
    pub fn list_host(&self, path: &Path, top: &Path) -> Result<Vec<Entry>, AppError> {
        let entries: Vec<Entry> = host_scanner::scan(path, top)?;
        Ok(self.finish(entries))
    }

    fn finish(&self, mut entries: Vec<Entry>) -> Vec<Entry> {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        sort_entries(&mut entries);
        entries
    }
}

/// Directories strictly before files, then case-insensitive name order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedBridge {
        entries: Vec<Entry>,
    }

    impl DeviceBridge for CannedBridge {
        fn probe(&self) -> Result<(), AppError> {
            Ok(())
        }

        fn list_dir(&self, _path: &DevicePath) -> Result<Vec<Entry>, AppError> {
            Ok(self.entries.clone())
        }

        fn pull(&self, src: &DevicePath, _dest_dir: &Path) -> Result<(), AppError> {
            Err(AppError::pull_failed(src.as_str(), "not scripted"))
        }
    }

    #[test]
    fn directories_precede_files_case_insensitively() {
        let mut entries = vec![
            Entry::file("zeta.txt", Some(1)),
            Entry::dir("music"),
            Entry::file("Alpha.txt", Some(1)),
            Entry::dir("DCIM"),
            Entry::file("beta.txt", Some(1)),
        ];
        sort_entries(&mut entries);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["DCIM", "music", "Alpha.txt", "beta.txt", "zeta.txt"]);

        // directories never interleave after files
        let first_file = entries.iter().position(|e| !e.is_dir).unwrap();
        assert!(entries[first_file..].iter().all(|e| !e.is_dir));
    }

    #[test]
    fn hidden_entries_follow_config() {
        let bridge = CannedBridge {
            entries: vec![
                Entry::file(".nomedia", Some(0)),
                Entry::dir(".thumbnails"),
                Entry::file("a.jpg", Some(10)),
            ],
        };

        let hidden_off = Lister::new(&bridge, false)
            .list_device(&DevicePath::new("/sdcard"))
            .unwrap();
        assert_eq!(hidden_off.len(), 1);
        assert_eq!(hidden_off[0].name, "a.jpg");

        let hidden_on = Lister::new(&bridge, true)
            .list_device(&DevicePath::new("/sdcard"))
            .unwrap();
        assert_eq!(hidden_on.len(), 3);
    }
}
