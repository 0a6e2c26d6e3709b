//! src/fs/host_scanner.rs
//! ============================================================================
//! # Host Scanner: Destination-Side Listing
//!
//! Local filesystem enumeration for Host mode. At the Host top level (the
//! directory Host mode opens in) the listing is a curated destination
//! picker: the volume root plus the user's Downloads and Desktop folders.
//! This is a UX constraint, not a filesystem limitation, and it applies
//! only at the top level — once the user descends into a chosen root the
//! listing is an ordinary directory listing.

use std::path::Path;

use tracing::warn;

use crate::error::AppError;
use crate::fs::entry::Entry;

/// List `path`. When `path` is the Host top level the curated picker view
/// is returned instead of the raw directory contents.
pub fn scan(path: &Path, top: &Path) -> Result<Vec<Entry>, AppError> {
    if path == top {
        return Ok(curated_top_level(top));
    }
    scan_plain(path)
}

/// The curated destination-picker entries for the top level.
fn curated_top_level(top: &Path) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();

    for well_known in ["Downloads", "Desktop"] {
        if top.join(well_known).is_dir() {
            entries.push(Entry::dir(well_known));
        }
    }

    // Volume root; joining its name onto any absolute path yields the root.
    if Path::new("/").is_dir() {
        entries.push(Entry::dir("/"));
    }

    entries
}

/// Ordinary directory listing. Unreadable entries are skipped, not fatal.
fn scan_plain(path: &Path) -> Result<Vec<Entry>, AppError> {
    let read_dir = std::fs::read_dir(path)
        .map_err(|e| AppError::listing_failed(path.display().to_string(), e.to_string()))?;

    let mut entries: Vec<Entry> = Vec::new();
    for item in read_dir {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                warn!("skipping unreadable entry in {}: {e}", path.display());
                continue;
            }
        };

        let name: String = item.file_name().to_string_lossy().into_owned();
        match item.metadata() {
            Ok(meta) if meta.is_dir() => entries.push(Entry::dir(name)),
            Ok(meta) => entries.push(Entry::file(name, Some(meta.len()))),
            Err(e) => {
                warn!("skipping {name:?}: {e}");
            }
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn top_level_is_curated_only() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir(home.path().join("Downloads")).unwrap();
        fs::create_dir(home.path().join("Desktop")).unwrap();
        fs::create_dir(home.path().join("Documents")).unwrap();
        fs::write(home.path().join("stray.txt"), b"x").unwrap();

        let entries = scan(home.path(), home.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();

        assert!(names.contains(&"Downloads"));
        assert!(names.contains(&"Desktop"));
        assert!(names.contains(&"/"));
        assert!(!names.contains(&"Documents"));
        assert!(!names.contains(&"stray.txt"));
    }

    #[test]
    fn curated_omits_missing_well_known_dirs() {
        let home = tempfile::tempdir().unwrap();
        fs::create_dir(home.path().join("Downloads")).unwrap();

        let entries = scan(home.path(), home.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert!(names.contains(&"Downloads"));
        assert!(!names.contains(&"Desktop"));
    }

    #[test]
    fn below_top_level_is_unfiltered() {
        let home = tempfile::tempdir().unwrap();
        let sub = home.path().join("Downloads");
        fs::create_dir(&sub).unwrap();
        fs::create_dir(sub.join("nested")).unwrap();
        fs::write(sub.join("report.pdf"), vec![0u8; 256]).unwrap();

        let entries = scan(&sub, home.path()).unwrap();
        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        assert_eq!(names, ["nested", "report.pdf"]);

        let pdf = entries.iter().find(|e| e.name == "report.pdf").unwrap();
        assert_eq!(pdf.size, Some(256));
        assert!(!pdf.is_dir);
    }

    #[test]
    fn missing_directory_is_a_listing_error() {
        let home = tempfile::tempdir().unwrap();
        let gone = home.path().join("vanished");
        let err = scan(&gone, home.path()).unwrap_err();
        assert!(matches!(err, AppError::Listing { .. }));
    }
}
