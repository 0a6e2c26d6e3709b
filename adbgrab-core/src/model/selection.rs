//! src/model/selection.rs
//! ============================================================================
//! # SelectionSet: Persistent Transfer Marks
//!
//! The set of absolute device file paths marked for transfer. Membership is
//! independent of which directory is currently displayed; the set is the
//! single source of truth for "what will be copied". Insertion order is
//! preserved because the transfer batch runs in that order.

use indexmap::IndexSet;

use crate::model::nav::DevicePath;

#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    paths: IndexSet<DevicePath>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the path if absent, remove it if present.
    /// Returns `true` when the path is selected afterwards.
    pub fn toggle(&mut self, path: DevicePath) -> bool {
        if self.paths.shift_remove(&path) {
            false
        } else {
            self.paths.insert(path);
            true
        }
    }

    pub fn contains(&self, path: &DevicePath) -> bool {
        self.paths.contains(path)
    }

    /// Remove one path (used when a transferred file leaves the set).
    pub fn remove(&mut self, path: &DevicePath) -> bool {
        self.paths.shift_remove(path)
    }

    pub fn clear(&mut self) {
        self.paths.clear();
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Iterate in insertion order — the deterministic transfer order.
    pub fn iter(&self) -> impl Iterator<Item = &DevicePath> {
        self.paths.iter()
    }

    /// Snapshot in insertion order for building a transfer batch.
    pub fn to_vec(&self) -> Vec<DevicePath> {
        self.paths.iter().cloned().collect()
    }
}
