//! src/fs/entry.rs
//! ============================================================================
//! # Entry: One Listed Item
//!
//! Produced fresh on every listing request — device or host filesystems may
//! change between views, so entries are never cached across navigation.

/// One item of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Bare name, no path separators.
    pub name: String,
    pub is_dir: bool,
    /// Size in bytes; `None` for directories (no meaningful size).
    pub size: Option<u64>,
}

impl Entry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            size: None,
        }
    }

    pub fn file(name: impl Into<String>, size: Option<u64>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            size,
        }
    }

    /// Human-friendly file size; empty for directories and unknown sizes.
    pub fn size_human(&self) -> String {
        match self.size {
            Some(bytes) => bytesize::ByteSize::b(bytes).to_string(),
            None => String::new(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_human_is_empty_for_dirs() {
        assert_eq!(Entry::dir("DCIM").size_human(), "");
        assert!(!Entry::file("a.jpg", Some(2048)).size_human().is_empty());
    }

    #[test]
    fn hidden_entries_are_dotfiles() {
        assert!(Entry::file(".nomedia", Some(0)).is_hidden());
        assert!(!Entry::dir("Download").is_hidden());
    }
}
