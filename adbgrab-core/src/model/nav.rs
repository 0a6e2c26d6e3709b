//! src/model/nav.rs
//! ============================================================================
//! # Navigation Context: Browse Modes and Device Paths
//!
//! The two navigation contexts (device browser vs. host destination browser)
//! and the device-side path type. Host paths are plain `PathBuf`; device
//! paths are `/`-separated strings kept absolute and normalized here.

use serde::{Deserialize, Serialize};

/// Which filesystem the browser is currently rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseMode {
    /// Browsing the Android device through the bridge.
    Device,
    /// Picking a destination directory on the host machine.
    Host,
}

impl BrowseMode {
    /// The other mode. `toggled` twice is the identity.
    pub fn toggled(self) -> Self {
        match self {
            Self::Device => Self::Host,
            Self::Host => Self::Device,
        }
    }
}

impl std::fmt::Display for BrowseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Device => write!(f, "Android Device"),
            Self::Host => write!(f, "PC Destination"),
        }
    }
}

/// Absolute, normalized path on the device filesystem.
///
/// Invariants: always starts with `/`, never ends with `/` except for the
/// root itself, no empty components.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DevicePath(String);

impl DevicePath {
    /// The device filesystem root.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    /// Build a normalized absolute path from arbitrary input.
    ///
    /// Relative input is treated as rooted; duplicate and trailing
    /// separators are collapsed.
    pub fn new(raw: &str) -> Self {
        let mut normalized = String::with_capacity(raw.len() + 1);
        for component in raw.split('/').filter(|c| !c.is_empty()) {
            normalized.push('/');
            normalized.push_str(component);
        }
        if normalized.is_empty() {
            normalized.push('/');
        }
        Self(normalized)
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }

    /// Append one child component. `name` must not contain separators;
    /// a name that does is normalized away rather than trusted.
    pub fn join(&self, name: &str) -> Self {
        Self::new(&format!("{}/{}", self.0, name))
    }

    /// Parent directory, floored at the root: the root is its own parent.
    pub fn parent(&self) -> Self {
        match self.0.rfind('/') {
            Some(0) | None => Self::root(),
            Some(idx) => Self(self.0[..idx].to_string()),
        }
    }

    /// Final path component; empty string for the root.
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DevicePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_normalizes_separators() {
        assert_eq!(DevicePath::new("/sdcard//DCIM/").as_str(), "/sdcard/DCIM");
        assert_eq!(DevicePath::new("sdcard").as_str(), "/sdcard");
        assert_eq!(DevicePath::new("").as_str(), "/");
        assert_eq!(DevicePath::new("///").as_str(), "/");
    }

    #[test]
    fn join_appends_one_component() {
        let base = DevicePath::new("/storage/emulated/0");
        assert_eq!(base.join("DCIM").as_str(), "/storage/emulated/0/DCIM");
        // a separator smuggled into a name is normalized, not trusted
        assert_eq!(DevicePath::root().join("a/b").as_str(), "/a/b");
    }

    #[test]
    fn parent_is_floored_at_root() {
        let path = DevicePath::new("/storage/emulated/0");
        assert_eq!(path.parent().as_str(), "/storage/emulated");
        assert_eq!(DevicePath::new("/storage").parent().as_str(), "/");
        // root is a terminal fixed point
        assert_eq!(DevicePath::root().parent(), DevicePath::root());
    }

    #[test]
    fn repeated_parent_stabilizes_at_root() {
        let mut path = DevicePath::new("/storage/emulated/0/DCIM/Camera");
        for _ in 0..16 {
            path = path.parent();
        }
        assert!(path.is_root());
    }

    #[test]
    fn file_name_returns_last_component() {
        assert_eq!(DevicePath::new("/sdcard/DCIM/a.jpg").file_name(), "a.jpg");
        assert_eq!(DevicePath::root().file_name(), "");
    }

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(BrowseMode::Device.toggled(), BrowseMode::Host);
        assert_eq!(BrowseMode::Device.toggled().toggled(), BrowseMode::Device);
    }
}
