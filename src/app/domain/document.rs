use std::path::{Path, PathBuf};

use super::defaults::APP_NAME;

/// Association between the editor buffer and a file on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DocumentHandle {
    #[default]
    Untitled,
    Bound(PathBuf),
}

impl DocumentHandle {
    pub fn path(&self) -> Option<&Path> {
        match self {
            DocumentHandle::Untitled => None,
            DocumentHandle::Bound(path) => Some(path),
        }
    }

    pub fn is_untitled(&self) -> bool {
        matches!(self, DocumentHandle::Untitled)
    }

    /// Window title for this handle: the app name, followed by the path when bound.
    pub fn window_title(&self) -> String {
        match self {
            DocumentHandle::Untitled => APP_NAME.to_string(),
            DocumentHandle::Bound(path) => format!("{} - {}", APP_NAME, path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_untitled() {
        let handle = DocumentHandle::default();
        assert!(handle.is_untitled());
        assert_eq!(handle.path(), None);
    }

    #[test]
    fn test_window_title() {
        assert_eq!(DocumentHandle::Untitled.window_title(), "Simple Notepad");
        let bound = DocumentHandle::Bound(PathBuf::from("/tmp/a.txt"));
        assert_eq!(bound.window_title(), "Simple Notepad - /tmp/a.txt");
        assert_eq!(bound.path(), Some(Path::new("/tmp/a.txt")));
    }
}
