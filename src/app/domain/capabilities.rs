//! Services the core depends on but does not implement.
//!
//! The FLTK host in `infrastructure` provides all of them for the running
//! app; tests drive the controllers with in-memory fakes instead.

use std::path::PathBuf;

use super::font::FontDescriptor;

/// A `(description, pattern)` pair shown in file dialogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileFilter {
    pub description: &'static str,
    pub pattern: &'static str,
}

/// The editable text area.
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    /// Render all text with `font`. Unknown families fall back to a default face.
    fn apply_font(&mut self, font: &FontDescriptor);
    fn cut(&mut self);
    fn copy(&mut self);
    fn paste(&mut self);
}

/// Native file-selection dialogs. `None` means the user cancelled.
pub trait FilePicker {
    fn pick_open(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;
    fn pick_save(&mut self, filters: &[FileFilter]) -> Option<PathBuf>;
}

/// Top-level window chrome.
pub trait WindowShell {
    fn set_title(&mut self, title: &str);
    /// Show a modal error dialog.
    fn show_error(&mut self, message: &str);
}

/// Font families installed on the host.
pub trait FontCatalog {
    fn list_available_font_families(&self) -> Vec<String>;
}

/// Everything the document and font controllers need from the window.
pub trait EditorHost: TextSurface + FilePicker + WindowShell {}

impl<T: TextSurface + FilePicker + WindowShell> EditorHost for T {}
