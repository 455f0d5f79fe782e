use std::path::PathBuf;

use crate::app::domain::defaults::DEFAULT_EXTENSION;
use crate::app::domain::FileFilter;

/// Filters offered by both the Open and the Save dialogs.
pub const TEXT_FILE_FILTERS: [FileFilter; 2] = [
    FileFilter { description: "Text Files", pattern: "*.txt" },
    FileFilter { description: "All Files", pattern: "*.*" },
];

/// Build the filter string for FLTK's native chooser.
///
/// FLTK format: "Description\tPattern\nDescription2\tPattern2".
/// The Windows-style "*.*" is passed as "*" so files without an extension
/// still match on GTK and macOS.
pub fn fltk_filter_string(filters: &[FileFilter]) -> String {
    filters
        .iter()
        .map(|f| {
            let pattern = if f.pattern == "*.*" { "*" } else { f.pattern };
            format!("{}\t{}", f.description, pattern)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Append the default extension when the chosen save name has none.
pub fn with_default_extension(mut path: PathBuf) -> PathBuf {
    if path.extension().is_none() {
        path.set_extension(DEFAULT_EXTENSION);
    }
    path
}
