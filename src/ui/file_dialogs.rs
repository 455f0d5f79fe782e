use std::path::PathBuf;

use fltk::dialog::{FileDialogType, NativeFileChooser};

use crate::app::domain::FileFilter;
use crate::app::services::file_filters::fltk_filter_string;

fn run_chooser(kind: FileDialogType, title: &str, filters: &[FileFilter]) -> Option<PathBuf> {
    let mut nfc = NativeFileChooser::new(kind);
    nfc.set_title(title);
    nfc.set_filter(&fltk_filter_string(filters));
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    if filename.as_os_str().is_empty() { None } else { Some(filename) }
}

pub fn native_open_dialog(filters: &[FileFilter]) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseFile, "Open", filters)
}

pub fn native_save_dialog(filters: &[FileFilter]) -> Option<PathBuf> {
    run_chooser(FileDialogType::BrowseSaveFile, "Save As", filters)
}
