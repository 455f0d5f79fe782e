use std::path::{Path, PathBuf};

use crate::app::domain::{DocumentHandle, EditorHost, TextSurface, WindowShell};
use crate::app::services::file_filters::{with_default_extension, TEXT_FILE_FILTERS};
use crate::app::services::file_io::{read_text, write_text};

/// What a file operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    /// The user dismissed the dialog.
    Cancelled,
    /// An I/O error was shown to the user. Nothing changed.
    Failed,
}

/// Keeps the editor buffer and the file it came from in sync.
///
/// The buffer itself lives in the text surface; this controller only owns the
/// handle. Failed reads and writes are reported through the window's error
/// dialog and never change the handle or the buffer.
#[derive(Debug, Default)]
pub struct DocumentController {
    handle: DocumentHandle,
}

impl DocumentController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> &DocumentHandle {
        &self.handle
    }

    pub fn title(&self) -> String {
        self.handle.window_title()
    }

    /// Clear the buffer and forget the file. Unsaved text is discarded.
    pub fn new_document<H: TextSurface + WindowShell + ?Sized>(&mut self, host: &mut H) {
        host.set_text("");
        self.handle = DocumentHandle::Untitled;
        host.set_title(&self.title());
    }

    pub fn open_document<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Outcome {
        match host.pick_open(&TEXT_FILE_FILTERS) {
            Some(path) => self.open_path(path, host),
            None => Outcome::Cancelled,
        }
    }

    /// Load `path` into the buffer. The buffer is only replaced after the whole
    /// file was read successfully.
    pub fn open_path<H: TextSurface + WindowShell + ?Sized>(&mut self, path: PathBuf, host: &mut H) -> Outcome {
        match read_text(&path) {
            Ok(content) => {
                host.set_text(&content);
                self.handle = DocumentHandle::Bound(path);
                host.set_title(&self.title());
                Outcome::Done
            }
            Err(e) => {
                host.show_error(&format!("Couldn't open file: {}", e.user_message()));
                Outcome::Failed
            }
        }
    }

    /// Overwrite the bound file, or fall back to "Save As" when untitled.
    pub fn save_document<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Outcome {
        let Some(path) = self.handle.path().map(Path::to_path_buf) else {
            return self.save_document_as(host);
        };
        match write_text(&path, &host.text()) {
            Ok(()) => Outcome::Done,
            Err(e) => {
                host.show_error(&format!("Couldn't save file: {}", e.user_message()));
                Outcome::Failed
            }
        }
    }

    pub fn save_document_as<H: EditorHost + ?Sized>(&mut self, host: &mut H) -> Outcome {
        match host.pick_save(&TEXT_FILE_FILTERS) {
            Some(path) => self.save_to_path(with_default_extension(path), host),
            None => Outcome::Cancelled,
        }
    }

    /// Write the buffer to `path` and bind to it. On failure the previous
    /// binding is kept, so later plain saves still go to the old file.
    pub fn save_to_path<H: TextSurface + WindowShell + ?Sized>(&mut self, path: PathBuf, host: &mut H) -> Outcome {
        match write_text(&path, &host.text()) {
            Ok(()) => {
                self.handle = DocumentHandle::Bound(path);
                host.set_title(&self.title());
                Outcome::Done
            }
            Err(e) => {
                host.show_error(&format!("Couldn't save file: {}", e.user_message()));
                Outcome::Failed
            }
        }
    }
}
