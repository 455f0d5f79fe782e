//! In-memory stand-ins for the FLTK host, used by controller tests.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::app::domain::{FileFilter, FilePicker, FontDescriptor, TextSurface, WindowShell};

#[derive(Default)]
pub struct FakeHost {
    pub text: String,
    pub applied_fonts: Vec<FontDescriptor>,
    pub clipboard: String,
    pub title: String,
    pub errors: Vec<String>,
    /// Answers for the next dialogs; an empty queue or `None` means cancel.
    pub open_answers: VecDeque<Option<PathBuf>>,
    pub save_answers: VecDeque<Option<PathBuf>>,
    pub last_filters: Vec<FileFilter>,
}

impl FakeHost {
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn answer_open(&mut self, path: impl Into<PathBuf>) {
        self.open_answers.push_back(Some(path.into()));
    }

    pub fn answer_save(&mut self, path: impl Into<PathBuf>) {
        self.save_answers.push_back(Some(path.into()));
    }

    pub fn last_font(&self) -> Option<&FontDescriptor> {
        self.applied_fonts.last()
    }
}

impl TextSurface for FakeHost {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn apply_font(&mut self, font: &FontDescriptor) {
        self.applied_fonts.push(font.clone());
    }

    // No selection model: cut and copy act on the whole text.
    fn cut(&mut self) {
        self.clipboard = std::mem::take(&mut self.text);
    }

    fn copy(&mut self) {
        self.clipboard = self.text.clone();
    }

    fn paste(&mut self) {
        self.text.push_str(&self.clipboard);
    }
}

impl FilePicker for FakeHost {
    fn pick_open(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.last_filters = filters.to_vec();
        self.open_answers.pop_front().flatten()
    }

    fn pick_save(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        self.last_filters = filters.to_vec();
        self.save_answers.pop_front().flatten()
    }
}

impl WindowShell for FakeHost {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}
