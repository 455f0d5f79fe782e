use crate::app::domain::{FontDescriptor, FontSize, TextSurface};
use crate::app::error::{AppError, Result};

/// The editor's current font: family, size and style flags.
///
/// Every mutator rebuilds the descriptor from these fields and applies it, so
/// the order of changes never matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontState {
    family: String,
    size: FontSize,
    bold: bool,
    italic: bool,
    underline: bool,
}

impl FontState {
    pub fn new(family: impl Into<String>, size: FontSize) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    pub fn descriptor(&self) -> FontDescriptor {
        FontDescriptor {
            family: self.family.clone(),
            size: self.size,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
        }
    }

    /// Push the current descriptor to the surface.
    pub fn apply<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        surface.apply_font(&self.descriptor());
    }

    /// Switch family, keeping size and styles. Blank names are rejected and
    /// leave the state untouched.
    pub fn set_family<S: TextSurface + ?Sized>(&mut self, name: &str, surface: &mut S) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AppError::EmptyFontFamily);
        }
        self.family = name.to_string();
        self.apply(surface);
        Ok(())
    }

    pub fn set_size<S: TextSurface + ?Sized>(&mut self, size: FontSize, surface: &mut S) {
        self.size = size;
        self.apply(surface);
    }

    pub fn toggle_bold<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        self.bold = !self.bold;
        self.apply(surface);
    }

    pub fn toggle_italic<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        self.italic = !self.italic;
        self.apply(surface);
    }

    pub fn toggle_underline<S: TextSurface + ?Sized>(&mut self, surface: &mut S) {
        self.underline = !self.underline;
        self.apply(surface);
    }
}
