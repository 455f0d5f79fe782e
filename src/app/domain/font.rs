use std::fmt;

use crate::app::error::{AppError, Result};

/// A point size for the editor font. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u32);

impl FontSize {
    pub const DEFAULT: FontSize = FontSize(12);

    pub fn new(points: u32) -> Result<Self> {
        if points == 0 {
            return Err(AppError::InvalidFontSize(points));
        }
        Ok(Self(points))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sizes offered in the Format/Size menu.
pub const SIZE_PRESETS: [FontSize; 16] = [
    FontSize(8),
    FontSize(9),
    FontSize(10),
    FontSize(11),
    FontSize(12),
    FontSize(14),
    FontSize(16),
    FontSize(18),
    FontSize(20),
    FontSize(22),
    FontSize(24),
    FontSize(26),
    FontSize(28),
    FontSize(36),
    FontSize(48),
    FontSize(72),
];

/// The complete font applied to the text surface.
///
/// A descriptor is never patched in place: every change to family, size or
/// style produces a fresh one, so what the editor shows always matches the
/// menu state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontDescriptor {
    pub family: String,
    pub size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl FontDescriptor {
    /// Regular (non-bold, upright, not underlined) face of `family`.
    pub fn regular(family: impl Into<String>, size: FontSize) -> Self {
        Self {
            family: family.into(),
            size,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.size)?;
        if self.bold {
            write!(f, " bold")?;
        }
        if self.italic {
            write!(f, " italic")?;
        }
        if self.underline {
            write!(f, " underline")?;
        }
        Ok(())
    }
}
