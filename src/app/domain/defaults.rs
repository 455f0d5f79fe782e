//! Fixed application defaults. Nothing here is user-configurable.

use super::font::FontSize;

pub const APP_NAME: &str = "Simple Notepad";

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;
pub const MENU_HEIGHT: i32 = 30;

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_FONT_SIZE: FontSize = FontSize::DEFAULT;

/// Extension appended to "Save As" names that have none.
pub const DEFAULT_EXTENSION: &str = "txt";

// Dark theme, RGB
pub const BACKGROUND_RGB: (u8, u8, u8) = (0, 0, 0);
pub const FOREGROUND_RGB: (u8, u8, u8) = (255, 165, 0);
pub const SELECTION_RGB: (u8, u8, u8) = (0x33, 0x33, 0x33);
