use fltk::{app, enums::Color, menu::MenuBar, prelude::*, text::TextEditor, window::Window};

use crate::app::domain::defaults::{BACKGROUND_RGB, FOREGROUND_RGB, SELECTION_RGB};

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::from_rgb(r, g, b)
}

pub fn background() -> Color {
    rgb(BACKGROUND_RGB)
}

pub fn foreground() -> Color {
    rgb(FOREGROUND_RGB)
}

/// Apply the fixed dark theme: black background, orange text and cursor.
pub fn apply_theme(editor: &mut TextEditor, window: &mut Window, menu: &mut MenuBar) {
    // Scrollbars and dialogs take their colors from the global scheme.
    let (br, bg, bb) = BACKGROUND_RGB;
    let (fr, fg, fb) = FOREGROUND_RGB;
    app::background(br, bg, bb);
    app::foreground(fr, fg, fb);

    editor.set_color(background());
    editor.set_text_color(foreground());
    editor.set_cursor_color(foreground());
    editor.set_selection_color(rgb(SELECTION_RGB));
    window.set_color(background());
    window.set_label_color(foreground());
    menu.set_color(background());
    menu.set_text_color(foreground());
    menu.set_selection_color(rgb(SELECTION_RGB)); // Hover color

    editor.redraw();
    window.redraw();
    menu.redraw();
}

/// Ask DWM for a dark title bar to match the window body.
///
/// Needs a native handle, so call it after `window.show()`. Attribute 20 is
/// `DWMWA_USE_IMMERSIVE_DARK_MODE` on Windows 10 2004 and later; 19 is the
/// same switch on builds 1809 to 1909. Unsupported attributes fail silently.
#[cfg(target_os = "windows")]
pub fn set_dark_titlebar(window: &Window) {
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DwmSetWindowAttribute, DWMWINDOWATTRIBUTE};

    let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);
    let enabled: i32 = 1;
    for attribute in [20, 19] {
        // SAFETY: hwnd belongs to a shown window; the value pointer and size
        // describe `enabled`, which outlives the call.
        let _ = unsafe {
            DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                std::ptr::from_ref(&enabled).cast(),
                std::mem::size_of::<i32>() as u32,
            )
        };
    }
}
