use std::ffi::{c_char, c_void, CStr};
use std::path::PathBuf;

use fltk::{
    dialog,
    prelude::*,
    text::{StyleTableEntryExt, TextAttr, TextBuffer, TextEditor},
    window::Window,
};

use super::fonts::SystemFonts;
use crate::app::domain::{FileFilter, FilePicker, FontDescriptor, TextSurface, WindowShell};
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};
use crate::ui::theme::{background, foreground};

/// The real window, backed by FLTK widgets and native dialogs.
pub struct FltkHost {
    window: Window,
    editor: TextEditor,
    buffer: TextBuffer,
    style_buffer: TextBuffer,
    fonts: SystemFonts,
}

impl FltkHost {
    pub fn new(window: Window, editor: TextEditor, mut buffer: TextBuffer, fonts: SystemFonts) -> Self {
        // Underline is a style attribute, so every character needs a style
        // byte. Mirror each edit with filler 'A's (the one style entry).
        let style_buffer = TextBuffer::default();
        let mut style_buf = style_buffer.clone();
        buffer.add_modify_callback(move |pos, inserted, deleted, _restyled, _deleted_text| {
            if deleted > 0 {
                style_buf.remove(pos, pos + deleted);
            }
            if inserted > 0 {
                style_buf.insert(pos, &"A".repeat(inserted as usize));
            }
        });

        Self {
            window,
            editor,
            buffer,
            style_buffer,
            fonts,
        }
    }
}

impl TextSurface for FltkHost {
    fn text(&self) -> String {
        // `TextBuffer::text()` never frees the malloc'd copy FLTK hands back,
        // and saving reads the whole buffer. Copy it out and free it here.
        unsafe extern "C" {
            fn Fl_Text_Buffer_text(buf: *mut c_void) -> *mut c_char;
            fn free(ptr: *mut c_void);
        }

        // SAFETY: `self.buffer` is alive for the call; the returned pointer is
        // either null or a NUL-terminated malloc'd string freed exactly once.
        unsafe {
            let copy = Fl_Text_Buffer_text(self.buffer.as_ptr() as *mut c_void);
            if copy.is_null() {
                return String::new();
            }
            let text = CStr::from_ptr(copy).to_string_lossy().into_owned();
            free(copy as *mut c_void);
            text
        }
    }

    fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.editor.set_insert_position(0);
        self.editor.show_insert_position();
    }

    fn apply_font(&mut self, font: &FontDescriptor) {
        let face = self.fonts.resolve(font);
        let size = font.size.get() as i32;
        // Cursor and line metrics come from the plain text font.
        self.editor.set_text_font(face);
        self.editor.set_text_size(size);

        let attr = if font.underline { TextAttr::Underline } else { TextAttr::None };
        let entry = StyleTableEntryExt {
            color: foreground(),
            attr,
            font: face,
            size,
            bgcolor: background(),
        };
        self.editor.set_highlight_data_ext(self.style_buffer.clone(), vec![entry]);
        self.editor.redraw();
    }

    fn cut(&mut self) {
        self.editor.cut();
    }

    fn copy(&mut self) {
        self.editor.copy();
    }

    fn paste(&mut self) {
        self.editor.paste();
    }
}

impl FilePicker for FltkHost {
    fn pick_open(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        native_open_dialog(filters)
    }

    fn pick_save(&mut self, filters: &[FileFilter]) -> Option<PathBuf> {
        native_save_dialog(filters)
    }
}

impl WindowShell for FltkHost {
    fn set_title(&mut self, title: &str) {
        self.window.set_label(title);
    }

    fn show_error(&mut self, message: &str) {
        dialog::message_title("Error");
        dialog::alert_default(message);
    }
}
