use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::domain::defaults::{APP_NAME, MENU_HEIGHT, WINDOW_HEIGHT, WINDOW_WIDTH};

pub struct MainWidgets {
    pub wind: Window,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, APP_NAME);
    wind.set_xclass("SimpleNotepad");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    // Fills the rest of the window; the vertical scrollbar is part of the widget.
    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.wrap_mode(WrapMode::None, 0);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        menu,
        text_editor,
        buffer,
    }
}
