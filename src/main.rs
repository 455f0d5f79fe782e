use fltk::{app, enums::Event, prelude::*};

use simple_notepad::app::{AppState, FltkHost, Message, SystemFonts};
use simple_notepad::ui::main_window::build_main_window;
use simple_notepad::ui::menu::build_menu;
use simple_notepad::ui::theme::apply_theme;
#[cfg(target_os = "windows")]
use simple_notepad::ui::theme::set_dark_titlebar;

fn main() {
    let app = app::App::default().load_system_fonts();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window();
    apply_theme(&mut widgets.text_editor, &mut widgets.wind, &mut widgets.menu);

    let fonts = SystemFonts::load();
    let host = FltkHost::new(
        widgets.wind.clone(),
        widgets.text_editor.clone(),
        widgets.buffer.clone(),
        fonts.clone(),
    );
    let mut state = AppState::new(host, &fonts);
    build_menu(&mut widgets.menu, &sender, &state.menu_entries());

    // Closing the window quits; Escape (FLTK's default close key) does nothing.
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::FileQuit);
        }
    });

    widgets.wind.show();
    #[cfg(target_os = "windows")]
    set_dark_titlebar(&widgets.wind);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            if state.handle(msg) {
                app.quit();
            }
        }
    }
}
