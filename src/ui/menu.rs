use fltk::{app::Sender, menu::MenuBar, prelude::*};

use crate::app::domain::Message;
use crate::app::services::menu_binder::MenuEntry;

/// Install the action table. Each item sends its own copy of the entry's message.
pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, entries: &[MenuEntry]) {
    for entry in entries {
        let s = *sender;
        let message = entry.message.clone();
        menu.add(&entry.path, entry.shortcut, entry.flags, move |_| s.send(message.clone()));
    }
}
