//! The menu bar as data: one entry per menu item, each carrying the message it
//! sends. `ui::menu` installs the table into the FLTK menu bar.

use fltk::{enums::Shortcut, menu::MenuFlag};

use crate::app::domain::{FontDescriptor, Message, SIZE_PRESETS};

#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub path: String,
    pub shortcut: Shortcut,
    pub flags: MenuFlag,
    pub message: Message,
}

impl MenuEntry {
    fn new(path: impl Into<String>, shortcut: Shortcut, flags: MenuFlag, message: Message) -> Self {
        Self {
            path: path.into(),
            shortcut,
            flags,
            message,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.flags.contains(MenuFlag::Value)
    }
}

fn radio(selected: bool) -> MenuFlag {
    if selected { MenuFlag::Radio | MenuFlag::Value } else { MenuFlag::Radio }
}

fn toggle(checked: bool) -> MenuFlag {
    if checked { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle }
}

/// Escape a label so FLTK treats it as a single menu item.
///
/// `/` and `\` would split or escape the path, `&` marks a keyboard mnemonic,
/// and a leading `_` draws a divider.
pub fn escape_menu_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for (i, c) in label.chars().enumerate() {
        match c {
            '\\' | '/' => {
                out.push('\\');
                out.push(c);
            }
            '&' => out.push_str("&&"),
            '_' if i == 0 => out.push_str("\\_"),
            _ => out.push(c),
        }
    }
    out
}

/// Build the full action table.
///
/// `families` becomes the Format/Font list in the given order; `font` decides
/// which radio and toggle items start checked.
pub fn build_action_table(families: &[String], font: &FontDescriptor) -> Vec<MenuEntry> {
    let mut entries = vec![
        // File
        MenuEntry::new("File/New", Shortcut::Ctrl | 'n', MenuFlag::Normal, Message::FileNew),
        MenuEntry::new("File/Open", Shortcut::Ctrl | 'o', MenuFlag::Normal, Message::FileOpen),
        MenuEntry::new("File/Save", Shortcut::Ctrl | 's', MenuFlag::MenuDivider, Message::FileSave),
        MenuEntry::new("File/Exit", Shortcut::Ctrl | 'q', MenuFlag::Normal, Message::FileQuit),
        // Edit
        MenuEntry::new("Edit/Cut", Shortcut::Ctrl | 'x', MenuFlag::Normal, Message::EditCut),
        MenuEntry::new("Edit/Copy", Shortcut::Ctrl | 'c', MenuFlag::Normal, Message::EditCopy),
        MenuEntry::new("Edit/Paste", Shortcut::Ctrl | 'v', MenuFlag::Normal, Message::EditPaste),
    ];

    // Format
    for family in families {
        entries.push(MenuEntry::new(
            format!("Format/Font/{}", escape_menu_label(family)),
            Shortcut::None,
            radio(*family == font.family),
            Message::SetFontFamily(family.clone()),
        ));
    }
    for size in SIZE_PRESETS {
        entries.push(MenuEntry::new(
            format!("Format/Size/{}", size),
            Shortcut::None,
            radio(size == font.size),
            Message::SetFontSize(size),
        ));
    }
    entries.push(MenuEntry::new("Format/Bold", Shortcut::Ctrl | 'b', toggle(font.bold), Message::ToggleBold));
    entries.push(MenuEntry::new("Format/Italic", Shortcut::Ctrl | 'i', toggle(font.italic), Message::ToggleItalic));
    entries.push(MenuEntry::new("Format/Underline", Shortcut::Ctrl | 'u', toggle(font.underline), Message::ToggleUnderline));

    entries
}
