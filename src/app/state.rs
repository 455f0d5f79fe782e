use super::controllers::{DocumentController, FontState};
use super::domain::defaults::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use super::domain::{EditorHost, FontCatalog, Message};
use super::services::menu_binder::{build_action_table, MenuEntry};

/// Main application coordinator: owns the font and document state and routes
/// every menu message to them.
pub struct AppState<H: EditorHost> {
    pub host: H,
    pub font: FontState,
    pub document: DocumentController,
    families: Vec<String>,
}

impl<H: EditorHost> AppState<H> {
    /// Apply the default font and title. The catalog is read once here and
    /// kept for the life of the process.
    pub fn new(mut host: H, catalog: &impl FontCatalog) -> Self {
        let font = FontState::new(DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE);
        let document = DocumentController::new();
        font.apply(&mut host);
        host.set_title(&document.title());

        Self {
            host,
            font,
            document,
            families: catalog.list_available_font_families(),
        }
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// The menu bar for the current state.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        build_action_table(&self.families, &self.font.descriptor())
    }

    /// Handle one message. Returns true when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match msg {
            Message::FileNew => self.document.new_document(&mut self.host),
            Message::FileOpen => {
                self.document.open_document(&mut self.host);
            }
            Message::FileSave => {
                self.document.save_document(&mut self.host);
            }
            Message::FileQuit => return true,

            Message::EditCut => self.host.cut(),
            Message::EditCopy => self.host.copy(),
            Message::EditPaste => self.host.paste(),

            Message::SetFontFamily(name) => {
                if let Err(e) = self.font.set_family(&name, &mut self.host) {
                    eprintln!("WARN: ignoring font family {:?}: {}", name, e);
                }
            }
            Message::SetFontSize(size) => self.font.set_size(size, &mut self.host),
            Message::ToggleBold => self.font.toggle_bold(&mut self.host),
            Message::ToggleItalic => self.font.toggle_italic(&mut self.host),
            Message::ToggleUnderline => self.font.toggle_underline(&mut self.host),
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::domain::{DocumentHandle, FontDescriptor, FontSize};
    use crate::app::test_support::FakeHost;
    use std::fs;

    struct FixedCatalog(Vec<String>);

    impl FontCatalog for FixedCatalog {
        fn list_available_font_families(&self) -> Vec<String> {
            self.0.clone()
        }
    }

    fn new_state() -> AppState<FakeHost> {
        let catalog = FixedCatalog(vec!["Arial".to_string(), "Courier".to_string()]);
        AppState::new(FakeHost::default(), &catalog)
    }

    #[test]
    fn test_startup_applies_defaults() {
        let state = new_state();
        assert_eq!(state.host.title, "Simple Notepad");
        assert_eq!(
            state.host.applied_fonts,
            [FontDescriptor::regular("Arial", FontSize::DEFAULT)]
        );
        assert_eq!(state.families(), ["Arial", "Courier"]);
        assert!(state.document.handle().is_untitled());
    }

    #[test]
    fn test_menu_reflects_current_font() {
        let mut state = new_state();
        state.handle(Message::SetFontFamily("Courier".to_string()));
        state.handle(Message::ToggleBold);
        let table = state.menu_entries();
        let checked: Vec<&str> = table
            .iter()
            .filter(|e| e.is_checked())
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(checked, ["Format/Font/Courier", "Format/Size/12", "Format/Bold"]);
    }

    #[test]
    fn test_format_messages_update_font() {
        let mut state = new_state();
        state.handle(Message::SetFontSize(FontSize::new(36).unwrap()));
        state.handle(Message::ToggleItalic);
        state.handle(Message::ToggleUnderline);
        let desc = state.host.last_font().unwrap();
        assert_eq!(desc.size.get(), 36);
        assert!(desc.italic && desc.underline && !desc.bold);
    }

    #[test]
    fn test_blank_family_message_is_ignored() {
        let mut state = new_state();
        let applied = state.host.applied_fonts.len();
        assert!(!state.handle(Message::SetFontFamily(String::new())));
        assert_eq!(state.host.applied_fonts.len(), applied);
        assert_eq!(state.font.descriptor().family, "Arial");
    }

    #[test]
    fn test_edit_messages_reach_surface() {
        let mut state = new_state();
        state.host.text = "abc".to_string();
        state.handle(Message::EditCopy);
        state.handle(Message::EditPaste);
        assert_eq!(state.host.text, "abcabc");
        state.handle(Message::EditCut);
        assert_eq!(state.host.text, "");
        assert_eq!(state.host.clipboard, "abcabc");
    }

    #[test]
    fn test_quit() {
        let mut state = new_state();
        assert!(state.handle(Message::FileQuit));
        assert!(!state.handle(Message::FileNew));
    }

    #[test]
    fn test_type_then_save_as_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        let mut state = new_state();

        state.host.text = "hello".to_string();
        state.host.answer_save(&path);
        state.handle(Message::FileSave);

        assert_eq!(state.document.handle(), &DocumentHandle::Bound(path.clone()));
        assert_eq!(state.host.title, format!("Simple Notepad - {}", path.display()));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_open_bold_save_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();
        let mut state = new_state();

        state.host.answer_open(&path);
        state.handle(Message::FileOpen);
        assert_eq!(state.host.text, "hello");

        state.handle(Message::ToggleBold);
        state.handle(Message::FileSave);
        assert!(state.host.last_font().unwrap().bold);
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
        assert!(state.host.errors.is_empty());
    }

    #[test]
    fn test_new_after_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.txt");
        fs::write(&path, "hello").unwrap();
        let mut state = new_state();
        state.host.answer_open(&path);
        state.handle(Message::FileOpen);

        state.handle(Message::FileNew);
        assert!(state.document.handle().is_untitled());
        assert_eq!(state.host.text, "");
        assert_eq!(state.host.title, "Simple Notepad");
    }
}
