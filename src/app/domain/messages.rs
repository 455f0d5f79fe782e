use super::font::FontSize;

/// All messages that can be sent through the FLTK channel.
/// Each menu entry carries one of these; the dispatch loop in main hands them to `AppState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    FileNew,
    FileOpen,
    FileSave,
    FileQuit,

    // Edit
    EditCut,
    EditCopy,
    EditPaste,

    // Format
    SetFontFamily(String),
    SetFontSize(FontSize),
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}
