use super::document::DocumentEvent;
use super::font::FontFamily;

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // File
    FileOpen,
    FileSave,
    FileSaveAs,
    FileQuit,
    WindowClose,

    // Edit
    BufferModified,

    // Format
    ToggleFontPicker,
    SetFont(FontFamily),
    SetFontSize(u32),

    // Document notifications
    DocumentChanged(DocumentEvent),
}
