//! Keeps the text view and the document from overwriting each other.
//!
//! FLTK's text buffer stores NUL-terminated C strings, so text containing
//! U+0000 is shown only up to the first NUL. Whatever the buffer holds after
//! a render must not flow back into the document as if the user typed it.

/// Part of `text` the text view can display.
pub fn displayable(text: &str) -> &str {
    match text.find('\0') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Remembers what was last pushed into the view until the user changes it.
#[derive(Debug, Default)]
pub struct ViewSync {
    rendered: Option<String>,
}

impl ViewSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the view contents right after the document was rendered into it.
    pub fn rendered(&mut self, view_text: String) {
        self.rendered = Some(view_text);
    }

    /// Text to apply as a user edit, or `None` while the view still shows
    /// exactly what was rendered.
    pub fn user_edit(&mut self, view_text: String) -> Option<String> {
        if self.rendered.as_deref() == Some(view_text.as_str()) {
            return None;
        }
        self.rendered = None;
        Some(view_text)
    }
}
