use std::fmt;
use std::path::{Path, PathBuf};

use super::font::{DisplayFont, FontFamily};
use super::settings::DecodePolicy;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::services::file_io;
use crate::app::services::text_ops::extract_filename;

/// Change notifications delivered to subscribers after the state has changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// The text was replaced by the contents of a file.
    TextLoaded,
    /// The text was replaced by a user edit.
    TextEdited,
    /// The text was written to the backing file.
    Saved,
    /// The backing file changed to a different location.
    SourceChanged,
    FontChanged,
}

pub type Observer = Box<dyn FnMut(&DocumentEvent)>;

/// The single open document: its text, the file it came from or was last
/// saved to, and the font it is displayed in.
pub struct Document {
    text: String,
    source: Option<PathBuf>,
    display_font: DisplayFont,
    dirty: bool,
    observers: Vec<Observer>,
}

impl Document {
    pub fn new(display_font: DisplayFont) -> Self {
        Self {
            text: String::new(),
            source: None,
            display_font,
            dirty: false,
            observers: Vec::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn display_font(&self) -> DisplayFont {
        self.display_font
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// File name of the backing file, or "Untitled" for a new document.
    pub fn display_name(&self) -> String {
        match self.source {
            Some(ref path) => extract_filename(path),
            None => "Untitled".to_string(),
        }
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// Replace the text with the decoded contents of `path`.
    ///
    /// Nothing is modified unless the whole file was read and decoded.
    pub fn load(&mut self, path: &Path, policy: DecodePolicy) -> Result<()> {
        let text = file_io::read_text(path, policy).map_err(|source| AppError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        self.text = text;
        self.dirty = false;
        let moved = self.set_source(path);
        tracing::info!("Loaded {} ({} bytes)", path.display(), self.text.len());

        self.notify(DocumentEvent::TextLoaded);
        if moved {
            self.notify(DocumentEvent::SourceChanged);
        }
        Ok(())
    }

    /// Write the current text to `target` and make it the backing file.
    ///
    /// On failure the backing file and dirty flag are left as they were.
    pub fn save(&mut self, target: &Path) -> Result<()> {
        file_io::write_text_atomic(target, &self.text).map_err(|source| AppError::Save {
            path: target.to_path_buf(),
            source,
        })?;

        self.dirty = false;
        let moved = self.set_source(target);
        tracing::info!("Saved {} ({} bytes)", target.display(), self.text.len());

        self.notify(DocumentEvent::Saved);
        if moved {
            self.notify(DocumentEvent::SourceChanged);
        }
        Ok(())
    }

    /// Replace the text wholesale with what the user typed.
    pub fn edit(&mut self, new_text: impl Into<String>) {
        let new_text = new_text.into();
        if new_text == self.text {
            return;
        }
        self.text = new_text;
        self.dirty = true;
        self.notify(DocumentEvent::TextEdited);
    }

    pub fn set_display_font(&mut self, family: FontFamily, size: u32) -> Result<()> {
        let font = DisplayFont::new(family, size)?;
        if font != self.display_font {
            self.display_font = font;
            self.notify(DocumentEvent::FontChanged);
        }
        Ok(())
    }

    /// Same as [`Document::set_display_font`], for a family given by name.
    pub fn set_display_font_by_name(&mut self, name: &str, size: u32) -> Result<()> {
        let family = FontFamily::from_name(name)?;
        self.set_display_font(family, size)
    }

    /// Returns true when the backing file moved to a new location.
    fn set_source(&mut self, path: &Path) -> bool {
        if self.source.as_deref() == Some(path) {
            return false;
        }
        self.source = Some(path.to_path_buf());
        true
    }

    fn notify(&mut self, event: DocumentEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DisplayFont::default())
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("text_len", &self.text.len())
            .field("source", &self.source)
            .field("display_font", &self.display_font)
            .field("dirty", &self.dirty)
            .field("observers", &self.observers.len())
            .finish()
    }
}
