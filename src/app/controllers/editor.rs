use std::path::{Path, PathBuf};

use crate::app::domain::{DecodePolicy, Document, FontFamily};
use crate::app::infrastructure::error::Result;
use crate::app::services::file_picker::FilePicker;

/// Result of a user-initiated file operation that went through a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user closed the dialog without choosing anything.
    Dismissed,
    Done,
}

/// Connects the file picker to the document.
///
/// Failures are logged here and returned so the shell can show them; the
/// document is never left half-updated.
pub struct EditorController {
    document: Document,
    picker: Box<dyn FilePicker>,
    decode_policy: DecodePolicy,
    last_dir: Option<PathBuf>,
}

impl EditorController {
    pub fn new(
        document: Document,
        picker: Box<dyn FilePicker>,
        decode_policy: DecodePolicy,
        last_dir: Option<PathBuf>,
    ) -> Self {
        Self {
            document,
            picker,
            decode_policy,
            last_dir,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// Last directory used in a file open/save dialog.
    pub fn last_dir(&self) -> Option<&Path> {
        self.last_dir.as_deref()
    }

    pub fn open(&mut self) -> Result<Outcome> {
        let Some(path) = self.picker.pick_for_open(self.last_dir.as_deref()) else {
            tracing::debug!("Open dialog dismissed");
            return Ok(Outcome::Dismissed);
        };
        self.remember_dir(&path);
        self.load(&path)?;
        Ok(Outcome::Done)
    }

    pub fn load(&mut self, path: &Path) -> Result<()> {
        self.document
            .load(path, self.decode_policy)
            .inspect_err(|e| tracing::warn!("{}", e))
    }

    /// Save to the backing file, asking for a destination if there is none.
    pub fn save(&mut self) -> Result<Outcome> {
        let Some(path) = self.document.source().map(Path::to_path_buf) else {
            return self.save_as();
        };
        self.write(&path)?;
        Ok(Outcome::Done)
    }

    pub fn save_as(&mut self) -> Result<Outcome> {
        let suggested = self.document.display_name();
        let Some(path) = self
            .picker
            .pick_for_save(self.last_dir.as_deref(), &suggested)
        else {
            tracing::debug!("Save dialog dismissed");
            return Ok(Outcome::Dismissed);
        };
        self.remember_dir(&path);
        self.write(&path)?;
        Ok(Outcome::Done)
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.document.edit(text);
    }

    pub fn set_font_family(&mut self, family: FontFamily) -> Result<()> {
        let size = self.document.display_font().size();
        self.document
            .set_display_font(family, size)
            .inspect_err(|e| tracing::warn!("{}", e))
    }

    pub fn set_font_size(&mut self, size: u32) -> Result<()> {
        let family = self.document.display_font().family();
        self.document
            .set_display_font(family, size)
            .inspect_err(|e| tracing::warn!("{}", e))
    }

    fn write(&mut self, path: &Path) -> Result<()> {
        self.document
            .save(path)
            .inspect_err(|e| tracing::warn!("{}", e))
    }

    fn remember_dir(&mut self, path: &Path) {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.last_dir = Some(parent.to_path_buf());
        }
    }
}
