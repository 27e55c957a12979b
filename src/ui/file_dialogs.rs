use std::path::{Path, PathBuf};

use fltk::dialog::{FileDialogType, NativeFileChooser, NativeFileChooserOptions};

use crate::app::services::file_picker::FilePicker;

/// FLTK filter for plain-text documents.
/// FLTK automatically adds "All Files (*)" option, so we don't include it
pub const TEXT_FILES_FILTER: &str = "Text Files\t*.txt";

/// Platform file dialogs through FLTK's native chooser.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFilePicker;

impl FilePicker for NativeFilePicker {
    fn pick_for_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
        nfc.set_title("Open");
        run_chooser(nfc, start_dir)
    }

    fn pick_for_save(&mut self, start_dir: Option<&Path>, suggested_name: &str) -> Option<PathBuf> {
        let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
        nfc.set_title("Save As");
        nfc.set_option(NativeFileChooserOptions::SaveAsConfirm);
        nfc.set_preset_file(suggested_name);
        run_chooser(nfc, start_dir)
    }
}

fn run_chooser(mut nfc: NativeFileChooser, start_dir: Option<&Path>) -> Option<PathBuf> {
    nfc.set_filter(TEXT_FILES_FILTER);
    if let Some(dir) = start_dir {
        if let Err(e) = nfc.set_directory(&dir) {
            tracing::debug!("Cannot start dialog in {}: {}", dir.display(), e);
        }
    }
    nfc.show(); // blocks until close

    let filename = nfc.filename();
    if filename.as_os_str().is_empty() {
        if let Some(msg) = nfc.error_message().filter(|m| m != "No error") {
            tracing::warn!("File dialog failed: {}", msg);
        }
        None
    } else {
        Some(filename)
    }
}
