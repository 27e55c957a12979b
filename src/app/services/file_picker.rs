use std::path::{Path, PathBuf};

/// A way for the user to choose files to open and destinations to save to.
///
/// Both operations return `None` when the user dismisses the dialog or the
/// dialog itself fails; the caller treats that as "do nothing".
pub trait FilePicker {
    /// Choose an existing plain-text file to open.
    fn pick_for_open(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    /// Choose a destination (new or existing) for a plain-text file.
    fn pick_for_save(&mut self, start_dir: Option<&Path>, suggested_name: &str) -> Option<PathBuf>;
}
