use std::path::Path;

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty() && s != ".")
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Window title for a document, starred while it has unsaved changes.
pub fn window_title(display_name: &str, dirty: bool) -> String {
    let prefix = if dirty { "*" } else { "" };
    format!("{}{} - PowerWord", prefix, display_name)
}
