//! Reading and writing document files.
//!
//! Files are plain UTF-8 with no header. Bytes are passed through untouched,
//! including a leading byte-order mark.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;

use crate::app::domain::settings::DecodePolicy;
use crate::app::infrastructure::error::LoadError;

/// Read the whole file at `path` and decode it according to `policy`.
pub fn read_text(path: &Path, policy: DecodePolicy) -> Result<String, LoadError> {
    let metadata = fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(LoadError::NotAFile);
    }
    let bytes = fs::read(path)?;
    decode(bytes, policy)
}

pub fn decode(bytes: Vec<u8>, policy: DecodePolicy) -> Result<String, LoadError> {
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) if policy == DecodePolicy::Lossy => {
            tracing::warn!(
                "Invalid UTF-8 after byte {}, replacing bad sequences",
                e.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
        Err(e) => Err(LoadError::Decode(e)),
    }
}

/// Write `text` to `path` so that readers see either the old file or the
/// complete new one, never a partial write.
///
/// The data goes to a temporary file next to the destination which is then
/// renamed over it. A symlinked destination is followed so the file it points
/// to is the one replaced. An existing destination keeps its permissions; a
/// new one gets the same mode as `fs::write` would give it.
pub fn write_text_atomic(path: &Path, text: &str) -> io::Result<()> {
    let target = resolve_destination(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".powerword");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Filtered by the process umask on creation, like a plain create
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder.tempfile_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.as_file().sync_all()?;

    if let Ok(existing) = fs::metadata(&target) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }

    tmp.persist(&target).map_err(|e| e.error)?;
    Ok(())
}

/// The real file behind `path`, or `path` itself when it does not exist yet
/// (or is a dangling link).
fn resolve_destination(path: &Path) -> PathBuf {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        }
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_utf8() {
        let text = decode("caf\u{e9}".as_bytes().to_vec(), DecodePolicy::Strict).unwrap();
        assert_eq!(text, "caf\u{e9}");
    }

    #[test]
    fn test_decode_keeps_bom() {
        let bytes = b"\xef\xbb\xbfhello".to_vec();
        let text = decode(bytes, DecodePolicy::Strict).unwrap();
        assert_eq!(text, "\u{feff}hello");
    }

    #[test]
    fn test_decode_strict_rejects_invalid() {
        let err = decode(vec![b'a', 0xc3], DecodePolicy::Strict).unwrap_err();
        assert!(matches!(err, LoadError::Decode(_)));
    }

    #[test]
    fn test_decode_lossy_never_returns_empty_for_content() {
        let text = decode(vec![0xff, 0xff], DecodePolicy::Lossy).unwrap();
        assert_eq!(text, "\u{fffd}\u{fffd}");
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");
        fs::write(&path, "").unwrap();
        assert_eq!(read_text(&path, DecodePolicy::Strict).unwrap(), "");
    }

    #[test]
    fn test_write_creates_new_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        write_text_atomic(&path, "fresh").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        write_text_atomic(&path, "one").unwrap();
        write_text_atomic(&path, "two").unwrap();
        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("new.txt");
        assert!(write_text_atomic(&path, "x").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_write_over_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("sub");
        fs::create_dir(&target).unwrap();
        assert!(write_text_atomic(&target, "x").is_err());
        assert!(target.is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_preserves_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("script.txt");
        fs::write(&path, "old").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        write_text_atomic(&path, "new").unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_same_mode_as_plain_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let atomic = dir.path().join("atomic.txt");
        let plain = dir.path().join("plain.txt");

        write_text_atomic(&atomic, "text").unwrap();
        fs::write(&plain, "text").unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(atomic.as_path()), mode(plain.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_through_symlink_updates_target() {
        let dir = tempfile::tempdir().unwrap();
        let real = dir.path().join("real.txt");
        let link = dir.path().join("link.txt");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, &link).unwrap();

        write_text_atomic(&link, "new").unwrap();

        assert_eq!(fs::read_to_string(&real).unwrap(), "new");
        assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
        assert_eq!(fs::read_to_string(&link).unwrap(), "new");
    }
}
