use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to open {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Failed to save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported font: {0}")]
    UnsupportedFont(String),

    #[error("Invalid font size: {0}")]
    InvalidFontSize(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a file could not be turned into document text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("not a regular file")]
    NotAFile,

    #[error("invalid UTF-8 after byte {}", .0.utf8_error().valid_up_to())]
    Decode(#[from] FromUtf8Error),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_load_error_display() {
        let err = AppError::Load {
            path: PathBuf::from("/tmp/notes.txt"),
            source: LoadError::NotAFile,
        };
        assert_eq!(err.to_string(), "Failed to open /tmp/notes.txt: not a regular file");
    }

    #[test]
    fn test_decode_error_reports_offset() {
        let bad = String::from_utf8(vec![b'o', b'k', 0xff]).unwrap_err();
        let err = LoadError::from(bad);
        assert_eq!(err.to_string(), "invalid UTF-8 after byte 2");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::UnsupportedFont("Comic Sans".to_string());
        assert_eq!(err.to_string(), "Unsupported font: Comic Sans");

        let err = AppError::InvalidFontSize(0);
        assert_eq!(err.to_string(), "Invalid font size: 0");
    }
}
