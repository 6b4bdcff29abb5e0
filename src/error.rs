use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ProvisionError>;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported platform: '{platform}'")]
    UnsupportedPlatform { platform: String },

    #[error("Downloading {url} failed: {message}")]
    Download { url: String, message: String },

    #[error("Checksum verification failed for {path}: expected {expected}, got {actual}")]
    ChecksumMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("Extraction failed: {path}: {message}")]
    Extraction { path: PathBuf, message: String },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },
}
