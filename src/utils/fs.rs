use crate::error::{ProvisionError, Result};
use std::path::Path;

pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ProvisionError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ProvisionError::from(e),
        })?;
    }
    Ok(())
}

pub fn remove_dir_recursive(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_dir_all(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::PermissionDenied => ProvisionError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => ProvisionError::from(e),
        })?;
    }
    Ok(())
}

/// Remove any existing directory tree at `path`, then create it empty.
pub fn recreate_dir(path: &Path) -> Result<()> {
    remove_dir_recursive(path)?;
    ensure_dir_exists(path)
}
