//! Target folder provisioning.

use crate::constants;
use crate::core::system::SystemOps;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("create directory {path}: {source}")]
pub struct ProvisionError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FolderStatus {
    Created,
    AlreadyExists,
}

/// Join `folder_name` onto `base_path`.
pub fn target_path(base_path: &Path, folder_name: &str) -> PathBuf {
    base_path.join(folder_name)
}

/// Create the target folder with [`constants::FOLDER_MODE`] unless something
/// already exists at that path. An existing entry is left untouched; one that
/// appears between the check and the mkdir is an error.
pub fn ensure_folder(sys: &dyn SystemOps, path: &Path) -> Result<FolderStatus, ProvisionError> {
    if sys.exists(path) {
        return Ok(FolderStatus::AlreadyExists);
    }
    sys.create_dir_all(path, constants::FOLDER_MODE)
        .map_err(|source| ProvisionError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(FolderStatus::Created)
}

/// Provision the folder and report the outcome to `out`.
///
/// Returns the folder path, or `None` if it could not be created. Only a
/// failure to write the report is an `Err`.
pub fn provision(
    sys: &dyn SystemOps,
    out: &mut dyn Write,
    base_path: &Path,
    folder_name: &str,
) -> io::Result<Option<PathBuf>> {
    let path = target_path(base_path, folder_name);
    match ensure_folder(sys, &path) {
        Ok(FolderStatus::Created) => {
            writeln!(out, "Folder created: {}", path.display())?;
            Ok(Some(path))
        }
        Ok(FolderStatus::AlreadyExists) => {
            writeln!(out, "Folder already exists: {}", path.display())?;
            Ok(Some(path))
        }
        Err(e) => {
            tracing::debug!(error = ?e, "folder provisioning failed");
            writeln!(out, "Failed to create folder: {}", e)?;
            Ok(None)
        }
    }
}
