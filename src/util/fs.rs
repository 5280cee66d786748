//! Directory creation and mode helpers.

use std::fs::{self, DirBuilder};
use std::io;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::Path;

/// Create missing parents of `path`, then `path` itself with `mode`.
///
/// The leaf must not exist yet: if it does (including when another process
/// created it after the caller checked), this returns `AlreadyExists` and
/// leaves it alone. Only a leaf created here is chmod'ed, so the result does
/// not depend on the process umask.
pub fn create_dir_all(path: &Path, mode: u32) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        DirBuilder::new().recursive(true).mode(mode).create(parent)?;
    }
    DirBuilder::new().mode(mode).create(path)?;
    set_mode(path, mode)
}

pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

/// Permission bits of `path`, without the file type.
pub fn mode_of(path: &Path) -> io::Result<u32> {
    Ok(fs::metadata(path)?.permissions().mode() & 0o7777)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_sets_mode() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a/b/c");
        create_dir_all(&target, 0o755).unwrap();
        assert!(target.is_dir());
        assert_eq!(mode_of(&target).unwrap(), 0o755);
    }

    #[test]
    fn test_create_dir_all_existing_leaf_untouched() {
        let dir = TempDir::new().unwrap();
        let leaf = dir.path().join("data");
        fs::create_dir(&leaf).unwrap();
        set_mode(&leaf, 0o700).unwrap();

        let err = create_dir_all(&leaf, 0o755).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        assert_eq!(mode_of(&leaf).unwrap(), 0o700);
    }

    #[test]
    fn test_set_mode() {
        let dir = TempDir::new().unwrap();
        set_mode(dir.path(), 0o754).unwrap();
        assert_eq!(mode_of(dir.path()).unwrap(), 0o754);
    }
}
