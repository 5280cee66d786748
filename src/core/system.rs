//! Operating-system primitives used by provisioning.
//!
//! Everything that touches the filesystem or the group database goes through
//! [`SystemOps`], so the provisioning logic can run against a recording fake
//! in tests.

use crate::util::fs as dir_fs;
use nix::unistd::{Gid, Group};
use std::io;
use std::path::Path;

pub trait SystemOps {
    /// Whether any filesystem entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and missing parents with `mode`.
    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Resolve a group name in the system group database.
    fn lookup_group(&self, name: &str) -> nix::Result<Option<Gid>>;

    /// Change the group owner of `path`, leaving the user owner alone.
    fn change_group(&self, path: &Path, gid: Gid) -> nix::Result<()>;

    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Current permission bits of `path`.
    fn mode(&self, path: &Path) -> io::Result<u32>;
}

/// The real host, backed by `std::fs` and `nix`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixSystem;

impl SystemOps for UnixSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        dir_fs::create_dir_all(path, mode)
    }

    fn lookup_group(&self, name: &str) -> nix::Result<Option<Gid>> {
        Ok(Group::from_name(name)?.map(|g| g.gid))
    }

    fn change_group(&self, path: &Path, gid: Gid) -> nix::Result<()> {
        nix::unistd::chown(path, None, Some(gid))
    }

    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()> {
        dir_fs::set_mode(path, mode)
    }

    fn mode(&self, path: &Path) -> io::Result<u32> {
        dir_fs::mode_of(path)
    }
}
