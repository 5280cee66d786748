//! Recording in-memory [`SystemOps`] for tests.

use crate::core::system::SystemOps;
use nix::errno::Errno;
use nix::unistd::Gid;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreateDir(PathBuf, u32),
    ChangeGroup(PathBuf, u32),
    SetMode(PathBuf, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeDir {
    pub mode: u32,
    pub gid: Option<u32>,
}

#[derive(Default)]
pub struct FakeSystem {
    groups: HashMap<String, u32>,
    lookup_errors: HashSet<String>,
    denied_gids: HashSet<u32>,
    chmod_fails: bool,
    create_fails: Option<io::ErrorKind>,
    dirs: RefCell<HashMap<PathBuf, FakeDir>>,
    hidden: RefCell<HashSet<PathBuf>>,
    calls: RefCell<Vec<Call>>,
}

impl FakeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, name: &str, gid: u32) -> Self {
        self.groups.insert(name.to_string(), gid);
        self
    }

    /// Group database lookups for `name` fail with an I/O error.
    pub fn with_lookup_error(mut self, name: &str) -> Self {
        self.lookup_errors.insert(name.to_string());
        self
    }

    /// Ownership changes to `gid` are rejected with EPERM.
    pub fn deny_change_group(mut self, gid: u32) -> Self {
        self.denied_gids.insert(gid);
        self
    }

    pub fn failing_chmod(mut self) -> Self {
        self.chmod_fails = true;
        self
    }

    pub fn failing_create(mut self, kind: io::ErrorKind) -> Self {
        self.create_fails = Some(kind);
        self
    }

    pub fn with_dir(self, path: impl Into<PathBuf>, mode: u32) -> Self {
        self.dirs
            .borrow_mut()
            .insert(path.into(), FakeDir { mode, gid: None });
        self
    }

    /// A directory that `exists` does not report, as if another process
    /// created it right after the check.
    pub fn with_racing_dir(self, path: impl Into<PathBuf>, mode: u32) -> Self {
        let path = path.into();
        self.hidden.borrow_mut().insert(path.clone());
        self.with_dir(path, mode)
    }

    pub fn dir(&self, path: &Path) -> Option<FakeDir> {
        self.dirs.borrow().get(path).copied()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Ownership and mode changes recorded so far.
    pub fn permission_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| !matches!(c, Call::CreateDir(..)))
            .collect()
    }
}

impl SystemOps for FakeSystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains_key(path) && !self.hidden.borrow().contains(path)
    }

    fn create_dir_all(&self, path: &Path, mode: u32) -> io::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::CreateDir(path.to_path_buf(), mode));
        if let Some(kind) = self.create_fails {
            return Err(io::Error::from(kind));
        }
        let mut dirs = self.dirs.borrow_mut();
        if dirs.contains_key(path) {
            return Err(io::Error::from(io::ErrorKind::AlreadyExists));
        }
        dirs.insert(path.to_path_buf(), FakeDir { mode, gid: None });
        Ok(())
    }

    fn lookup_group(&self, name: &str) -> nix::Result<Option<Gid>> {
        if self.lookup_errors.contains(name) {
            return Err(Errno::EIO);
        }
        Ok(self.groups.get(name).map(|gid| Gid::from_raw(*gid)))
    }

    fn change_group(&self, path: &Path, gid: Gid) -> nix::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::ChangeGroup(path.to_path_buf(), gid.as_raw()));
        if self.denied_gids.contains(&gid.as_raw()) {
            return Err(Errno::EPERM);
        }
        let mut dirs = self.dirs.borrow_mut();
        let dir = dirs.get_mut(path).ok_or(Errno::ENOENT)?;
        dir.gid = Some(gid.as_raw());
        Ok(())
    }

    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()> {
        self.calls
            .borrow_mut()
            .push(Call::SetMode(path.to_path_buf(), mode));
        if self.chmod_fails {
            return Err(io::Error::from(io::ErrorKind::PermissionDenied));
        }
        let mut dirs = self.dirs.borrow_mut();
        let dir = dirs
            .get_mut(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        dir.mode = mode;
        Ok(())
    }

    fn mode(&self, path: &Path) -> io::Result<u32> {
        self.dir(path)
            .map(|d| d.mode)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}
