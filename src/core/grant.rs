//! Applying one group's permission tier to the target folder.
//!
//! Each application walks `group lookup -> tier resolution -> chgrp -> chmod`
//! and stops at the first step that does not succeed. Ownership and mode are
//! two separate syscalls with nothing tying them together: an interruption
//! between them leaves the new group owner with the old mode.

use crate::core::group;
use crate::core::system::SystemOps;
use crate::models::tier::PermissionTier;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum GrantError {
    #[error("change group of {path} to '{group}': {source}")]
    ChangeGroup {
        path: PathBuf,
        group: String,
        #[source]
        source: nix::Error,
    },
    #[error("set mode {mode:#o} on {path}: {source}")]
    SetMode {
        path: PathBuf,
        mode: u32,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    GroupMissing,
    UnsupportedTier(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::GroupMissing => f.write_str("group missing"),
            SkipReason::UnsupportedTier(tier) => write!(f, "unsupported tier '{}'", tier),
        }
    }
}

#[derive(Debug)]
pub enum GrantOutcome {
    Applied { tier: PermissionTier, mode: u32 },
    Skipped(SkipReason),
    Failed(GrantError),
}

impl GrantOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, GrantOutcome::Applied { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, GrantOutcome::Skipped(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, GrantOutcome::Failed(_))
    }
}

/// Grant `tier` on `folder` to `group_name`, reporting each step to `out`.
///
/// `folder` must already exist. Grant failures never propagate: they come
/// back as [`GrantOutcome::Skipped`] or [`GrantOutcome::Failed`]. Only a
/// failure to write the report is an `Err`.
pub fn apply(
    sys: &dyn SystemOps,
    out: &mut dyn Write,
    folder: &Path,
    group_name: &str,
    tier: &str,
) -> io::Result<GrantOutcome> {
    let Some(gid) = group::resolve(sys, out, group_name)? else {
        return Ok(GrantOutcome::Skipped(SkipReason::GroupMissing));
    };

    let tier = match tier.parse::<PermissionTier>() {
        Ok(tier) => tier,
        Err(_) => {
            writeln!(out, "Unsupported permission: {} for group {}", tier, group_name)?;
            return Ok(GrantOutcome::Skipped(SkipReason::UnsupportedTier(
                tier.to_string(),
            )));
        }
    };
    let mode = tier.mode();

    if let Err(source) = sys.change_group(folder, gid) {
        let err = GrantError::ChangeGroup {
            path: folder.to_path_buf(),
            group: group_name.to_string(),
            source,
        };
        writeln!(out, "Failed to set group permissions for {}: {}", group_name, err)?;
        return Ok(GrantOutcome::Failed(err));
    }

    if let Err(source) = sys.set_mode(folder, mode) {
        let err = GrantError::SetMode {
            path: folder.to_path_buf(),
            mode,
            source,
        };
        writeln!(out, "Error setting group permissions: {}", err)?;
        return Ok(GrantOutcome::Failed(err));
    }

    writeln!(
        out,
        "Group permission '{}' ({:#o}) applied to group {}",
        tier, mode, group_name
    )?;
    Ok(GrantOutcome::Applied { tier, mode })
}
