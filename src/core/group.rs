//! System group validation.

use crate::core::system::SystemOps;
use nix::unistd::Gid;
use std::io::{self, Write};

/// Resolve `name` without reporting anything.
///
/// A failed lookup is treated the same as a missing group.
pub fn lookup(sys: &dyn SystemOps, name: &str) -> Option<Gid> {
    match sys.lookup_group(name) {
        Ok(gid) => {
            tracing::debug!(group = name, gid = ?gid.map(Gid::as_raw), "group lookup");
            gid
        }
        Err(e) => {
            tracing::debug!(group = name, error = %e, "group lookup failed");
            None
        }
    }
}

/// Resolve `name`, writing a notice to `out` when it is unknown.
pub fn resolve(sys: &dyn SystemOps, out: &mut dyn Write, name: &str) -> io::Result<Option<Gid>> {
    let gid = lookup(sys, name);
    if gid.is_none() {
        writeln!(out, "Group '{}' does not exist on the system", name)?;
    }
    Ok(gid)
}
