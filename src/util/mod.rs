//! Filesystem and privilege helpers.

pub mod fs;
pub mod privilege;
