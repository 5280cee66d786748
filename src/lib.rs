//! Folder provisioning with POSIX group permissions.
//!
//! Creates a single directory if it is missing, then grants each configured
//! group one of three permission tiers by changing the directory's group
//! owner and mode.
//!
//! ## Modules
//! - `cli` — Command-line handlers
//! - `core` — Provisioning logic (config, folder, group, grant, plan)
//! - `models` — Data structures
//! - `util` — System utilities (fs, privilege)

pub mod cli;
pub mod constants;
pub mod core;
pub mod models;
pub mod util;
