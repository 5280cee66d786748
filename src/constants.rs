//! Centralized constants for modes, paths, and output formatting.

/// Mode for a freshly provisioned folder.
pub const FOLDER_MODE: u32 = 0o755;

/// Owner rwx, group r-x, others r--.
pub const READ_ONLY_MODE: u32 = 0o754;

/// Owner rwx, group rwx, others r--.
pub const READ_WRITE_MODE: u32 = 0o774;

/// Owner rwx, group rwx, others r-x.
pub const FULL_CONTROL_MODE: u32 = 0o775;

/// System-wide config location used when nothing else is found.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/goamet/dirperm.toml";

/// File name searched for in the current directory and its ancestors.
pub const CONFIG_FILE_NAME: &str = "dirperm.toml";

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "GOAMET_DIRPERM_CONFIG";

/// Width of the separator printed after each group.
pub const SEPARATOR_WIDTH: usize = 50;
