//! Config file discovery, loading, and command-line overrides.

use crate::constants;
use crate::models::provision_config::{PermissionEntry, ProvisionFile};
use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the config file came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or the environment; must exist.
    Explicit(PathBuf),
    /// Found as `dirperm.toml` in the working directory or an ancestor.
    Discovered(PathBuf),
    /// System default; may be absent.
    Default(PathBuf),
}

impl ConfigSource {
    /// Resolve the config file from CLI arg, env var, auto-detection, or the default.
    pub fn resolve(config_arg: Option<PathBuf>) -> Result<Self> {
        let cwd = env::current_dir().context("resolve current directory")?;
        Ok(Self::resolve_from(
            config_arg,
            env::var_os(constants::CONFIG_ENV_VAR).map(PathBuf::from),
            &cwd,
            Path::new(constants::DEFAULT_CONFIG_PATH),
        ))
    }

    pub fn resolve_from(
        config_arg: Option<PathBuf>,
        env_value: Option<PathBuf>,
        cwd: &Path,
        default: &Path,
    ) -> Self {
        if let Some(path) = config_arg {
            return Self::Explicit(path);
        }
        if let Some(path) = env_value.filter(|p| !p.as_os_str().is_empty()) {
            return Self::Explicit(path);
        }
        if let Some(found) = find_config(cwd) {
            return Self::Discovered(found);
        }
        Self::Default(default.to_path_buf())
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Explicit(p) | Self::Discovered(p) | Self::Default(p) => p,
        }
    }

    /// Load the file; a missing default yields an empty config.
    pub fn load(&self) -> Result<ProvisionFile> {
        match self {
            Self::Explicit(path) if !path.exists() => {
                bail!("config file not found: {}", path.display())
            }
            Self::Default(path) if !path.exists() => {
                tracing::debug!(path = %path.display(), "no default config file");
                Ok(ProvisionFile::default())
            }
            _ => load(self.path()),
        }
    }
}

fn find_config(cwd: &Path) -> Option<PathBuf> {
    cwd.ancestors()
        .map(|dir| dir.join(constants::CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

pub fn load(path: &Path) -> Result<ProvisionFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
}

/// Values given on the command line, each taking precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_path: Option<PathBuf>,
    pub folder_name: Option<String>,
    /// Replaces the file's permission map when non-empty.
    pub grants: Vec<PermissionEntry>,
}

/// The three values a provisioning run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionConfig {
    pub base_path: PathBuf,
    pub folder_name: String,
    pub permissions: Vec<PermissionEntry>,
}

impl ProvisionConfig {
    /// Resolve the config source, load it, and apply overrides.
    pub fn resolve(config_arg: Option<PathBuf>, overrides: ConfigOverrides) -> Result<Self> {
        let source = ConfigSource::resolve(config_arg)?;
        tracing::debug!(source = ?source, "config source");
        let file = source.load()?;
        Self::merge(file, overrides)
            .with_context(|| format!("config {}", source.path().display()))
    }

    pub fn merge(file: ProvisionFile, overrides: ConfigOverrides) -> Result<Self> {
        let permissions = if overrides.grants.is_empty() {
            file.entries()
        } else {
            overrides.grants
        };
        let Some(base_path) = overrides.base_path.or(file.base_path) else {
            bail!("base_path is not configured (set it in the config file or pass --base-path)");
        };
        let Some(folder_name) = overrides.folder_name.or(file.folder_name) else {
            bail!("folder_name is not configured (set it in the config file or pass --folder-name)");
        };
        Ok(Self {
            base_path,
            folder_name,
            permissions,
        })
    }

    pub fn target(&self) -> PathBuf {
        crate::core::folder::target_path(&self.base_path, &self.folder_name)
    }
}
