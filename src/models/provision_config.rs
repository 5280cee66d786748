//! Provisioning configuration file model.

use serde::Deserialize;
use std::path::PathBuf;

/// On-disk form of `dirperm.toml`.
///
/// ```toml
/// base_path = "/srv"
/// folder_name = "data"
///
/// [permissions]
/// staff = "ReadWrite"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisionFile {
    #[serde(default)]
    pub base_path: Option<PathBuf>,
    #[serde(default)]
    pub folder_name: Option<String>,
    /// Group name to tier name, in file order.
    #[serde(default)]
    pub permissions: toml::Table,
}

impl ProvisionFile {
    /// Permission entries in the order they appear in the file.
    ///
    /// Tier values stay raw so an unknown tier is skipped per group at apply
    /// time instead of failing the whole load.
    pub fn entries(&self) -> Vec<PermissionEntry> {
        self.permissions
            .iter()
            .map(|(group, value)| PermissionEntry {
                group: group.clone(),
                tier: match value.as_str() {
                    Some(s) => s.to_string(),
                    None => value.to_string(),
                },
            })
            .collect()
    }
}

/// One group-to-tier association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionEntry {
    pub group: String,
    pub tier: String,
}

impl PermissionEntry {
    pub fn new(group: impl Into<String>, tier: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            tier: tier.into(),
        }
    }

    /// Parse a `GROUP=TIER` assignment.
    pub fn parse_assignment(s: &str) -> Result<Self, String> {
        let (group, tier) = s
            .split_once('=')
            .ok_or_else(|| format!("expected GROUP=TIER, got '{}'", s))?;
        let group = group.trim();
        if group.is_empty() {
            return Err(format!("empty group name in '{}'", s));
        }
        Ok(Self::new(group, tier.trim()))
    }
}
