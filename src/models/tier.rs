//! Permission tiers and their fixed directory modes.

use crate::constants;
use std::fmt;
use std::str::FromStr;

/// Named permission level granted to a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionTier {
    ReadOnly,
    ReadWrite,
    FullControl,
}

/// Tier name that is not one of the three known tiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported permission tier '{0}'")]
pub struct UnknownTier(pub String);

impl PermissionTier {
    pub const ALL: [PermissionTier; 3] = [
        PermissionTier::ReadOnly,
        PermissionTier::ReadWrite,
        PermissionTier::FullControl,
    ];

    /// Mode bits applied to the folder for this tier.
    pub const fn mode(self) -> u32 {
        match self {
            PermissionTier::ReadOnly => constants::READ_ONLY_MODE,
            PermissionTier::ReadWrite => constants::READ_WRITE_MODE,
            PermissionTier::FullControl => constants::FULL_CONTROL_MODE,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            PermissionTier::ReadOnly => "ReadOnly",
            PermissionTier::ReadWrite => "ReadWrite",
            PermissionTier::FullControl => "FullControl",
        }
    }
}

impl FromStr for PermissionTier {
    type Err = UnknownTier;

    /// Names are matched exactly; `readonly` is not `ReadOnly`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

impl fmt::Display for PermissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
