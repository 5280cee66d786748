//! Dry-run preview of what a provisioning run would do.
//!
//! Only reads: folder existence, current mode, and group lookups.

use crate::core::config::ProvisionConfig;
use crate::core::group;
use crate::core::system::SystemOps;
use crate::models::tier::PermissionTier;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlannedAction {
    Apply,
    SkipGroupMissing,
    SkipUnsupportedTier,
}

impl PlannedAction {
    pub fn label(self) -> &'static str {
        match self {
            PlannedAction::Apply => "apply",
            PlannedAction::SkipGroupMissing => "skip: group missing",
            PlannedAction::SkipUnsupportedTier => "skip: unsupported tier",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlannedGrant {
    pub group: String,
    pub tier: String,
    pub group_exists: bool,
    pub mode: Option<u32>,
    pub action: PlannedAction,
}

#[derive(Debug, Clone, Serialize)]
pub struct Plan {
    pub target: PathBuf,
    pub exists: bool,
    pub current_mode: Option<u32>,
    pub grants: Vec<PlannedGrant>,
}

pub fn build(sys: &dyn SystemOps, config: &ProvisionConfig) -> Plan {
    let target = config.target();
    let exists = sys.exists(&target);
    let current_mode = if exists { sys.mode(&target).ok() } else { None };

    let grants = config
        .permissions
        .iter()
        .map(|entry| {
            let group_exists = group::lookup(sys, &entry.group).is_some();
            let mode = entry.tier.parse::<PermissionTier>().ok().map(PermissionTier::mode);
            // same precedence as apply: group first, then tier
            let action = match (group_exists, mode) {
                (false, _) => PlannedAction::SkipGroupMissing,
                (true, None) => PlannedAction::SkipUnsupportedTier,
                (true, Some(_)) => PlannedAction::Apply,
            };
            PlannedGrant {
                group: entry.group.clone(),
                tier: entry.tier.clone(),
                group_exists,
                mode,
                action,
            }
        })
        .collect();

    Plan {
        target,
        exists,
        current_mode,
        grants,
    }
}
