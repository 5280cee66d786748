//! Provision the folder, then apply every configured group in order.

use crate::constants;
use crate::core::config::ProvisionConfig;
use crate::core::folder;
use crate::core::grant::{self, GrantOutcome};
use crate::core::system::SystemOps;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug)]
pub struct GrantRecord {
    pub group: String,
    pub tier: String,
    pub outcome: GrantOutcome,
}

/// Everything one run did. `folder` is `None` when provisioning failed, in
/// which case no grants were attempted.
#[derive(Debug, Default)]
pub struct RunReport {
    pub folder: Option<PathBuf>,
    pub grants: Vec<GrantRecord>,
}

impl RunReport {
    pub fn applied(&self) -> usize {
        self.grants.iter().filter(|g| g.outcome.is_applied()).count()
    }

    pub fn skipped(&self) -> usize {
        self.grants.iter().filter(|g| g.outcome.is_skipped()).count()
    }

    pub fn failed(&self) -> usize {
        self.grants.iter().filter(|g| g.outcome.is_failed()).count()
    }
}

/// Run the whole provisioning flow, writing status lines to `out`.
pub fn run(sys: &dyn SystemOps, out: &mut dyn Write, config: &ProvisionConfig) -> io::Result<RunReport> {
    let Some(folder) = folder::provision(sys, out, &config.base_path, &config.folder_name)? else {
        return Ok(RunReport::default());
    };

    writeln!(out, "\nApplying GROUP-based permissions...")?;
    let separator = "-".repeat(constants::SEPARATOR_WIDTH);
    let mut grants = Vec::with_capacity(config.permissions.len());
    for entry in &config.permissions {
        let outcome = grant::apply(sys, out, &folder, &entry.group, &entry.tier)?;
        writeln!(out, "{}", separator)?;
        grants.push(GrantRecord {
            group: entry.group.clone(),
            tier: entry.tier.clone(),
            outcome,
        });
    }

    Ok(RunReport {
        folder: Some(folder),
        grants,
    })
}
