//! Provisioning logic.

pub mod config;
pub mod folder;
pub mod grant;
pub mod group;
pub mod orchestrator;
pub mod plan;
pub mod system;

#[cfg(test)]
pub mod fake;
