//! Data structures.

pub mod provision_config;
pub mod tier;
