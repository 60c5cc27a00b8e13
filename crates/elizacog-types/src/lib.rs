//! Shared domain types for ElizaCog.
//!
//! This crate contains the plain data used across the workspace: the default
//! configuration record, the character profile, status/integration reports,
//! and their error types.
//!
//! Zero infrastructure dependencies -- only serde, serde_yaml_ng, thiserror.

pub mod character;
pub mod config;
pub mod error;
pub mod report;
