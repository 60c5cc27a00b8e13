//! Business logic and port definitions for ElizaCog.
//!
//! This crate defines the ports (`FileSystem`, `DependencyProbe`) that the
//! infrastructure layer implements. It depends only on `elizacog-types` --
//! never on `elizacog-infra`, the real filesystem, or child processes.

pub mod config;
pub mod service;
