//! Infrastructure adapters for ElizaCog.
//!
//! Implements the ports defined in `elizacog-core` against the real world:
//! `std::fs` for the filesystem, YAML files for configuration, and a Python
//! subprocess for the OpenCog availability probe.

pub mod config;
pub mod filesystem;
pub mod probe;
