//! Services and the ports they depend on.
//!
//! `ElizaCogBridge` orchestrates directory setup, template writing and status
//! reporting through the `FileSystem` and `DependencyProbe` traits -- never
//! through concrete infrastructure.

pub mod bridge;
pub mod fs;
pub mod probe;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;
