//! Observability setup for ElizaCog.

pub mod tracing_setup;
