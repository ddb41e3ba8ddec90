//! Process-wide tracing setup for stitchkart services.

pub mod tracing;

pub use tracing::init;
