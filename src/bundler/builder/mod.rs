//! Bundle orchestration and coordination.
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and the package command flow
//! - [`tool_detection`] - External tool availability checking

mod checksum;
mod orchestrator;
pub(crate) mod tool_detection;

pub use orchestrator::Bundler;
