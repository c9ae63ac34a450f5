//! Shared helpers for bundlers.

pub mod fs;
