//! Linux package bundlers.

pub mod rpm;
