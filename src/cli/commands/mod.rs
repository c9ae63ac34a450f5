//! Command implementations.

mod package;
mod variants;

pub use package::package;
pub use variants::{format_variants, variants};
