//! Configuration structures for packaging runs.
//!
//! Package metadata, RPM options, the build variant table and a builder
//! that assembles them into [`Settings`].

mod builder;
mod bundle;
mod core;
mod linux;
mod package;
mod variant;

pub use builder::SettingsBuilder;
pub use bundle::{BundleBinary, DEFAULT_BINARIES, DEFAULT_INSTALL_DIR, default_binaries};
pub use self::core::Settings;
pub use linux::RpmSettings;
pub use package::{DEFAULT_PACKAGE_NAME, PackageSettings, validate_package_name};
pub use variant::{TargetPlatform, Variant, VariantTable};
