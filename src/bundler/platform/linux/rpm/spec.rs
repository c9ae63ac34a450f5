//! Spec document rendering.

use crate::bundler::{
    error::Result,
    settings::{Settings, validate_package_name},
    utils::fs,
};
use chrono::NaiveDate;
use handlebars::Handlebars;
use serde::Serialize;
use std::path::{Path, PathBuf};

const TEMPLATE_NAME: &str = "package.spec";

/// Values substituted into the spec template.
#[derive(Debug, Clone, Serialize)]
pub struct SpecContext {
    pub name: String,
    pub version: String,
    pub release: String,
    pub summary: String,
    pub license: String,
    pub url: String,
    /// Source archive file name, `<name>-<version>.tar.gz`.
    pub source: String,
    pub description: String,
    pub packager: String,
    /// Changelog header date, e.g. `Mon Jan 06 2025`.
    pub changelog_date: String,
    pub binaries: Vec<SpecBinary>,
}

/// One packaged executable.
#[derive(Debug, Clone, Serialize)]
pub struct SpecBinary {
    /// File name inside the source archive (carries the variant suffix).
    pub staged_name: String,
    /// Absolute install path listed in `%files`.
    pub install_path: String,
}

impl SpecContext {
    /// Builds the context for `settings`, dating the changelog entry `date`.
    pub fn from_settings(settings: &Settings, date: NaiveDate) -> Self {
        let package = settings.package();
        let variant = settings.variant();

        Self {
            name: package.name.clone(),
            version: package.version.clone(),
            release: settings.rpm().release.clone(),
            summary: package.summary.clone(),
            license: package.license.clone(),
            url: package.url.clone(),
            source: settings.source_archive_name(),
            description: package.description.clone(),
            packager: package.packager.clone(),
            changelog_date: changelog_date(date),
            binaries: settings
                .binaries()
                .iter()
                .map(|binary| SpecBinary {
                    staged_name: variant.binary_name(binary.name()),
                    install_path: binary.install_path().display().to_string(),
                })
                .collect(),
        }
    }
}

/// Formats a date the way `%changelog` headers expect.
pub fn changelog_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Renders `template` with `context`.
///
/// Strict: a token the context does not define is a
/// [`Error::TemplateError`](crate::bundler::Error::TemplateError).
pub fn render_to_string(template: &str, context: &SpecContext) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);

    handlebars.register_template_string(TEMPLATE_NAME, template)?;
    Ok(handlebars.render(TEMPLATE_NAME, context)?)
}

/// Renders the spec and writes it to `target_dir/<name>.spec`.
///
/// # Returns
/// Path of the written spec file
pub async fn render_spec(
    template: &str,
    context: &SpecContext,
    target_dir: &Path,
) -> Result<PathBuf> {
    validate_package_name(&context.name)?;

    let rendered = render_to_string(template, context)?;
    let spec_path = target_dir.join(format!("{}.spec", context.name));
    fs::write_file(&spec_path, rendered.as_bytes()).await?;

    log::debug!("Rendered spec to {}", spec_path.display());
    Ok(spec_path)
}
