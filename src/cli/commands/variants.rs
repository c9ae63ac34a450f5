//! `variants` command.

use crate::bundler::VariantTable;
use crate::error::Result;
use std::fmt::Write;

/// Prints the variant table.
pub fn variants(table: &VariantTable) -> Result<i32> {
    print!("{}", format_variants(table));
    Ok(0)
}

/// Renders the variant table, one block per variant.
pub fn format_variants(table: &VariantTable) -> String {
    let mut out = String::new();
    for variant in table.iter() {
        let suffix = if variant.bin_suffix.is_empty() {
            "none"
        } else {
            variant.bin_suffix.as_str()
        };
        let _ = writeln!(out, "{} (binary suffix: {suffix})", variant.name);
        for (platform, flags) in &variant.cxxflags {
            let _ = writeln!(out, "  {platform}: {}", flags.join(" "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_default_variants() {
        let out = format_variants(&VariantTable::default());
        assert_eq!(
            out,
            "debug (binary suffix: -g)\n  linux: -O0 -g\n  win32: /Zi\n\
             release (binary suffix: none)\n  linux: -O2\n  win32: /Ox\n"
        );
    }
}
