// Licensed under the Apache-2.0 license

//! Generate the Flexcomm pin driver code.

use anyhow::{bail, Context, Result};
use log::info;
use mcu_pinmap_generator::{
    generate_pin_driver_from_file, generate_pin_driver_with_config, GeneratorConfig, Section,
    DEFAULT_TABLE,
};
use std::fs;
use std::path::Path;

const HEADER: &str = "// Licensed under the Apache-2.0 license\n// Generated by xtask pin-gen\n\n";

/// Generate pin driver code from `table` (or the built-in table).
///
/// Without `output` the code is printed to stdout. With `check`, the code is
/// compared against `output` instead of written to it.
pub fn generate(
    table: Option<&Path>,
    output: Option<&Path>,
    sections: &[Section],
    check: bool,
) -> Result<()> {
    let mut config = GeneratorConfig::with_defaults().only(sections);
    if output.is_some() {
        config = config.header(HEADER);
    }

    let code = match table {
        Some(table) => {
            info!("Generating pin driver from: {}", table.display());
            generate_pin_driver_from_file(table, &config)?
        }
        None => {
            info!("Generating pin driver from the built-in LPC55S6x table");
            generate_pin_driver_with_config(DEFAULT_TABLE, &config)?
        }
    };

    match output {
        Some(output_path) if check => {
            let existing = fs::read_to_string(output_path)
                .with_context(|| format!("failed to read {}", output_path.display()))?;
            if existing != code {
                bail!(
                    "{} is out of date; run `cargo xtask pin-gen --output {}`",
                    output_path.display(),
                    output_path.display()
                );
            }
            info!("{} is up to date", output_path.display());
        }
        Some(output_path) => {
            fs::write(output_path, &code)
                .with_context(|| format!("failed to write {}", output_path.display()))?;
            info!("Output written to: {} ({} bytes)", output_path.display(), code.len());
        }
        None if check => bail!("--check requires --output"),
        None => print!("{code}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("pins.rs");

        generate(None, Some(out.as_path()), &[], false).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert!(written.starts_with(HEADER));
        assert!(written.contains("pub fn into_usart3_rts_pin("));

        generate(None, Some(out.as_path()), &[], true).unwrap();

        fs::write(&out, written.replace("FUNC8", "FUNC9")).unwrap();
        let err = generate(None, Some(out.as_path()), &[], true).unwrap_err();
        assert!(err.to_string().contains("out of date"));
    }

    #[test]
    fn test_custom_table_and_sections() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("table.txt");
        let out = dir.path().join("function.rs");
        fs::write(&table, "PIO0_0, 2, FC3_SCK,\n").unwrap();

        generate(Some(table.as_path()), Some(out.as_path()), &[Section::Markers], false).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(
            written,
            format!("{HEADER}pub struct FC3_SCK;\nimpl Function for FC3_SCK {{}}\n")
        );
    }

    #[test]
    fn test_check_needs_output() {
        assert!(generate(None, None, &[], true).is_err());
    }

    #[test]
    fn test_bad_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("table.txt");
        let out = dir.path().join("pins.rs");
        fs::write(&table, "PIO0_0, 2, FC3_SCK,\nPIO0_1, x, FC3_SCK,\n").unwrap();

        assert!(generate(Some(table.as_path()), Some(out.as_path()), &[], false).is_err());
        assert!(!out.exists());
    }
}
