// Licensed under the Apache-2.0 license

//! Entry points for generating pin driver code from a pin table.
//!
//! The implementation is split across submodules:
//! - `generate`: folding table entries into a [`GeneratedPinMap`]

mod generate;


use anyhow::{Context, Result};
use std::path::Path;

use crate::config::GeneratorConfig;
use crate::output::GeneratedPinMap;
use crate::table::{parse_table, PinSignalEntry};

pub use generate::generate_pin_map;

/// Generate pin driver code for a table with the default configuration.
pub fn generate_pin_driver(table: &str) -> Result<String> {
    generate_pin_driver_with_config(table, &GeneratorConfig::with_defaults())
}

/// Generate pin driver code for a table.
///
/// Nothing is rendered unless every row parses and decomposes.
pub fn generate_pin_driver_with_config(table: &str, config: &GeneratorConfig) -> Result<String> {
    let entries = parse_table(table)?;
    generate_from_entries(&entries, config)
}

/// Generate pin driver code from a table file.
pub fn generate_pin_driver_from_file(path: &Path, config: &GeneratorConfig) -> Result<String> {
    let table = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pin table {}", path.display()))?;
    generate_pin_driver_with_config(&table, config)
        .with_context(|| format!("in pin table {}", path.display()))
}

fn generate_from_entries(entries: &[PinSignalEntry], config: &GeneratorConfig) -> Result<String> {
    let pin_map: GeneratedPinMap = generate_pin_map(entries)?;
    Ok(pin_map.generate_code(config))
}
