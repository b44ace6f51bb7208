// Licensed under the Apache-2.0 license

//! Parsing of pin multiplexing tables.
//!
//! A table lists one `pin, func, signal` row per line:
//!
//! ```text
//! # comment
//! PIO0_0 , 2, FC3_SCK,
//! PIO0_1 , 2, FC3_CTS_SDA_SSEL0,
//! ```
//!
//! The trailing comma is optional on every row. Row order matters: when two
//! rows produce the same configuration method, the earlier row wins.

use anyhow::{bail, Context, Result};

use crate::util::is_identifier;

/// The LPC55S6x Flexcomm pin table.
pub const DEFAULT_TABLE: &str = include_str!("../data/lpc55s6x_flexcomm.txt");

/// Highest value the IOCON `FUNC` field can hold.
const MAX_ALT_FUNCTION: u8 = 0xf;

/// One row of a pin table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinSignalEntry {
    /// Pin name as used by the IOCON block, e.g. `PIO0_5`.
    pub pin: String,
    /// IOCON `FUNC` selector that routes `signal_tag` to `pin`.
    pub alt_function: u8,
    /// Flexcomm function name, e.g. `FC3_RTS_SCL_SSEL1`.
    pub signal_tag: String,
    /// 1-based line in the source table.
    pub line: usize,
}

/// Parses a table into entries, preserving row order.
pub fn parse_table(text: &str) -> Result<Vec<PinSignalEntry>> {
    let mut entries = Vec::new();
    for (idx, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let entry = parse_row(line, idx + 1)
            .with_context(|| format!("line {}: malformed row {line:?}", idx + 1))?;
        entries.push(entry);
    }
    Ok(entries)
}

/// Parses [`DEFAULT_TABLE`].
pub fn default_entries() -> Result<Vec<PinSignalEntry>> {
    parse_table(DEFAULT_TABLE)
}

fn parse_row(line: &str, line_no: usize) -> Result<PinSignalEntry> {
    let row = line.strip_suffix(',').unwrap_or(line);
    let fields: Vec<&str> = row.split(',').map(str::trim).collect();
    let [pin, alt, tag] = fields.as_slice() else {
        bail!("expected 3 fields, found {}", fields.len());
    };

    if !is_identifier(pin) {
        bail!("invalid pin name {pin:?}");
    }
    if !is_identifier(tag) {
        bail!("invalid signal name {tag:?}");
    }
    let alt_function: u8 = alt
        .parse()
        .with_context(|| format!("alternate function {alt:?} is not a number"))?;
    if alt_function > MAX_ALT_FUNCTION {
        bail!("alternate function {alt_function} exceeds FUNC{MAX_ALT_FUNCTION}");
    }

    Ok(PinSignalEntry {
        pin: pin.to_string(),
        alt_function,
        signal_tag: tag.to_string(),
        line: line_no,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_keeps_order() {
        let entries = parse_table(
            "PIO0_5 , 2, FC4_RXD_SDA_MOSI_DATA,\n  PIO0_5,8 ,FC3_RTS_SCL_SSEL1  ,\nPIO0_6, 1, FC3_SCK",
        )
        .unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[1],
            PinSignalEntry {
                pin: "PIO0_5".into(),
                alt_function: 8,
                signal_tag: "FC3_RTS_SCL_SSEL1".into(),
                line: 2,
            }
        );
        assert_eq!(entries[0].signal_tag, "FC4_RXD_SDA_MOSI_DATA");
        assert_eq!(entries[2].signal_tag, "FC3_SCK");
    }

    #[test]
    fn test_skips_comments_and_blank_lines() {
        let entries = parse_table("# header\n\nPIO0_0, 2, FC3_SCK,\n   \n").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].line, 3);
    }

    #[test]
    fn test_rejects_malformed_rows() {
        let err = parse_table("PIO0_0, 2, FC3_SCK,\nPIO0_1, FC3_SCK,\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
        assert!(parse_table("PIO0_0, two, FC3_SCK").is_err());
        assert!(parse_table("PIO0_0, 16, FC3_SCK").is_err());
        assert!(parse_table("PIO0_0, -1, FC3_SCK").is_err());
        assert!(parse_table("PIO0_0, 1, FC3_SCK, extra").is_err());
        assert!(parse_table(", 1, FC3_SCK").is_err());
        assert!(parse_table("PIO0_0, 1,").is_err());
    }

    #[test]
    fn test_default_table() {
        let entries = default_entries().unwrap();
        assert_eq!(entries.len(), 83);
        assert_eq!(entries[0].pin, "PIO0_0");
        let last = entries.last().unwrap();
        assert_eq!(last.pin, "PIO1_30");
        assert_eq!(last.signal_tag, "FC7_RXD_SDA_MOSI_DATA");
    }
}
