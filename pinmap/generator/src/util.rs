// Licensed under the Apache-2.0 license

//! Name conversion helpers for building generated identifiers.

/// Upper-cases the first character and lower-cases the rest.
///
/// This is how datasheet names become Rust type names in the HAL:
/// `PIO0_5` is the pin type `Pio0_5`, `I2C` becomes `I2c`.
///
/// # Examples
/// ```
/// use mcu_pinmap_generator::util::capitalize;
/// assert_eq!(capitalize("PIO0_5"), "Pio0_5");
/// assert_eq!(capitalize("USART3"), "Usart3");
/// assert_eq!(capitalize("SSEL1"), "Ssel1");
/// ```
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Returns true if `name` can be spliced into generated code as an identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("PIO1_30"), "Pio1_30");
        assert_eq!(capitalize("I2S"), "I2s");
        assert_eq!(capitalize("sclk"), "Sclk");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("PIO0_5"));
        assert!(is_identifier("FC3_RTS_SCL_SSEL1"));
        assert!(!is_identifier("0PIO"));
        assert!(!is_identifier("PIO 0"));
        assert!(!is_identifier(""));
    }
}
