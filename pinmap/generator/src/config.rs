// Licensed under the Apache-2.0 license

//! Configuration for what the generator emits.
//!
//! In the HAL the generated blocks live in different files: the pin methods
//! and capability impls next to the pin driver, the function markers in the
//! pin type-states. [`GeneratorConfig`] selects the blocks for one output.

/// A block of generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// `Pin::into_*_pin` configuration methods.
    Methods,
    /// Capability trait impls such as `UsartRtsPin<PIO, Usart3>`.
    TraitImpls,
    /// `Function` marker types, one per signal tag.
    Markers,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Methods, Section::TraitImpls, Section::Markers];
}

/// Controls rendering of a [`GeneratedPinMap`](crate::output::GeneratedPinMap).
///
/// # Example
///
/// ```
/// use mcu_pinmap_generator::config::{GeneratorConfig, Section};
///
/// let config = GeneratorConfig::with_defaults()
///     .only(&[Section::Markers])
///     .header("// Generated by xtask pin-gen\n");
/// assert!(config.includes(Section::Markers));
/// assert!(!config.includes(Section::Methods));
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    /// Blocks to emit, always rendered in [`Section::ALL`] order.
    pub sections: Vec<Section>,

    /// Text placed verbatim before the generated code.
    pub header: Option<String>,

    /// Type-state of the `Iocon` handle taken by the generated methods.
    pub iocon_state: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl GeneratorConfig {
    /// All sections, no header, `Iocon<init_state::Enabled>`.
    pub fn with_defaults() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            header: None,
            iocon_state: "init_state::Enabled".to_string(),
        }
    }

    /// Restrict output to the given sections. An empty slice keeps all of them.
    pub fn only(mut self, sections: &[Section]) -> Self {
        if !sections.is_empty() {
            self.sections = sections.to_vec();
        }
        self
    }

    pub fn header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn iocon_state(mut self, state: &str) -> Self {
        self.iocon_state = state.to_string();
        self
    }

    pub fn includes(&self, section: Section) -> bool {
        self.sections.contains(&section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_include_everything() {
        let config = GeneratorConfig::default();
        assert!(Section::ALL.iter().all(|&s| config.includes(s)));
        assert_eq!(config.iocon_state, "init_state::Enabled");
        assert!(config.header.is_none());
    }

    #[test]
    fn test_only_empty_keeps_all() {
        let config = GeneratorConfig::with_defaults().only(&[]);
        assert_eq!(config.sections.len(), 3);
        let config = config.only(&[Section::TraitImpls]);
        assert_eq!(config.sections, [Section::TraitImpls]);
    }
}
