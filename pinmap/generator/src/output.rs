// Licensed under the Apache-2.0 license

//! Output types and rendering of the generated pin driver code.
//!
//! ## Generated Code Structure
//!
//! For the row `PIO0_5, 8, FC3_RTS_SCL_SSEL1` the generator emits, in three
//! blocks:
//!
//! ```text
//! impl Pin<Pio0_5, pin_state::Unused> {
//!     pub fn into_usart3_rts_pin(self, iocon: &mut Iocon<..>)
//!         -> Pin<Pio0_5, pin_state::Special<FC3_RTS_SCL_SSEL1>> { .. }
//! }
//! ...
//! impl<PIO: PinId> UsartRtsPin<PIO, Usart3> for Pin<PIO, Special<FC3_RTS_SCL_SSEL1>> {}
//! ...
//! pub struct FC3_RTS_SCL_SSEL1;
//! impl Function for FC3_RTS_SCL_SSEL1 {}
//! ```

use std::fmt::Write;

use crate::config::{GeneratorConfig, Section};
use crate::signal::{PeripheralInstance, Role, RoleBinding};
use crate::util::capitalize;

/// Identity of a configuration method. Two rows that expose the same role of
/// the same peripheral on the same pin share a key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MethodKey {
    pub pin: String,
    pub instance: PeripheralInstance,
    pub role: Role,
}

/// A `Pin::into_*_pin` method.
#[derive(Clone, Debug)]
pub struct GeneratedMethod {
    /// IOCON pin name, e.g. `PIO0_5`.
    pub pin: String,
    /// `FUNC` value written to the pin's IOCON register.
    pub alt_function: u8,
    pub binding: RoleBinding,
    /// Function marker the pin is moved into.
    pub signal_tag: String,
}

/// A capability trait impl for pins in a given special function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedTraitImpl {
    pub trait_name: String,
    pub instance: PeripheralInstance,
    pub signal_tag: String,
}

/// A `Function` marker type.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GeneratedMarkerType {
    pub signal_tag: String,
}

/// Everything generated from one table.
#[derive(Clone, Debug, Default)]
pub struct GeneratedPinMap {
    /// Methods in table order, unique by [`MethodKey`].
    pub methods: Vec<GeneratedMethod>,
    /// Trait impls sorted by their rendered statement.
    pub trait_impls: Vec<GeneratedTraitImpl>,
    /// Marker types sorted by tag.
    pub markers: Vec<GeneratedMarkerType>,
}

impl GeneratedMethod {
    pub fn key(&self) -> MethodKey {
        MethodKey {
            pin: self.pin.clone(),
            instance: self.binding.instance,
            role: self.binding.role,
        }
    }

    /// Render the method inside its own `impl Pin<..>` block.
    pub fn render(&self, iocon_state: &str) -> String {
        let pin_type = capitalize(&self.pin);
        let register = self.pin.to_lowercase();
        let method = self.binding.method_name();
        let alt = self.alt_function;
        let tag = &self.signal_tag;

        let mut output = String::new();
        writeln!(output, "impl Pin<{pin_type}, pin_state::Unused> {{").unwrap();
        writeln!(output, "    pub fn {method}(").unwrap();
        writeln!(output, "        self,").unwrap();
        writeln!(output, "        iocon: &mut Iocon<{iocon_state}>,").unwrap();
        writeln!(
            output,
            "    ) -> Pin<{pin_type}, pin_state::Special<{tag}>> {{"
        )
        .unwrap();
        writeln!(
            output,
            "        // the data sheet lists more FUNC values than the SVD has variants"
        )
        .unwrap();
        writeln!(output, "        iocon.raw.{register}.modify(|_, w| unsafe {{").unwrap();
        writeln!(output, "            w").unwrap();
        writeln!(
            output,
            "            .func().bits({alt}) // FUNC{alt}, pin configured as {tag}"
        )
        .unwrap();
        writeln!(
            output,
            "            .mode().inactive() // MODE_INACT, no additional pin function"
        )
        .unwrap();
        writeln!(
            output,
            "            .slew().standard() // SLEW_STANDARD, standard mode, slew rate control is enabled"
        )
        .unwrap();
        writeln!(
            output,
            "            .invert().disabled() // INV_DI, input function is not inverted"
        )
        .unwrap();
        writeln!(
            output,
            "            .digimode().digital() // DIGITAL_EN, enable digital function"
        )
        .unwrap();
        writeln!(
            output,
            "            .od().normal() // OPENDRAIN_DI, open drain is disabled"
        )
        .unwrap();
        writeln!(output, "        }});").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "        Pin {{").unwrap();
        writeln!(output, "            id: self.id,").unwrap();
        writeln!(output, "            state: Special {{").unwrap();
        writeln!(output, "                _function: {tag},").unwrap();
        writeln!(output, "            }},").unwrap();
        writeln!(output, "        }}").unwrap();
        writeln!(output, "    }}").unwrap();
        writeln!(output, "}}").unwrap();
        output
    }
}

impl GeneratedTraitImpl {
    /// The one-line impl. Deduplication and ordering both use this text.
    pub fn statement(&self) -> String {
        format!(
            "impl<PIO: PinId> {}<PIO, {}> for Pin<PIO, Special<{}>> {{}}",
            self.trait_name,
            self.instance.type_name(),
            self.signal_tag
        )
    }
}

impl GeneratedMarkerType {
    pub fn render(&self) -> String {
        let tag = &self.signal_tag;
        format!("pub struct {tag};\nimpl Function for {tag} {{}}\n")
    }
}

impl GeneratedPinMap {
    /// Generate the Rust code for the sections selected by `config`.
    pub fn generate_code(&self, config: &GeneratorConfig) -> String {
        let mut blocks = Vec::new();
        for section in Section::ALL {
            if !config.includes(section) {
                continue;
            }
            let block = match section {
                Section::Methods => self.generate_methods(&config.iocon_state),
                Section::TraitImpls => self.generate_trait_impls(),
                Section::Markers => self.generate_markers(),
            };
            if !block.is_empty() {
                blocks.push(block);
            }
        }

        let mut output = config.header.clone().unwrap_or_default();
        output.push_str(&blocks.join("\n"));
        output
    }

    fn generate_methods(&self, iocon_state: &str) -> String {
        self.methods
            .iter()
            .map(|m| m.render(iocon_state))
            .collect()
    }

    fn generate_trait_impls(&self) -> String {
        let mut output = String::new();
        for trait_impl in &self.trait_impls {
            writeln!(output, "{}", trait_impl.statement()).unwrap();
        }
        output
    }

    fn generate_markers(&self) -> String {
        self.markers.iter().map(GeneratedMarkerType::render).collect()
    }
}
