// Licensed under the Apache-2.0 license

//! Folding pin table entries into generated methods, trait impls and markers.

use anyhow::{Context, Result};
use log::{debug, info};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::output::{
    GeneratedMarkerType, GeneratedMethod, GeneratedPinMap, GeneratedTraitImpl, MethodKey,
};
use crate::signal::SignalTag;
use crate::table::PinSignalEntry;

/// Build the pin map for `entries`.
///
/// Methods and trait impls are deduplicated independently. Several alternate
/// functions can expose the same role on one pin (`PIO0_13` is I2C1 SDA both
/// as `FC1_CTS_SDA_SSEL0` and as `FC1_RXD_SDA_MOSI_DATA`), but only the first
/// row gets an `into_i2c1_sda_pin` method. Every row still contributes its
/// trait impls, since those are keyed by function rather than by pin.
pub fn generate_pin_map(entries: &[PinSignalEntry]) -> Result<GeneratedPinMap> {
    let mut methods = Vec::new();
    let mut seen_methods: HashSet<MethodKey> = HashSet::new();
    let mut trait_impls: BTreeMap<String, GeneratedTraitImpl> = BTreeMap::new();
    let mut markers: BTreeSet<&str> = BTreeSet::new();

    for entry in entries {
        let tag = SignalTag::parse(&entry.signal_tag)
            .with_context(|| format!("line {}: pin {}", entry.line, entry.pin))?;
        let bindings = tag
            .bindings()
            .with_context(|| format!("line {}: pin {}", entry.line, entry.pin))?;

        for binding in bindings {
            let trait_impl = GeneratedTraitImpl {
                trait_name: binding.trait_name(),
                instance: binding.instance,
                signal_tag: entry.signal_tag.clone(),
            };
            trait_impls
                .entry(trait_impl.statement())
                .or_insert(trait_impl);

            let method = GeneratedMethod {
                pin: entry.pin.clone(),
                alt_function: entry.alt_function,
                binding,
                signal_tag: entry.signal_tag.clone(),
            };
            if seen_methods.insert(method.key()) {
                methods.push(method);
            } else {
                debug!(
                    "line {}: {}::{} already generated, skipping FUNC{} ({})",
                    entry.line,
                    entry.pin,
                    binding.method_name(),
                    entry.alt_function,
                    entry.signal_tag
                );
            }
        }
        markers.insert(&entry.signal_tag);
    }

    info!(
        "Generated {} methods, {} trait impls, {} markers from {} table rows",
        methods.len(),
        trait_impls.len(),
        markers.len(),
        entries.len()
    );

    Ok(GeneratedPinMap {
        methods,
        trait_impls: trait_impls.into_values().collect(),
        markers: markers
            .into_iter()
            .map(|tag| GeneratedMarkerType {
                signal_tag: tag.to_string(),
            })
            .collect(),
    })
}
