// Licensed under the Apache-2.0 license

//! Flexcomm pin multiplexing to type-state pin driver code generator.
//!
//! This crate turns a table of `(pin, FUNC selector, Flexcomm signal)` rows
//! into Rust source for the LPC55 HAL: `Pin::into_*_pin` configuration
//! methods, capability trait impls such as `I2cSclPin<PIO, I2c1>`, and the
//! `Function` marker types the pins are moved into.
//!
//! ## Usage
//!
//! ```
//! use mcu_pinmap_generator::{
//!     generate_pin_driver, generate_pin_driver_with_config, GeneratorConfig, Section,
//!     DEFAULT_TABLE,
//! };
//!
//! // Generate everything for the built-in LPC55S6x table
//! let code = generate_pin_driver(DEFAULT_TABLE).unwrap();
//! assert!(code.contains("pub fn into_usart3_rts_pin("));
//!
//! // Or only the function markers, with a header
//! let config = GeneratorConfig::with_defaults()
//!     .only(&[Section::Markers])
//!     .header("// Generated by xtask pin-gen\n\n");
//! let markers = generate_pin_driver_with_config(DEFAULT_TABLE, &config).unwrap();
//! assert!(markers.contains("impl Function for FC3_SCK {}"));
//! ```
//!
//! ## Module Organization
//!
//! - [`table`]: Pin table parsing ([`PinSignalEntry`])
//! - [`signal`]: Signal tag decomposition and role normalization
//! - [`config`]: Output selection ([`GeneratorConfig`])
//! - [`output`]: Generated output types and rendering
//! - [`util`]: Identifier helpers

pub mod config;
pub mod output;
pub mod signal;
pub mod table;
pub mod util;

mod codegen;

// Re-export main public API
pub use codegen::{
    generate_pin_driver, generate_pin_driver_from_file, generate_pin_driver_with_config,
    generate_pin_map,
};
pub use config::{GeneratorConfig, Section};
pub use output::{
    GeneratedMarkerType, GeneratedMethod, GeneratedPinMap, GeneratedTraitImpl, MethodKey,
};
pub use table::{default_entries, parse_table, PinSignalEntry, DEFAULT_TABLE};
