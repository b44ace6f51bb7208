// Licensed under the Apache-2.0 license

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use mcu_pinmap_generator::Section;
use simple_logger::SimpleLogger;
use std::path::PathBuf;

mod pin_gen;

#[derive(Parser)]
#[command(name = "xtask", version, about, long_about = None)]
struct Xtask {
    /// Log every skipped duplicate and other debug details
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    xtask: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Flexcomm pin configuration methods, capability impls and function markers
    PinGen {
        /// Pin table to read instead of the built-in LPC55S6x table
        #[arg(long)]
        table: Option<PathBuf>,

        /// File to write; prints to stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,

        /// Only emit these blocks (may be repeated)
        #[arg(long, value_enum)]
        only: Vec<SectionArg>,

        /// Fail if --output does not match freshly generated code
        #[arg(long, default_value_t = false)]
        check: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SectionArg {
    Methods,
    TraitImpls,
    Markers,
}

impl From<SectionArg> for Section {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Methods => Section::Methods,
            SectionArg::TraitImpls => Section::TraitImpls,
            SectionArg::Markers => Section::Markers,
        }
    }
}

fn main() -> Result<()> {
    let cli = Xtask::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    match cli.xtask {
        Commands::PinGen {
            table,
            output,
            only,
            check,
        } => {
            let sections: Vec<Section> = only.into_iter().map(Section::from).collect();
            pin_gen::generate(table.as_deref(), output.as_deref(), &sections, check)
        }
    }
}
