//! # Template & Sample Subcommands
//!
//! Emit the authoring template or a built-in sample dataset as JSON on
//! stdout, ready to redirect into a file and edit.

use clap::Args;

use muni_pack::{sample_city, sample_township, starter_template, JurisdictionData};

/// Arguments for the `muni sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Which built-in sample to print.
    #[arg(value_enum, default_value = "township")]
    pub kind: SampleKind,
}

/// The built-in sample datasets.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    /// Liberty Township, OH — population 3,200.
    Township,
    /// City of Riverside, OH — population 28,500.
    City,
}

/// Execute the template subcommand.
pub fn run_template() -> anyhow::Result<u8> {
    print_pack(&starter_template())
}

/// Execute the sample subcommand.
pub fn run_sample(args: &SampleArgs) -> anyhow::Result<u8> {
    let pack = match args.kind {
        SampleKind::Township => sample_township(),
        SampleKind::City => sample_city(),
    };
    print_pack(&pack)
}

fn print_pack(pack: &JurisdictionData) -> anyhow::Result<u8> {
    println!("{}", pack.to_json()?);
    Ok(0)
}
