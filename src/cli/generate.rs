//! Icon generation command.
//!
//! Resolves configuration, applies command-line overrides and runs the
//! batch exporter.

use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::export::IconExporter;
use crate::output::Printer;
use crate::render::RenderOptions;

/// Generate the icon PNGs
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Output directory (default: current directory)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Config file overriding output, colours and sizes
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Only generate the given size label (repeatable)
    #[arg(long, value_name = "LABEL")]
    pub only: Vec<String>,

    /// Render hard shape edges
    #[arg(long)]
    pub no_antialias: bool,
}

pub fn run(args: GenerateArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let config = Config::resolve(args.config.as_deref())?;

    let specs = config.select_sizes(&args.only)?;
    let output = args.output.unwrap_or(config.output);
    let options = RenderOptions {
        anti_alias: config.anti_alias && !args.no_antialias,
    };

    IconExporter::new(output)
        .with_palette(config.colours)
        .with_options(options)
        .export(&specs, printer)
}
