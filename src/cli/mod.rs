pub mod generate;

use clap::Parser;

/// appicons - Generate the heart-and-drop app icon at every iOS size
#[derive(Parser, Debug)]
#[command(name = "appicons")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub generate: generate::GenerateArgs,
}
