use appicons::cli::Cli;
use appicons::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    appicons::cli::generate::run(cli.generate, &printer)?;

    Ok(())
}
