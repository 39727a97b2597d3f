use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = dionysos_dbgen::cli::Cli::parse();
    cli.run()
}
