//! Sponsor countries CLI - extract distinct countries from a sponsors export.

use clap::Parser;
use sponsor_cli::{logging, resolve_config, Cli, Formatter};
use sponsor_extractor::Extractor;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let formatter = Formatter::new(cli.format.into(), !cli.no_color);

    if let Err(e) = run(&cli, &formatter) {
        eprintln!("{}", formatter.error(&e.to_string()));
        std::process::exit(1);
    }
}

fn run(cli: &Cli, formatter: &Formatter) -> sponsor_cli::Result<()> {
    let config = resolve_config(cli)?;
    let summary = Extractor::new(config).run()?;
    println!("{}", formatter.format_summary(&summary)?);
    Ok(())
}
