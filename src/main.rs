mod cli;
mod converter;
mod decimal;
mod error;
mod exporter;
mod fmt;
mod importer;
mod models;
mod settings;
mod symbols;

use clap::Parser;

use cli::Cli;
use error::Result;
use settings::{load_settings, Settings};

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = load_settings(cli.settings.as_deref())?;
    if let Some(fiat) = &cli.fiat {
        settings.fiat_currency = fiat.clone();
    }
    Ok(settings)
}

fn main() {
    let cli = Cli::parse();

    let result = resolve_settings(&cli)
        .and_then(|settings| cli::convert::run(&cli.input, &cli.output, &settings, cli.quiet));

    if let Err(e) = result {
        eprintln!("Error: {e}");
        eprintln!("Conversion failed!");
        std::process::exit(1);
    }
}
