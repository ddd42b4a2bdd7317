pub mod convert;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "pp-cryptobooks",
    version,
    about = "Convert Portfolio Performance crypto transactions to CryptoBooks import format.",
    after_help = "Example:\n  pp-cryptobooks portfolio_transactions.csv cryptobooks_import.csv"
)]
pub struct Cli {
    /// Portfolio Performance CSV export
    pub input: PathBuf,
    /// CryptoBooks CSV file to write
    pub output: PathBuf,
    /// Settings file (default: ~/.config/pp-cryptobooks/settings.json)
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Fiat currency code used for buys and sells
    #[arg(long)]
    pub fiat: Option<String>,
    /// Only print the summary, not every converted row
    #[arg(short, long)]
    pub quiet: bool,
}
