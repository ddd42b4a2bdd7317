use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::converter::Converter;
use crate::error::Result;
use crate::exporter::write_trades;
use crate::importer::{read_source, sniff_header};
use crate::models::{columns, ConversionSummary, RowOutcome, TradeRecord};
use crate::settings::Settings;

const RULE_WIDTH: usize = 70;

pub fn run(input: &Path, output: &Path, settings: &Settings, quiet: bool) -> Result<()> {
    let delimiter = settings.delimiter_byte()?;

    print_banner();
    println!("Input:  {}", input.display());
    println!("Output: {}", output.display());
    println!("{}", "-".repeat(RULE_WIDTH));

    let sniff = sniff_header(input)?;
    if !sniff.recognized {
        // Keep going: exports with renamed columns still convert as far as they can.
        eprintln!(
            "{} File doesn't appear to be in Portfolio Performance format",
            "Warning:".yellow().bold()
        );
        eprintln!("   Expected columns containing: {}", columns::SNIFF.join(", "));
        eprintln!("   Found: {}", sniff.first_line);
    }

    let table = read_source(input, delimiter)?;
    println!("Columns found: {:?}", table.columns.names());

    let converter = Converter::new(settings.symbol_table(), settings.fiat_currency.trim());
    println!(
        "Fiat currency: {}  (known assets: {})",
        converter.fiat(),
        converter.known_assets()
    );
    let outcomes = converter.convert_all(&table);

    let mut summary = ConversionSummary::default();
    let mut trades = Vec::new();
    for (i, outcome) in outcomes.into_iter().enumerate() {
        summary.record(&outcome);
        match outcome {
            RowOutcome::Converted { source, trade } => {
                if !quiet {
                    println!(
                        "{} Row {}: {} {} @ {} -> {} \u{2192} {}",
                        "\u{2713}".green(),
                        i + 1,
                        source.kind.trim(),
                        source.title.trim(),
                        source.price.trim(),
                        trade.from_currency,
                        trade.to_currency
                    );
                }
                trades.push(trade);
            }
            RowOutcome::Skipped { row, reason } => {
                eprintln!("{} Row {}: error converting row: {reason}", "\u{2717}".red(), i + 1);
                eprintln!("   Problematic row: {row}");
            }
        }
    }

    write_trades(output, &trades, delimiter)?;

    print_summary(output, &summary, trades.first());
    print_next_steps();
    Ok(())
}

fn print_banner() {
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", "Portfolio Performance to CryptoBooks Converter".bold());
    println!("   Version {}", env!("CARGO_PKG_VERSION"));
    println!("   Convert crypto transactions for Italian tax declaration (730)");
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_summary(output: &Path, summary: &ConversionSummary, first: Option<&TradeRecord>) {
    println!();
    println!("{}", "Conversion completed!".green().bold());
    println!("Rows read:      {}", summary.total());
    println!("Rows processed: {}", summary.converted);
    println!("Rows skipped:   {}", summary.skipped);
    println!("Output saved to: {}", output.display());

    if let Some(trade) = first {
        let mut table = Table::new();
        table.set_header(vec!["Field", "Value"]);
        for (name, value) in trade.fields() {
            table.add_row(vec![Cell::new(name), Cell::new(value)]);
        }
        println!("\nPreview of first converted transaction:\n{table}");
    }
}

fn print_next_steps() {
    println!();
    println!("Next steps:");
    println!("   1. Open the output file to verify the conversion");
    println!("   2. Import the file into CryptoBooks");
    println!("   3. Use CryptoBooks to generate your tax report");
}
