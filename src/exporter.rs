use std::path::Path;

use crate::error::Result;
use crate::models::{TradeRecord, TRADE_HEADER};

/// Write a CryptoBooks import file. The header is written even when there
/// are no trades.
pub fn write_trades(file_path: &Path, trades: &[TradeRecord], delimiter: u8) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_path(file_path)?;
    wtr.write_record(TRADE_HEADER)?;
    for trade in trades {
        wtr.serialize(trade)?;
    }
    wtr.flush()?;
    Ok(())
}
