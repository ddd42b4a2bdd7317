use serde::Serialize;

use crate::error::RowError;

/// Portfolio Performance export columns (Italian locale).
pub mod columns {
    pub const DATE: &str = "Data";
    pub const TYPE: &str = "Tipo";
    pub const TITLE: &str = "Titolo";
    pub const SHARES: &str = "Azioni";
    pub const PRICE: &str = "Quotazione";
    pub const AMOUNT: &str = "Importo";
    pub const FEES: &str = "Commissioni";
    pub const NOTE: &str = "Note";
    pub const ORIGIN: &str = "Origine";

    /// Header tokens a Portfolio Performance export is recognized by.
    pub const SNIFF: &[&str] = &[DATE, TYPE, TITLE];
}

/// CryptoBooks import header, in output order.
pub const TRADE_HEADER: [&str; 11] = [
    "TYPE",
    "CATEGORY",
    "TRANSACTION DATE",
    "FROM CURRENCY",
    "FROM AMOUNT",
    "TO CURRENCY",
    "TO AMOUNT",
    "FEE CURRENCY",
    "FEE AMOUNT",
    "NOTES",
    "ORIGINAL ID",
];

/// One row of a Portfolio Performance export, fields as raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRecord {
    pub date: String,
    pub kind: String,
    pub title: String,
    pub shares: String,
    pub price: String,
    pub amount: String,
    pub fees: String,
    pub note: String,
    pub origin: String,
}

/// One CryptoBooks trade row. Field order matches [`TRADE_HEADER`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradeRecord {
    #[serde(rename = "TYPE")]
    pub kind: String,
    #[serde(rename = "CATEGORY")]
    pub category: String,
    #[serde(rename = "TRANSACTION DATE")]
    pub date: String,
    #[serde(rename = "FROM CURRENCY")]
    pub from_currency: String,
    #[serde(rename = "FROM AMOUNT")]
    pub from_amount: String,
    #[serde(rename = "TO CURRENCY")]
    pub to_currency: String,
    #[serde(rename = "TO AMOUNT")]
    pub to_amount: String,
    #[serde(rename = "FEE CURRENCY")]
    pub fee_currency: String,
    #[serde(rename = "FEE AMOUNT")]
    pub fee_amount: String,
    #[serde(rename = "NOTES")]
    pub notes: String,
    #[serde(rename = "ORIGINAL ID")]
    pub original_id: String,
}

impl TradeRecord {
    /// `(header, value)` pairs in output order, for previews.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            (TRADE_HEADER[0], self.kind.as_str()),
            (TRADE_HEADER[1], self.category.as_str()),
            (TRADE_HEADER[2], self.date.as_str()),
            (TRADE_HEADER[3], self.from_currency.as_str()),
            (TRADE_HEADER[4], self.from_amount.as_str()),
            (TRADE_HEADER[5], self.to_currency.as_str()),
            (TRADE_HEADER[6], self.to_amount.as_str()),
            (TRADE_HEADER[7], self.fee_currency.as_str()),
            (TRADE_HEADER[8], self.fee_amount.as_str()),
            (TRADE_HEADER[9], self.notes.as_str()),
            (TRADE_HEADER[10], self.original_id.as_str()),
        ]
    }
}

/// Result of converting one source row.
#[derive(Debug, Clone)]
pub enum RowOutcome {
    Converted {
        source: SourceRecord,
        trade: TradeRecord,
    },
    Skipped {
        /// Raw row content as read, for the error report.
        row: String,
        reason: RowError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub converted: usize,
    pub skipped: usize,
}

impl ConversionSummary {
    pub fn record(&mut self, outcome: &RowOutcome) {
        match outcome {
            RowOutcome::Converted { .. } => self.converted += 1,
            RowOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped
    }
}
