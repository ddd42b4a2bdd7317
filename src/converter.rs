use crate::decimal::EuroAmount;
use crate::importer::SourceTable;
use crate::models::{RowOutcome, SourceRecord, TradeRecord};
use crate::symbols::SymbolTable;

const TRADE_TYPE: &str = "Trade";
const TRADE_CATEGORY: &str = "Trading";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Direction {
    Buy,
    Sell,
}

impl Direction {
    /// Portfolio Performance (Italian) type labels. Anything that is not a
    /// sale is booked like a purchase.
    fn from_label(label: &str) -> Self {
        match label.to_lowercase().as_str() {
            "vendi" => Self::Sell,
            _ => Self::Buy,
        }
    }
}

/// Turns Portfolio Performance rows into CryptoBooks trades.
pub struct Converter {
    symbols: SymbolTable,
    fiat: String,
}

impl Converter {
    pub fn new(symbols: SymbolTable, fiat: impl Into<String>) -> Self {
        Self {
            symbols,
            fiat: fiat.into(),
        }
    }

    pub fn fiat(&self) -> &str {
        &self.fiat
    }

    pub fn known_assets(&self) -> usize {
        self.symbols.len()
    }

    pub fn convert_row(&self, src: &SourceRecord) -> TradeRecord {
        let kind = src.kind.trim();
        let title = src.title.trim();
        let note = src.note.trim();
        let origin = src.origin.trim();
        let shares = EuroAmount::parse(&src.shares);
        let amount = EuroAmount::parse(&src.amount);
        let fees = EuroAmount::parse(&src.fees);

        let ticker = self.symbols.extract(title);

        let (from_currency, from_amount, to_currency, to_amount) = match Direction::from_label(kind) {
            Direction::Buy => (self.fiat.clone(), amount, ticker, shares),
            Direction::Sell => (ticker, shares, self.fiat.clone(), amount),
        };

        let mut notes = format!("{note} {origin}").trim().to_string();
        if notes.is_empty() {
            notes = format!("{kind} {title} on {origin}").trim().to_string();
        }

        let (fee_currency, fee_amount) = if fees.is_positive() {
            (from_currency.clone(), fees.to_string())
        } else {
            (String::new(), String::new())
        };

        TradeRecord {
            kind: TRADE_TYPE.to_string(),
            category: TRADE_CATEGORY.to_string(),
            date: src.date.trim().to_string(),
            from_currency,
            from_amount: from_amount.to_string(),
            to_currency,
            to_amount: to_amount.to_string(),
            fee_currency,
            fee_amount,
            notes,
            original_id: String::new(),
        }
    }

    /// Convert every row of an export, in order. Rows that lack a required
    /// column come back as [`RowOutcome::Skipped`].
    pub fn convert_all(&self, table: &SourceTable) -> Vec<RowOutcome> {
        table
            .rows
            .iter()
            .map(|record| match table.columns.extract(record) {
                Ok(src) => {
                    let trade = self.convert_row(&src);
                    RowOutcome::Converted { source: src, trade }
                }
                Err(reason) => RowOutcome::Skipped {
                    row: table.columns.describe(record),
                    reason,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RowError;
    use crate::importer::read_source;
    use crate::models::ConversionSummary;

    fn converter() -> Converter {
        Converter::new(SymbolTable::default(), "EUR")
    }

    fn row(kind: &str, title: &str, shares: &str, amount: &str, fees: &str) -> SourceRecord {
        SourceRecord {
            date: "2024-05-02T10:15".to_string(),
            kind: kind.to_string(),
            title: title.to_string(),
            shares: shares.to_string(),
            amount: amount.to_string(),
            fees: fees.to_string(),
            note: "DCA".to_string(),
            origin: "Bitpanda".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_buy_maps_fiat_to_crypto() {
        let t = converter().convert_row(&row("Compra", "Ethereum (ETH)", "0,05", "100,00", "0"));
        assert_eq!(t.kind, "Trade");
        assert_eq!(t.category, "Trading");
        assert_eq!(t.date, "2024-05-02T10:15");
        assert_eq!(t.from_currency, "EUR");
        assert_eq!(t.from_amount, "100,00");
        assert_eq!(t.to_currency, "ETH");
        assert_eq!(t.to_amount, "0,05");
        assert_eq!(t.original_id, "");
    }

    #[test]
    fn test_sell_maps_crypto_to_fiat() {
        let t = converter().convert_row(&row("Vendi", "Ethereum (ETH)", "0,05", "120,00", "0"));
        assert_eq!(t.from_currency, "ETH");
        assert_eq!(t.from_amount, "0,05");
        assert_eq!(t.to_currency, "EUR");
        assert_eq!(t.to_amount, "120,00");
    }

    #[test]
    fn test_type_label_is_case_insensitive() {
        let t = converter().convert_row(&row("  VENDI ", "Bitcoin", "0,1", "6.000,00", ""));
        assert_eq!(t.from_currency, "BTC");
        assert_eq!(t.to_amount, "6000,00");
    }

    #[test]
    fn test_unknown_type_falls_back_to_buy() {
        let t = converter().convert_row(&row("Consegna in entrata", "Solana", "3", "450,00", ""));
        assert_eq!(t.from_currency, "EUR");
        assert_eq!(t.from_amount, "450,00");
        assert_eq!(t.to_currency, "SOL");
        assert_eq!(t.to_amount, "3");
    }

    #[test]
    fn test_fee_uses_from_currency() {
        let t = converter().convert_row(&row("Compra", "Bitcoin", "0,01", "500,00", "1,5"));
        assert_eq!(t.fee_currency, "EUR");
        assert_eq!(t.fee_amount, "1,5");

        let t = converter().convert_row(&row("Vendi", "Bitcoin", "0,01", "500,00", "0,0001"));
        assert_eq!(t.fee_currency, "BTC");
        assert_eq!(t.fee_amount, "0,0001");
    }

    #[test]
    fn test_zero_fee_leaves_fee_blank() {
        let t = converter().convert_row(&row("Compra", "Bitcoin", "0,01", "500,00", "0"));
        assert_eq!(t.fee_currency, "");
        assert_eq!(t.fee_amount, "");
        let t = converter().convert_row(&row("Compra", "Bitcoin", "0,01", "500,00", ""));
        assert_eq!(t.fee_currency, "");
    }

    #[test]
    fn test_zero_amount_is_blank() {
        let t = converter().convert_row(&row("Compra", "Bitcoin", "0,01", "0,00", ""));
        assert_eq!(t.from_amount, "");
        assert_eq!(t.to_amount, "0,01");
    }

    #[test]
    fn test_notes_combine_note_and_origin() {
        let t = converter().convert_row(&row("Compra", "Bitcoin", "1", "1", ""));
        assert_eq!(t.notes, "DCA Bitpanda");

        let mut src = row("Compra", "Bitcoin", "1", "1", "");
        src.note = "  ".to_string();
        assert_eq!(converter().convert_row(&src).notes, "Bitpanda");
    }

    #[test]
    fn test_notes_synthesized_when_blank() {
        let mut src = row("Compra", " Bitcoin ", "1", "1", "");
        src.note = String::new();
        src.origin = String::new();
        assert_eq!(converter().convert_row(&src).notes, "Compra Bitcoin on");
    }

    #[test]
    fn test_custom_fiat() {
        let conv = Converter::new(SymbolTable::default(), "CHF");
        assert_eq!(conv.fiat(), "CHF");
        let t = conv.convert_row(&row("Compra", "Cardano", "10", "5,00", ""));
        assert_eq!(t.from_currency, "CHF");
        assert_eq!(t.to_currency, "ADA");
    }

    #[test]
    fn test_convert_all_counts_every_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pp.csv");
        std::fs::write(
            &path,
            "Data;Tipo;Titolo;Azioni;Quotazione;Importo;Commissioni;Note;Origine\n\
             2024-01-01;Compra;Bitcoin;0,01;40.000,00;400,00;1,00;;Kraken\n\
             2024-01-02;Compra;Ethereum\n\
             2024-01-03;Vendi;Cardano;100;0,50;50,00;0;;Kraken\n",
        )
        .unwrap();
        let table = read_source(&path, b';').unwrap();
        let outcomes = converter().convert_all(&table);
        assert_eq!(outcomes.len(), 3);

        let mut summary = ConversionSummary::default();
        outcomes.iter().for_each(|o| summary.record(o));
        assert_eq!(summary.converted, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total(), table.rows.len());

        match &outcomes[1] {
            RowOutcome::Skipped { row, reason } => {
                assert_eq!(*reason, RowError::MissingField("Azioni".to_string()));
                assert!(row.contains("Ethereum"));
            }
            other => panic!("expected skip, got {other:?}"),
        }
        match &outcomes[2] {
            RowOutcome::Converted { source, trade } => {
                assert_eq!(source.title, "Cardano");
                assert_eq!(trade.from_currency, "ADA");
            }
            other => panic!("expected trade, got {other:?}"),
        }
    }
}
