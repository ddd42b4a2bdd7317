use serde::{Deserialize, Serialize};

/// Asset names as they appear in Portfolio Performance titles, in match order.
const BUILTIN: &[(&str, &str)] = &[
    // Major cryptocurrencies
    ("Bitcoin", "BTC"),
    ("Ethereum", "ETH"),
    ("Cardano", "ADA"),
    ("Solana", "SOL"),
    ("Dogecoin", "DOGE"),
    ("Litecoin", "LTC"),
    ("Polkadot", "DOT"),
    ("Chainlink", "LINK"),
    ("Polygon", "MATIC"),
    // Exchange tokens
    ("Cronos", "CRO"),
    ("Binance Coin", "BNB"),
    // DeFi
    ("Cosmos", "ATOM"),
    ("Injective", "INJ"),
    ("NEAR", "NEAR"),
    ("Ondo", "ONDO"),
    ("Nexera", "NXRA"),
    ("Clearpool", "CPOOL"),
    ("Bittensor", "TAO"),
    ("Manta Network", "MANTA"),
    ("Dymension", "DYM"),
    // Fan tokens
    ("AC Milan Fan Token", "ACM"),
    ("Juventus Fan Token", "JUV"),
    ("Paris Saint-Germain Fan Token", "PSG"),
];

const UNKNOWN: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolEntry {
    pub name: String,
    pub ticker: String,
}

#[derive(Debug, Clone)]
struct Needle {
    lowered: String,
    ticker: String,
}

/// Case-insensitive substring lookup from asset name to ticker.
/// Entries are tried in declaration order and the first hit wins.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    needles: Vec<Needle>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new(&[])
    }
}

impl SymbolTable {
    /// Build the table with `extra` entries ahead of the built-in ones.
    /// Entries with a blank name are ignored since they would match anything.
    pub fn new(extra: &[SymbolEntry]) -> Self {
        let user = extra
            .iter()
            .map(|e| (e.name.as_str(), e.ticker.as_str()));
        let needles = user
            .chain(BUILTIN.iter().copied())
            .filter(|(name, _)| !name.trim().is_empty())
            .map(|(name, ticker)| Needle {
                lowered: name.to_lowercase(),
                ticker: ticker.trim().to_string(),
            })
            .collect();
        Self { needles }
    }

    pub fn len(&self) -> usize {
        self.needles.len()
    }

    pub fn lookup(&self, title: &str) -> Option<&str> {
        let title_lower = title.to_lowercase();
        self.needles
            .iter()
            .find(|n| title_lower.contains(&n.lowered))
            .map(|n| n.ticker.as_str())
    }

    /// Resolve the ticker for a transaction title.
    ///
    /// Falls back to the first all-caps token of 3+ characters (with `EUR`
    /// removed), then to the upper-cased first word, each cut to 4 characters.
    pub fn extract(&self, title: &str) -> String {
        if let Some(ticker) = self.lookup(title) {
            return ticker.to_string();
        }

        let without_fiat = title.replace("EUR", "");
        if let Some(token) = without_fiat
            .split_whitespace()
            .find(|w| w.chars().count() >= 3 && is_upper(w))
        {
            return token.chars().take(4).collect();
        }

        match title.split_whitespace().next() {
            Some(first) => first.to_uppercase().chars().take(4).collect(),
            None => UNKNOWN.to_string(),
        }
    }
}

/// At least one cased character and no lower-case ones.
fn is_upper(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}
