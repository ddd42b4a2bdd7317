use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, Result};
use crate::symbols::{SymbolEntry, SymbolTable};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_fiat_currency")]
    pub fiat_currency: String,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Extra asset names, matched before the built-in ones.
    #[serde(default)]
    pub symbols: Vec<SymbolEntry>,
}

fn default_fiat_currency() -> String {
    "EUR".to_string()
}

fn default_delimiter() -> String {
    ";".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fiat_currency: default_fiat_currency(),
            delimiter: default_delimiter(),
            symbols: Vec::new(),
        }
    }
}

impl Settings {
    /// The delimiter as a single byte, as the CSV reader and writer want it.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(ConvertError::Settings(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    pub fn symbol_table(&self) -> SymbolTable {
        SymbolTable::new(&self.symbols)
    }
}

fn default_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("pp-cryptobooks")
        .join("settings.json")
}

/// Load settings from `path`, or from `~/.config/pp-cryptobooks/settings.json`
/// when none is given. A file named explicitly must exist and parse. The
/// default file is optional, and a broken one falls back to defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let explicit = path.is_some();
    let path = path.map_or_else(default_settings_path, Path::to_path_buf);
    if !explicit && !path.exists() {
        return Ok(Settings::default());
    }

    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| serde_json::from_str(&content).map_err(|e| e.to_string()));
    match parsed {
        Ok(settings) => Ok(settings),
        Err(_) if !explicit => Ok(Settings::default()),
        Err(e) => Err(ConvertError::Settings(format!("{}: {e}", path.display()))),
    }
}
