use std::fmt;

use crate::fmt::{excel_decimal, excel_decimal_scaled};

/// Parse a European-notation number: `.` groups thousands, `,` is the
/// decimal point. Blank or unparsable input yields `0.0`.
///
/// A dot used as decimal point (`"1.5"`) is read as a thousands separator.
pub fn parse_european_decimal(raw: &str) -> f64 {
    try_parse_european_decimal(raw).unwrap_or(0.0)
}

fn try_parse_european_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let s = s.replace('.', "").replace(',', ".");
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// A parsed amount that remembers how many fraction digits the export used,
/// so `100,00` is written back as `100,00` rather than `100`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EuroAmount {
    pub value: f64,
    pub scale: usize,
}

impl EuroAmount {
    pub fn parse(raw: &str) -> Self {
        let value = parse_european_decimal(raw);
        if value == 0.0 {
            return Self::default();
        }
        let scale = raw.trim().rsplit_once(',').map_or(0, |(_, frac)| {
            frac.chars().take_while(char::is_ascii_digit).count()
        });
        Self { value, scale }
    }

    pub fn is_positive(&self) -> bool {
        self.value > 0.0
    }
}

impl fmt::Display for EuroAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.abs();
        if self.scale == 0 {
            f.write_str(&excel_decimal(value))
        } else {
            f.write_str(&excel_decimal_scaled(value, self.scale))
        }
    }
}
