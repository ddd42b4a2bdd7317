/// Format a number for Italian spreadsheets: `1234.56` → `1234,56`.
/// Zero becomes an empty cell so imports treat it as blank rather than "0".
pub fn excel_decimal(val: f64) -> String {
    if val == 0.0 {
        return String::new();
    }
    val.to_string().replace('.', ",")
}

/// Same as [`excel_decimal`] but with a fixed number of fraction digits.
pub fn excel_decimal_scaled(val: f64, scale: usize) -> String {
    if val == 0.0 {
        return String::new();
    }
    format!("{val:.scale$}").replace('.', ",")
}
