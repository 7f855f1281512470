//! Number formatting for tables, tiles and exports

/// Format with a thousands separator (comma) and the given number of decimals
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_number_with_decimals;
///
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1,234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = format!("{:.*}", decimals as usize, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Insert a comma every 3 digits from the end of the integer part
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(',');
        }
        result.push(c);
    }
    let formatted_integer: String = result.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Money with two decimals and the currency code in front: `SAR 1,234.50`
pub fn format_currency(value: f64, currency: &str) -> String {
    format!("{} {}", currency, format_number_with_decimals(value, 2))
}

/// Optional money; missing values render empty
pub fn format_currency_opt(value: Option<f64>, currency: &str) -> String {
    value
        .map(|v| format_currency(v, currency))
        .unwrap_or_default()
}

/// Integer with thousands separator
pub fn format_number_int(value: f64) -> String {
    format_number_with_decimals(value, 0)
}

/// Raw numeric cell: whole numbers without a fraction, others as-is.
/// Used where the dashboard shows the backend value unformatted.
pub fn format_plain(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 && v.abs() < 1e15 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => String::new(),
    }
}
