use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error returned when a form value is not a whole number.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseIntegerError {
    #[error("value is empty")]
    Empty,

    #[error("invalid number '{0}'")]
    Invalid(String),

    #[error("'{0}' is not a whole number")]
    NotWhole(String),
}

/// Normalizes input for number parsing: trims whitespace and removes commas (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a form field into a whole number.
///
/// Handles comma as thousands separator (e.g. `"5,000,000"`). Values with a
/// non-zero fractional part (`"8000000.1"`) are rejected, `"10.0"` is accepted.
pub fn parse_integer_field(s: &str) -> Result<i64, ParseIntegerError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Err(ParseIntegerError::Empty);
    }

    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::debug!(input = %s, "invalid number: {}", e);
        ParseIntegerError::Invalid(s.to_string())
    })?;

    if !value.fract().is_zero() {
        return Err(ParseIntegerError::NotWhole(s.to_string()));
    }

    value
        .to_i64()
        .ok_or_else(|| ParseIntegerError::Invalid(s.to_string()))
}

/// Formats a yen amount with `,` thousands separators.
pub fn format_yen(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Formats an optional tax amount for display, using "---" when `None`.
pub fn format_tax(tax: Option<u64>) -> String {
    match tax {
        Some(amount) => format!("{}円", format_yen(amount)),
        None => "---円".to_string(),
    }
}

/// Escapes text for safe inclusion in HTML element content and attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
