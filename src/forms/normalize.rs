//! Brazilian-locale monetary and numeric input normalization

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::InvalidNumberFormat;

static CURRENCY_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"R\$\s?").expect("currency marker pattern is valid"));

/// Raw value of a monetary or numeric input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    /// Empty input, as opposed to input that fails to parse.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.trim().is_empty(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Number(v as f64)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Turn a currency string such as `"R$ 1.234,56"` into `1234.56`.
///
/// Text must parse to a finite number strictly greater than zero. Numbers are
/// returned as they are, without the positivity check; only non-finite
/// numbers are refused.
pub fn normalize_amount(value: &FieldValue) -> Result<f64, InvalidNumberFormat> {
    match value {
        FieldValue::Number(n) if n.is_finite() => Ok(*n),
        FieldValue::Number(n) => Err(InvalidNumberFormat::new(n.to_string())),
        FieldValue::Text(raw) => normalize_text(raw),
    }
}

fn normalize_text(raw: &str) -> Result<f64, InvalidNumberFormat> {
    let sanitized = CURRENCY_MARKER.replacen(raw, 1, "");
    let sanitized = sanitized.trim().replace('.', "").replacen(',', ".", 1);

    match sanitized.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Ok(parsed),
        _ => Err(InvalidNumberFormat::new(raw)),
    }
}

/// Normalize one form field, recording its message on failure.
///
/// Blank input yields `required`, unparsable input yields `invalid`.
pub fn normalize_field(
    value: &FieldValue,
    required: &str,
    invalid: &str,
) -> Result<f64, String> {
    if value.is_blank() {
        return Err(required.to_string());
    }
    normalize_amount(value).map_err(|_| invalid.to_string())
}

/// Render an amount the way pt-BR currency formatting does: `R$ 1.234,56`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[test]
    fn test_currency_strings() {
        assert_eq!(normalize_amount(&text("R$ 123,45")), Ok(123.45));
        assert_eq!(normalize_amount(&text("R$ 1.234,56")), Ok(1234.56));
        assert_eq!(normalize_amount(&text("R$1.000.000,01")), Ok(1000000.01));
        assert_eq!(normalize_amount(&text("  R$ 7 ")), Ok(7.0));
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(normalize_amount(&text("42")), Ok(42.0));
        assert_eq!(normalize_amount(&text("2024")), Ok(2024.0));
        assert_eq!(normalize_amount(&text("0,5")), Ok(0.5));
    }

    #[test]
    fn test_rejects_non_positive_and_garbage() {
        for input in ["0", "-5", "abc", "R$ 0,00", "", "R$", "inf", "NaN", "12abc"] {
            assert_eq!(
                normalize_amount(&text(input)),
                Err(InvalidNumberFormat::new(input)),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_numbers_bypass_positivity_check() {
        // Numbers are not held to the same rule as text input.
        assert_eq!(normalize_amount(&FieldValue::Number(12.5)), Ok(12.5));
        assert_eq!(normalize_amount(&FieldValue::Number(0.0)), Ok(0.0));
        assert_eq!(normalize_amount(&FieldValue::Number(-3.0)), Ok(-3.0));
    }

    #[test]
    fn test_non_finite_numbers_never_escape() {
        assert!(normalize_amount(&FieldValue::Number(f64::NAN)).is_err());
        assert!(normalize_amount(&FieldValue::Number(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_normalize_field_messages() {
        assert_eq!(
            normalize_field(&text(" "), "required", "invalid"),
            Err("required".to_string())
        );
        assert_eq!(
            normalize_field(&text("R$ -1,00"), "required", "invalid"),
            Err("invalid".to_string())
        );
        assert_eq!(normalize_field(&text("R$ 2,50"), "required", "invalid"), Ok(2.5));
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(0.5), "R$ 0,50");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(-12.3), "-R$ 12,30");
        assert_eq!(format_brl(999.999), "R$ 1.000,00");
    }

    #[test]
    fn test_formatted_amount_normalizes_back() {
        let amount = 98765.43;
        assert_eq!(normalize_amount(&text(&format_brl(amount))), Ok(amount));
    }
}
