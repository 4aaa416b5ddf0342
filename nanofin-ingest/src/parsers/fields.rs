//! Field-level cleaning shared by statement parsers.
//!
//! Dates arrive as `DD-MM-YY`, sometimes with a trailing `INB` marker added
//! by internet-banking exports. Amounts arrive as numbers or strings and are
//! coerced permissively.

use chrono::NaiveDate;
use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Date layout used by the statement exports (day-month-two digit year)
pub const STATEMENT_DATE_FORMAT: &str = "%d-%m-%y";

fn inb_suffix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"INB$").expect("invalid INB suffix regex"))
}

/// Remove a trailing `INB` marker, if present
pub fn strip_inb_suffix(raw: &str) -> Cow<'_, str> {
    inb_suffix_re().replace(raw, "")
}

/// Parse a statement date, e.g. "05-06-23" or "05-06-23INB"
pub fn parse_statement_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = strip_inb_suffix(raw.trim());
    NaiveDate::parse_from_str(cleaned.trim(), STATEMENT_DATE_FORMAT).ok()
}

/// Coerce a JSON amount to a number.
///
/// Numbers pass through; strings are parsed after trimming. Anything else,
/// including non-finite values and text such as "1,000", becomes 0.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => v,
        _ => {
            if let Some(v) = value {
                log::trace!("coercing non-numeric amount {} to 0", v);
            }
            0.0
        }
    }
}

/// Like [`coerce_amount`] but clamps negatives to 0 (credit and debit columns)
pub fn coerce_non_negative(value: Option<&Value>) -> f64 {
    let v = coerce_amount(value);
    if v > 0.0 { v } else { 0.0 }
}

/// Description text; numbers are rendered, missing values become empty
pub fn text_value(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inb_suffix_is_stripped() {
        assert_eq!(strip_inb_suffix("05-06-23INB"), "05-06-23");
        assert_eq!(strip_inb_suffix("05-06-23"), "05-06-23");
        // only a trailing marker is removed
        assert_eq!(strip_inb_suffix("INB05-06-23"), "INB05-06-23");
    }

    #[test]
    fn test_suffixed_and_plain_dates_match() {
        let a = parse_statement_date("05-06-23INB").unwrap();
        let b = parse_statement_date("05-06-23").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, NaiveDate::from_ymd_opt(2023, 6, 5).unwrap());
    }

    #[test]
    fn test_rejects_other_layouts() {
        assert!(parse_statement_date("2023-06-05").is_none());
        assert!(parse_statement_date("05/06/23").is_none());
        assert!(parse_statement_date("31-02-23").is_none());
        assert!(parse_statement_date("").is_none());
    }

    #[test]
    fn test_coerce_numbers_and_strings() {
        assert_eq!(coerce_amount(Some(&json!(1500))), 1500.0);
        assert_eq!(coerce_amount(Some(&json!(12.5))), 12.5);
        assert_eq!(coerce_amount(Some(&json!(" 250.75 "))), 250.75);
        assert_eq!(coerce_amount(Some(&json!("-40"))), -40.0);
    }

    #[test]
    fn test_coerce_malformed_is_zero_every_time() {
        let bad = json!("abc");
        assert_eq!(coerce_amount(Some(&bad)), 0.0);
        assert_eq!(coerce_amount(Some(&bad)), 0.0);
        assert_eq!(coerce_amount(Some(&json!("1,000"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!("NaN"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!(null))), 0.0);
        assert_eq!(coerce_amount(Some(&json!([1]))), 0.0);
        assert_eq!(coerce_amount(None), 0.0);
    }

    #[test]
    fn test_non_negative_clamps() {
        assert_eq!(coerce_non_negative(Some(&json!(-15))), 0.0);
        assert_eq!(coerce_non_negative(Some(&json!("300"))), 300.0);
    }

    #[test]
    fn test_text_value() {
        assert_eq!(text_value(Some(&json!("UPI/COFFEE"))), "UPI/COFFEE");
        assert_eq!(text_value(Some(&json!(42))), "42");
        assert_eq!(text_value(None), "");
    }
}
