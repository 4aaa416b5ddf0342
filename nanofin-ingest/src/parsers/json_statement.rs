//! JSON bank statement parser
//!
//! Expected document:
//!   {
//!     "personal_info": { "name": ..., "mobile": ..., "kyc_status": ... },
//!     "account_info":  { "account_number": ... },
//!     "summary":       { "opening_balance": "5000", "closing_balance": 6000 },
//!     "transactions":  [
//!       { "date": "05-06-23INB", "description": "UPI SALARY", "credit": "2500",
//!         "debit": 0, "balance": "7500" }
//!     ]
//!   }
//!
//! Only `transactions` is required. The holder/account/summary blocks default
//! to empty when absent.

use nanofin_core::{Summary, Transaction};
use serde_json::{Map, Value};
use std::path::Path;

use super::fields::{coerce_amount, coerce_non_negative, parse_statement_date, text_value};
use crate::error::{StatementError, StatementResult};
use crate::types::StatementDocument;

/// Read and parse a statement file
pub fn parse_statement_file(path: impl AsRef<Path>) -> StatementResult<StatementDocument> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| StatementError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_statement_str(&text)
}

/// Parse statement JSON text
pub fn parse_statement_str(text: &str) -> StatementResult<StatementDocument> {
    let value: Value = serde_json::from_str(text)?;
    parse_statement_value(value)
}

/// Parse an already-decoded statement document
pub fn parse_statement_value(value: Value) -> StatementResult<StatementDocument> {
    let Value::Object(mut root) = value else {
        return Err(StatementError::malformed("statement must be a JSON object"));
    };

    let rows = match root.remove("transactions") {
        Some(Value::Array(rows)) => rows,
        Some(_) => return Err(StatementError::malformed("`transactions` must be an array")),
        None => return Err(StatementError::malformed("missing `transactions` key")),
    };

    let transactions = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_transaction(index, row))
        .collect::<StatementResult<Vec<_>>>()?;

    let summary = parse_summary(root.get("summary"));
    let personal_info = take_object(&mut root, "personal_info");
    let account_info = take_object(&mut root, "account_info");

    log::debug!(
        "parsed statement: {} transactions, opening={} closing={}",
        transactions.len(),
        summary.opening_balance,
        summary.closing_balance
    );

    Ok(StatementDocument {
        personal_info,
        account_info,
        summary,
        transactions,
    })
}

fn parse_transaction(index: usize, row: &Value) -> StatementResult<Transaction> {
    let Value::Object(fields) = row else {
        return Err(StatementError::malformed(format!(
            "transaction {index} is not an object"
        )));
    };

    let date = match fields.get("date") {
        Some(Value::String(raw)) => {
            parse_statement_date(raw).ok_or_else(|| StatementError::UnparsableDate {
                index,
                raw: raw.clone(),
            })?
        }
        other => {
            return Err(StatementError::UnparsableDate {
                index,
                raw: other.map(Value::to_string).unwrap_or_default(),
            });
        }
    };

    Ok(Transaction {
        date,
        description: text_value(fields.get("description")),
        credit: coerce_non_negative(fields.get("credit")),
        debit: coerce_non_negative(fields.get("debit")),
        balance: coerce_amount(fields.get("balance")),
    })
}

fn parse_summary(value: Option<&Value>) -> Summary {
    match value {
        Some(Value::Object(fields)) => Summary {
            opening_balance: coerce_amount(fields.get("opening_balance")),
            closing_balance: coerce_amount(fields.get("closing_balance")),
        },
        _ => Summary::default(),
    }
}

fn take_object(root: &mut Map<String, Value>, key: &str) -> Map<String, Value> {
    match root.remove(key) {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn test_parses_basic_statement() {
        let doc = parse_statement_value(json!({
            "personal_info": {"name": "Ravi Kumar", "mobile": "98XXXXXX10", "kyc_status": "Compliant"},
            "account_info": {"account_number": "XXXX4521"},
            "summary": {"opening_balance": "5000", "closing_balance": 6200.5},
            "transactions": [
                {"date": "01-06-23", "description": "UPI SALARY", "credit": "2500", "debit": "", "balance": "7500"},
                {"date": "03-06-23INB", "description": "COFFEE", "credit": 0, "debit": 120, "balance": 7380}
            ]
        }))
        .unwrap();

        assert_eq!(doc.transactions.len(), 2);
        assert_eq!(doc.summary, Summary::new(5000.0, 6200.5));
        assert_eq!(doc.personal_info["name"], "Ravi Kumar");

        let first = &doc.transactions[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2023, 6, 1).unwrap());
        assert_eq!(first.credit, 2500.0);
        assert_eq!(first.debit, 0.0);
        assert_eq!(first.balance, 7500.0);

        let second = &doc.transactions[1];
        assert_eq!(second.date, NaiveDate::from_ymd_opt(2023, 6, 3).unwrap());
        assert_eq!(second.debit, 120.0);
    }

    #[test]
    fn test_preserves_input_order() {
        let doc = parse_statement_value(json!({
            "transactions": [
                {"date": "20-06-23", "description": "late"},
                {"date": "01-06-23", "description": "early"}
            ]
        }))
        .unwrap();
        assert_eq!(doc.transactions[0].description, "late");
        assert_eq!(doc.transactions[1].description, "early");
    }

    #[test]
    fn test_optional_blocks_default_to_empty() {
        let doc = parse_statement_str(r#"{"transactions": []}"#).unwrap();
        assert!(doc.transactions.is_empty());
        assert!(doc.personal_info.is_empty());
        assert!(doc.account_info.is_empty());
        assert_eq!(doc.summary, Summary::default());
    }

    #[test]
    fn test_missing_transactions_is_malformed() {
        let err = parse_statement_value(json!({"summary": {}})).unwrap_err();
        assert!(matches!(err, StatementError::MalformedDocument { .. }));
        assert!(err.to_string().contains("transactions"));

        let err = parse_statement_value(json!({"transactions": {"date": "01-01-23"}})).unwrap_err();
        assert!(matches!(err, StatementError::MalformedDocument { .. }));

        let err = parse_statement_value(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, StatementError::MalformedDocument { .. }));
    }

    #[test]
    fn test_bad_date_reports_row() {
        let err = parse_statement_value(json!({
            "transactions": [
                {"date": "01-06-23", "description": "ok"},
                {"date": "2023/06/02", "description": "bad"}
            ]
        }))
        .unwrap_err();

        match err {
            StatementError::UnparsableDate { index, raw } => {
                assert_eq!(index, 1);
                assert_eq!(raw, "2023/06/02");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_date_is_unparsable() {
        let err = parse_statement_value(json!({"transactions": [{"description": "no date"}]}))
            .unwrap_err();
        assert!(matches!(err, StatementError::UnparsableDate { index: 0, .. }));
    }

    #[test]
    fn test_invalid_json_text() {
        let err = parse_statement_str("{not json").unwrap_err();
        assert!(matches!(err, StatementError::Json(_)));
    }

    #[test]
    fn test_non_numeric_amounts_coerce_to_zero() {
        let doc = parse_statement_value(json!({
            "summary": {"opening_balance": "n/a"},
            "transactions": [
                {"date": "01-06-23", "description": "x", "credit": "abc", "debit": null, "balance": "-250"}
            ]
        }))
        .unwrap();
        let t = &doc.transactions[0];
        assert_eq!(t.credit, 0.0);
        assert_eq!(t.debit, 0.0);
        assert_eq!(t.balance, -250.0);
        assert_eq!(doc.summary.opening_balance, 0.0);
    }

    #[test]
    fn test_missing_file() {
        let err = parse_statement_file("/nonexistent/statement.json").unwrap_err();
        assert!(matches!(err, StatementError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/statement.json"));
    }
}
