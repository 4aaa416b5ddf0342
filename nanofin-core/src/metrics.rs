//! Scalar financial metrics derived from a statement

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Financial metrics for one statement.
///
/// `avg_balance` and `balance_volatility` may be NaN: the mean of an empty
/// table and the sample standard deviation of fewer than two rows are
/// undefined. They serialize as `null` and read back as NaN.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Metrics {
    pub total_transactions: usize,
    pub total_credits: f64,
    pub total_debits: f64,
    pub net_cashflow: f64,
    pub opening_balance: f64,
    pub closing_balance: f64,
    #[serde(with = "undefined_as_null")]
    pub avg_balance: f64,
    #[serde(with = "undefined_as_null")]
    pub balance_volatility: f64,
    /// Mean debit over rows with a debit
    pub avg_transaction_size: f64,
    /// Rows per day over a 30 day window
    pub transaction_frequency: f64,
    /// Share of rows with a credit (0.0 - 1.0)
    pub credit_frequency: f64,
    /// Mean credit over rows with a credit
    pub avg_credit_amount: f64,
}

/// NaN <-> `null`, for statistics that are undefined on short tables
mod undefined_as_null {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            s.serialize_none()
        } else {
            s.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

impl Metrics {
    /// False when there were too few rows to measure balance volatility
    pub fn has_volatility(&self) -> bool {
        !self.balance_volatility.is_nan()
    }

    /// Credits per unit of debit; debits below 1 count as 1
    pub fn income_ratio(&self) -> f64 {
        self.total_credits / self.total_debits.max(1.0)
    }

    /// Total debits spread across all rows (not just debit rows)
    pub fn avg_debit_per_transaction(&self) -> f64 {
        self.total_debits / (self.total_transactions.max(1) as f64)
    }

    /// Closing minus opening balance
    pub fn balance_growth(&self) -> f64 {
        self.closing_balance - self.opening_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_ratio_guards_small_debits() {
        let m = Metrics {
            total_credits: 500.0,
            total_debits: 0.0,
            ..Default::default()
        };
        assert_eq!(m.income_ratio(), 500.0);

        let m = Metrics {
            total_credits: 3000.0,
            total_debits: 1500.0,
            ..Default::default()
        };
        assert_eq!(m.income_ratio(), 2.0);
    }

    #[test]
    fn test_avg_debit_per_transaction() {
        let m = Metrics {
            total_transactions: 4,
            total_debits: 1000.0,
            ..Default::default()
        };
        assert_eq!(m.avg_debit_per_transaction(), 250.0);
        assert_eq!(Metrics::default().avg_debit_per_transaction(), 0.0);
    }

    #[test]
    fn test_nan_volatility_serializes_as_null() {
        let m = Metrics {
            balance_volatility: f64::NAN,
            ..Default::default()
        };
        assert!(!m.has_volatility());
        let json = serde_json::to_value(m).unwrap();
        assert!(json["balance_volatility"].is_null());
    }

    #[test]
    fn test_undefined_statistics_survive_json() {
        let m = Metrics {
            total_transactions: 1,
            total_credits: 100.0,
            avg_balance: 100.0,
            balance_volatility: f64::NAN,
            credit_frequency: 1.0,
            ..Default::default()
        };
        let back: Metrics = serde_json::from_str(&serde_json::to_string(&m).unwrap()).unwrap();
        assert_eq!(back.avg_balance, 100.0);
        assert!(back.balance_volatility.is_nan());
        assert!(!back.has_volatility());
        assert_eq!(back.total_credits, 100.0);
        assert_eq!(back.credit_frequency, 1.0);
    }
}
