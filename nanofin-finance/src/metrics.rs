//! Reduce a transaction table plus issuer summary to scalar metrics.

use nanofin_core::{Metrics, Summary, Transaction};

/// Days the statement window is assumed to cover when computing frequency
pub const STATEMENT_WINDOW_DAYS: f64 = 30.0;

/// Compute metrics for a statement.
///
/// Never fails. An empty table yields zero frequencies and averages, with
/// `avg_balance` and `balance_volatility` left as NaN.
pub fn aggregate(txns: &[Transaction], summary: &Summary) -> Metrics {
    let count = txns.len();

    // fold from +0.0: an empty f64 sum is -0.0
    let total_credits = txns.iter().fold(0.0, |acc, t| acc + t.credit);
    let total_debits = txns.iter().fold(0.0, |acc, t| acc + t.debit);

    let balances: Vec<f64> = txns.iter().map(|t| t.balance).collect();
    let debits: Vec<f64> = txns.iter().filter(|t| t.is_debit()).map(|t| t.debit).collect();
    let credits: Vec<f64> = txns.iter().filter(|t| t.is_credit()).map(|t| t.credit).collect();

    if count < 2 {
        log::warn!(
            "only {} transaction(s): balance volatility is undefined",
            count
        );
    }

    Metrics {
        total_transactions: count,
        total_credits,
        total_debits,
        net_cashflow: total_credits - total_debits,
        opening_balance: summary.opening_balance,
        closing_balance: summary.closing_balance,
        avg_balance: mean(&balances).unwrap_or(f64::NAN),
        balance_volatility: sample_std_dev(&balances).unwrap_or(f64::NAN),
        avg_transaction_size: mean(&debits).unwrap_or(0.0),
        transaction_frequency: count as f64 / STATEMENT_WINDOW_DAYS,
        credit_frequency: credits.len() as f64 / count.max(1) as f64,
        avg_credit_amount: mean(&credits).unwrap_or(0.0),
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Standard deviation with n-1 in the denominator; None below two values
fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    Some(var.sqrt())
}
