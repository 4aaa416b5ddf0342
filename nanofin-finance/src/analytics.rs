//! Statement views used by reports: category totals, monthly and weekday
//! activity, and recent history.

use chrono::{Datelike, Weekday};
use nanofin_core::{CategorizedTransaction, Category, Transaction};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
    pub credits: f64,
    pub debits: f64,
}

/// Totals per category in rule order; categories with no rows are skipped
pub fn category_breakdown(txns: &[CategorizedTransaction]) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let rows: Vec<&Transaction> = txns
                .iter()
                .filter(|t| t.category == category)
                .map(|t| &t.transaction)
                .collect();
            if rows.is_empty() {
                return None;
            }
            Some(CategorySummary {
                category,
                count: rows.len(),
                credits: rows.iter().fold(0.0, |acc, t| acc + t.credit),
                debits: rows.iter().fold(0.0, |acc, t| acc + t.debit),
            })
        })
        .collect()
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct IncomeExpense {
    /// Credits on business income rows
    pub income: f64,
    /// Debits on business and personal expense rows
    pub expenses: f64,
}

pub fn income_vs_expenses(txns: &[CategorizedTransaction]) -> IncomeExpense {
    txns.iter().fold(IncomeExpense::default(), |mut acc, t| {
        if t.category == Category::BusinessIncome {
            acc.income += t.transaction.credit;
        }
        if t.category.is_expense() {
            acc.expenses += t.transaction.debit;
        }
        acc
    })
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct MonthlyActivity {
    pub year: i32,
    pub month: u32,
    pub credits: f64,
    pub debits: f64,
}

/// Credit/debit totals per calendar month, oldest first
pub fn monthly_activity(txns: &[Transaction]) -> Vec<MonthlyActivity> {
    let mut months: BTreeMap<(i32, u32), (f64, f64)> = BTreeMap::new();
    for t in txns {
        let entry = months.entry((t.date.year(), t.date.month())).or_default();
        entry.0 += t.credit;
        entry.1 += t.debit;
    }
    months
        .into_iter()
        .map(|((year, month), (credits, debits))| MonthlyActivity {
            year,
            month,
            credits,
            debits,
        })
        .collect()
}

/// Row counts per weekday, Monday first
pub fn weekday_activity(txns: &[Transaction]) -> [(Weekday, usize); 7] {
    let mut counts = [0usize; 7];
    for t in txns {
        counts[t.date.weekday().num_days_from_monday() as usize] += 1;
    }
    let mut day = Weekday::Mon;
    counts.map(|n| {
        let out = (day, n);
        day = day.succ();
        out
    })
}

/// Newest rows first; rows on the same date keep statement order
pub fn recent_transactions(
    txns: &[CategorizedTransaction],
    limit: usize,
) -> Vec<CategorizedTransaction> {
    let mut sorted = txns.to_vec();
    sorted.sort_by(|a, b| b.transaction.date.cmp(&a.transaction.date));
    sorted.truncate(limit);
    sorted
}
