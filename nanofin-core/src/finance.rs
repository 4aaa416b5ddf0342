//! Statement record types: transactions, issuer summary, and the category taxonomy

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single statement row after cleaning
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Posting date (DD-MM-YY in the source, "INB" suffix removed)
    pub date: NaiveDate,
    /// Free-text narration from the bank
    pub description: String,
    /// Incoming amount, never negative
    pub credit: f64,
    /// Outgoing amount, never negative
    pub debit: f64,
    /// Running balance after this row (may be negative)
    pub balance: f64,
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        credit: f64,
        debit: f64,
        balance: f64,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            credit,
            debit,
            balance,
        }
    }

    /// Returns true if money came in on this row
    pub fn is_credit(&self) -> bool {
        self.credit > 0.0
    }

    /// Returns true if money went out on this row
    pub fn is_debit(&self) -> bool {
        self.debit > 0.0
    }
}

/// A transaction tagged with its keyword category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorizedTransaction {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub category: Category,
}

/// Opening/closing balances as asserted by the statement issuer.
///
/// These are taken as-is and never reconciled against the transaction rows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub opening_balance: f64,
    pub closing_balance: f64,
}

impl Summary {
    pub fn new(opening_balance: f64, closing_balance: f64) -> Self {
        Self {
            opening_balance,
            closing_balance,
        }
    }
}

/// Transaction categories for nano-entrepreneur statements
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    #[serde(rename = "BUSINESS_INCOME")]
    BusinessIncome,
    #[serde(rename = "BUSINESS_EXPENSE")]
    BusinessExpense,
    #[serde(rename = "PERSONAL_EXPENSE")]
    PersonalExpense,
    #[serde(rename = "TRANSFER")]
    Transfer,
    #[serde(rename = "OTHERS")]
    Others,
}

impl Category {
    /// All categories in rule priority order, `Others` last
    pub const ALL: [Category; 5] = [
        Category::BusinessIncome,
        Category::BusinessExpense,
        Category::PersonalExpense,
        Category::Transfer,
        Category::Others,
    ];

    /// Wire name used in reports and CSV exports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::BusinessIncome => "BUSINESS_INCOME",
            Category::BusinessExpense => "BUSINESS_EXPENSE",
            Category::PersonalExpense => "PERSONAL_EXPENSE",
            Category::Transfer => "TRANSFER",
            Category::Others => "OTHERS",
        }
    }

    /// Spending categories counted as expenses in income-vs-expense views
    pub fn is_expense(&self) -> bool {
        matches!(self, Category::BusinessExpense | Category::PersonalExpense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
