//! nanofin-core: Core types and categorization for NanoFin statement scoring

pub mod finance;
pub mod metrics;
pub mod score;

pub use finance::{CategorizedTransaction, Category, Summary, Transaction};
pub use metrics::Metrics;
pub use score::{Breakdown, NanoScore, ScoreBand, ScoreComponent, ScoreFactors};

/// Keyword categorization of transaction descriptions
pub mod categorizer {
    use super::{CategorizedTransaction, Category, Transaction};

    /// Keyword rules in priority order. The first category with a keyword
    /// contained in the uppercased description wins, so "CREDIT BILL" is
    /// business income rather than a business expense.
    pub const RULES: &[(Category, &[&str])] = &[
        (
            Category::BusinessIncome,
            &["SALARY", "INVESTMENT", "BONUS", "RETURNS", "CREDIT"],
        ),
        (
            Category::BusinessExpense,
            &["UTILITY", "BILL", "SHOPPING", "STORE"],
        ),
        (Category::PersonalExpense, &["COFFEE", "FOOD", "BEVERAGES"]),
        (Category::Transfer, &["RENT", "TRANSFER", "REFUND"]),
    ];

    /// Categorize a description; unmatched text falls into `Others`
    pub fn categorize(description: &str) -> Category {
        let desc = description.to_uppercase();

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| desc.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Others)
    }

    /// Pair every transaction with its category, preserving order
    pub fn categorize_all(txns: &[Transaction]) -> Vec<CategorizedTransaction> {
        txns.iter()
            .map(|t| {
                let category = categorize(&t.description);
                log::trace!("{:?} -> {}", t.description, category);
                CategorizedTransaction {
                    transaction: t.clone(),
                    category,
                }
            })
            .collect()
    }

}

pub use categorizer::{categorize, categorize_all};
