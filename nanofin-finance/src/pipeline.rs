//! End-to-end run: parse -> categorize -> aggregate -> score -> insights.

use nanofin_core::{CategorizedTransaction, Metrics, NanoScore, categorize_all};
use nanofin_ingest::{StatementDocument, StatementResult, parse_statement_file, parse_statement_str};
use serde::Serialize;
use std::path::Path;

use crate::insights::{self, InsightReport};
use crate::{metrics, scorer};

/// Output of one pipeline run over one statement
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub document: StatementDocument,
    pub transactions: Vec<CategorizedTransaction>,
    pub metrics: Metrics,
    pub score: NanoScore,
    pub insights: InsightReport,
}

/// Run every stage over an already-parsed document
pub fn analyze(document: StatementDocument) -> Analysis {
    let transactions = categorize_all(&document.transactions);
    let metrics = metrics::aggregate(&document.transactions, &document.summary);
    let score = scorer::score(&metrics);
    let insights = insights::generate(&metrics, &score);

    log::info!(
        "analyzed {} transactions: score {:.1}",
        metrics.total_transactions,
        score.score
    );

    Analysis {
        document,
        transactions,
        metrics,
        score,
        insights,
    }
}

pub fn analyze_str(json: &str) -> StatementResult<Analysis> {
    Ok(analyze(parse_statement_str(json)?))
}

pub fn analyze_file(path: impl AsRef<Path>) -> StatementResult<Analysis> {
    Ok(analyze(parse_statement_file(path)?))
}
