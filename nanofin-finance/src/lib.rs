//! nanofin-finance: metrics aggregation, nano-entrepreneur scoring, insights, and loan tiers

pub mod analytics;
pub mod insights;
pub mod loans;
pub mod metrics;
pub mod narrative;
pub mod pipeline;
pub mod scorer;

pub use insights::{AccountHealth, InsightReport, LEARNING_VIDEOS, OFFICIAL_RESOURCES, generate};
pub use loans::{LoanOffer, LoanTier, loan_offers};
pub use metrics::aggregate;
pub use narrative::{format_amount, render_narrative};
pub use pipeline::{Analysis, analyze, analyze_file, analyze_str};
pub use scorer::score;
