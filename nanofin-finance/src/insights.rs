//! Structured insights derived from metrics and score.
//!
//! Nothing here renders text beyond fixed phrases; see `narrative` for the
//! markdown presentation.

use nanofin_core::{Metrics, NanoScore, ScoreComponent};
use serde::Serialize;

use crate::loans::LoanTier;

/// Income-to-expense ratio grading
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum RatioStrength {
    Strong,
    Moderate,
    NeedsAttention,
}

impl RatioStrength {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio > 2.0 {
            RatioStrength::Strong
        } else if ratio > 1.0 {
            RatioStrength::Moderate
        } else {
            RatioStrength::NeedsAttention
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RatioStrength::Strong => "Strong",
            RatioStrength::Moderate => "Moderate",
            RatioStrength::NeedsAttention => "Needs Attention",
        }
    }
}

/// Overall account health from the income ratio
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum AccountHealth {
    Good,
    Fair,
    NeedsWork,
}

impl AccountHealth {
    pub fn for_ratio(ratio: f64) -> Self {
        if ratio > 1.5 {
            AccountHealth::Good
        } else if ratio > 1.0 {
            AccountHealth::Fair
        } else {
            AccountHealth::NeedsWork
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccountHealth::Good => "Good",
            AccountHealth::Fair => "Fair",
            AccountHealth::NeedsWork => "Needs Work",
        }
    }
}

/// Sub-score above which a component counts as a strength
pub fn strength_threshold(component: ScoreComponent) -> f64 {
    match component {
        ScoreComponent::IncomeStability => 30.0,
        ScoreComponent::BusinessResilience => 20.0,
        ScoreComponent::TransactionDiscipline => 15.0,
        ScoreComponent::GrowthPotential => 7.0,
    }
}

pub fn strength_text(component: ScoreComponent) -> &'static str {
    match component {
        ScoreComponent::IncomeStability => "Strong Income Stability - Consistent revenue streams",
        ScoreComponent::BusinessResilience => "Good Business Resilience - Healthy financial buffer",
        ScoreComponent::TransactionDiscipline => {
            "Excellent Transaction Management - Disciplined spending patterns"
        }
        ScoreComponent::GrowthPotential => "Strong Growth Trajectory - Positive business momentum",
    }
}

pub fn improvement_text(component: ScoreComponent) -> &'static str {
    match component {
        ScoreComponent::IncomeStability => "Income Diversification - Consider multiple revenue streams",
        ScoreComponent::BusinessResilience => "Emergency Fund Building - Increase financial reserves",
        ScoreComponent::TransactionDiscipline => "Expense Management - Review and optimize spending",
        ScoreComponent::GrowthPotential => "Growth Strategy - Focus on business expansion opportunities",
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Impact {
    High,
    Moderate,
}

impl Impact {
    pub fn label(&self) -> &'static str {
        match self {
            Impact::High => "High Impact",
            Impact::Moderate => "Moderate Impact",
        }
    }
}

/// A credit improvement action
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Strategy {
    pub title: &'static str,
    pub description: &'static str,
    pub impact: Impact,
}

/// Four one-line recommendations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendations {
    pub financial_health: &'static str,
    pub savings_strategy: &'static str,
    pub business_growth: &'static str,
    pub credit_readiness: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NextSteps {
    pub loan_eligibility: &'static str,
    pub interest_rate: &'static str,
}

/// Everything the narrative needs, decided but not yet rendered
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InsightReport {
    pub income_ratio: f64,
    pub income_ratio_strength: RatioStrength,
    pub account_health: AccountHealth,
    pub avg_debit_per_transaction: f64,
    pub net_cashflow: f64,
    pub positive_cashflow: bool,
    pub transaction_frequency: f64,
    pub score: NanoScore,
    pub strengths: Vec<ScoreComponent>,
    pub improvements: Vec<ScoreComponent>,
    pub strategies: Vec<Strategy>,
    pub recommendations: Recommendations,
    pub next_steps: NextSteps,
    pub loan_tier: LoanTier,
}

/// Build the insight report for a scored statement
pub fn generate(metrics: &Metrics, score: &NanoScore) -> InsightReport {
    let income_ratio = metrics.income_ratio();

    let strengths = ScoreComponent::ALL
        .into_iter()
        .filter(|c| score.component(*c) > strength_threshold(*c))
        .collect();
    let improvements = ScoreComponent::ALL
        .into_iter()
        .filter(|c| score.component(*c) < strength_threshold(*c))
        .collect();

    InsightReport {
        income_ratio,
        income_ratio_strength: RatioStrength::for_ratio(income_ratio),
        account_health: AccountHealth::for_ratio(income_ratio),
        avg_debit_per_transaction: metrics.avg_debit_per_transaction(),
        net_cashflow: metrics.net_cashflow,
        positive_cashflow: metrics.net_cashflow > 0.0,
        transaction_frequency: metrics.transaction_frequency,
        score: *score,
        strengths,
        improvements,
        strategies: strategies(score, income_ratio),
        recommendations: recommendations(metrics, score.score, income_ratio),
        next_steps: next_steps(score.score),
        loan_tier: LoanTier::for_score(score.score),
    }
}

/// Improvement strategies, most impactful checks first
pub fn strategies(score: &NanoScore, income_ratio: f64) -> Vec<Strategy> {
    let b = &score.breakdown;
    let mut out = Vec::new();

    if b.income_stability < 30.0 {
        out.push(Strategy {
            title: "Diversify Income Streams",
            description: "Your income shows inconsistency. Consider developing multiple revenue sources.",
            impact: Impact::High,
        });
    }
    if b.business_resilience < 20.0 {
        out.push(Strategy {
            title: "Build Emergency Fund",
            description: "Establish a safety net of 3-6 months of expenses.",
            impact: Impact::High,
        });
    }
    if income_ratio < 1.5 {
        out.push(Strategy {
            title: "Optimize Expenses",
            description: "Your expenses are close to income. Review and reduce unnecessary costs.",
            impact: Impact::High,
        });
    }
    if b.transaction_discipline < 15.0 {
        out.push(Strategy {
            title: "Track Transactions",
            description: "Monitor spending patterns to identify cost-saving opportunities.",
            impact: Impact::Moderate,
        });
    }
    if b.growth_potential < 7.0 {
        out.push(Strategy {
            title: "Plan for Growth",
            description: "Focus on scaling your business and increasing revenues.",
            impact: Impact::Moderate,
        });
    }

    out
}

fn recommendations(metrics: &Metrics, score: f64, income_ratio: f64) -> Recommendations {
    Recommendations {
        financial_health: if income_ratio > 1.5 {
            "Maintain current practices"
        } else {
            "Focus on increasing income or reducing expenses"
        },
        savings_strategy: if metrics.avg_balance > metrics.total_debits {
            "Continue building reserves"
        } else {
            "Start building emergency fund"
        },
        business_growth: if score > 70.0 {
            "Explore expansion opportunities"
        } else {
            "Strengthen current operations first"
        },
        credit_readiness: match LoanTier::for_score(score) {
            LoanTier::Premium => "Excellent loan candidate",
            LoanTier::Standard => "Good potential with improvements",
            LoanTier::Starter => "Focus on financial stability first",
        },
    }
}

fn next_steps(score: f64) -> NextSteps {
    match LoanTier::for_score(score) {
        LoanTier::Premium => NextSteps {
            loan_eligibility: "Pre-approved for loans up to ₹5,00,000",
            interest_rate: "Prime rate (8-10%)",
        },
        LoanTier::Standard => NextSteps {
            loan_eligibility: "Eligible for loans up to ₹2,00,000",
            interest_rate: "Standard rate (10-12%)",
        },
        LoanTier::Starter => NextSteps {
            loan_eligibility: "Start with smaller credit facilities",
            interest_rate: "Higher rate (12-15%)",
        },
    }
}

/// A credit education link shown alongside the strategies
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LearningResource {
    pub title: &'static str,
    pub source: &'static str,
    pub url: &'static str,
}

pub const LEARNING_VIDEOS: &[LearningResource] = &[
    LearningResource {
        title: "How to improve your credit score",
        source: "Personal Finance Expert",
        url: "https://www.youtube.com/results?search_query=how+to+improve+credit+score",
    },
    LearningResource {
        title: "How To Maintain Credit Card Score?",
        source: "Finance Channel",
        url: "https://www.youtube.com/results?search_query=maintain+credit+card+score",
    },
    LearningResource {
        title: "What can change your credit score?",
        source: "Khan Academy",
        url: "https://www.youtube.com/results?search_query=credit+score+factors",
    },
    LearningResource {
        title: "Improve Your Credit Score",
        source: "Understanding the Factors",
        url: "https://www.youtube.com/results?search_query=credit+score+improvement+factors",
    },
    LearningResource {
        title: "What your credit score actually means",
        source: "Credit Education",
        url: "https://www.youtube.com/results?search_query=what+is+credit+score",
    },
];

pub const OFFICIAL_RESOURCES: &[LearningResource] = &[
    LearningResource {
        title: "RBI Financial Literacy",
        source: "Reserve Bank of India",
        url: "https://www.rbi.org.in/commonman/EnglishHome.aspx",
    },
    LearningResource {
        title: "SEBI Investor Education",
        source: "Securities and Exchange Board of India",
        url: "https://www.sebi.gov.in/",
    },
];
