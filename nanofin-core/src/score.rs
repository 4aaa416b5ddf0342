//! Nano-entrepreneur score types

use serde::{Deserialize, Serialize};

/// The four capped parts of the nano-entrepreneur score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ScoreComponent {
    IncomeStability,
    BusinessResilience,
    TransactionDiscipline,
    GrowthPotential,
}

impl ScoreComponent {
    pub const ALL: [ScoreComponent; 4] = [
        ScoreComponent::IncomeStability,
        ScoreComponent::BusinessResilience,
        ScoreComponent::TransactionDiscipline,
        ScoreComponent::GrowthPotential,
    ];

    /// Display name used in breakdowns and narratives
    pub fn label(&self) -> &'static str {
        match self {
            ScoreComponent::IncomeStability => "Income Stability",
            ScoreComponent::BusinessResilience => "Business Resilience",
            ScoreComponent::TransactionDiscipline => "Transaction Discipline",
            ScoreComponent::GrowthPotential => "Growth Potential",
        }
    }

    /// Cap for this component
    pub fn max(&self) -> f64 {
        match self {
            ScoreComponent::IncomeStability => 40.0,
            ScoreComponent::BusinessResilience => 30.0,
            ScoreComponent::TransactionDiscipline => 20.0,
            ScoreComponent::GrowthPotential => 10.0,
        }
    }
}

/// Sub-scores keyed by their display names when serialized
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Breakdown {
    #[serde(rename = "Income Stability")]
    pub income_stability: f64,
    #[serde(rename = "Business Resilience")]
    pub business_resilience: f64,
    #[serde(rename = "Transaction Discipline")]
    pub transaction_discipline: f64,
    #[serde(rename = "Growth Potential")]
    pub growth_potential: f64,
}

impl Breakdown {
    pub fn get(&self, component: ScoreComponent) -> f64 {
        match component {
            ScoreComponent::IncomeStability => self.income_stability,
            ScoreComponent::BusinessResilience => self.business_resilience,
            ScoreComponent::TransactionDiscipline => self.transaction_discipline,
            ScoreComponent::GrowthPotential => self.growth_potential,
        }
    }

    /// Components in display order with their values
    pub fn iter(&self) -> impl Iterator<Item = (ScoreComponent, f64)> + '_ {
        ScoreComponent::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }
}

/// Which indicator conditions held when the score was computed
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScoreFactors {
    /// avg_credit_amount > 10000
    pub high_avg_credit: bool,
    /// net_cashflow > 0
    pub positive_cashflow: bool,
    /// balance_volatility < avg_balance * 0.3 (false when volatility is undefined)
    pub stable_balance: bool,
    /// transaction_frequency > 0.5
    pub regular_activity: bool,
    /// avg_transaction_size < avg_credit_amount * 0.5
    pub controlled_spending: bool,
    /// closing_balance > opening_balance
    pub balance_grew: bool,
    /// total_credits > total_debits
    pub credits_exceed_debits: bool,
}

/// Coarse grading of a value against its maximum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScoreBand {
    #[serde(rename = "strong")]
    Strong,
    #[serde(rename = "fair")]
    Fair,
    #[serde(rename = "weak")]
    Weak,
}

impl ScoreBand {
    /// Strong at 70% of `max` or above, fair at 40% or above
    pub fn for_ratio(value: f64, max: f64) -> Self {
        if value >= max * 0.7 {
            ScoreBand::Strong
        } else if value >= max * 0.4 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }

    /// Banding for the overall 0-100 score
    pub fn for_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::Strong
        } else if score >= 60.0 {
            ScoreBand::Fair
        } else {
            ScoreBand::Weak
        }
    }
}

/// Bounded 0-100 score with its four-part breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NanoScore {
    pub score: f64,
    pub breakdown: Breakdown,
    pub factors: ScoreFactors,
}

impl NanoScore {
    pub fn component(&self, component: ScoreComponent) -> f64 {
        self.breakdown.get(component)
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_caps_sum_to_100() {
        let total: f64 = ScoreComponent::ALL.iter().map(|c| c.max()).sum();
        assert_eq!(total, 100.0);
    }

    #[test]
    fn test_breakdown_serializes_display_names() {
        let b = Breakdown {
            income_stability: 40.0,
            business_resilience: 20.0,
            transaction_discipline: 10.0,
            growth_potential: 5.0,
        };
        let json = serde_json::to_value(b).unwrap();
        assert_eq!(json["Income Stability"], 40.0);
        assert_eq!(json["Growth Potential"], 5.0);
        assert_eq!(b.total(), 75.0);
    }

    #[test]
    fn test_bands() {
        assert_eq!(ScoreBand::for_score(80.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_score(79.9), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_score(10.0), ScoreBand::Weak);
        assert_eq!(ScoreBand::for_ratio(28.0, 40.0), ScoreBand::Strong);
        assert_eq!(ScoreBand::for_ratio(16.0, 40.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_ratio(5.0, 10.0), ScoreBand::Fair);
        assert_eq!(ScoreBand::for_ratio(0.0, 20.0), ScoreBand::Weak);
    }
}
