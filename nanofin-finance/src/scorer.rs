//! Rule-based nano-entrepreneur score.
//!
//! Four independently capped parts, summed and clamped to 0-100:
//!
//! | part                   | cap | terms                                                        |
//! |------------------------|-----|--------------------------------------------------------------|
//! | Income Stability       | 40  | credit_frequency*20, +20 if avg credit > 10000               |
//! | Business Resilience    | 30  | +20 if net cashflow > 0, +10 if volatility < 30% of avg bal  |
//! | Transaction Discipline | 20  | +10 if > 0.5 txns/day, +10 if avg debit < half avg credit    |
//! | Growth Potential       | 10  | +5 if closing > opening, +5 if credits > debits              |
//!
//! Every comparison involving NaN counts as not satisfied.

use nanofin_core::{Breakdown, Metrics, NanoScore, ScoreComponent, ScoreFactors};

pub const HIGH_AVG_CREDIT: f64 = 10_000.0;
pub const STABLE_VOLATILITY_RATIO: f64 = 0.3;
pub const REGULAR_FREQUENCY: f64 = 0.5;
pub const CONTROLLED_SPENDING_RATIO: f64 = 0.5;

fn indicator(cond: bool) -> f64 {
    if cond { 1.0 } else { 0.0 }
}

fn capped(value: f64, component: ScoreComponent) -> f64 {
    value.clamp(0.0, component.max())
}

/// Evaluate the indicator conditions for a set of metrics
pub fn factors(m: &Metrics) -> ScoreFactors {
    ScoreFactors {
        high_avg_credit: m.avg_credit_amount > HIGH_AVG_CREDIT,
        positive_cashflow: m.net_cashflow > 0.0,
        // false when volatility is NaN (fewer than two rows)
        stable_balance: m.balance_volatility < m.avg_balance * STABLE_VOLATILITY_RATIO,
        regular_activity: m.transaction_frequency > REGULAR_FREQUENCY,
        controlled_spending: m.avg_transaction_size
            < m.avg_credit_amount * CONTROLLED_SPENDING_RATIO,
        balance_grew: m.closing_balance > m.opening_balance,
        credits_exceed_debits: m.total_credits > m.total_debits,
    }
}

/// Score a set of metrics. Pure; never fails.
pub fn score(m: &Metrics) -> NanoScore {
    let f = factors(m);

    let credit_frequency = if m.credit_frequency.is_nan() {
        0.0
    } else {
        m.credit_frequency
    };

    let income_stability = capped(
        credit_frequency * 20.0 + indicator(f.high_avg_credit) * 20.0,
        ScoreComponent::IncomeStability,
    );
    let business_resilience = capped(
        indicator(f.positive_cashflow) * 20.0 + indicator(f.stable_balance) * 10.0,
        ScoreComponent::BusinessResilience,
    );
    let transaction_discipline = capped(
        indicator(f.regular_activity) * 10.0 + indicator(f.controlled_spending) * 10.0,
        ScoreComponent::TransactionDiscipline,
    );
    let growth_potential = capped(
        indicator(f.balance_grew) * 5.0 + indicator(f.credits_exceed_debits) * 5.0,
        ScoreComponent::GrowthPotential,
    );

    let breakdown = Breakdown {
        income_stability,
        business_resilience,
        transaction_discipline,
        growth_potential,
    };

    let total = breakdown.total().clamp(0.0, 100.0);
    log::debug!("nano score {:.2} ({:?})", total, breakdown);

    NanoScore {
        score: total,
        breakdown,
        factors: f,
    }
}
