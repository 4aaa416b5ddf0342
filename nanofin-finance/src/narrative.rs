//! Markdown rendering of an [`InsightReport`].

use nanofin_core::ScoreComponent;

use crate::insights::{InsightReport, improvement_text, strength_text};

/// Format with thousands separators, e.g. `1234567.891` -> `1,234,567.89`
pub fn format_amount(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "n/a".to_string();
    }
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Render the report as markdown. `currency` prefixes money amounts.
pub fn render_narrative(report: &InsightReport, currency: &str) -> String {
    let mut s = String::new();

    s.push_str("### NanoFin Financial Health Analysis\n\n");

    s.push_str("#### Income and Expense Analysis\n");
    s.push_str(&format!(
        "- **Income to Expense Ratio**: {:.2} ({})\n",
        report.income_ratio,
        report.income_ratio_strength.label()
    ));
    s.push_str(&format!(
        "- **Average Transaction Size**: {}{}\n",
        currency,
        format_amount(report.avg_debit_per_transaction, 2)
    ));
    s.push_str(&format!(
        "- **Net Cashflow**: {}{} ({})\n",
        currency,
        format_amount(report.net_cashflow, 2),
        if report.positive_cashflow { "Positive" } else { "Negative" }
    ));
    s.push_str(&format!(
        "- **Transaction Frequency**: {:.1} transactions/day\n\n",
        report.transaction_frequency
    ));

    s.push_str("#### Credit Score Breakdown\n");
    s.push_str(&format!("- **Overall Score**: {:.0}/100\n", report.score.score));
    for (component, value) in report.score.breakdown.iter() {
        s.push_str(&format!(
            "- **{}**: {:.0}/{:.0}\n",
            component.label(),
            value,
            component.max()
        ));
    }

    s.push_str("\n#### Strengths\n");
    push_components(&mut s, &report.strengths, strength_text);

    s.push_str("\n#### Areas for Improvement\n");
    push_components(&mut s, &report.improvements, improvement_text);

    let r = &report.recommendations;
    s.push_str("\n#### Personalized Recommendations\n\n");
    s.push_str(&format!("1. **Financial Health**: {}\n", r.financial_health));
    s.push_str(&format!("2. **Savings Strategy**: {}\n", r.savings_strategy));
    s.push_str(&format!("3. **Business Growth**: {}\n", r.business_growth));
    s.push_str(&format!("4. **Credit Readiness**: {}\n", r.credit_readiness));

    s.push_str("\n#### Next Steps\n");
    s.push_str(&format!(
        "- **Loan Eligibility**: {}\n",
        report.next_steps.loan_eligibility
    ));
    s.push_str(&format!(
        "- **Interest Rate**: {}\n",
        report.next_steps.interest_rate
    ));

    s
}

fn push_components(
    s: &mut String,
    components: &[ScoreComponent],
    text: fn(ScoreComponent) -> &'static str,
) {
    if components.is_empty() {
        s.push_str("- None\n");
        return;
    }
    for c in components {
        s.push_str(&format!("- **{}**\n", text(*c)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{insights, scorer};
    use nanofin_core::Metrics;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0, 2), "0.00");
        assert_eq!(format_amount(999.0, 0), "999");
        assert_eq!(format_amount(1000.0, 0), "1,000");
        assert_eq!(format_amount(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_amount(-2500.5, 2), "-2,500.50");
        assert_eq!(format_amount(-0.001, 2), "0.00");
        assert_eq!(format_amount(f64::NAN, 2), "n/a");
    }

    #[test]
    fn test_render_contains_fixed_phrases() {
        let m = Metrics {
            total_transactions: 30,
            credit_frequency: 1.0,
            avg_credit_amount: 15000.0,
            net_cashflow: 500.0,
            balance_volatility: 100.0,
            avg_balance: 1000.0,
            transaction_frequency: 1.0,
            avg_transaction_size: 2000.0,
            closing_balance: 6000.0,
            opening_balance: 5000.0,
            total_credits: 10000.0,
            total_debits: 9500.0,
        };
        let s = scorer::score(&m);
        let text = render_narrative(&insights::generate(&m, &s), "₹");

        assert!(text.contains("- **Income to Expense Ratio**: 1.05 (Moderate)"));
        assert!(text.contains("- **Net Cashflow**: ₹500.00 (Positive)"));
        assert!(text.contains("- **Overall Score**: 100/100"));
        assert!(text.contains("- **Income Stability**: 40/40"));
        assert!(text.contains("- **Growth Potential**: 10/10"));
        assert!(text.contains("Strong Income Stability - Consistent revenue streams"));
        assert!(text.contains("4. **Credit Readiness**: Excellent loan candidate"));
        assert!(text.contains("Pre-approved for loans up to ₹5,00,000"));
    }

    #[test]
    fn test_render_empty_sections() {
        let m = Metrics::default();
        let s = scorer::score(&m);
        let text = render_narrative(&insights::generate(&m, &s), "Rs ");
        assert!(text.contains("#### Strengths\n- None"));
        assert!(text.contains("Emergency Fund Building - Increase financial reserves"));
        assert!(text.contains("(Negative)"));
        assert!(text.contains("Average Transaction Size**: Rs 0.00"));
    }
}
