//! Terminal rendering of an analysis, plus CSV export of categorized rows.

use anyhow::Result;
use nanofin_core::{CategorizedTransaction, ScoreBand};
use nanofin_finance::analytics::{
    category_breakdown, income_vs_expenses, monthly_activity, recent_transactions,
    weekday_activity,
};
use nanofin_finance::{
    Analysis, LEARNING_VIDEOS, LoanTier, OFFICIAL_RESOURCES, format_amount, loan_offers,
    render_narrative,
};
use std::io;

use crate::config::DisplaySection;

fn band_label(band: ScoreBand) -> &'static str {
    match band {
        ScoreBand::Strong => "strong",
        ScoreBand::Fair => "fair",
        ScoreBand::Weak => "weak",
    }
}

pub fn render_report(a: &Analysis, display: &DisplaySection) -> String {
    let cur = display.currency_symbol.as_str();
    let money = |v: f64| format!("{}{}", cur, format_amount(v, 0));
    let m = &a.metrics;
    let mut s = String::new();

    let p = a.document.profile();
    s.push_str("# NanoFin statement analysis\n\n");
    s.push_str("## Profile\n\n");
    s.push_str(&format!("Name:        {}\n", p.name));
    s.push_str(&format!("Customer ID: {}\n", p.customer_id));
    s.push_str(&format!("Mobile:      {}\n", p.mobile));
    s.push_str(&format!("KYC status:  {}\n", p.kyc_status));
    s.push_str(&format!("Account:     {}\n\n", p.account_number));

    s.push_str("## Nano entrepreneur score\n\n");
    s.push_str(&format!(
        "Score: {:.2}/100 ({})\n",
        a.score.score,
        band_label(a.score.band())
    ));
    for (component, value) in a.score.breakdown.iter() {
        let band = ScoreBand::for_ratio(value, component.max());
        s.push_str(&format!(
            "- {:<24} {:>5.1}/{:<3.0} [{}]\n",
            component.label(),
            value,
            component.max(),
            band_label(band)
        ));
    }

    s.push_str("\n## Metrics\n\n");
    s.push_str(&format!("Transactions:        {}\n", m.total_transactions));
    s.push_str(&format!("Total credits:       {}\n", money(m.total_credits)));
    s.push_str(&format!("Total debits:        {}\n", money(m.total_debits)));
    s.push_str(&format!("Net cashflow:        {}\n", money(m.net_cashflow)));
    s.push_str(&format!("Opening balance:     {}\n", money(m.opening_balance)));
    s.push_str(&format!("Closing balance:     {}\n", money(m.closing_balance)));
    s.push_str(&format!("Net growth:          {}\n", money(m.balance_growth())));
    s.push_str(&format!("Average balance:     {}\n", money(m.avg_balance)));
    if m.has_volatility() {
        s.push_str(&format!("Balance volatility:  {}\n", money(m.balance_volatility)));
    } else {
        s.push_str("Balance volatility:  insufficient data (fewer than 2 rows)\n");
    }
    s.push_str(&format!("Avg debit size:      {}\n", money(m.avg_transaction_size)));
    s.push_str(&format!("Frequency:           {:.1}/day\n", m.transaction_frequency));
    s.push_str(&format!("Credit frequency:    {:.1}%\n", m.credit_frequency * 100.0));
    s.push_str(&format!(
        "Account health:      {}\n",
        a.insights.account_health.label()
    ));

    s.push_str("\n## Categories\n\n");
    for c in category_breakdown(&a.transactions) {
        s.push_str(&format!(
            "- {:<17} count={:<3} credits={} debits={}\n",
            c.category.as_str(),
            c.count,
            money(c.credits),
            money(c.debits)
        ));
    }
    let ie = income_vs_expenses(&a.transactions);
    s.push_str(&format!(
        "Income {} vs expenses {}\n",
        money(ie.income),
        money(ie.expenses)
    ));

    s.push_str("\n## Monthly activity\n\n");
    for month in monthly_activity(&a.document.transactions) {
        s.push_str(&format!(
            "- {}-{:02}: credits={} debits={}\n",
            month.year,
            month.month,
            money(month.credits),
            money(month.debits)
        ));
    }
    let days: Vec<String> = weekday_activity(&a.document.transactions)
        .iter()
        .map(|(day, n)| format!("{day}={n}"))
        .collect();
    s.push_str(&format!("Weekdays: {}\n\n", days.join(" ")));

    s.push_str(&render_narrative(&a.insights, cur));

    if !a.insights.strategies.is_empty() {
        s.push_str("\n## Credit improvement strategies\n\n");
        for (i, st) in a.insights.strategies.iter().enumerate() {
            s.push_str(&format!(
                "{}. {} [{}]: {}\n",
                i + 1,
                st.title,
                st.impact.label(),
                st.description
            ));
        }
    }

    s.push_str("\n## Learning resources\n\n");
    for r in LEARNING_VIDEOS.iter().chain(OFFICIAL_RESOURCES) {
        s.push_str(&format!("- {} ({}): {}\n", r.title, r.source, r.url));
    }

    s.push('\n');
    s.push_str(&render_loans(a.score.score, cur));

    s.push_str("\n## Recent transactions\n\n");
    for t in recent_transactions(&a.transactions, display.history_limit) {
        s.push_str(&format!(
            "{} | {:<32} | +{:>10} | -{:>10} | {:>10} | {}\n",
            t.transaction.date.format("%d-%m-%Y"),
            t.transaction.description,
            format_amount(t.transaction.credit, 2),
            format_amount(t.transaction.debit, 2),
            format_amount(t.transaction.balance, 2),
            t.category
        ));
    }

    s
}

pub fn render_loans(score: f64, currency: &str) -> String {
    let tier = LoanTier::for_score(score);
    let mut s = String::new();

    s.push_str("## Loan options\n\n");
    s.push_str(&format!("{}\n", tier.headline()));
    s.push_str(&format!(
        "Interest Rate: {} | Max Loan: {}{}\n\n",
        tier.interest_rate(),
        currency,
        format_amount(tier.max_loan(), 0)
    ));

    for offer in loan_offers(score) {
        let p = offer.product;
        s.push_str(&format!(
            "- {} - {}\n",
            p.name,
            if offer.eligible { "Eligible" } else { "Not Eligible Yet" }
        ));
        s.push_str(&format!(
            "  interest {} p.a. | amount {} | processing {} | fee {}\n",
            p.interest, p.amount, p.processing, p.fee
        ));
        s.push_str(&format!("  documents: {}\n", p.requirements.join(", ")));
    }

    s
}

/// Write categorized rows as CSV (date as DD-MM-YY, like the source statement)
pub fn write_transactions_csv<W: io::Write>(
    writer: W,
    txns: &[CategorizedTransaction],
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["date", "description", "credit", "debit", "balance", "category"])?;
    for t in txns {
        wtr.write_record([
            t.transaction.date.format("%d-%m-%y").to_string(),
            t.transaction.description.clone(),
            t.transaction.credit.to_string(),
            t.transaction.debit.to_string(),
            t.transaction.balance.to_string(),
            t.category.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nanofin_finance::analyze_str;

    const STATEMENT: &str = r#"{
        "personal_info": {"name": "Meena"},
        "summary": {"opening_balance": 1000, "closing_balance": 1400},
        "transactions": [
            {"date": "01-06-23", "description": "SALARY", "credit": 900, "debit": 0, "balance": 1900},
            {"date": "02-06-23INB", "description": "Coffee, snacks", "credit": 0, "debit": 500, "balance": 1400}
        ]
    }"#;

    #[test]
    fn test_report_sections() {
        let a = analyze_str(STATEMENT).unwrap();
        let text = render_report(&a, &DisplaySection::default());

        assert!(text.contains("Name:        Meena"));
        assert!(text.contains("Account:     N/A"));
        assert!(text.contains("## Nano entrepreneur score"));
        assert!(text.contains("Total credits:       ₹900"));
        assert!(text.contains("BUSINESS_INCOME"));
        assert!(text.contains("Weekdays: Mon=0 Tue=0 Wed=0 Thu=1 Fri=1 Sat=0 Sun=0"));
        assert!(text.contains("## Loan options"));
        assert!(text.contains("Entrepreneur Micro Loan - Eligible"));
        assert!(text.contains("## Learning resources"));
        assert!(text.contains("- RBI Financial Literacy (Reserve Bank of India): https://"));
    }

    #[test]
    fn test_report_flags_insufficient_data() {
        let a = analyze_str(r#"{"transactions": []}"#).unwrap();
        let text = render_report(&a, &DisplaySection::default());
        assert!(text.contains("insufficient data"));
    }

    #[test]
    fn test_history_limit() {
        let a = analyze_str(STATEMENT).unwrap();
        let display = DisplaySection {
            history_limit: 1,
            ..DisplaySection::default()
        };
        let text = render_report(&a, &display);
        let history = text.split("## Recent transactions").nth(1).unwrap();
        assert!(history.contains("02-06-2023"));
        assert!(!history.contains("01-06-2023"));
    }

    #[test]
    fn test_loans_for_high_score() {
        let text = render_loans(85.0, "₹");
        assert!(text.contains("Excellent Candidate for Premium Loans"));
        assert!(text.contains("Max Loan: ₹500,000"));
        assert!(!text.contains("Not Eligible Yet"));
    }

    #[test]
    fn test_csv_export() {
        let a = analyze_str(STATEMENT).unwrap();
        let mut buf = Vec::new();
        write_transactions_csv(&mut buf, &a.transactions).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "date,description,credit,debit,balance,category");
        assert_eq!(lines[1], "01-06-23,SALARY,900,0,1900,BUSINESS_INCOME");
        assert_eq!(lines[2], "02-06-23,\"Coffee, snacks\",0,500,1400,PERSONAL_EXPENSE");
    }
}
