//! Loan tiers and the small marketplace of products offered against a score.

use serde::Serialize;

/// Pricing tier implied by a score
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum LoanTier {
    #[serde(rename = "premium")]
    Premium,
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "starter")]
    Starter,
}

impl LoanTier {
    /// Premium above 80, standard above 60
    pub fn for_score(score: f64) -> Self {
        if score > 80.0 {
            LoanTier::Premium
        } else if score > 60.0 {
            LoanTier::Standard
        } else {
            LoanTier::Starter
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            LoanTier::Premium => "Excellent Candidate for Premium Loans",
            LoanTier::Standard => "Good Candidate for Standard Loans",
            LoanTier::Starter => "Work on Financial Stability First",
        }
    }

    pub fn interest_rate(&self) -> &'static str {
        match self {
            LoanTier::Premium => "8-10%",
            LoanTier::Standard => "10-12%",
            LoanTier::Starter => "12-15%",
        }
    }

    /// Maximum loan in rupees
    pub fn max_loan(&self) -> f64 {
        match self {
            LoanTier::Premium => 500_000.0,
            LoanTier::Standard => 200_000.0,
            LoanTier::Starter => 50_000.0,
        }
    }
}

/// A loan product and the score it requires
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoanProduct {
    pub name: &'static str,
    pub interest: &'static str,
    pub amount: &'static str,
    pub processing: &'static str,
    pub fee: &'static str,
    /// Score must be strictly above this; None means always eligible
    pub min_score: Option<f64>,
    pub requirements: &'static [&'static str],
}

impl LoanProduct {
    pub fn is_eligible(&self, score: f64) -> bool {
        self.min_score.is_none_or(|min| score > min)
    }
}

pub const LOAN_PRODUCTS: &[LoanProduct] = &[
    LoanProduct {
        name: "PM Street Vendor AtmaNirbhar Nidhi",
        interest: "7.0%",
        amount: "₹10,000 - ₹50,000",
        processing: "5-7 days",
        fee: "0%",
        min_score: Some(50.0),
        requirements: &["Aadhaar Card", "Vendor Certificate"],
    },
    LoanProduct {
        name: "Business Growth Plus",
        interest: "10-12%",
        amount: "₹50,000 - ₹5,00,000",
        processing: "7-10 days",
        fee: "1-2%",
        min_score: Some(60.0),
        requirements: &["Bank Statements", "Business Proof", "ID"],
    },
    LoanProduct {
        name: "Entrepreneur Micro Loan",
        interest: "12-15%",
        amount: "₹10,000 - ₹2,00,000",
        processing: "3-5 days",
        fee: "0.5%",
        min_score: None,
        requirements: &["ID Proof", "Proof of Address"],
    },
];

/// A product with the eligibility outcome for one score
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoanOffer {
    pub product: &'static LoanProduct,
    pub eligible: bool,
}

/// Evaluate every product against a score, in table order
pub fn loan_offers(score: f64) -> Vec<LoanOffer> {
    LOAN_PRODUCTS
        .iter()
        .map(|product| LoanOffer {
            product,
            eligible: product.is_eligible(score),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(LoanTier::for_score(95.0), LoanTier::Premium);
        assert_eq!(LoanTier::for_score(80.0), LoanTier::Standard);
        assert_eq!(LoanTier::for_score(61.0), LoanTier::Standard);
        assert_eq!(LoanTier::for_score(60.0), LoanTier::Starter);
        assert_eq!(LoanTier::Premium.max_loan(), 500_000.0);
        assert_eq!(LoanTier::Starter.interest_rate(), "12-15%");
    }

    #[test]
    fn test_micro_loan_always_eligible() {
        let offers = loan_offers(0.0);
        assert_eq!(offers.len(), 3);
        assert!(!offers[0].eligible);
        assert!(!offers[1].eligible);
        assert!(offers[2].eligible);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let offers = loan_offers(60.0);
        assert!(offers[0].eligible);
        assert!(!offers[1].eligible);

        let offers = loan_offers(60.5);
        assert!(offers.iter().all(|o| o.eligible));
    }
}
