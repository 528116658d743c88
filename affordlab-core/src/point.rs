//! Chart data points: loan/lender pairs with optional likelihood markers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Likelihood that lenders approve a loan of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikelihoodBand {
    High,
    Moderate,
    Low,
}

impl LikelihoodBand {
    /// Bands in curve order, from the most to the least likely approval.
    pub const ALL: [LikelihoodBand; 3] = [
        LikelihoodBand::High,
        LikelihoodBand::Moderate,
        LikelihoodBand::Low,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LikelihoodBand::High => "high",
            LikelihoodBand::Moderate => "moderate",
            LikelihoodBand::Low => "low",
        }
    }
}

impl fmt::Display for LikelihoodBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One point on the affordability curve.
///
/// Serde field names follow the upstream dataset files (`likelyHood`,
/// `interestRate`), so exported JSON stays interchangeable with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Loan amount in whole pounds.
    pub loan: u64,
    /// Number of lenders prepared to offer at this amount.
    pub lenders: u32,
    /// Likelihood marker, present only on the three band boundary points.
    #[serde(rename = "likelyHood", default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<LikelihoodBand>,
    /// Marks the deposit point.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deposit: bool,
    /// Average interest rate offered at this amount, in percent.
    #[serde(rename = "interestRate", default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<f64>,
}

impl DataPoint {
    /// Whether the selection cursor may land on this point.
    pub fn is_interactive(&self) -> bool {
        self.deposit || self.likelihood.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_labels() {
        assert_eq!(LikelihoodBand::High.label(), "high");
        assert_eq!(LikelihoodBand::Moderate.to_string(), "moderate");
        assert_eq!(LikelihoodBand::ALL.len(), 3);
    }

    #[test]
    fn interactive_requires_marker() {
        let plain = DataPoint {
            loan: 0,
            lenders: 75,
            likelihood: None,
            deposit: false,
            interest_rate: None,
        };
        assert!(!plain.is_interactive());

        let deposit = DataPoint { deposit: true, ..plain.clone() };
        assert!(deposit.is_interactive());

        let banded = DataPoint {
            likelihood: Some(LikelihoodBand::Low),
            ..plain
        };
        assert!(banded.is_interactive());
    }

    #[test]
    fn serde_uses_upstream_keys() {
        let point = DataPoint {
            loan: 168_000,
            lenders: 60,
            likelihood: Some(LikelihoodBand::Moderate),
            deposit: false,
            interest_rate: Some(4.85),
        };
        let json = serde_json::to_string(&point).unwrap();
        assert!(json.contains("\"likelyHood\":\"moderate\""));
        assert!(json.contains("\"interestRate\":4.85"));
        assert!(!json.contains("deposit"));

        let back: DataPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, point);
    }

    #[test]
    fn serde_defaults_missing_markers() {
        let point: DataPoint = serde_json::from_str(r#"{"loan":0,"lenders":75}"#).unwrap();
        assert_eq!(point.loan, 0);
        assert_eq!(point.lenders, 75);
        assert!(point.likelihood.is_none());
        assert!(!point.deposit);
        assert!(point.interest_rate.is_none());
        assert!(!point.is_interactive());
    }
}
