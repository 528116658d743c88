//! Summary projection — the card of display strings describing the selected
//! point, plus the two static headline figures.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::format::format_gbp;
use crate::point::LikelihoodBand;

// Flat figure shown until a real repayment model exists.
const AVERAGE_PAYMENT_ESTIMATE: u64 = 1_234;

/// The projection failed for the requested point.
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error("No point at index {index}")]
    IndexOutOfRange { index: usize },
    #[error("Point with loan £{loan} is not interactive")]
    NotInteractive { loan: u64 },
    #[error("Dataset has no {band} likelihood marker")]
    MissingBand { band: LikelihoodBand },
}

/// Ready-to-render description of the selected point.
///
/// All fields except `loan` are display strings; absent figures render as
/// `"-"` rather than being omitted, so the card never changes shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    /// Loan amount identifying the selected point.
    pub loan: u64,
    /// Band colouring the card. The deposit borrows the high band.
    pub band: LikelihoodBand,
    /// Headline range, e.g. `Borrowing £113,456 - £168,000`.
    pub borrowing: String,
    pub lenders: String,
    pub interest_rate: String,
    pub average_payment: String,
}

/// The two static figures shown above the interactive card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Headline {
    /// Loan at the high marker.
    pub comfortable: u64,
    /// Loan at the low marker.
    pub maximum: u64,
}

/// Project the point at `index` into its summary card.
///
/// The deposit point describes the deposit against the comfortable borrowing
/// figure and dashes out the lender fields. Banded points describe the range
/// from their predecessor on the curve, whether or not that predecessor is
/// itself interactive.
pub fn project(dataset: &Dataset, index: usize) -> Result<SummaryView, SummaryError> {
    let point = dataset
        .point(index)
        .ok_or(SummaryError::IndexOutOfRange { index })?;

    if point.deposit {
        let high = dataset
            .markers()
            .high
            .ok_or(SummaryError::MissingBand {
                band: LikelihoodBand::High,
            })?;
        let comfortable = dataset.points()[high].loan;
        return Ok(SummaryView {
            loan: point.loan,
            band: LikelihoodBand::High,
            borrowing: format!("Deposit {}", format_gbp(comfortable)),
            lenders: "-".to_string(),
            interest_rate: "-".to_string(),
            average_payment: "-".to_string(),
        });
    }

    let Some(band) = point.likelihood else {
        return Err(SummaryError::NotInteractive { loan: point.loan });
    };
    let previous_loan = index
        .checked_sub(1)
        .and_then(|previous| dataset.point(previous))
        .map_or(0, |previous| previous.loan);
    Ok(SummaryView {
        loan: point.loan,
        band,
        borrowing: format!(
            "Borrowing {} - {}",
            format_gbp(previous_loan),
            format_gbp(point.loan)
        ),
        lenders: point.lenders.to_string(),
        interest_rate: point
            .interest_rate
            .map_or_else(|| "-".to_string(), |rate| rate.to_string()),
        average_payment: format_gbp(AVERAGE_PAYMENT_ESTIMATE),
    })
}

/// The static headline figures, read straight off the high and low markers.
pub fn headline(dataset: &Dataset) -> Result<Headline, SummaryError> {
    let markers = dataset.markers();
    let high = markers.high.ok_or(SummaryError::MissingBand {
        band: LikelihoodBand::High,
    })?;
    let low = markers.low.ok_or(SummaryError::MissingBand {
        band: LikelihoodBand::Low,
    })?;
    Ok(Headline {
        comfortable: dataset.points()[high].loan,
        maximum: dataset.points()[low].loan,
    })
}
