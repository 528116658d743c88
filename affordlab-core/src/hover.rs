//! Hover notes — the tooltip copy describing a point relative to the sweet
//! spot, which sits at the high likelihood marker.

use crate::dataset::Dataset;
use crate::format::format_gbp;

/// A hover note could not be derived.
#[derive(Debug, thiserror::Error)]
pub enum HoverError {
    #[error("No point at index {index}")]
    IndexOutOfRange { index: usize },
    #[error("Dataset has no high likelihood marker to anchor the sweet spot")]
    NoSweetSpot,
}

/// Where the hovered point sits relative to the sweet spot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweetSpotRelation {
    Below,
    At,
    Above,
}

/// Tooltip content for one hovered point.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverNote {
    pub loan: u64,
    pub lenders: u32,
    pub relation: SweetSpotRelation,
    pub message: String,
}

/// Build the hover note for the point at `index`.
pub fn hover_note(dataset: &Dataset, index: usize) -> Result<HoverNote, HoverError> {
    let point = dataset
        .point(index)
        .ok_or(HoverError::IndexOutOfRange { index })?;
    let sweet_spot = dataset.markers().high.ok_or(HoverError::NoSweetSpot)?;
    let sweet_loan = dataset.points()[sweet_spot].loan;

    let relation = match point.loan.cmp(&sweet_loan) {
        std::cmp::Ordering::Less => SweetSpotRelation::Below,
        std::cmp::Ordering::Equal => SweetSpotRelation::At,
        std::cmp::Ordering::Greater => SweetSpotRelation::Above,
    };
    let amount = format_gbp(point.loan);
    let message = match relation {
        SweetSpotRelation::Below => format!(
            "You will definitely be able to get a loan of {amount} from {} lenders at a lower than average interest rate.",
            point.lenders
        ),
        SweetSpotRelation::At => format!(
            "This is your sweet spot, you should be able to get a loan of {amount} from {} lenders at an average interest rate.",
            point.lenders
        ),
        SweetSpotRelation::Above => format!(
            "You might be able to get a loan of {amount} from {} lenders at a higher than average interest rate.",
            point.lenders
        ),
    };

    Ok(HoverNote {
        loan: point.loan,
        lenders: point.lenders,
        relation,
        message,
    })
}
