//! Segment derivation — the contiguous point runs that back each shaded
//! region of the chart.
//!
//! Every segment is a borrowed slice of the dataset, located through the
//! marker table rather than by rescanning. Missing markers surface as
//! [`SegmentError`] instead of producing an empty or inverted slice.

use crate::dataset::Dataset;
use crate::point::{DataPoint, LikelihoodBand};

/// A requested segment could not be derived from the dataset's markers.
#[derive(Debug, thiserror::Error)]
pub enum SegmentError {
    #[error("Dataset has no deposit point")]
    MissingDeposit,
    #[error("Dataset has no {band} likelihood marker")]
    MissingBand { band: LikelihoodBand },
}

/// Points from the origin through the deposit point, inclusive.
pub fn deposit_segment(dataset: &Dataset) -> Result<&[DataPoint], SegmentError> {
    let end = dataset.markers().deposit.ok_or(SegmentError::MissingDeposit)?;
    Ok(&dataset.points()[..=end])
}

/// Points backing one likelihood region, inclusive of both boundary points.
///
/// The high region runs from the origin to the high marker; moderate and low
/// each run from the previous band's marker to their own.
pub fn band_segment(dataset: &Dataset, band: LikelihoodBand) -> Result<&[DataPoint], SegmentError> {
    let markers = dataset.markers();
    let end = markers
        .for_band(band)
        .ok_or(SegmentError::MissingBand { band })?;
    let start = match band {
        LikelihoodBand::High => 0,
        LikelihoodBand::Moderate => markers.high.ok_or(SegmentError::MissingBand {
            band: LikelihoodBand::High,
        })?,
        LikelihoodBand::Low => markers.moderate.ok_or(SegmentError::MissingBand {
            band: LikelihoodBand::Moderate,
        })?,
    };
    // Marker ordering is validated at construction, so start <= end here.
    Ok(&dataset.points()[start..=end])
}

/// All points except the last, which only anchors the curve's right edge.
pub fn interior_points(dataset: &Dataset) -> &[DataPoint] {
    let points = dataset.points();
    &points[..points.len().saturating_sub(1)]
}
