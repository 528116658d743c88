//! Ordered affordability dataset — validated points plus the marker table
//! locating the deposit and likelihood boundary points.

use crate::point::{DataPoint, LikelihoodBand};

// ─── Error type ──────────────────────────────────────────────────────

/// Validation failures rejected by [`Dataset::new`].
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset has no points")]
    Empty,
    #[error("First point must have loan £0, found £{loan}")]
    FirstLoanNonZero { loan: u64 },
    #[error("Loan amounts must be strictly increasing at index {index}")]
    LoansNotIncreasing { index: usize },
    #[error("More than one deposit point")]
    DuplicateDeposit,
    #[error("More than one {band} likelihood marker")]
    DuplicateBand { band: LikelihoodBand },
    #[error("Markers must appear in deposit, high, moderate, low order")]
    MarkersOutOfOrder,
}

// ─── Marker table ────────────────────────────────────────────────────

/// Indices of the special points, resolved once at construction so segment
/// derivation and navigation never rescan the dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerTable {
    pub deposit: Option<usize>,
    pub high: Option<usize>,
    pub moderate: Option<usize>,
    pub low: Option<usize>,
}

impl MarkerTable {
    /// Index of the boundary point carrying `band`, if the dataset has one.
    pub fn for_band(&self, band: LikelihoodBand) -> Option<usize> {
        match band {
            LikelihoodBand::High => self.high,
            LikelihoodBand::Moderate => self.moderate,
            LikelihoodBand::Low => self.low,
        }
    }
}

// ─── Dataset ─────────────────────────────────────────────────────────

/// An ordered affordability curve.
///
/// Construction validates the invariants every consumer assumes afterwards:
/// at least one point, strictly increasing loans anchored at £0, and at most
/// one marker of each kind.
#[derive(Debug, Clone)]
pub struct Dataset {
    points: Vec<DataPoint>,
    markers: MarkerTable,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Result<Self, DatasetError> {
        let Some(first) = points.first() else {
            return Err(DatasetError::Empty);
        };
        if first.loan != 0 {
            return Err(DatasetError::FirstLoanNonZero { loan: first.loan });
        }
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].loan <= pair[0].loan {
                return Err(DatasetError::LoansNotIncreasing { index: index + 1 });
            }
        }
        let markers = build_markers(&points)?;
        Ok(Dataset { points, markers })
    }

    /// The worked example curve used by the demo binaries and tests.
    pub fn sample() -> Self {
        let points = vec![
            plain_point(0, 75),
            DataPoint {
                deposit: true,
                ..plain_point(20_000, 75)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::High),
                interest_rate: Some(4.55),
                ..plain_point(113_456, 75)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::Moderate),
                interest_rate: Some(4.85),
                ..plain_point(168_000, 60)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::Low),
                interest_rate: Some(5.15),
                ..plain_point(234_567, 33)
            },
            plain_point(273_000, 10),
        ];
        Dataset::new(points).expect("sample dataset is valid")
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// Index of the point with exactly this loan amount.
    pub fn index_of_loan(&self, loan: u64) -> Option<usize> {
        self.points.binary_search_by_key(&loan, |p| p.loan).ok()
    }

    pub fn markers(&self) -> MarkerTable {
        self.markers
    }

    /// Indices the selection cursor may visit, in loan order.
    pub fn interactive_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, point)| point.is_interactive())
            .map(|(index, _)| index)
            .collect()
    }

    /// Largest loan on the curve, i.e. the right edge of the chart domain.
    pub fn max_loan(&self) -> u64 {
        self.points.last().map_or(0, |point| point.loan)
    }

    /// Lender count of the curve at an arbitrary loan, linearly interpolated
    /// between the bracketing points and clamped at the ends.
    pub fn lenders_at(&self, loan: u64) -> f64 {
        let Some(first) = self.points.first() else {
            return 0.0;
        };
        if loan <= first.loan {
            return f64::from(first.lenders);
        }
        for pair in self.points.windows(2) {
            if loan <= pair[1].loan {
                let span = (pair[1].loan - pair[0].loan) as f64;
                let fraction = (loan - pair[0].loan) as f64 / span;
                let rise = f64::from(pair[1].lenders) - f64::from(pair[0].lenders);
                return f64::from(pair[0].lenders) + fraction * rise;
            }
        }
        self.points.last().map_or(0.0, |point| f64::from(point.lenders))
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────

fn plain_point(loan: u64, lenders: u32) -> DataPoint {
    DataPoint {
        loan,
        lenders,
        likelihood: None,
        deposit: false,
        interest_rate: None,
    }
}

fn build_markers(points: &[DataPoint]) -> Result<MarkerTable, DatasetError> {
    let mut markers = MarkerTable::default();
    for (index, point) in points.iter().enumerate() {
        if point.deposit {
            if markers.deposit.is_some() {
                return Err(DatasetError::DuplicateDeposit);
            }
            markers.deposit = Some(index);
        }
        if let Some(band) = point.likelihood {
            let slot = match band {
                LikelihoodBand::High => &mut markers.high,
                LikelihoodBand::Moderate => &mut markers.moderate,
                LikelihoodBand::Low => &mut markers.low,
            };
            if slot.is_some() {
                return Err(DatasetError::DuplicateBand { band });
            }
            *slot = Some(index);
        }
    }
    let ordered = [markers.deposit, markers.high, markers.moderate, markers.low];
    let mut last: Option<usize> = None;
    for index in ordered.into_iter().flatten() {
        if last.is_some_and(|previous| previous >= index) {
            return Err(DatasetError::MarkersOutOfOrder);
        }
        last = Some(index);
    }
    Ok(markers)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_markers_line_up() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.len(), 6);
        assert_eq!(
            dataset.markers(),
            MarkerTable {
                deposit: Some(1),
                high: Some(2),
                moderate: Some(3),
                low: Some(4),
            }
        );
        assert_eq!(dataset.interactive_indices(), vec![1, 2, 3, 4]);
        assert_eq!(dataset.max_loan(), 273_000);
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Dataset::new(vec![]), Err(DatasetError::Empty)));
    }

    #[test]
    fn rejects_nonzero_origin() {
        let err = Dataset::new(vec![plain_point(5_000, 75)]).unwrap_err();
        assert!(matches!(err, DatasetError::FirstLoanNonZero { loan: 5_000 }));
    }

    #[test]
    fn rejects_out_of_order_loans() {
        let err = Dataset::new(vec![
            plain_point(0, 75),
            plain_point(100, 70),
            plain_point(50, 60),
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::LoansNotIncreasing { index: 2 }));

        let err = Dataset::new(vec![plain_point(0, 75), plain_point(0, 70)]).unwrap_err();
        assert!(matches!(err, DatasetError::LoansNotIncreasing { index: 1 }));
    }

    #[test]
    fn rejects_duplicate_deposit() {
        let err = Dataset::new(vec![
            DataPoint {
                deposit: true,
                ..plain_point(0, 75)
            },
            DataPoint {
                deposit: true,
                ..plain_point(10_000, 70)
            },
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateDeposit));
    }

    #[test]
    fn rejects_duplicate_band() {
        let err = Dataset::new(vec![
            DataPoint {
                likelihood: Some(LikelihoodBand::Moderate),
                ..plain_point(0, 75)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::Moderate),
                ..plain_point(10_000, 70)
            },
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            DatasetError::DuplicateBand {
                band: LikelihoodBand::Moderate
            }
        ));
    }

    #[test]
    fn rejects_out_of_order_markers() {
        let err = Dataset::new(vec![
            plain_point(0, 75),
            DataPoint {
                likelihood: Some(LikelihoodBand::Moderate),
                ..plain_point(10_000, 70)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::High),
                ..plain_point(20_000, 60)
            },
        ])
        .unwrap_err();
        assert!(matches!(err, DatasetError::MarkersOutOfOrder));
    }

    #[test]
    fn index_of_loan_hits_and_misses() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.index_of_loan(168_000), Some(3));
        assert_eq!(dataset.index_of_loan(0), Some(0));
        assert_eq!(dataset.index_of_loan(1), None);
    }

    #[test]
    fn lenders_interpolate_between_points() {
        let dataset = Dataset::sample();
        assert_eq!(dataset.lenders_at(20_000), 75.0);
        // Halfway between the high and moderate markers.
        assert_eq!(dataset.lenders_at(140_728), 67.5);
        // Clamped outside the domain.
        assert_eq!(dataset.lenders_at(400_000), 10.0);
    }
}
