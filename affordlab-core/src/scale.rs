//! Linear scales and the chart projection shared by rendering and mouse
//! hit-testing, so both always agree on where a point sits.

use crate::dataset::Dataset;

/// Spacing of the loan axis ticks, in pounds.
pub const TICK_STEP: u64 = 50_000;

/// Maps one interval onto another, both directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < 1e-9 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, position: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (r1 - r0).abs() < 1e-9 {
            return d0;
        }
        d0 + (position - r0) / (r1 - r0) * (d1 - d0)
    }
}

/// Projection of the affordability curve onto a cell grid.
///
/// Columns run left to right over the loan domain, rows top to bottom with
/// the lender axis inverted, i.e. row 0 carries the most lenders.
#[derive(Debug, Clone, Copy)]
pub struct ChartProjection {
    x: LinearScale,
    y: LinearScale,
    width: u16,
    height: u16,
    max_loan: u64,
}

impl ChartProjection {
    pub fn new(dataset: &Dataset, width: u16, height: u16) -> Self {
        let max_loan = dataset.max_loan();
        let max_lenders = dataset
            .points()
            .iter()
            .map(|point| point.lenders)
            .max()
            .unwrap_or(0);
        let x = LinearScale::new(
            (0.0, max_loan as f64),
            (0.0, f64::from(width.saturating_sub(1))),
        );
        let y = LinearScale::new(
            (0.0, f64::from(max_lenders)),
            (f64::from(height.saturating_sub(1)), 0.0),
        );
        Self {
            x,
            y,
            width,
            height,
            max_loan,
        }
    }

    /// Column of a loan amount.
    pub fn x_cell(&self, loan: u64) -> u16 {
        let limit = f64::from(self.width.saturating_sub(1));
        self.x.apply(loan as f64).round().max(0.0).min(limit) as u16
    }

    /// Row of a lender count, with fractional counts from interpolation.
    pub fn y_cell(&self, lenders: f64) -> u16 {
        let limit = f64::from(self.height.saturating_sub(1));
        self.y.apply(lenders).round().max(0.0).min(limit) as u16
    }

    /// Loan amount under a column, clamped to the curve's domain.
    pub fn loan_at(&self, column: u16) -> u64 {
        let loan = self.x.invert(f64::from(column)).round();
        loan.max(0.0).min(self.max_loan as f64) as u64
    }

    /// Largest axis tick, the loan maximum rounded down to the tick step.
    pub fn rounded_max_loan(&self) -> u64 {
        (self.max_loan / TICK_STEP) * TICK_STEP
    }

    /// Loan axis ticks at every [`TICK_STEP`] multiple in the domain.
    pub fn x_ticks(&self) -> Vec<u64> {
        (0..=self.rounded_max_loan() / TICK_STEP)
            .map(|step| step * TICK_STEP)
            .collect()
    }

    /// The interactive point rendered at or next to this cell, if any.
    ///
    /// Terminal cells are coarse, so anything within one cell of a point
    /// counts as a hit; the nearest point wins on overlap.
    pub fn hit_test(&self, dataset: &Dataset, column: u16, row: u16) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for index in dataset.interactive_indices() {
            let point = &dataset.points()[index];
            let dx = self.x_cell(point.loan).abs_diff(column);
            let dy = self.y_cell(f64::from(point.lenders)).abs_diff(row);
            if dx <= 1 && dy <= 1 {
                let distance = u32::from(dx) * u32::from(dx) + u32::from(dy) * u32::from(dy);
                if best.map_or(true, |(_, nearest)| distance < nearest) {
                    best = Some((index, distance));
                }
            }
        }
        best.map(|(index, _)| index)
    }
}
