//! Selection cursor — wraparound stepping across the interactive points.
//!
//! Only marker-bearing points participate. Stepping past the last interactive
//! point wraps to the first and vice versa, so the cursor can never fall off
//! the curve.

use crate::dataset::Dataset;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A cursor step or selection could not be resolved.
#[derive(Debug, thiserror::Error)]
pub enum NavigationError {
    #[error("Dataset has no interactive points")]
    NoInteractivePoints,
    #[error("No point with loan £{loan}")]
    UnknownLoan { loan: u64 },
    #[error("Point with loan £{loan} is not interactive")]
    NotInteractive { loan: u64 },
}

/// Resolve the dataset index the cursor lands on when stepping from the point
/// identified by `current_loan`.
pub fn step(
    dataset: &Dataset,
    current_loan: u64,
    direction: Direction,
) -> Result<usize, NavigationError> {
    let interactive = dataset.interactive_indices();
    if interactive.is_empty() {
        return Err(NavigationError::NoInteractivePoints);
    }
    let current = dataset
        .index_of_loan(current_loan)
        .ok_or(NavigationError::UnknownLoan { loan: current_loan })?;
    let position = interactive
        .iter()
        .position(|&index| index == current)
        .ok_or(NavigationError::NotInteractive { loan: current_loan })?;
    let target = match direction {
        Direction::Next if position + 1 == interactive.len() => 0,
        Direction::Next => position + 1,
        Direction::Previous if position == 0 => interactive.len() - 1,
        Direction::Previous => position - 1,
    };
    Ok(interactive[target])
}
