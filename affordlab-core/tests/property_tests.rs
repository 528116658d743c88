//! Property tests for curve invariants.
//!
//! Uses proptest to verify:
//! 1. Cursor cycles — stepping Next once per interactive point returns to
//!    the start, and Next then Previous is the identity
//! 2. Segment tiling — band segments cover the curve up to the low marker,
//!    overlapping only at shared boundary points
//! 3. Summary totality — every interactive point projects to a card
//! 4. Formatting — GBP strings round-trip and group digits by three

use proptest::prelude::*;

use affordlab_core::cursor::{self, Direction};
use affordlab_core::dataset::Dataset;
use affordlab_core::format::format_gbp;
use affordlab_core::navigator::Navigator;
use affordlab_core::point::{DataPoint, LikelihoodBand};
use affordlab_core::segment;
use affordlab_core::summary;

// ── Strategies (proptest) ────────────────────────────────────────────

/// A well-formed curve: strictly increasing loans from £0, a deposit point
/// and all three band markers in order.
fn arb_dataset() -> impl Strategy<Value = Dataset> {
    (5usize..12)
        .prop_flat_map(|len| {
            (
                prop::collection::vec(1_000u64..50_000, len - 1),
                prop::collection::vec(1u32..100, len),
                prop::sample::subsequence((1..len).collect::<Vec<usize>>(), 4),
            )
        })
        .prop_map(|(increments, lenders, markers)| {
            let mut loan = 0u64;
            let mut points = Vec::with_capacity(lenders.len());
            for (index, count) in lenders.iter().enumerate() {
                if index > 0 {
                    loan += increments[index - 1];
                }
                points.push(DataPoint {
                    loan,
                    lenders: *count,
                    likelihood: None,
                    deposit: false,
                    interest_rate: None,
                });
            }
            points[markers[0]].deposit = true;
            points[markers[1]].likelihood = Some(LikelihoodBand::High);
            points[markers[1]].interest_rate = Some(4.55);
            points[markers[2]].likelihood = Some(LikelihoodBand::Moderate);
            points[markers[2]].interest_rate = Some(4.85);
            points[markers[3]].likelihood = Some(LikelihoodBand::Low);
            points[markers[3]].interest_rate = Some(5.15);
            Dataset::new(points).expect("generated dataset is well formed")
        })
}

// ── 1. Cursor cycles ─────────────────────────────────────────────────

proptest! {
    /// Stepping Next as many times as there are interactive points returns
    /// to the starting point.
    #[test]
    fn cursor_cycle_length_matches_interactive_count(dataset in arb_dataset()) {
        let interactive = dataset.interactive_indices();
        let start = interactive[0];
        let mut loan = dataset.points()[start].loan;
        for _ in 0..interactive.len() {
            let index = cursor::step(&dataset, loan, Direction::Next).unwrap();
            loan = dataset.points()[index].loan;
        }
        prop_assert_eq!(loan, dataset.points()[start].loan, "cycle did not close");
    }

    /// Next followed by Previous lands back on the same point, from any
    /// interactive starting position.
    #[test]
    fn cursor_next_then_previous_is_identity(
        dataset in arb_dataset(),
        offset in 0usize..4,
    ) {
        let interactive = dataset.interactive_indices();
        let start = interactive[offset % interactive.len()];
        let loan = dataset.points()[start].loan;

        let forward = cursor::step(&dataset, loan, Direction::Next).unwrap();
        let back = cursor::step(
            &dataset,
            dataset.points()[forward].loan,
            Direction::Previous,
        )
        .unwrap();
        prop_assert_eq!(back, start);
    }
}

// ── 2. Segment tiling ────────────────────────────────────────────────

proptest! {
    /// Band segments tile the curve up to the low marker, overlapping only
    /// at their shared boundary points.
    #[test]
    fn band_segments_tile(dataset in arb_dataset()) {
        let high = segment::band_segment(&dataset, LikelihoodBand::High).unwrap();
        let moderate = segment::band_segment(&dataset, LikelihoodBand::Moderate).unwrap();
        let low = segment::band_segment(&dataset, LikelihoodBand::Low).unwrap();

        prop_assert_eq!(high.first().map(|point| point.loan), Some(0));
        prop_assert_eq!(high.last(), moderate.first());
        prop_assert_eq!(moderate.last(), low.first());

        // Deduplicating the two shared boundaries covers the curve exactly
        // up to the low marker.
        let covered = high.len() + moderate.len() + low.len() - 2;
        let low_index = dataset.markers().low.unwrap();
        prop_assert_eq!(covered, low_index + 1);
    }

    /// The deposit segment always runs from the origin to the deposit point.
    #[test]
    fn deposit_segment_is_anchored(dataset in arb_dataset()) {
        let deposit = segment::deposit_segment(&dataset).unwrap();
        prop_assert_eq!(deposit.first().map(|point| point.loan), Some(0));
        prop_assert!(deposit.last().unwrap().deposit);
    }
}

// ── 3. Summary totality ──────────────────────────────────────────────

proptest! {
    /// Every interactive point projects, and dashes never mix with figures.
    #[test]
    fn summaries_cover_all_interactive_points(dataset in arb_dataset()) {
        for index in dataset.interactive_indices() {
            let view = summary::project(&dataset, index).unwrap();
            let point = &dataset.points()[index];
            prop_assert_eq!(view.loan, point.loan);
            if point.deposit {
                prop_assert!(view.borrowing.starts_with("Deposit £"));
                prop_assert_eq!(view.lenders.as_str(), "-");
                prop_assert_eq!(view.interest_rate.as_str(), "-");
                prop_assert_eq!(view.average_payment.as_str(), "-");
            } else {
                prop_assert!(view.borrowing.starts_with("Borrowing £"));
                prop_assert_eq!(view.lenders, point.lenders.to_string());
                prop_assert_ne!(view.average_payment.as_str(), "-");
            }
        }
    }

    /// Arbitrary walks keep the selection interactive and the cached view
    /// identical to a fresh projection.
    #[test]
    fn navigator_walks_stay_consistent(
        dataset in arb_dataset(),
        steps in prop::collection::vec(prop::bool::ANY, 1..20),
    ) {
        let mut navigator = Navigator::new(dataset).unwrap();
        for forward in steps {
            if forward {
                navigator.next().unwrap();
            } else {
                navigator.previous().unwrap();
            }
            let index = navigator.selected_index();
            prop_assert!(navigator.dataset().points()[index].is_interactive());
            let fresh = summary::project(navigator.dataset(), index).unwrap();
            prop_assert_eq!(&fresh, navigator.view());
        }
    }
}

// ── 4. Formatting ────────────────────────────────────────────────────

proptest! {
    /// format_gbp keeps every digit and groups them in threes.
    #[test]
    fn gbp_format_round_trips(amount in 0u64..10_000_000_000) {
        let formatted = format_gbp(amount);
        prop_assert!(formatted.starts_with('£'));

        let digits: String = formatted
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        prop_assert_eq!(digits.parse::<u64>().unwrap(), amount);

        let mut groups = formatted.trim_start_matches('£').split(',');
        let first = groups.next().unwrap();
        prop_assert!((1..=3).contains(&first.len()), "leading group too wide: {first}");
        for group in groups {
            prop_assert_eq!(group.len(), 3, "interior group must be 3 digits");
        }
    }
}
