//! Navigator — owns the dataset, the current selection and its summary view,
//! and tells subscribers whenever the view changes.
//!
//! Construction requires the deposit and all three band markers, so every
//! selection made afterwards is guaranteed to project cleanly.

use crate::cursor::{self, Direction, NavigationError};
use crate::dataset::Dataset;
use crate::point::LikelihoodBand;
use crate::summary::{self, Headline, SummaryView};

/// The dataset cannot drive a navigator.
#[derive(Debug, thiserror::Error)]
pub enum NavigatorError {
    #[error("Dataset has no deposit point")]
    MissingDeposit,
    #[error("Dataset has no {band} likelihood marker")]
    MissingBand { band: LikelihoodBand },
}

type Observer = Box<dyn FnMut(&SummaryView)>;

pub struct Navigator {
    dataset: Dataset,
    deposit: usize,
    sweet_spot: usize,
    selected: usize,
    headline: Headline,
    view: SummaryView,
    observers: Vec<Observer>,
}

impl Navigator {
    /// Take ownership of the dataset, starting with the sweet spot selected.
    pub fn new(dataset: Dataset) -> Result<Self, NavigatorError> {
        let markers = dataset.markers();
        let Some(deposit) = markers.deposit else {
            return Err(NavigatorError::MissingDeposit);
        };
        for band in LikelihoodBand::ALL {
            if markers.for_band(band).is_none() {
                return Err(NavigatorError::MissingBand { band });
            }
        }
        let sweet_spot = markers.high.ok_or(NavigatorError::MissingBand {
            band: LikelihoodBand::High,
        })?;
        let view = summary::project(&dataset, sweet_spot)
            .expect("markers verified above, sweet spot projects");
        let headline =
            summary::headline(&dataset).expect("markers verified above, headline resolves");
        Ok(Self {
            dataset,
            deposit,
            sweet_spot,
            selected: sweet_spot,
            headline,
            view,
            observers: Vec::new(),
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_loan(&self) -> u64 {
        self.dataset.points()[self.selected].loan
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn view(&self) -> &SummaryView {
        &self.view
    }

    pub fn headline(&self) -> Headline {
        self.headline
    }

    /// Register for view changes. Selections that leave the view unchanged
    /// do not notify, so re-selecting the current point stays silent.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&SummaryView) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Select the interactive point with exactly this loan amount.
    pub fn select_loan(&mut self, loan: u64) -> Result<&SummaryView, NavigationError> {
        let index = self
            .dataset
            .index_of_loan(loan)
            .ok_or(NavigationError::UnknownLoan { loan })?;
        if !self.dataset.points()[index].is_interactive() {
            return Err(NavigationError::NotInteractive { loan });
        }
        Ok(self.apply_selection(index))
    }

    /// Step the cursor forward, wrapping past the last interactive point.
    pub fn next(&mut self) -> Result<&SummaryView, NavigationError> {
        let target = cursor::step(&self.dataset, self.selected_loan(), Direction::Next)?;
        Ok(self.apply_selection(target))
    }

    /// Step the cursor backward, wrapping off the front.
    pub fn previous(&mut self) -> Result<&SummaryView, NavigationError> {
        let target = cursor::step(&self.dataset, self.selected_loan(), Direction::Previous)?;
        Ok(self.apply_selection(target))
    }

    /// Jump straight to the deposit point.
    pub fn select_deposit(&mut self) -> &SummaryView {
        self.apply_selection(self.deposit)
    }

    /// Jump straight to the high marker.
    pub fn select_sweet_spot(&mut self) -> &SummaryView {
        self.apply_selection(self.sweet_spot)
    }

    fn apply_selection(&mut self, index: usize) -> &SummaryView {
        let view = summary::project(&self.dataset, index)
            .expect("markers verified at construction, interactive points project");
        self.selected = index;
        if view != self.view {
            self.view = view;
            for observer in &mut self.observers {
                observer(&self.view);
            }
        }
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::DataPoint;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn starts_at_the_sweet_spot() {
        let navigator = Navigator::new(Dataset::sample()).unwrap();
        assert_eq!(navigator.selected_loan(), 113_456);
        assert_eq!(navigator.view().borrowing, "Borrowing £20,000 - £113,456");
        assert_eq!(navigator.headline().comfortable, 113_456);
        assert_eq!(navigator.headline().maximum, 234_567);
    }

    #[test]
    fn walks_the_interactive_points_with_wraparound() {
        let mut navigator = Navigator::new(Dataset::sample()).unwrap();

        assert_eq!(navigator.next().unwrap().loan, 168_000);
        assert_eq!(navigator.next().unwrap().loan, 234_567);
        // Wraps from the low marker back to the deposit.
        assert_eq!(navigator.next().unwrap().borrowing, "Deposit £113,456");
        assert_eq!(navigator.selected_loan(), 20_000);
        // And backward off the deposit wraps to the low marker.
        assert_eq!(navigator.previous().unwrap().loan, 234_567);
    }

    #[test]
    fn jump_selections() {
        let mut navigator = Navigator::new(Dataset::sample()).unwrap();
        assert_eq!(navigator.select_deposit().loan, 20_000);
        assert_eq!(navigator.select_sweet_spot().loan, 113_456);
        assert_eq!(navigator.select_loan(234_567).unwrap().lenders, "33");
    }

    #[test]
    fn reselecting_the_same_point_stays_silent() {
        let mut navigator = Navigator::new(Dataset::sample()).unwrap();
        let notifications = Rc::new(RefCell::new(0_u32));
        let counter = Rc::clone(&notifications);
        navigator.subscribe(move |_| *counter.borrow_mut() += 1);

        navigator.select_loan(168_000).unwrap();
        assert_eq!(*notifications.borrow(), 1);
        navigator.select_loan(168_000).unwrap();
        assert_eq!(*notifications.borrow(), 1);
        navigator.next().unwrap();
        assert_eq!(*notifications.borrow(), 2);
    }

    #[test]
    fn selection_errors() {
        let mut navigator = Navigator::new(Dataset::sample()).unwrap();
        assert!(matches!(
            navigator.select_loan(1),
            Err(NavigationError::UnknownLoan { loan: 1 })
        ));
        assert!(matches!(
            navigator.select_loan(0),
            Err(NavigationError::NotInteractive { loan: 0 })
        ));
        // Failed selections leave the state alone.
        assert_eq!(navigator.selected_loan(), 113_456);
    }

    #[test]
    fn construction_requires_every_marker() {
        fn plain(loan: u64, lenders: u32) -> DataPoint {
            DataPoint {
                loan,
                lenders,
                likelihood: None,
                deposit: false,
                interest_rate: None,
            }
        }

        let no_deposit = Dataset::new(vec![
            plain(0, 75),
            DataPoint {
                likelihood: Some(LikelihoodBand::High),
                ..plain(10_000, 70)
            },
        ])
        .unwrap();
        assert!(matches!(
            Navigator::new(no_deposit),
            Err(NavigatorError::MissingDeposit)
        ));

        let no_low = Dataset::new(vec![
            plain(0, 75),
            DataPoint {
                deposit: true,
                ..plain(5_000, 75)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::High),
                ..plain(10_000, 70)
            },
            DataPoint {
                likelihood: Some(LikelihoodBand::Moderate),
                ..plain(20_000, 50)
            },
        ])
        .unwrap();
        assert!(matches!(
            Navigator::new(no_low),
            Err(NavigatorError::MissingBand {
                band: LikelihoodBand::Low
            })
        ));
    }
}
