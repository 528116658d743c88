//! AffordLab Core — dataset model, segments, selection cursor, summary projection.
//!
//! This crate contains the engine behind the affordability chart:
//! - Ordered dataset with its marker table (deposit + likelihood boundaries)
//! - Segment derivation for the shaded chart regions
//! - Wraparound selection cursor over the interactive points
//! - Summary card projection and the static headline figures
//! - Hover notes classified against the sweet spot
//! - Linear scales and the cell-grid chart projection

pub mod cursor;
pub mod dataset;
pub mod format;
pub mod hover;
pub mod navigator;
pub mod point;
pub mod scale;
pub mod segment;
pub mod summary;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: everything a frontend holds onto is Send + Sync,
    /// so dataset loading could move to a worker thread without a retrofit.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<point::DataPoint>();
        require_sync::<point::DataPoint>();
        require_send::<point::LikelihoodBand>();
        require_sync::<point::LikelihoodBand>();
        require_send::<dataset::Dataset>();
        require_sync::<dataset::Dataset>();
        require_send::<dataset::MarkerTable>();
        require_sync::<dataset::MarkerTable>();
        require_send::<summary::SummaryView>();
        require_sync::<summary::SummaryView>();
        require_send::<summary::Headline>();
        require_sync::<summary::Headline>();
        require_send::<hover::HoverNote>();
        require_sync::<hover::HoverNote>();
        require_send::<scale::ChartProjection>();
        require_sync::<scale::ChartProjection>();
    }
}
