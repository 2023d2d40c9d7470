//! Contains the planning methods which decide how a plot is subdivided.
//!
//! All methods optimise the same objective over the same candidate space,
//! differing only in how much of that space they are prepared to look at:
//! [`ExhaustiveSearch`] visits every partition, [`GreedySearch`] commits one
//! cut at a time, and [`ExactSearch`] shares sub-results bottom-up. Ties are
//! always resolved towards the candidate considered first, so each method is
//! deterministic and two runs on the same input return identical trees.
mod exact;
mod exhaustive;
mod greedy;
mod work_tree;

pub use exact::ExactSearch;
pub use exact::ExactStatistics;
pub use exhaustive::ExhaustiveSearch;
pub use exhaustive::ExhaustiveStatistics;
pub use greedy::GreedySearch;
pub use greedy::GreedyStatistics;

use crate::basic_types::Plat;
use crate::basic_types::SubdivisionError;
use crate::pricing::Pricing;
use crate::statistics::StatisticLogger;

/// A method for finding a valuable partition of a rectangular plot.
///
/// Implementations keep their run statistics between calls, so one instance
/// can be asked about its last run afterwards.
pub trait SubdivisionProcedure {
    /// Computes the most valuable partition of a `width`m x `height`m plot
    /// this method can find under the given pricing.
    ///
    /// # Errors
    /// [`SubdivisionError::EmptyPlot`] if either dimension is zero, and
    /// [`SubdivisionError::PlotTooLarge`] if the plot itself has no entry in
    /// the price table.
    fn optimise(
        &mut self,
        pricing: &Pricing,
        width: u32,
        height: u32,
    ) -> Result<Plat, SubdivisionError>;

    /// Logs the statistics of the most recent [`SubdivisionProcedure::optimise`]
    /// call.
    fn log_statistics(&self, statistic_logger: StatisticLogger);
}

/// The shared entry check: every method refuses the same degenerate plots in
/// the same way before doing any work.
pub(crate) fn check_plot(
    pricing: &Pricing,
    width: u32,
    height: u32,
) -> Result<(), SubdivisionError> {
    if width == 0 || height == 0 {
        return Err(SubdivisionError::EmptyPlot { width, height });
    }
    if !pricing.covers(width, height) {
        return Err(SubdivisionError::PlotTooLarge {
            width,
            height,
            max_width: pricing.max_width(),
            max_height: pricing.max_height(),
        });
    }
    Ok(())
}
