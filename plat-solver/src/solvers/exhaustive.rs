use log::debug;

use crate::basic_types::Plat;
use crate::basic_types::SubdivisionError;
use crate::create_statistics_struct;
use crate::pricing::Pricing;
use crate::solvers::SubdivisionProcedure;
use crate::solvers::check_plot;
use crate::solvers::work_tree::WorkTree;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(
    /// The counters kept by [`ExhaustiveSearch`] about its most recent run.
    ExhaustiveStatistics {
        /// The number of distinct partitions which were enumerated.
        num_partitions: u64,
        /// How often the incumbent was replaced by a strictly better
        /// partition. The whole plot seeds the incumbent, so this is 0
        /// whenever selling the plot whole is already optimal.
        num_improvements: u64,
    }
);

/// Finds the optimal partition by enumerating every distinct partition of
/// the plot and keeping the best one seen.
///
/// The number of partitions grows exponentially in the plot dimensions (a
/// 4m x 4m plot already has 2 590 351 of them), so this method is a
/// correctness oracle for small plots rather than a practical planner; see
/// [`ExactSearch`](crate::solvers::ExactSearch) for the method which reaches
/// the same value in polynomial time.
///
/// Enumeration happens in place on a [`WorkTree`], so no allocation is done
/// per visited partition; only the (rare) improvements are copied out.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExhaustiveSearch {
    statistics: ExhaustiveStatistics,
}

impl ExhaustiveSearch {
    /// The counters from the most recent [`SubdivisionProcedure::optimise`]
    /// call.
    pub fn statistics(&self) -> &ExhaustiveStatistics {
        &self.statistics
    }
}

impl SubdivisionProcedure for ExhaustiveSearch {
    fn optimise(
        &mut self,
        pricing: &Pricing,
        width: u32,
        height: u32,
    ) -> Result<Plat, SubdivisionError> {
        check_plot(pricing, width, height)?;
        self.statistics = ExhaustiveStatistics::default();

        let mut tree = WorkTree::new(pricing, width, height);
        let root = tree.root();

        // The whole plot is the first candidate in the enumeration order, so
        // it seeds the incumbent and ties never replace it.
        let mut best_value = tree.value();
        let mut best_parcel = tree.extract(root);
        let mut num_partitions: u64 = 0;
        let mut num_improvements: u64 = 0;

        tree.for_each_partition(root, &mut |tree: &mut WorkTree| {
            num_partitions += 1;
            if tree.value() > best_value {
                best_value = tree.value();
                best_parcel = tree.extract(tree.root());
                num_improvements += 1;
            }
        });

        debug!(
            "Enumerated {num_partitions} partitions with {num_improvements} improvements over the whole plot"
        );
        self.statistics.num_partitions = num_partitions;
        self.statistics.num_improvements = num_improvements;

        Ok(Plat {
            parcel: best_parcel,
            value: best_value,
        })
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Cut;
    use crate::basic_types::Parcel;
    use crate::pricing::PriceTable;

    #[test]
    fn a_plot_best_sold_whole_is_returned_whole() {
        let table = PriceTable::from_rows(vec![vec![20, 40], vec![40, 140]]).unwrap();
        let pricing = Pricing::new(table, 20);
        let mut search = ExhaustiveSearch::default();

        let plat = search.optimise(&pricing, 2, 2).unwrap();

        assert_eq!(plat.value, 140);
        assert!(plat.parcel.is_whole());
        assert_eq!(search.statistics().num_partitions, 9);
        assert_eq!(search.statistics().num_improvements, 0);
    }

    #[test]
    fn a_single_square_metre_admits_exactly_one_partition() {
        let pricing = Pricing::standard();
        let mut search = ExhaustiveSearch::default();

        let plat = search.optimise(&pricing, 1, 1).unwrap();

        assert_eq!(plat.value, 20);
        assert!(plat.parcel.is_whole());
        assert_eq!(search.statistics().num_partitions, 1);
        assert_eq!(search.statistics().num_improvements, 0);
    }

    #[test]
    fn deep_partitions_are_reached() {
        // Whole prices are poor except for 3x1 strips, so the optimum needs
        // two stacked cuts, which a single-level look-ahead cannot see.
        let table = PriceTable::from_rows(vec![
            vec![1, 2, 60],
            vec![1, 1, 50],
            vec![100, 0, 10],
        ])
        .unwrap();
        let pricing = Pricing::new(table, 1);
        let mut search = ExhaustiveSearch::default();

        let plat = search.optimise(&pricing, 3, 3).unwrap();

        let mut expected = Parcel::new(3, 3).unwrap();
        expected.subdivide(Cut::horizontal(1), &pricing).unwrap();
        expected
            .subdivision_mut()
            .unwrap()
            .right_mut()
            .subdivide(Cut::horizontal(1), &pricing)
            .unwrap();

        assert_eq!(plat.value, 294);
        assert_eq!(plat.parcel, expected);
        assert_eq!(search.statistics().num_partitions, 1241);
        assert_eq!(search.statistics().num_improvements, 3);
    }

    #[test]
    fn the_standard_four_by_four_plot_is_halved() {
        let pricing = Pricing::standard();
        let mut search = ExhaustiveSearch::default();

        let plat = search.optimise(&pricing, 4, 4).unwrap();

        let mut expected = Parcel::new(4, 4).unwrap();
        expected.subdivide(Cut::vertical(2), &pricing).unwrap();

        assert_eq!(plat.value, 560);
        assert_eq!(plat.parcel, expected);
        assert_eq!(search.statistics().num_partitions, 2_590_351);
        assert_eq!(search.statistics().num_improvements, 1);
    }

    #[test]
    fn degenerate_plots_are_refused() {
        let pricing = Pricing::standard();
        let mut search = ExhaustiveSearch::default();

        assert_eq!(
            search.optimise(&pricing, 0, 3),
            Err(SubdivisionError::EmptyPlot {
                width: 0,
                height: 3
            })
        );
        assert_eq!(
            search.optimise(&pricing, 7, 6),
            Err(SubdivisionError::PlotTooLarge {
                width: 7,
                height: 6,
                max_width: 6,
                max_height: 6,
            })
        );
    }
}
