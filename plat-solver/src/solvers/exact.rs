use log::debug;

use crate::basic_types::Cut;
use crate::basic_types::Money;
use crate::basic_types::Parcel;
use crate::basic_types::Plat;
use crate::basic_types::SubdivisionError;
use crate::containers::Grid;
use crate::create_statistics_struct;
use crate::pricing::Pricing;
use crate::solvers::SubdivisionProcedure;
use crate::solvers::check_plot;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// One entry of a [`PlanTable`]: the best achievable net value for a
/// sub-parcel size, and the first cut of a partition achieving it ([`None`]
/// when selling whole is best).
#[derive(Clone, Copy, Debug)]
struct Cell {
    value: Money,
    cut: Option<Cut>,
}

/// The best plan for every sub-parcel size of a plot, filled bottom-up.
///
/// Cell `(w, h)` only ever refers to cells with one dimension strictly
/// smaller and the other no larger, so filling heights outermost and widths
/// innermost guarantees every referenced cell is final. The table borrows
/// nothing from the partitions it describes; materialising a plan copies the
/// relevant cuts into a fresh owned [`Parcel`].
#[derive(Clone, Debug)]
pub(crate) struct PlanTable {
    cells: Grid<Cell>,
    num_candidates: u64,
}

impl PlanTable {
    /// Fills the table for all sub-parcel sizes of a `width`m x `height`m
    /// plot.
    pub(crate) fn compute(
        pricing: &Pricing,
        width: u32,
        height: u32,
    ) -> Result<PlanTable, SubdivisionError> {
        let mut cells = Grid::filled(
            width,
            height,
            Cell {
                value: 0,
                cut: None,
            },
        );
        let mut num_candidates = 0;

        for h in 1..=height {
            for w in 1..=width {
                // Selling whole is the first candidate; cuts must strictly
                // beat it, in the deterministic candidate order.
                let mut best = Cell {
                    value: pricing.benefit(w, h)?,
                    cut: None,
                };
                num_candidates += 1;

                for cut in Cut::enumerate(w, h) {
                    num_candidates += 1;
                    let ((left_width, left_height), (right_width, right_height)) =
                        cut.child_dimensions(w, h);
                    let value = cells[(left_width, left_height)].value
                        + cells[(right_width, right_height)].value
                        - pricing.cut_cost(cut.orientation, w, h);
                    if value > best.value {
                        best = Cell {
                            value,
                            cut: Some(cut),
                        };
                    }
                }

                cells[(w, h)] = best;
            }
        }

        Ok(PlanTable {
            cells,
            num_candidates,
        })
    }

    /// The best achievable net value for a `width`m x `height`m sub-parcel.
    pub(crate) fn value(&self, width: u32, height: u32) -> Money {
        self.cells[(width, height)].value
    }

    pub(crate) fn num_cells(&self) -> u64 {
        u64::from(self.cells.width()) * u64::from(self.cells.height())
    }

    pub(crate) fn num_candidates(&self) -> u64 {
        self.num_candidates
    }

    /// Builds the owned partition for the full plot the table was computed
    /// for.
    pub(crate) fn materialise(
        &self,
        pricing: &Pricing,
        width: u32,
        height: u32,
    ) -> Result<Parcel, SubdivisionError> {
        let mut parcel = Parcel::new(width, height)?;
        self.apply_to(pricing, &mut parcel)?;
        Ok(parcel)
    }

    /// Recursively applies the planned cuts to a whole parcel whose size the
    /// table covers.
    pub(crate) fn apply_to(
        &self,
        pricing: &Pricing,
        parcel: &mut Parcel,
    ) -> Result<(), SubdivisionError> {
        let Some(cut) = self.cells[(parcel.width(), parcel.height())].cut else {
            return Ok(());
        };

        parcel.subdivide(cut, pricing)?;
        if let Some(subdivision) = &mut parcel.subdivision {
            self.apply_to(pricing, &mut subdivision.left)?;
            self.apply_to(pricing, &mut subdivision.right)?;
        }
        Ok(())
    }
}

create_statistics_struct!(
    /// The counters kept by [`ExactSearch`] about its most recent run.
    ExactStatistics {
        /// The number of sub-parcel sizes a best plan was computed for.
        num_cells: u64,
        /// The number of candidate plans compared across all cells, whole
        /// sales included.
        num_candidates: u64,
    }
);

/// Finds the optimal partition with a dynamic program over sub-parcel sizes.
///
/// Two sub-parcels of equal dimensions admit exactly the same partitions at
/// the same prices wherever they sit in the plot, so one best plan per size
/// is enough. The table has `width * height` cells and each cell compares at
/// most `width + height - 1` candidates, which is what makes this method
/// cheap; it returns the same value as
/// [`ExhaustiveSearch`](crate::solvers::ExhaustiveSearch) on every input.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactSearch {
    statistics: ExactStatistics,
}

impl ExactSearch {
    /// The counters from the most recent [`SubdivisionProcedure::optimise`]
    /// call.
    pub fn statistics(&self) -> &ExactStatistics {
        &self.statistics
    }
}

impl SubdivisionProcedure for ExactSearch {
    fn optimise(
        &mut self,
        pricing: &Pricing,
        width: u32,
        height: u32,
    ) -> Result<Plat, SubdivisionError> {
        check_plot(pricing, width, height)?;
        self.statistics = ExactStatistics::default();

        let table = PlanTable::compute(pricing, width, height)?;
        debug!(
            "Filled {} plan cells, comparing {} candidates",
            table.num_cells(),
            table.num_candidates()
        );
        self.statistics.num_cells = table.num_cells();
        self.statistics.num_candidates = table.num_candidates();

        let parcel = table.materialise(pricing, width, height)?;
        Ok(Plat {
            parcel,
            value: table.value(width, height),
        })
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
