//! Contains the market data a plot is planned against: the price fetched by
//! selling a whole parcel of a given size, and the per-metre rate charged for
//! surveying a cut.
use thiserror::Error;

use crate::basic_types::CutOrientation;
use crate::basic_types::Money;
use crate::basic_types::SubdivisionError;
use crate::containers::Grid;
use crate::plat_assert_simple;

/// The sale price of a whole parcel, per `(width, height)` size.
///
/// The table is rectangular and covers every size from `1x1` up to
/// `(max_width, max_height)`. Sizes outside that range simply have no price;
/// whether that is an error is decided by the caller (see
/// [`Pricing::benefit`]).
///
/// Prices are not assumed symmetric: a `2m x 3m` parcel and a `3m x 2m`
/// parcel are different products and may fetch different prices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceTable {
    grid: Grid<Money>,
}

/// Ways in which raw rows of prices can fail to form a [`PriceTable`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTableError {
    #[error("a price table must have at least one price")]
    Empty,
    /// The rows do not all have the same number of entries. `row` is the
    /// 1-based index of the first offending row.
    #[error("price table row {row} has {found} entries where {expected} were expected")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("the price for a {width}m x {height}m parcel is negative ({price})")]
    NegativePrice {
        width: u32,
        height: u32,
        price: Money,
    },
}

impl PriceTable {
    /// Creates a table from one row of prices per width; entry `h - 1` of row
    /// `w - 1` is the price of a whole `w`m x `h`m parcel.
    pub fn from_rows(rows: Vec<Vec<Money>>) -> Result<PriceTable, PriceTableError> {
        let Some(first_row) = rows.first() else {
            return Err(PriceTableError::Empty);
        };
        let max_height = first_row.len();
        if max_height == 0 {
            return Err(PriceTableError::Empty);
        }

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != max_height {
                return Err(PriceTableError::Ragged {
                    row: row_index + 1,
                    expected: max_height,
                    found: row.len(),
                });
            }
            for (entry_index, &price) in row.iter().enumerate() {
                if price < 0 {
                    return Err(PriceTableError::NegativePrice {
                        width: row_index as u32 + 1,
                        height: entry_index as u32 + 1,
                        price,
                    });
                }
            }
        }

        let max_width = rows.len();
        Ok(PriceTable {
            grid: Grid::from_cells(
                max_width as u32,
                max_height as u32,
                rows.into_iter().flatten().collect(),
            ),
        })
    }

    /// The built-in 6m x 6m table used when no table is supplied.
    pub fn standard() -> PriceTable {
        let rows: [[Money; 6]; 6] = [
            [20, 40, 100, 130, 150, 200],
            [40, 140, 250, 320, 400, 450],
            [100, 250, 350, 420, 450, 500],
            [130, 320, 420, 500, 600, 700],
            [150, 400, 450, 600, 700, 800],
            [200, 450, 500, 700, 800, 900],
        ];

        PriceTable {
            grid: Grid::from_cells(6, 6, rows.into_iter().flatten().collect()),
        }
    }

    pub fn max_width(&self) -> u32 {
        self.grid.width()
    }

    pub fn max_height(&self) -> u32 {
        self.grid.height()
    }

    /// The price of a whole `width`m x `height`m parcel, or [`None`] if the
    /// table has no entry for that size.
    pub fn price(&self, width: u32, height: u32) -> Option<Money> {
        if !self.covers(width, height) {
            return None;
        }
        Some(self.grid[(width, height)])
    }

    /// Whether the table has an entry for a `width`m x `height`m parcel.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        (1..=self.max_width()).contains(&width) && (1..=self.max_height()).contains(&height)
    }
}

/// A [`PriceTable`] combined with the per-metre surveying rate; everything a
/// solver needs to put a number on a partition.
#[derive(Clone, Debug)]
pub struct Pricing {
    table: PriceTable,
    cost_per_metre: Money,
}

impl Pricing {
    pub fn new(table: PriceTable, cost_per_metre: Money) -> Pricing {
        plat_assert_simple!(cost_per_metre >= 0);

        Pricing {
            table,
            cost_per_metre,
        }
    }

    /// The built-in table at the standard rate of 20 per metre.
    pub fn standard() -> Pricing {
        Pricing::new(PriceTable::standard(), 20)
    }

    /// The sale benefit of a whole `width`m x `height`m parcel.
    ///
    /// # Errors
    /// [`SubdivisionError::MissingPrice`] if the table has no entry for this
    /// size. A missing price is never treated as a price of zero.
    pub fn benefit(&self, width: u32, height: u32) -> Result<Money, SubdivisionError> {
        self.table
            .price(width, height)
            .ok_or(SubdivisionError::MissingPrice {
                width,
                height,
                max_width: self.table.max_width(),
                max_height: self.table.max_height(),
            })
    }

    /// The cost of one cut through a `width`m x `height`m parcel: the length
    /// of the cut line times the per-metre rate. A vertical cut runs the
    /// height of the parcel, a horizontal cut runs its width.
    pub fn cut_cost(&self, orientation: CutOrientation, width: u32, height: u32) -> Money {
        let length = match orientation {
            CutOrientation::Vertical => height,
            CutOrientation::Horizontal => width,
        };
        Money::from(length) * self.cost_per_metre
    }

    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.table.covers(width, height)
    }

    pub fn max_width(&self) -> u32 {
        self.table.max_width()
    }

    pub fn max_height(&self) -> u32 {
        self.table.max_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_standard_table_prices_known_sizes() {
        let pricing = Pricing::standard();

        assert_eq!(pricing.benefit(1, 1), Ok(20));
        assert_eq!(pricing.benefit(2, 2), Ok(140));
        assert_eq!(pricing.benefit(3, 5), Ok(450));
        assert_eq!(pricing.benefit(6, 6), Ok(900));
    }

    #[test]
    fn sizes_beyond_the_table_are_missing_prices() {
        let pricing = Pricing::standard();

        assert_eq!(
            pricing.benefit(2, 8),
            Err(SubdivisionError::MissingPrice {
                width: 2,
                height: 8,
                max_width: 6,
                max_height: 6,
            })
        );
        assert!(!pricing.covers(7, 1));
        assert!(pricing.covers(6, 6));
    }

    #[test]
    fn rows_index_widths_and_entries_index_heights() {
        let table = PriceTable::from_rows(vec![vec![1, 2, 3], vec![10, 20, 30]]).unwrap();

        assert_eq!((table.max_width(), table.max_height()), (2, 3));
        assert_eq!(table.price(1, 2), Some(2));
        assert_eq!(table.price(2, 1), Some(10));
        assert_eq!(table.price(2, 3), Some(30));
        assert_eq!(table.price(3, 1), None);
    }

    #[test]
    fn a_cut_is_charged_per_metre_of_its_length() {
        let pricing = Pricing::standard();

        assert_eq!(pricing.cut_cost(CutOrientation::Horizontal, 3, 5), 60);
        assert_eq!(pricing.cut_cost(CutOrientation::Vertical, 3, 5), 100);
        // The cut length depends only on the dimension it runs along.
        assert_eq!(pricing.cut_cost(CutOrientation::Vertical, 1, 5), 100);
    }

    #[test]
    fn malformed_rows_are_rejected() {
        assert_eq!(PriceTable::from_rows(vec![]), Err(PriceTableError::Empty));
        assert_eq!(
            PriceTable::from_rows(vec![vec![]]),
            Err(PriceTableError::Empty)
        );
        assert_eq!(
            PriceTable::from_rows(vec![vec![1, 2], vec![3]]),
            Err(PriceTableError::Ragged {
                row: 2,
                expected: 2,
                found: 1,
            })
        );
        assert_eq!(
            PriceTable::from_rows(vec![vec![5, -1]]),
            Err(PriceTableError::NegativePrice {
                width: 1,
                height: 2,
                price: -1,
            })
        );
    }
}
