use std::ops::Index;
use std::ops::IndexMut;

use crate::plat_assert_moderate;
use crate::plat_assert_simple;

/// A dense rectangle of values indexed by 1-based `(width, height)` parcel
/// dimensions.
///
/// The storage is one flat vector in width-major order: the entries for all
/// heights of a given width are contiguous. Price tables and the planner's
/// sub-parcel tables are both grids keyed by the dimensions of the parcel a
/// cell refers to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Creates a grid from a width-major flat vector of exactly
    /// `width * height` cells.
    pub fn from_cells(width: u32, height: u32, cells: Vec<T>) -> Grid<T> {
        plat_assert_simple!(width >= 1 && height >= 1);
        plat_assert_simple!(cells.len() == width as usize * height as usize);

        Grid {
            width,
            height,
            cells,
        }
    }

    /// The largest width the grid has entries for.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The largest height the grid has entries for.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn offset(&self, (width, height): (u32, u32)) -> usize {
        plat_assert_moderate!((1..=self.width).contains(&width));
        plat_assert_moderate!((1..=self.height).contains(&height));

        (width as usize - 1) * self.height as usize + (height as usize - 1)
    }
}

impl<T: Clone> Grid<T> {
    /// Creates a grid with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: T) -> Grid<T> {
        plat_assert_simple!(width >= 1 && height >= 1);

        Grid {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }
}

impl<T> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, dimensions: (u32, u32)) -> &T {
        &self.cells[self.offset(dimensions)]
    }
}

impl<T> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, dimensions: (u32, u32)) -> &mut T {
        let offset = self.offset(dimensions);
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_are_laid_out_width_major() {
        let grid = Grid::from_cells(2, 3, vec![10, 11, 12, 20, 21, 22]);

        assert_eq!(grid[(1, 1)], 10);
        assert_eq!(grid[(1, 3)], 12);
        assert_eq!(grid[(2, 1)], 20);
        assert_eq!(grid[(2, 3)], 22);
    }

    #[test]
    fn filled_grids_are_writable_per_cell() {
        let mut grid = Grid::filled(3, 2, 0);
        grid[(2, 2)] = 7;

        assert_eq!(grid[(2, 2)], 7);
        assert_eq!(grid[(2, 1)], 0);
        assert_eq!((grid.width(), grid.height()), (3, 2));
    }
}
