//! Shared board builders for the wayfind benchmark suites.

use wayfind_grid::cell::Cell;
use wayfind_grid::grid::Grid;

/// An open `size x size` board, top-left corner to bottom-right corner.
///
/// # Panics
///
/// Panics if `size` is zero. Benchmark setup failures are fatal.
#[must_use]
pub fn open_grid(size: usize) -> Grid {
    Grid::new(size, size, Cell::new(0, 0), Cell::new(size - 1, size - 1))
        .expect("open board dimensions are valid")
}

/// A `size x size` board whose odd rows are walled except for one gap on
/// an alternating side, forcing a serpentine route from corner to corner.
///
/// # Panics
///
/// Panics if `size` is smaller than two. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn serpentine_grid(size: usize) -> Grid {
    let mut grid = open_grid(size);
    // The last row stays open so the target row is never walled.
    for row in (1..size - 1).step_by(2) {
        let gap = if (row / 2) % 2 == 0 { size - 1 } else { 0 };
        for col in 0..size {
            if col != gap {
                grid.add_wall(Cell::new(row, col)).expect("wall in bounds");
            }
        }
    }
    grid
}

/// A `size x size` board whose centered target sits behind a closed ring
/// of walls, so every solve exhausts the reachable region.
///
/// # Panics
///
/// Panics if `size` is smaller than three. Benchmark setup failures are
/// fatal.
#[must_use]
pub fn sealed_grid(size: usize) -> Grid {
    let mut grid = open_grid(size);
    let center = Cell::new(size / 2, size / 2);
    grid.set_target(center).expect("center in bounds");
    for cell in [
        Cell::new(center.row - 1, center.col),
        Cell::new(center.row + 1, center.col),
        Cell::new(center.row, center.col - 1),
        Cell::new(center.row, center.col + 1),
    ] {
        grid.add_wall(cell).expect("wall in bounds");
    }
    grid
}
