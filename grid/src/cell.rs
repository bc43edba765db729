//! Grid coordinates and movement directions.

use std::fmt;

/// One square of a grid, addressed row-major from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Cell {
    /// Construct a cell at `(row, col)`.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to `other`: the number of unit moves a path
    /// would need with nothing in the way. Never overestimates the true
    /// path cost and changes by exactly one per unit move, which makes it
    /// both admissible and consistent as a grid heuristic.
    #[must_use]
    pub fn manhattan_distance(self, other: Self) -> u64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u64
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four unit moves.
///
/// Action generation enumerates [`Direction::ALL`] in declaration order,
/// so searches over a fixed grid are deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Enumeration order used by action generation.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The cell one step in this direction, or `None` past the top or
    /// left edge. Bottom and right bounds are the grid's concern.
    #[must_use]
    pub fn apply(self, cell: Cell) -> Option<Cell> {
        match self {
            Self::Up => cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col)),
            Self::Down => Some(Cell::new(cell.row + 1, cell.col)),
            Self::Left => cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col)),
            Self::Right => Some(Cell::new(cell.row, cell.col + 1)),
        }
    }

    /// Stable token used in JSON output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
