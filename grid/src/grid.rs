//! Bounded rectangular grid with walls.
//!
//! `Grid` implements the engine's environment contract: states are
//! [`Cell`]s, actions are [`Direction`]s, and the heuristic is Manhattan
//! distance to the target. Action generation omits moves that would leave
//! the board or enter a wall.

use std::collections::HashSet;
use std::fmt;

use wayfind_search::environment::Environment;

use crate::cell::{Cell, Direction};

/// Validation failure when constructing or editing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Grid dimensions must both be at least one.
    EmptyGrid,
    /// A cell lies outside the grid bounds.
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid dimensions must be at least 1x1"),
            Self::OutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} is outside the {rows}x{cols} grid")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// A `rows x cols` board with a wall set, a source cell, and a target
/// cell.
///
/// Walls block entry, not occupancy: a walled target is unreachable, and
/// a walled source can still be left. Walls and endpoints are editable
/// between solves; the grid is immutable while a solve borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    source: Cell,
    target: Cell,
    walls: HashSet<Cell>,
}

impl Grid {
    /// Create a grid with no walls.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyGrid`] for zero rows or columns and
    /// [`GridError::OutOfBounds`] if an endpoint lies outside the board.
    pub fn new(rows: usize, cols: usize, source: Cell, target: Cell) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        let grid = Self {
            rows,
            cols,
            source,
            target,
            walls: HashSet::new(),
        };
        grid.check_bounds(source)?;
        grid.check_bounds(target)?;
        Ok(grid)
    }

    /// Assemble a grid whose parts are already validated: dimensions
    /// non-zero and every cell in bounds. The maze parser upholds this by
    /// construction.
    pub(crate) fn from_parts(
        rows: usize,
        cols: usize,
        source: Cell,
        target: Cell,
        walls: HashSet<Cell>,
    ) -> Self {
        Self {
            rows,
            cols,
            source,
            target,
            walls,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The source cell.
    #[must_use]
    pub fn source_cell(&self) -> Cell {
        self.source
    }

    /// The target cell.
    #[must_use]
    pub fn target_cell(&self) -> Cell {
        self.target
    }

    /// Whether `cell` lies on the board.
    #[must_use]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Whether `cell` holds a wall.
    #[must_use]
    pub fn is_wall(&self, cell: Cell) -> bool {
        self.walls.contains(&cell)
    }

    /// Number of walls placed.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Place a wall. Idempotent. Walls on the source or target are
    /// permitted; a walled target is simply unreachable.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` is off the board.
    pub fn add_wall(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        self.walls.insert(cell);
        Ok(())
    }

    /// Remove a wall. Returns whether a wall was present.
    pub fn remove_wall(&mut self, cell: Cell) -> bool {
        self.walls.remove(&cell)
    }

    /// Remove every wall.
    pub fn clear_walls(&mut self) {
        self.walls.clear();
    }

    /// Move the source cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` is off the board.
    pub fn set_source(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        self.source = cell;
        Ok(())
    }

    /// Move the target cell.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if `cell` is off the board.
    pub fn set_target(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        self.target = cell;
        Ok(())
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// The neighbor one step in `direction`, if it is on the board and
    /// not a wall.
    fn open_neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let next = direction.apply(cell)?;
        if self.in_bounds(next) && !self.is_wall(next) {
            Some(next)
        } else {
            None
        }
    }
}

impl Environment for Grid {
    type State = Cell;
    type Action = Direction;

    fn source(&self) -> Cell {
        self.source
    }

    fn actions(&self, state: &Cell) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.open_neighbor(*state, *direction).is_some())
            .collect()
    }

    fn transition(&self, state: &Cell, action: &Direction) -> Cell {
        // Blocked moves fall back to the unchanged state so the function
        // stays total; `actions` never yields them.
        self.open_neighbor(*state, *action).unwrap_or(*state)
    }

    fn is_target(&self, state: &Cell) -> bool {
        *state == self.target
    }

    fn cost_to_target(&self, state: &Cell) -> Option<u64> {
        Some(state.manhattan_distance(self.target))
    }
}
