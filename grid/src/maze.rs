//! Maze text format: parsing, file loading, and solution rendering.
//!
//! One line per row. `#` is a wall, `A` the source, `B` the target, and a
//! space or `.` an open square. Rows may be ragged; short rows are padded
//! open to the widest row. Rendering uses the same symbols plus `*` for
//! path squares and `.` for explored squares.

use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use wayfind_search::report::SearchReport;

use crate::cell::{Cell, Direction};
use crate::grid::Grid;

/// Failure to interpret maze text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeParseError {
    /// The text contains no squares.
    Empty,
    /// No `A` square.
    MissingSource,
    /// No `B` square.
    MissingTarget,
    /// More than one `A` square.
    DuplicateSource { first: Cell, second: Cell },
    /// More than one `B` square.
    DuplicateTarget { first: Cell, second: Cell },
    /// A character outside the maze alphabet. Line and column are
    /// one-based.
    UnknownSymbol {
        line: usize,
        column: usize,
        symbol: char,
    },
}

impl fmt::Display for MazeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze text contains no squares"),
            Self::MissingSource => write!(f, "maze has no source square (`A`)"),
            Self::MissingTarget => write!(f, "maze has no target square (`B`)"),
            Self::DuplicateSource { first, second } => {
                write!(f, "maze has more than one source square: {first} and {second}")
            }
            Self::DuplicateTarget { first, second } => {
                write!(f, "maze has more than one target square: {first} and {second}")
            }
            Self::UnknownSymbol {
                line,
                column,
                symbol,
            } => {
                write!(f, "unknown symbol `{symbol}` at line {line}, column {column}")
            }
        }
    }
}

impl std::error::Error for MazeParseError {}

/// Failure to load a maze file.
#[derive(Debug)]
pub enum MazeError {
    /// I/O failure reading the file.
    Io { detail: String },
    /// The file contents are not a valid maze.
    Parse(MazeParseError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for MazeError {}

impl From<MazeParseError> for MazeError {
    fn from(e: MazeParseError) -> Self {
        Self::Parse(e)
    }
}

/// Parse maze text into a [`Grid`].
///
/// # Errors
///
/// Returns [`MazeParseError`] if the text is empty, uses a symbol outside
/// the alphabet, or does not contain exactly one `A` and one `B`.
pub fn parse_maze(text: &str) -> Result<Grid, MazeParseError> {
    let mut source: Option<Cell> = None;
    let mut target: Option<Cell> = None;
    let mut walls: HashSet<Cell> = HashSet::new();
    let mut rows = 0;
    let mut cols = 0;

    for (row, line) in text.lines().enumerate() {
        rows = row + 1;
        for (col, symbol) in line.chars().enumerate() {
            if col + 1 > cols {
                cols = col + 1;
            }
            let cell = Cell::new(row, col);
            match symbol {
                '#' => {
                    walls.insert(cell);
                }
                'A' => {
                    if let Some(first) = source {
                        return Err(MazeParseError::DuplicateSource {
                            first,
                            second: cell,
                        });
                    }
                    source = Some(cell);
                }
                'B' => {
                    if let Some(first) = target {
                        return Err(MazeParseError::DuplicateTarget {
                            first,
                            second: cell,
                        });
                    }
                    target = Some(cell);
                }
                ' ' | '.' => {}
                _ => {
                    return Err(MazeParseError::UnknownSymbol {
                        line: row + 1,
                        column: col + 1,
                        symbol,
                    });
                }
            }
        }
    }

    if rows == 0 || cols == 0 {
        return Err(MazeParseError::Empty);
    }
    let source = source.ok_or(MazeParseError::MissingSource)?;
    let target = target.ok_or(MazeParseError::MissingTarget)?;

    // Every parsed cell is in bounds by construction.
    Ok(Grid::from_parts(rows, cols, source, target, walls))
}

/// Read and parse a maze file.
///
/// # Errors
///
/// Returns [`MazeError::Io`] if the file cannot be read and
/// [`MazeError::Parse`] if its contents are not a valid maze.
pub fn load_maze(path: &Path) -> Result<Grid, MazeError> {
    let text = fs::read_to_string(path).map_err(|e| MazeError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    Ok(parse_maze(&text)?)
}

/// Render a solved board back to maze text.
///
/// Walls, source, and target keep their input symbols; squares on the
/// returned path become `*`; explored squares become `.` when
/// `show_explored` is set. Every row is rendered at full width and ends
/// with a newline.
#[must_use]
pub fn render_solution(
    grid: &Grid,
    report: &SearchReport<Cell, Direction>,
    show_explored: bool,
) -> String {
    let path_cells: HashSet<Cell> = report
        .path
        .as_deref()
        .unwrap_or(&[])
        .iter()
        .map(|step| step.state)
        .collect();
    let explored_cells: HashSet<Cell> = if show_explored {
        report.explored.iter().copied().collect()
    } else {
        HashSet::new()
    };

    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            let symbol = if cell == grid.source_cell() {
                'A'
            } else if cell == grid.target_cell() {
                'B'
            } else if grid.is_wall(cell) {
                '#'
            } else if path_cells.contains(&cell) {
                '*'
            } else if explored_cells.contains(&cell) {
                '.'
            } else {
                ' '
            };
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}
