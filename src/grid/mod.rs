//! The occupancy Grid and the A* search that runs on it.

use crate::Point;

mod a_star;
pub use a_star::{search, search_many, AStar, SearchError, SearchResult, SearchState, SearchStats};

mod config;
pub use config::SearchConfig;

mod frontier;

/// The state of a single cell of a [`Grid`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    /// A walkable cell, written as `0`
    Free,
    /// A wall, written as `1`
    Blocked,
}

impl CellState {
    /// Parses the numeric representation of a cell (`0` = free, `1` = blocked)
    pub fn from_value(value: u8) -> Option<CellState> {
        match value {
            0 => Some(CellState::Free),
            1 => Some(CellState::Blocked),
            _ => None,
        }
    }
}

/// Errors that can occur while constructing a [`Grid`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The Grid has no rows or its rows have no cells
    #[error("a grid needs at least one row and one column")]
    Empty,
    /// A row has a different length than the first row
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
    /// A cell holds something other than `0` or `1`
    #[error("cell ({x}, {y}) holds {value}, expected 0 (free) or 1 (blocked)")]
    InvalidCell {
        /// column of the cell
        x: usize,
        /// row of the cell
        y: usize,
        /// the value that was found
        value: u8,
    },
}

/// An immutable, rectangular occupancy Grid.
///
/// Cells are addressed as `(x, y)`, where `x` is the column and `y` is the row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// Creates a Grid of the given size where every cell is free.
    ///
    /// ## Panics
    /// If `width` or `height` is `0`.
    #[track_caller]
    pub fn new(width: usize, height: usize) -> Grid {
        Grid::from_fn(width, height, |_| CellState::Free)
    }

    /// Creates a Grid by calling `cell_at` for every `(x, y)`.
    ///
    /// ## Panics
    /// If `width` or `height` is `0`.
    #[track_caller]
    pub fn from_fn(width: usize, height: usize, mut cell_at: impl FnMut(Point) -> CellState) -> Grid {
        assert!(width > 0 && height > 0, "a grid needs at least one row and one column");

        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(cell_at((x, y)));
            }
        }
        Grid { width, height, cells }
    }

    /// Creates a Grid from rows of `0` (free) and `1` (blocked).
    ///
    /// `rows[y][x]` is the cell at `(x, y)`.
    ///
    /// ## Examples
    /// ```
    /// use grid_astar::{CellState, Grid, GridError};
    ///
    /// let grid = Grid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
    /// assert_eq!(grid.get((1, 0)), Some(CellState::Blocked));
    ///
    /// let ragged = Grid::from_rows(&[vec![0, 1], vec![0]]);
    /// assert_eq!(ragged, Err(GridError::Ragged { row: 1, expected: 2, found: 1 }));
    /// ```
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Grid, GridError> {
        let width = rows.first().map(|row| row.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::Ragged {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                let cell = CellState::from_value(value)
                    .ok_or(GridError::InvalidCell { x, y, value })?;
                cells.push(cell);
            }
        }

        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if `(x, y)` lies inside the Grid
    pub fn in_bounds(&self, (x, y): Point) -> bool {
        x < self.width && y < self.height
    }

    /// The state of the cell at `(x, y)`, or `None` if it is out of bounds
    pub fn get(&self, pos: Point) -> Option<CellState> {
        if self.in_bounds(pos) {
            Some(self.cells[pos.1 * self.width + pos.0])
        } else {
            None
        }
    }

    /// Returns true if `(x, y)` is inside the Grid and not a wall
    pub fn is_free(&self, pos: Point) -> bool {
        self.get(pos) == Some(CellState::Free)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows() {
        let grid = Grid::from_rows(&[[0, 0, 0], [1, 1, 0]]).unwrap();

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get((0, 1)), Some(CellState::Blocked));
        assert_eq!(grid.get((2, 1)), Some(CellState::Free));
        assert_eq!(grid.get((3, 0)), None);
        assert_eq!(grid.get((0, 2)), None);

        assert!(grid.is_free((2, 0)));
        assert!(!grid.is_free((1, 1)));
        assert!(!grid.is_free((5, 5)));
    }

    #[test]
    fn invalid_rows() {
        let empty: [[u8; 0]; 0] = [];
        assert_eq!(Grid::from_rows(&empty), Err(GridError::Empty));
        assert_eq!(Grid::from_rows(&[Vec::<u8>::new()]), Err(GridError::Empty));

        assert_eq!(
            Grid::from_rows(&[vec![0, 0], vec![0, 0, 0]]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );

        assert_eq!(
            Grid::from_rows(&[[0, 0], [2, 0]]),
            Err(GridError::InvalidCell { x: 0, y: 1, value: 2 })
        );
    }

    #[test]
    fn from_fn() {
        let grid = Grid::from_fn(4, 2, |(x, _)| {
            if x == 2 {
                CellState::Blocked
            } else {
                CellState::Free
            }
        });

        assert!(grid.is_free((1, 1)));
        assert!(!grid.is_free((2, 0)));
        assert!(!grid.is_free((2, 1)));
        assert_eq!(grid, Grid::from_rows(&[[0, 0, 1, 0], [0, 0, 1, 0]]).unwrap());
    }
}
