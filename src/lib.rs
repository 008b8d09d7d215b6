//! This crate provides functionality for building rectangular grids of integers and
//! rendering them as bracketed text rows. Grids are filled row-major from a configurable
//! origin and printed through the [`render`] module.

/// Debug module for rendering a grid into an in-memory string.
///
/// # Example
/// ```
/// use numgrid::{debug, render::RenderConfig, Grid};
///
/// let grid = Grid::sequential(2, 2).unwrap();
/// let text = debug::render_to_string(&grid, &RenderConfig::default()).unwrap();
/// assert_eq!(text, "[ 0 1 ]\n[ 2 3 ]\n");
/// ```
pub mod debug;
/// Trait for types that expose rows of cells.
pub mod grid_like;
/// Borrowed row selections over a [`Grid`].
pub mod grid_subset;
/// This module provides functionality for rendering grids, rows, and row subsets as
/// bracketed text lines.
///
/// The main components of this module are:
/// - [`render::RenderConfig`]: Configuration for customizing row framing and alignment.
/// - [`render::Renderable`]: A trait implemented by types that can be rendered to a
///   writer, such as [`Grid`] and [`Row`].
///
/// # Examples
///
/// ```rust
/// use numgrid::render::{RenderConfig, Renderable};
/// use numgrid::Grid;
///
/// let grid = Grid::sequential(3, 4).unwrap();
///
/// let mut out = Vec::new();
/// grid.render(&mut out, &RenderConfig::default()).unwrap();
///
/// assert_eq!(
///     String::from_utf8_lossy(&out),
///     "[ 0 1 2 3 ]\n[ 4 5 6 7 ]\n[ 8 9 10 11 ]\n"
/// );
/// ```
pub mod render;

use smallvec::SmallVec;
use thiserror::Error;
use tracing::*;

pub use grid_like::GridLike;
pub use grid_subset::GridSubset;

const DEFAULT_SMALLVEC_SIZE: usize = 8;

/// Number of rows in the default grid.
pub const DEFAULT_ROWS: usize = 3;
/// Number of columns in the default grid.
pub const DEFAULT_COLS: usize = 4;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid grid dimensions: rows={rows}, cols={cols}")]
    InvalidDimension { rows: usize, cols: usize },

    #[error("Ragged row at index {row}: expected {expected} cells, found {found}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Row not found at index {row}")]
    RowNotFound { row: usize },

    #[error("Column not found at index {column}")]
    ColumnNotFound { column: usize },

    #[error("Failed to write grid output: {0}")]
    Write(#[from] std::io::Error),
}

/// A type alias for SmallVec with a stack-allocated buffer sized for small grids.
pub type SmallVecLine<T> = SmallVec<[T; DEFAULT_SMALLVEC_SIZE]>;

/// Configuration for grid construction.
///
/// # Example
/// ```
/// use numgrid::GridConfig;
///
/// let config = GridConfig::default();
/// assert_eq!(config.rows, 3);
/// assert_eq!(config.cols, 4);
/// assert_eq!(config.origin, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Number of rows (default: 3)
    pub rows: usize,
    /// Number of columns (default: 4)
    pub cols: usize,
    /// Value of the top-left cell in a sequential fill (default: 0)
    pub origin: i64,
}

impl GridConfig {
    /// Creates a new `GridConfig` with the specified parameters.
    ///
    /// # Example
    /// ```
    /// use numgrid::GridConfig;
    ///
    /// let config = GridConfig::new(2, 5, 10);
    /// assert_eq!(config.rows, 2);
    /// assert_eq!(config.cols, 5);
    /// assert_eq!(config.origin, 10);
    /// ```
    pub fn new(rows: usize, cols: usize, origin: i64) -> Self {
        Self { rows, cols, origin }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig::new(DEFAULT_ROWS, DEFAULT_COLS, 0)
    }
}

/// Represents a row of cells in the grid.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    pub cells: SmallVecLine<i64>,
}

impl Row {
    /// Creates a new `Row` from its cells.
    pub fn new(cells: SmallVecLine<i64>) -> Self {
        Self { cells }
    }

    /// Returns the number of cells in the row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Represents a cell in the grid, referencing a row and a column index.
pub struct Cell<'a> {
    pub row: &'a Row,
    pub column: usize,
}

impl Cell<'_> {
    /// Returns the value stored in the cell.
    pub fn value(&self) -> i64 {
        self.row.cells[self.column]
    }
}

/// Represents a rectangular grid of integer cells, stored row-major.
///
/// # Example
/// ```
/// use numgrid::{Grid, GridConfig};
///
/// let grid = Grid::try_from_config(GridConfig::default()).unwrap();
/// assert_eq!(grid.get(1, 2), Some(6));
/// ```
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    pub rows: SmallVecLine<Row>,
}

impl Grid {
    /// Creates a new `Grid` from rows, without checking rectangularity.
    pub fn new(rows: SmallVecLine<Row>) -> Self {
        Self { rows }
    }

    /// Builds a sequentially filled `Grid` from a configuration.
    ///
    /// Cell `(i, j)` holds `origin + i * cols + j`. Zero dimensions are
    /// rejected with [`GridError::InvalidDimension`].
    ///
    /// # Example
    /// ```
    /// use numgrid::{Grid, GridConfig};
    ///
    /// let grid = Grid::try_from_config(GridConfig::new(2, 3, 100)).unwrap();
    /// assert_eq!(grid.get(0, 0), Some(100));
    /// assert_eq!(grid.get(1, 2), Some(105));
    /// ```
    pub fn try_from_config(config: GridConfig) -> Result<Self, GridError> {
        trace!("Building grid with config: {:?}", config);
        let GridConfig { rows, cols, origin } = config;
        Self::from_fn(rows, cols, |i, j| origin + (i * cols + j) as i64)
    }

    /// Builds a sequentially filled `Grid` starting at zero.
    ///
    /// # Example
    /// ```
    /// use numgrid::Grid;
    ///
    /// let grid = Grid::sequential(3, 4).unwrap();
    /// assert_eq!(grid.get(2, 3), Some(11));
    /// ```
    pub fn sequential(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::try_from_config(GridConfig::new(rows, cols, 0))
    }

    /// Builds a `Grid` by evaluating `fill` at every `(row, column)` index pair.
    ///
    /// # Example
    /// ```
    /// use numgrid::Grid;
    ///
    /// let grid = Grid::from_fn(2, 2, |i, j| (i * 10 + j) as i64).unwrap();
    /// assert_eq!(grid.get(1, 1), Some(11));
    /// ```
    pub fn from_fn(
        rows: usize,
        cols: usize,
        mut fill: impl FnMut(usize, usize) -> i64,
    ) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            error!("Invalid grid dimensions: rows={}, cols={}", rows, cols);
            return Err(GridError::InvalidDimension { rows, cols });
        }

        let rows = (0..rows)
            .map(|i| Row::new((0..cols).map(|j| fill(i, j)).collect()))
            .collect();

        Ok(Grid { rows })
    }

    /// Builds a `Grid` from explicit rows, rejecting ragged input.
    ///
    /// Unlike [`Grid::from_fn`], empty input and zero-width rows are
    /// accepted; the resulting grid renders under the documented
    /// zero-dimension policy (no lines, or `[ ]` per zero-width row).
    ///
    /// # Example
    /// ```
    /// use numgrid::{Grid, GridError};
    ///
    /// let grid = Grid::from_rows(vec![vec![0, 1], vec![2, 3]]).unwrap();
    /// assert_eq!(grid.get(1, 0), Some(2));
    ///
    /// let err = Grid::from_rows(vec![vec![0, 1], vec![2]]).unwrap_err();
    /// assert!(matches!(err, GridError::RaggedRow { row: 1, .. }));
    /// ```
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                error!(
                    "Ragged row at index {}: expected {} cells, found {}",
                    index,
                    expected,
                    row.len()
                );
                return Err(GridError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }

        Ok(Grid {
            rows: rows
                .into_iter()
                .map(|cells| Row::new(SmallVecLine::from_vec(cells)))
                .collect(),
        })
    }

    /// Returns the value at `(row, column)`, or `None` when out of range.
    pub fn get(&self, row: usize, column: usize) -> Option<i64> {
        self.rows
            .get(row)
            .and_then(|row| row.cells.get(column).copied())
    }

    /// Finds a row by its index.
    pub fn find_row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Finds cells at the cross product of row and column indices.
    ///
    /// # Example
    /// ```
    /// use numgrid::Grid;
    ///
    /// let grid = Grid::sequential(3, 4).unwrap();
    /// let values: Vec<i64> = grid
    ///     .find_cells(&[0, 2], &[1, 3])
    ///     .map(|cell| cell.unwrap().value())
    ///     .collect();
    /// assert_eq!(values, vec![1, 3, 9, 11]);
    /// ```
    pub fn find_cells<'a>(
        &'a self,
        row_indices: &'a [usize],
        column_indices: &'a [usize],
    ) -> impl Iterator<Item = Result<Cell<'a>, GridError>> + 'a {
        row_indices.iter().flat_map(move |&row_index| {
            column_indices.iter().map(move |&column_index| {
                let row = self
                    .find_row(row_index)
                    .ok_or(GridError::RowNotFound { row: row_index })?;
                if column_index >= row.len() {
                    return Err(GridError::ColumnNotFound {
                        column: column_index,
                    });
                }
                Ok(Cell {
                    row,
                    column: column_index,
                })
            })
        })
    }

    /// Returns an iterator over all cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.rows.iter().flat_map(|row| row.cells.iter().copied())
    }

    /// Returns the largest value in the grid, or `None` for an empty grid.
    pub fn max_value(&self) -> Option<i64> {
        self.values().max()
    }

    /// Creates a `GridSubset` referencing specific rows.
    pub fn create_subset<'a>(&'a self, row_indices: &[usize]) -> GridSubset<'a> {
        let rows = row_indices.iter().map(|&i| &self.rows[i]).collect();
        GridSubset::new(rows)
    }
}

impl GridLike for Grid {
    fn rows_iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

impl TryFrom<GridConfig> for Grid {
    type Error = GridError;

    fn try_from(config: GridConfig) -> Result<Self, Self::Error> {
        Grid::try_from_config(config)
    }
}

/// Creates a [`Row`] from a list of cell values.
///
/// # Examples
///
/// ```rust
/// use numgrid::make_row;
///
/// let row = make_row!(0, 1, 2, 3);
/// assert_eq!(row.len(), 4);
/// assert_eq!(row.cells[2], 2);
/// ```
#[macro_export]
macro_rules! make_row {
    ($($value:expr),* $(,)?) => {
        $crate::Row::new($crate::SmallVecLine::from_vec(vec![$($value),*]))
    };
}

/// Creates a [`Grid`] from bracketed lists of cell values, one per row.
///
/// Rows are taken as written and are not checked for rectangularity; use
/// [`Grid::from_rows`] for checked construction.
///
/// # Examples
///
/// ```rust
/// use numgrid::make_grid;
///
/// let grid = make_grid!([0, 1], [2, 3]);
/// assert_eq!(grid.get(0, 1), Some(1));
/// assert_eq!(grid.get(1, 0), Some(2));
/// ```
#[macro_export]
macro_rules! make_grid {
    ($([$($value:expr),* $(,)?]),* $(,)?) => {
        $crate::Grid::new($crate::SmallVecLine::from_vec(vec![
            $($crate::make_row!($($value),*)),*
        ]))
    };
}
