use crate::grid_like::GridLike;
use crate::{Grid, Row, SmallVecLine};
use std::ops::{Add, Sub};

/// Represents a subset of a `Grid`, referencing specific rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GridSubset<'a> {
    /// References to the rows in the parent `Grid`.
    rows: SmallVecLine<&'a Row>,
}

impl<'a> GridSubset<'a> {
    /// Creates a new `GridSubset` from references to rows.
    pub fn new(rows: SmallVecLine<&'a Row>) -> Self {
        Self { rows }
    }

    /// Returns an iterator over the rows in the subset.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().copied()
    }
}

impl GridLike for GridSubset<'_> {
    fn rows_iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().copied()
    }
}

/// Combines two `GridSubset` instances by concatenating their rows.
impl Add for GridSubset<'_> {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        let mut rows = self.rows;
        rows.extend(other.rows);
        Self::new(rows)
    }
}

/// Subtracts one `GridSubset` from another by removing overlapping rows.
impl Sub for GridSubset<'_> {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        let rows = self
            .rows
            .into_iter()
            .filter(|row| !other.rows.contains(row))
            .collect();
        Self::new(rows)
    }
}

/// Creates a `GridSubset` from a reference to a `Grid`.
impl<'a> From<&'a Grid> for GridSubset<'a> {
    fn from(grid: &'a Grid) -> Self {
        let rows = grid.rows.iter().collect();
        Self::new(rows)
    }
}

/// Builds an owned `Grid` from a `GridSubset`.
impl<'a> From<GridSubset<'a>> for Grid {
    fn from(subset: GridSubset<'a>) -> Self {
        let rows = subset.rows.into_iter().cloned().collect();
        Grid::new(rows)
    }
}
