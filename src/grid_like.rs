use crate::Row;

/// A trait for types that provide access to rows of cells.
pub trait GridLike {
    /// Returns an iterator over all rows.
    fn rows_iter(&self) -> impl Iterator<Item = &Row>;

    /// Returns the number of rows.
    fn row_count(&self) -> usize {
        self.rows_iter().count()
    }

    /// Returns the number of columns, taken from the first row.
    fn column_count(&self) -> usize {
        self.rows_iter().next().map_or(0, Row::len)
    }
}
