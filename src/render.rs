//! This module provides functionality for rendering grids, rows, and row subsets as
//! bracketed text lines.
//!
//! # Examples
//!
//! ```rust
//! use numgrid::render::{Alignment, RenderConfig, Renderable};
//! use numgrid::Grid;
//!
//! let grid = Grid::sequential(3, 4).unwrap();
//!
//! // Configure rendering settings
//! let config = RenderConfig {
//!     alignment: Alignment::Right,
//!     ..RenderConfig::default()
//! };
//!
//! let mut out = Vec::new();
//! grid.render(&mut out, &config).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8_lossy(&out),
//!     "[  0  1  2  3 ]\n[  4  5  6  7 ]\n[  8  9 10 11 ]\n"
//! );
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::*;
use tracing::trace;

/// Column alignment policy for rendered values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Values are written as-is.
    #[default]
    Compact,
    /// Values are right-aligned to the width of the widest value in the
    /// render target.
    Right,
}

/// Configuration for rendering grids, rows, and row subsets.
///
/// Each row is written as `row_prefix`, then every value followed by a single
/// space, then `row_suffix` and a line break. The defaults produce the
/// `[ v0 v1 ... ]` format:
///
/// ```
/// use numgrid::render::{RenderConfig, Renderable};
/// use numgrid::make_row;
///
/// let row = make_row!(0, 1, 2, 3);
/// let mut out = Vec::new();
/// row.render(&mut out, &RenderConfig::default()).unwrap();
/// assert_eq!(String::from_utf8_lossy(&out), "[ 0 1 2 3 ]\n");
/// ```
///
/// A grid with rows of zero width renders one `[ ]` line per row; a grid
/// with zero rows renders nothing.
pub struct RenderConfig {
    /// Text written before the first value of each row.
    pub row_prefix: String,
    /// Text written after the trailing space of the last value.
    pub row_suffix: String,
    /// Column alignment policy.
    pub alignment: Alignment,
    /// Optional function to format values instead of plain decimal display.
    pub value_formatter: Option<Box<dyn Fn(i64) -> String>>,
}

// Manually implement Debug for RenderConfig
impl fmt::Debug for RenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderConfig")
            .field("row_prefix", &self.row_prefix)
            .field("row_suffix", &self.row_suffix)
            .field("alignment", &self.alignment)
            .field("value_formatter", &"<function>")
            .finish()
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            row_prefix: "[ ".to_string(),
            row_suffix: "]".to_string(),
            alignment: Alignment::Compact,
            value_formatter: None,
        }
    }
}

/// Returns the number of characters needed to display `value` in decimal,
/// including a leading minus sign.
///
/// # Example
/// ```
/// use numgrid::render::decimal_width;
///
/// assert_eq!(decimal_width(0), 1);
/// assert_eq!(decimal_width(11), 2);
/// assert_eq!(decimal_width(-42), 3);
/// ```
pub fn decimal_width(value: i64) -> usize {
    let mut width = if value < 0 { 1 } else { 0 };
    let mut magnitude = value.unsigned_abs();
    loop {
        width += 1;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    width
}

/// Trait for types that can be rendered as bracketed text lines.
///
/// This trait is implemented for [`Row`], [`Grid`], and [`GridSubset`].
pub trait Renderable {
    /// Renders the object to the provided writer using the given configuration.
    ///
    /// # Arguments
    /// * `out` - The writer to render to.
    /// * `config` - The render configuration.
    ///
    /// # Errors
    /// Returns [`GridError::Write`] if the writer fails.
    fn render(&self, out: &mut dyn Write, config: &RenderConfig) -> Result<(), GridError>;
}

impl Renderable for Row {
    fn render(&self, out: &mut dyn Write, config: &RenderConfig) -> Result<(), GridError> {
        let width = target_width(std::iter::once(self), config);
        write_row(out, self, width, config)
    }
}

impl Renderable for Grid {
    fn render(&self, out: &mut dyn Write, config: &RenderConfig) -> Result<(), GridError> {
        render_grid_like(self, out, config)
    }
}

impl Renderable for GridSubset<'_> {
    fn render(&self, out: &mut dyn Write, config: &RenderConfig) -> Result<(), GridError> {
        render_grid_like(self, out, config)
    }
}

/// Renders every row of a [`GridLike`] target, aligning across the whole target.
fn render_grid_like<G: GridLike>(
    grid: &G,
    out: &mut dyn Write,
    config: &RenderConfig,
) -> Result<(), GridError> {
    trace!("Rendering {} rows with config: {:?}", grid.row_count(), config);
    let width = target_width(grid.rows_iter(), config);
    for row in grid.rows_iter() {
        write_row(out, row, width, config)?;
    }
    Ok(())
}

/// Computes the field width for the given rows under the configured alignment.
fn target_width<'a>(rows: impl Iterator<Item = &'a Row>, config: &RenderConfig) -> usize {
    match config.alignment {
        Alignment::Compact => 0,
        Alignment::Right => rows
            .flat_map(|row| row.cells.iter().copied())
            .map(|value| match &config.value_formatter {
                Some(format) => format(value).chars().count(),
                None => decimal_width(value),
            })
            .max()
            .unwrap_or(0),
    }
}

/// Writes a single row line: prefix, each value followed by a space, suffix,
/// line break.
fn write_row(
    out: &mut dyn Write,
    row: &Row,
    width: usize,
    config: &RenderConfig,
) -> Result<(), GridError> {
    out.write_all(config.row_prefix.as_bytes())?;
    for &value in &row.cells {
        match &config.value_formatter {
            Some(format) => write!(out, "{:>width$} ", format(value))?,
            None => write!(out, "{value:>width$} ")?,
        }
    }
    out.write_all(config.row_suffix.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Renders a grid to standard output and flushes it.
///
/// Write failures are not handled specially; they surface as
/// [`GridError::Write`] and abort the print.
pub fn print_grid(grid: &Grid, config: &RenderConfig) -> Result<(), GridError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    grid.render(&mut out, config)?;
    out.flush()?;
    Ok(())
}
