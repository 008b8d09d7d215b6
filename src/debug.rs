use crate::render::{RenderConfig, Renderable};

use super::*;
/// Renders a grid, row, or row subset into a `String`.
///
/// This is the in-memory counterpart of [`crate::render::print_grid`]; the
/// tests assert on its output.
///
/// # Errors
/// Returns [`GridError`] if rendering fails.
///
/// # Examples
///
/// ```rust
/// use numgrid::{debug, render::RenderConfig, make_grid};
///
/// let grid = make_grid!([8, 9, 10, 11]);
/// let text = debug::render_to_string(&grid, &RenderConfig::default()).unwrap();
/// assert_eq!(text, "[ 8 9 10 11 ]\n");
/// ```
pub fn render_to_string<R: Renderable + ?Sized>(
    target: &R,
    config: &RenderConfig,
) -> Result<String, GridError> {
    let mut buffer = Vec::new();
    target.render(&mut buffer, config)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
