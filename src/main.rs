use anyhow::{Context, Result};
use numgrid::render::{print_grid, RenderConfig};
use numgrid::{Grid, GridConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the grid
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("numgrid=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Build the fixed 3x4 sequential grid
    let grid = Grid::try_from_config(GridConfig::default()).context("Failed to build grid")?;

    // Print it to standard output
    print_grid(&grid, &RenderConfig::default()).context("Failed to print grid")?;

    Ok(())
}

/// Unit tests for the grid generation and rendering logic.
#[cfg(test)]
mod tests {
    use insta::{assert_snapshot, assert_yaml_snapshot};
    use numgrid::render::*;
    use numgrid::*;
    use pretty_assertions::assert_eq;
    use proptest::{prelude::*, proptest};
    use test_case::test_case;

    fn rendered(grid: &Grid) -> String {
        debug::render_to_string(grid, &RenderConfig::default()).unwrap()
    }

    #[test]
    fn test_sequential_grid_matches_formula() {
        let grid = Grid::sequential(3, 4).unwrap();
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(grid.get(i, j), Some((i * 4 + j) as i64));
            }
        }
    }

    #[test]
    fn test_default_grid_dimensions() {
        let grid: Grid = GridConfig::default().try_into().unwrap();
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.column_count(), 4);
        assert!(grid.rows.iter().all(|row| row.len() == 4));
    }

    #[test]
    fn test_print_output_3x4() {
        let grid = Grid::try_from_config(GridConfig::default()).unwrap();
        assert_eq!(rendered(&grid), "[ 0 1 2 3 ]\n[ 4 5 6 7 ]\n[ 8 9 10 11 ]\n");
    }

    #[test]
    fn test_print_output_2x2() {
        let grid = Grid::sequential(2, 2).unwrap();
        assert_eq!(rendered(&grid), "[ 0 1 ]\n[ 2 3 ]\n");
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let grid = Grid::try_from_config(GridConfig::default()).unwrap();
        assert_eq!(rendered(&grid), rendered(&grid));
    }

    #[test]
    fn test_zero_rows_render_nothing() {
        let grid = Grid::from_rows(vec![]).unwrap();
        assert_eq!(rendered(&grid), "");

        let grid = Grid::new(SmallVecLine::new());
        assert_eq!(rendered(&grid), "");
    }

    #[test]
    fn test_zero_width_rows_render_empty_brackets() {
        let grid = Grid::from_rows(vec![vec![], vec![]]).unwrap();
        assert_eq!(rendered(&grid), "[ ]\n[ ]\n");
    }

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        let err = Grid::sequential(0, 4).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { rows: 0, cols: 4 }));

        let err = Grid::sequential(3, 0).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { rows: 3, cols: 0 }));
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let err = Grid::from_rows(vec![vec![0, 1], vec![2, 3, 4]]).unwrap_err();
        assert!(matches!(
            err,
            GridError::RaggedRow {
                row: 1,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_find_cells() {
        let grid = Grid::sequential(3, 4).unwrap();

        let values: Vec<i64> = grid
            .find_cells(&[0, 2], &[1, 3])
            .map(|cell| cell.unwrap().value())
            .collect();
        assert_eq!(values, vec![1, 3, 9, 11]);

        let mut missing = grid.find_cells(&[7], &[0]);
        assert!(matches!(
            missing.next(),
            Some(Err(GridError::RowNotFound { row: 7 }))
        ));

        let mut missing = grid.find_cells(&[0], &[9]);
        assert!(matches!(
            missing.next(),
            Some(Err(GridError::ColumnNotFound { column: 9 }))
        ));
    }

    #[test]
    fn test_origin_offset() {
        let grid = Grid::try_from_config(GridConfig::new(3, 4, 100)).unwrap();
        assert_eq!(grid.get(0, 0), Some(100));
        assert_eq!(grid.get(2, 3), Some(111));
        assert_eq!(
            rendered(&grid),
            "[ 100 101 102 103 ]\n[ 104 105 106 107 ]\n[ 108 109 110 111 ]\n"
        );
    }

    #[test]
    fn test_aligned_rendering() {
        let grid = Grid::sequential(3, 4).unwrap();
        let config = RenderConfig {
            alignment: Alignment::Right,
            ..RenderConfig::default()
        };
        let text = debug::render_to_string(&grid, &config).unwrap();
        assert_eq!(text, "[  0  1  2  3 ]\n[  4  5  6  7 ]\n[  8  9 10 11 ]\n");
    }

    #[test]
    fn test_aligned_rendering_with_negative_values() {
        let grid = make_grid!([-5, 7], [100, -42]);
        let config = RenderConfig {
            alignment: Alignment::Right,
            ..RenderConfig::default()
        };
        let text = debug::render_to_string(&grid, &config).unwrap();
        assert_eq!(text, "[  -5   7 ]\n[ 100 -42 ]\n");
    }

    #[test]
    fn test_custom_value_formatter() {
        let grid = Grid::sequential(2, 2).unwrap();
        let config = RenderConfig {
            value_formatter: Some(Box::new(|value| format!("{value:#04x}"))),
            ..RenderConfig::default()
        };
        let text = debug::render_to_string(&grid, &config).unwrap();
        assert_eq!(text, "[ 0x00 0x01 ]\n[ 0x02 0x03 ]\n");
    }

    #[test]
    fn test_row_renders_as_single_line() {
        let row = make_row!(0, 1, 2);
        let mut out = Vec::new();
        row.render(&mut out, &RenderConfig::default()).unwrap();
        assert_eq!(String::from_utf8_lossy(&out), "[ 0 1 2 ]\n");
    }

    #[test]
    fn test_subset_renders_selected_rows() {
        let grid = Grid::sequential(3, 4).unwrap();
        let subset = grid.create_subset(&[0, 2]);
        let text = debug::render_to_string(&subset, &RenderConfig::default()).unwrap();
        assert_eq!(text, "[ 0 1 2 3 ]\n[ 8 9 10 11 ]\n");
    }

    #[test]
    fn test_subset_add_and_sub() {
        let grid = Grid::sequential(3, 4).unwrap();

        let outer = GridSubset::from(&grid) - grid.create_subset(&[1]);
        assert_eq!(outer.rows().count(), 2);

        let rebuilt = Grid::from(outer + grid.create_subset(&[1]));
        assert_eq!(rebuilt.rows.len(), 3);
        // Row 1 was re-appended last
        assert_eq!(rebuilt.get(2, 0), Some(4));
    }

    #[test]
    fn test_values_and_max() {
        let grid = Grid::sequential(3, 4).unwrap();
        assert_eq!(grid.values().sum::<i64>(), 66);
        assert_eq!(grid.max_value(), Some(11));
        assert_eq!(Grid::from_rows(vec![]).unwrap().max_value(), None);
    }

    #[test]
    fn test_make_grid_macro_matches_sequential() {
        let grid = make_grid!([0, 1, 2, 3], [4, 5, 6, 7]);
        assert_eq!(grid, Grid::sequential(2, 4).unwrap());
    }

    #[test]
    fn test_from_fn_random_fill_is_rectangular() {
        let grid = Grid::from_fn(5, 7, |_, _| rand::random::<i32>() as i64).unwrap();
        assert_eq!(grid.row_count(), 5);
        assert!(grid.rows.iter().all(|row| row.len() == 7));
    }

    #[test_case(0, 1 ; "zero")]
    #[test_case(7, 1 ; "one digit")]
    #[test_case(10, 2 ; "two digits")]
    #[test_case(999, 3 ; "three digits")]
    #[test_case(-1, 2 ; "negative")]
    #[test_case(i64::MIN, 20 ; "minimum")]
    fn test_decimal_width(value: i64, expected: usize) {
        assert_eq!(decimal_width(value), expected);
    }

    #[test]
    fn test_render_default_grid_snapshot() {
        let grid = Grid::try_from_config(GridConfig::default()).unwrap();
        assert_snapshot!(rendered(&grid), @r###"
        [ 0 1 2 3 ]
        [ 4 5 6 7 ]
        [ 8 9 10 11 ]
        "###);
    }

    #[test]
    fn test_grid_values_snapshot() {
        let grid = Grid::try_from_config(GridConfig::default()).unwrap();
        let values: Vec<i64> = grid.values().collect();
        assert_yaml_snapshot!(values, @r###"
        - 0
        - 1
        - 2
        - 3
        - 4
        - 5
        - 6
        - 7
        - 8
        - 9
        - 10
        - 11
        "###);
    }

    proptest! {
        #[test]
        fn test_sequential_fill_proptest(rows in 1..16usize, cols in 1..16usize, origin in -1000i64..1000) {
            let grid = Grid::try_from_config(GridConfig::new(rows, cols, origin)).unwrap();

            for i in 0..rows {
                for j in 0..cols {
                    prop_assert_eq!(grid.get(i, j), Some(origin + (i * cols + j) as i64));
                }
            }
        }

        #[test]
        fn test_rendered_shape_proptest(rows in 1..16usize, cols in 1..16usize) {
            let grid = Grid::sequential(rows, cols).unwrap();
            let text = debug::render_to_string(&grid, &RenderConfig::default()).unwrap();

            // One line per row, each framed by the brackets
            let lines: Vec<&str> = text.lines().collect();
            prop_assert_eq!(lines.len(), rows);
            for line in lines {
                prop_assert!(line.starts_with("[ "));
                prop_assert!(line.ends_with(']'));
            }
        }

        #[test]
        fn test_render_round_trip_proptest(rows in 1..8usize, cols in 1..8usize) {
            let grid = Grid::sequential(rows, cols).unwrap();
            let text = debug::render_to_string(&grid, &RenderConfig::default()).unwrap();

            // Parse the rendered lines back into cell values
            let parsed: Vec<Vec<i64>> = text
                .lines()
                .map(|line| {
                    line.trim_start_matches("[ ")
                        .trim_end_matches(']')
                        .split_whitespace()
                        .map(|token| token.parse().unwrap())
                        .collect()
                })
                .collect();

            let round_tripped = Grid::from_rows(parsed).unwrap();
            prop_assert_eq!(round_tripped, grid);
        }

        #[test]
        fn test_aligned_lines_have_equal_length_proptest(
            rows in 1..8usize,
            cols in 1..8usize,
            origin in -500i64..500,
        ) {
            let grid = Grid::try_from_config(GridConfig::new(rows, cols, origin)).unwrap();
            let config = RenderConfig {
                alignment: Alignment::Right,
                ..RenderConfig::default()
            };
            let text = debug::render_to_string(&grid, &config).unwrap();

            let mut lengths = text.lines().map(str::len);
            let first = lengths.next().unwrap();
            prop_assert!(lengths.all(|len| len == first));
        }
    }
}
