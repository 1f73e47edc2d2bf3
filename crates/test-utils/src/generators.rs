//! Deterministic grid generators for stacking tests.

use ndarray::Array2;

/// Creates a grid where each cell value is `col * 1000 + row`.
///
/// Makes orientation checks trivial: reading `grid[[row, col]]` recovers
/// both indices, so any accidental transpose or flip shows up immediately.
pub fn indexed_grid(width: usize, height: usize) -> Array2<f64> {
    Array2::from_shape_fn((height, width), |(row, col)| (col * 1000 + row) as f64)
}

/// Creates a grid filled with a constant value.
pub fn constant_grid(width: usize, height: usize, value: f64) -> Array2<f64> {
    Array2::from_elem((height, width), value)
}

/// Creates an indexed grid with `marker` written at the given `(col, row)`
/// positions.
///
/// Used for exercising no-data substitution.
pub fn grid_with_marker(
    width: usize,
    height: usize,
    marker: f64,
    positions: &[(usize, usize)],
) -> Array2<f64> {
    let mut grid = indexed_grid(width, height);
    for &(col, row) in positions {
        if col < width && row < height {
            grid[[row, col]] = marker;
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_grid() {
        let grid = indexed_grid(10, 5);
        assert_eq!(grid.dim(), (5, 10)); // (rows, cols)
        assert_eq!(grid[[0, 0]], 0.0);
        assert_eq!(grid[[0, 1]], 1000.0);
        assert_eq!(grid[[1, 0]], 1.0);
        assert_eq!(grid[[4, 9]], 9004.0);
    }

    #[test]
    fn test_constant_grid() {
        let grid = constant_grid(4, 3, 42.0);
        assert_eq!(grid.dim(), (3, 4));
        assert!(grid.iter().all(|&v| v == 42.0));
    }

    #[test]
    fn test_grid_with_marker() {
        let grid = grid_with_marker(10, 10, -9999.0, &[(5, 5), (0, 0)]);
        assert_eq!(grid[[0, 0]], -9999.0);
        assert_eq!(grid[[5, 5]], -9999.0);
        assert_eq!(grid[[0, 1]], 1000.0); // untouched
    }
}
