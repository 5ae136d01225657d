//! Two-dimensional coordinate grids (XLAT/XLONG style).

use serde::{Deserialize, Serialize};

/// A 2-D field of coordinate values stored in row-major order.
///
/// Row 0 is the southernmost row of a WRF domain, so the first element is the
/// bottom-left grid point and the last element is the top-right one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordGrid {
    /// Number of points in X (west_east) direction
    pub nx: usize,
    /// Number of points in Y (south_north) direction
    pub ny: usize,
    values: Vec<f64>,
}

impl CoordGrid {
    /// Create a grid from row-major values.
    ///
    /// Returns `None` when `values.len() != nx * ny`.
    pub fn new(nx: usize, ny: usize, values: Vec<f64>) -> Option<Self> {
        if values.len() != nx * ny {
            return None;
        }
        Some(Self { nx, ny, values })
    }

    /// Create a grid from nested rows (`rows[j][i]`).
    ///
    /// Returns `None` for ragged input.
    pub fn from_rows(rows: &[Vec<f64>]) -> Option<Self> {
        let ny = rows.len();
        let nx = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != nx) {
            return None;
        }
        Self::new(nx, ny, rows.concat())
    }

    /// Value at grid index (i, j).
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.nx || j >= self.ny {
            return None;
        }
        self.values.get(j * self.nx + i).copied()
    }

    /// The `[0, 0]` element.
    pub fn first(&self) -> Option<f64> {
        self.values.first().copied()
    }

    /// The `[ny - 1, nx - 1]` element.
    pub fn last(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Total number of grid points.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if grid is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
