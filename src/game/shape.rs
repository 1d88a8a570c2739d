//! Occupancy matrices for one orientation of a piece.

/// Immutable rectangular boolean grid. Every row has the same length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: Vec<Vec<bool>>,
}

impl Shape {
    /// Builds a shape from rows of 0/1 values.
    ///
    /// Panics on an empty or ragged matrix; shapes only come from the fixed
    /// canonical table and from rotating those.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && !rows[0].is_empty(), "shape must not be empty");
        let width = rows[0].len();
        assert!(rows.iter().all(|r| r.len() == width), "shape rows must be equal length");

        Self {
            cells: rows
                .iter()
                .map(|r| r.iter().map(|&c| c != 0).collect())
                .collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Local `(row, col)` of every occupied cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(j, _)| (i, j))
        })
    }

    /// 90° clockwise rotation: an `n×m` source becomes `m×n` with
    /// `new[j][n - 1 - i] = old[i][j]`.
    pub fn rotate_clockwise(&self) -> Self {
        let n = self.height();
        let m = self.width();
        let mut rotated = vec![vec![false; n]; m];

        for i in 0..n {
            for j in 0..m {
                rotated[j][n - 1 - i] = self.cells[i][j];
            }
        }

        Self { cells: rotated }
    }
}
