use crate::constants::{COLS, ROWS};
use crate::game::shape::Shape;

/// Cell value: 0 is empty, 1..=7 is the color id of a locked piece.
pub type Cell = u8;

pub const EMPTY: Cell = 0;

pub type Grid = [[Cell; COLS]; ROWS];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[EMPTY; COLS]; ROWS],
        }
    }

    pub fn reset(&mut self) {
        self.cells = [[EMPTY; COLS]; ROWS];
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    /// Copy of the grid for a renderer to draw from.
    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c != EMPTY).count()
    }

    /// True when every occupied cell of `shape` at `(x, y)` lands inside the
    /// side walls, above the floor, and on an empty cell. Cells above row 0
    /// are allowed; empty cells of the bounding box are never checked.
    pub fn is_valid_placement(&self, shape: &Shape, x: i32, y: i32) -> bool {
        for (r, c) in shape.occupied() {
            let bx = x + c as i32;
            let by = y + r as i32;
            if bx < 0 || bx >= COLS as i32 || by >= ROWS as i32 {
                return false;
            }
            if by >= 0 && self.cells[by as usize][bx as usize] != EMPTY {
                return false;
            }
        }
        true
    }

    /// Writes `color` into every occupied cell of `shape` at `(x, y)`.
    ///
    /// The placement must already be valid. Cells above row 0 are dropped.
    pub fn merge(&mut self, shape: &Shape, color: Cell, x: i32, y: i32) {
        for (r, c) in shape.occupied() {
            let by = y + r as i32;
            if by < 0 {
                continue;
            }
            self.cells[by as usize][(x + c as i32) as usize] = color;
        }
    }

    /// Removes every full row, keeping the remaining rows in order and
    /// padding the top with empty rows. Returns the number of rows removed.
    pub fn clear_full_rows(&mut self) -> usize {
        let kept: Vec<[Cell; COLS]> = self
            .cells
            .iter()
            .filter(|row| !row.iter().all(|&c| c != EMPTY))
            .copied()
            .collect();

        let cleared = ROWS - kept.len();
        if cleared == 0 {
            return 0;
        }

        let mut cells = [[EMPTY; COLS]; ROWS];
        cells[cleared..].copy_from_slice(&kept);
        self.cells = cells;

        cleared
    }
}
