//! The 8×8 illumination grid.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the sign.
pub const GRID_SIZE: usize = 8;

/// Number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Fixed 8×8 grid of LEDs, row-major, `true` = lit.
///
/// The grid is always fully initialised; there is no way to build a
/// partially-sized matrix. Out-of-range coordinates are ignored by the
/// mutators and read back as unlit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PixelMatrix {
    cells: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl PixelMatrix {
    /// All LEDs off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[false; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// All LEDs on.
    #[must_use]
    pub const fn all_lit() -> Self {
        Self {
            cells: [[true; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Build a matrix from explicit rows.
    #[must_use]
    pub const fn from_rows(cells: [[bool; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    /// Build a matrix from a 0/1 table; any non-zero cell is lit.
    #[must_use]
    pub fn from_table(table: &[[u8; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut matrix = Self::new();
        for (row, values) in table.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                matrix.cells[row][col] = value != 0;
            }
        }
        matrix
    }

    /// Whether the LED at `(row, col)` is lit.
    #[must_use]
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Set a single LED. Returns `false` if the coordinate is off the grid.
    pub fn set(&mut self, row: usize, col: usize, lit: bool) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = lit;
                true
            }
            None => false,
        }
    }

    /// Flip a single LED. Returns the new state, or `None` off the grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<bool> {
        let cell = self.cells.get_mut(row)?.get_mut(col)?;
        *cell = !*cell;
        Some(*cell)
    }

    /// Turn every LED off.
    pub fn clear(&mut self) {
        self.cells = [[false; GRID_SIZE]; GRID_SIZE];
    }

    /// Row-major view of the cells.
    #[must_use]
    pub const fn rows(&self) -> &[[bool; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// The cells of column `col`, top to bottom.
    #[must_use]
    pub fn column(&self, col: usize) -> [bool; GRID_SIZE] {
        let mut out = [false; GRID_SIZE];
        for (row, cell) in out.iter_mut().enumerate() {
            *cell = self.is_lit(row, col);
        }
        out
    }

    /// Whether any LED in column `col` is lit.
    #[must_use]
    pub fn column_is_active(&self, col: usize) -> bool {
        self.cells.iter().any(|row| row.get(col).copied().unwrap_or(false))
    }

    /// Number of lit LEDs.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&lit| lit).count()
    }

    /// Whether no LED is lit.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }
}
