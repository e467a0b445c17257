//! EPROM encoder.
//!
//! Each byte position `c` in both planes is read while column `c` is being
//! scanned. Both planes are active-low:
//!
//! - column plane: only bit `c` is cleared when column `c` has a lit LED,
//!   otherwise the byte is `0xFF` and no column driver is enabled;
//! - row plane: bit `r` is cleared when LED `(r, c)` is lit.

use signrom_model::{COLUMN_IDLE, ColumnPlane, EpromPlanes, PixelMatrix, RowPlane};
use tracing::trace;

/// Column-select byte for `col`.
#[must_use]
pub fn column_select_byte(matrix: &PixelMatrix, col: usize) -> u8 {
    if matrix.column_is_active(col) {
        !(1u8 << col)
    } else {
        COLUMN_IDLE
    }
}

/// Row-select byte for `col`.
#[must_use]
pub fn row_select_byte(matrix: &PixelMatrix, col: usize) -> u8 {
    matrix
        .column(col)
        .iter()
        .enumerate()
        .fold(0u8, |acc, (row, &lit)| if lit { acc } else { acc | (1 << row) })
}

/// Build the column-select plane (EPROM 1).
#[must_use]
pub fn encode_columns(matrix: &PixelMatrix) -> ColumnPlane {
    std::array::from_fn(|col| column_select_byte(matrix, col))
}

/// Build the row-select plane (EPROM 2).
#[must_use]
pub fn encode_rows(matrix: &PixelMatrix) -> RowPlane {
    std::array::from_fn(|col| row_select_byte(matrix, col))
}

/// Encode a matrix into both EPROM planes.
///
/// Always recomputes both planes from the full matrix.
#[must_use]
pub fn encode(matrix: &PixelMatrix) -> EpromPlanes {
    let planes = EpromPlanes {
        columns: encode_columns(matrix),
        rows: encode_rows(matrix),
    };
    trace!(
        lit = matrix.lit_count(),
        active_columns = planes.active_columns(),
        "encoded matrix"
    );
    planes
}
