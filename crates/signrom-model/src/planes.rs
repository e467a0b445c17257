//! EPROM plane types.
//!
//! The sign is scanned one column at a time. Two EPROMs are addressed by the
//! same column counter:
//!
//! | EPROM | Plane    | Byte `c` drives                         | Active level |
//! |-------|----------|-----------------------------------------|--------------|
//! | 1     | columns  | the column enable lines while `c` scans | low          |
//! | 2     | rows     | the row lines while `c` scans           | low          |

use serde::{Deserialize, Serialize};

use crate::matrix::GRID_SIZE;

/// Bytes per EPROM plane (one per column).
pub const PLANE_LEN: usize = GRID_SIZE;

/// Column-select plane: byte `c` enables column `c` (active-low).
pub type ColumnPlane = [u8; PLANE_LEN];

/// Row-select plane: bit `r` of byte `c` drives row `r` while column `c` scans.
pub type RowPlane = [u8; PLANE_LEN];

/// Value of a column-select byte when the column is not driven.
pub const COLUMN_IDLE: u8 = 0xFF;

/// The pair of planes written to the two EPROMs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpromPlanes {
    /// EPROM 1 contents.
    pub columns: ColumnPlane,
    /// EPROM 2 contents.
    pub rows: RowPlane,
}

impl EpromPlanes {
    /// Both planes idle: no column driven, every row off.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            columns: [COLUMN_IDLE; PLANE_LEN],
            rows: [0xFF; PLANE_LEN],
        }
    }

    /// Number of columns that are driven during a scan.
    #[must_use]
    pub fn active_columns(&self) -> usize {
        self.columns.iter().filter(|&&b| b != COLUMN_IDLE).count()
    }
}

impl Default for EpromPlanes {
    fn default() -> Self {
        Self::idle()
    }
}
