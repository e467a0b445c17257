//! Data model for 8×8 multiplexed LED sign images.
//!
//! The types here carry no encoding logic; see `signrom-codec` for the
//! transforms between matrices, bit sequences, text and EPROM planes.

pub mod bits;
pub mod enums;
pub mod matrix;
pub mod pattern;
pub mod planes;

pub use bits::BitSequence;
pub use enums::EditMode;
pub use matrix::{CELL_COUNT, GRID_SIZE, PixelMatrix};
pub use pattern::Pattern;
pub use planes::{COLUMN_IDLE, ColumnPlane, EpromPlanes, PLANE_LEN, RowPlane};
