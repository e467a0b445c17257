//! EPROM image encoder and decoder for 8×8 multiplexed LED signs.
//!
//! A sign image is an 8×8 grid of LEDs, drawn by hand or rendered from a short
//! message. The sign hardware scans one column at a time from two EPROMs
//! sharing an address counter: EPROM 1 enables the scanned column and
//! EPROM 2 drives the rows of that column. This crate converts grids and
//! messages into those two 8-byte planes and reads them back.
//!
//! # Features
//!
//! - Row-major grid ↔ 64-bit sequence codec
//! - Text gate (`A-Z`, `0-9`, space, at most 20 characters) and rasterizer
//! - Active-low column/row plane encoder
//! - Draw- and text-mode import, plane pair reassembly and consistency check
//! - Preview rendering, built-in and saved patterns, editor session state
//!
//! # Example
//!
//! ```
//! use signrom_codec::{encode, find_predefined, render_planes};
//!
//! let plus = find_predefined("Plus").unwrap().matrix();
//! let planes = encode(&plus);
//! assert_eq!(planes.columns[0], 0xFE);
//! assert_eq!(planes.rows[3], 0x00);
//!
//! let preview = render_planes(&planes, &plus);
//! assert!(preview.starts_with("EPROM 1"));
//! ```
//!
//! # Text Mode
//!
//! ```
//! use signrom_codec::{from_bits, rasterize, validate};
//!
//! let text = validate("a").unwrap();
//! let matrix = from_bits(&rasterize(&text));
//! // 'A' = 0x41 = 0b0100_0001 lands on the first row.
//! assert!(matrix.is_lit(0, 1) && matrix.is_lit(0, 7));
//! assert_eq!(matrix.lit_count(), 2);
//!
//! assert_eq!(validate("OPEN 24/7").unwrap_err().reason(), "invalid character set");
//! ```

pub mod decoder;
pub mod encoder;
mod error;
pub mod library;
pub mod matrix;
pub mod preview;
mod reader;
mod session;
pub mod text;
mod writer;

// Re-export model types so callers need a single dependency
pub use signrom_model::{
    BitSequence, CELL_COUNT, COLUMN_IDLE, ColumnPlane, EditMode, EpromPlanes, GRID_SIZE,
    PLANE_LEN, Pattern, PixelMatrix, RowPlane,
};

pub use error::{DecodeError, Result, SignError, ValidationError};

pub use decoder::{Decoded, check_consistency, decode, decode_matrix, decode_text, reassemble};
pub use encoder::encode;
pub use library::{PREDEFINED_PATTERNS, PatternLibrary, PredefinedPattern, find_predefined};
pub use matrix::{format_grid, from_bits, parse_grid, to_bits, to_bytes};
pub use preview::{Preview, render, render_planes};
pub use session::EditorSession;
pub use text::{MAX_TEXT_LEN, ValidatedText, rasterize, validate};

pub use reader::{import_file, read_import, read_plane, read_plane_file, read_planes};
pub use writer::{
    EpromWriter, ExportPaths, columns_file_name, export_timestamp, rows_file_name, write_plane,
    write_planes,
};
