//! Import path: raw buffers and exported planes back to an image.
//!
//! Draw-mode import reads the buffer as bits, MSB-first, and keeps the first
//! 64 (eight bytes). Text-mode import does not go through the matrix at all:
//! the buffer is taken as UTF-8 character data. Exporting text goes through
//! rasterize → matrix → planes, so the two directions are not inverses of each
//! other in text mode.

use signrom_model::{BitSequence, COLUMN_IDLE, EditMode, EpromPlanes, GRID_SIZE, PixelMatrix};
use tracing::debug;

use crate::encoder::column_select_byte;
use crate::error::{DecodeError, Result, SignError};
use crate::matrix::from_bits;

/// Result of decoding an import buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// Draw-mode result.
    Matrix(PixelMatrix),
    /// Text-mode result.
    Text(String),
}

/// Decode an import buffer according to `mode`.
pub fn decode(raw: &[u8], mode: EditMode) -> std::result::Result<Decoded, DecodeError> {
    match mode {
        EditMode::Draw => Ok(Decoded::Matrix(decode_matrix(raw))),
        EditMode::Text => decode_text(raw).map(Decoded::Text),
    }
}

/// Draw-mode decode. Never fails; short buffers leave trailing cells unlit.
#[must_use]
pub fn decode_matrix(raw: &[u8]) -> PixelMatrix {
    let bits = BitSequence::from_bytes(raw);
    let matrix = from_bits(&bits);
    debug!(
        bytes = raw.len(),
        lit = matrix.lit_count(),
        "decoded draw-mode import"
    );
    matrix
}

/// Byte-order mark some editors put at the start of UTF-8 text files.
const UTF8_BOM: char = '\u{FEFF}';

/// Text-mode decode of the whole buffer as UTF-8. One leading byte-order
/// mark is dropped.
pub fn decode_text(raw: &[u8]) -> std::result::Result<String, DecodeError> {
    match std::str::from_utf8(raw) {
        Ok(text) => {
            let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
            debug!(bytes = raw.len(), "decoded text-mode import");
            Ok(text.to_string())
        }
        Err(err) => {
            debug!(offset = err.valid_up_to(), "text-mode import is not UTF-8");
            Err(DecodeError {
                offset: err.valid_up_to(),
            })
        }
    }
}

/// Rebuild the matrix encoded in an exported plane pair.
///
/// Only the row plane carries per-LED information; LED `(r, c)` is lit when
/// bit `r` of `rows[c]` is clear.
#[must_use]
pub fn reassemble(planes: &EpromPlanes) -> PixelMatrix {
    let mut matrix = PixelMatrix::new();
    for (col, &byte) in planes.rows.iter().enumerate() {
        for row in 0..GRID_SIZE {
            if byte & (1 << row) == 0 {
                matrix.set(row, col, true);
            }
        }
    }
    matrix
}

/// Verify that the column plane is what the row plane implies.
///
/// Reports the first column whose select byte differs from the value the
/// encoder would produce for the reassembled matrix.
pub fn check_consistency(planes: &EpromPlanes) -> Result<()> {
    let matrix = reassemble(planes);
    for (col, &found) in planes.columns.iter().enumerate() {
        let expected = column_select_byte(&matrix, col);
        if found != expected {
            return Err(SignError::PlaneMismatch {
                column: col,
                expected,
                found,
            });
        }
    }
    debug!(
        active_columns = planes.columns.iter().filter(|&&b| b != COLUMN_IDLE).count(),
        "plane pair is consistent"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_decode_matrix_uses_first_eight_bytes() {
        let raw = [0x81, 0, 0, 0, 0, 0, 0, 0x18, 0xFF, 0xFF];
        let matrix = decode_matrix(&raw);
        assert!(matrix.is_lit(0, 0));
        assert!(matrix.is_lit(0, 7));
        assert!(matrix.is_lit(7, 3));
        assert!(matrix.is_lit(7, 4));
        assert_eq!(matrix.lit_count(), 4);
    }

    #[test]
    fn test_decode_matrix_empty_buffer() {
        assert!(decode_matrix(&[]).is_blank());
    }

    #[test]
    fn test_decode_text() {
        let decoded = decode(b"PHARMACIE", EditMode::Text).unwrap();
        assert_eq!(decoded, Decoded::Text("PHARMACIE".to_string()));
    }

    #[test]
    fn test_decode_text_does_not_validate() {
        let decoded = decode_text(b"hello, world!").unwrap();
        assert_eq!(decoded, "hello, world!");
    }

    #[test]
    fn test_decode_text_strips_bom() {
        let decoded = decode_text(b"\xEF\xBB\xBFPHARMACIE").unwrap();
        assert_eq!(decoded, "PHARMACIE");
        // Only the leading mark is a BOM.
        let decoded = decode_text("\u{FEFF}\u{FEFF}A".as_bytes()).unwrap();
        assert_eq!(decoded, "\u{FEFF}A");
    }

    #[test]
    fn test_decode_text_invalid_utf8() {
        let err = decode(&[b'O', b'K', 0xC3, 0x28], EditMode::Text).unwrap_err();
        assert_eq!(err, DecodeError { offset: 2 });
    }

    #[test]
    fn test_draw_mode_never_fails() {
        let decoded = decode(&[0xC3, 0x28], EditMode::Draw).unwrap();
        assert!(matches!(decoded, Decoded::Matrix(_)));
    }

    #[test]
    fn test_reassemble_inverts_encode() {
        let mut matrix = PixelMatrix::new();
        matrix.set(0, 0, true);
        matrix.set(3, 5, true);
        matrix.set(7, 7, true);
        assert_eq!(reassemble(&encode(&matrix)), matrix);
    }

    #[test]
    fn test_consistency_detects_mismatch() {
        let mut planes = encode(&PixelMatrix::all_lit());
        assert!(check_consistency(&planes).is_ok());

        planes.columns[3] = 0xFF;
        let err = check_consistency(&planes).unwrap_err();
        assert!(matches!(
            err,
            SignError::PlaneMismatch {
                column: 3,
                expected: 0xF7,
                found: 0xFF
            }
        ));
    }
}
