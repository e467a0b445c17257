//! Matrix codec: grid ↔ flat bit sequence.
//!
//! Bit `row * 8 + col` of the sequence is cell `(row, col)`. The same order is
//! used when a sequence is packed into bytes, so byte `row` holds that row with
//! column 0 in the most significant bit.

use signrom_model::{BitSequence, CELL_COUNT, GRID_SIZE, PixelMatrix};

use crate::error::{Result, SignError};

/// Flatten a matrix row-major into exactly 64 bits.
#[must_use]
pub fn to_bits(matrix: &PixelMatrix) -> BitSequence {
    matrix.rows().iter().flatten().copied().collect()
}

/// Rebuild a matrix from the first 64 bits of `bits`.
///
/// Missing trailing bits leave their cells unlit; bits past 64 are ignored.
#[must_use]
pub fn from_bits(bits: &BitSequence) -> PixelMatrix {
    let mut matrix = PixelMatrix::new();
    for index in 0..CELL_COUNT {
        if bits.bit(index) {
            matrix.set(index / GRID_SIZE, index % GRID_SIZE, true);
        }
    }
    matrix
}

/// Pack a matrix into one byte per row.
#[must_use]
pub fn to_bytes(matrix: &PixelMatrix) -> [u8; GRID_SIZE] {
    let mut out = [0u8; GRID_SIZE];
    for (byte, row) in out.iter_mut().zip(matrix.rows()) {
        *byte = row
            .iter()
            .enumerate()
            .fold(0u8, |acc, (col, &lit)| if lit { acc | (0x80 >> col) } else { acc });
    }
    out
}

/// Parse an 8-line text grid.
///
/// `#`, `1`, `X` and `■` are lit; `.`, `0`, `-` and `□` are unlit. Whitespace
/// inside a line is ignored, blank lines are skipped.
pub fn parse_grid(input: &str) -> Result<PixelMatrix> {
    let mut matrix = PixelMatrix::new();
    let mut row = 0usize;

    for (line_idx, line) in input.lines().enumerate() {
        let line_no = line_idx + 1;
        let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.is_empty() {
            continue;
        }
        if row >= GRID_SIZE {
            return Err(SignError::grid_parse(
                line_no,
                format!("more than {GRID_SIZE} rows"),
            ));
        }
        if cells.len() != GRID_SIZE {
            return Err(SignError::grid_parse(
                line_no,
                format!("expected {GRID_SIZE} cells, found {}", cells.len()),
            ));
        }
        for (col, ch) in cells.into_iter().enumerate() {
            let lit = match ch {
                '#' | '1' | 'X' | 'x' | '■' => true,
                '.' | '0' | '-' | '□' => false,
                other => {
                    return Err(SignError::grid_parse(
                        line_no,
                        format!("unexpected cell {other:?}"),
                    ));
                }
            };
            matrix.set(row, col, lit);
        }
        row += 1;
    }

    if row != GRID_SIZE {
        return Err(SignError::grid_parse(
            input.lines().count(),
            format!("expected {GRID_SIZE} rows, found {row}"),
        ));
    }
    Ok(matrix)
}

/// Format a matrix as an 8-line `#`/`.` grid (the inverse of [`parse_grid`]).
#[must_use]
pub fn format_grid(matrix: &PixelMatrix) -> String {
    let mut out = String::with_capacity(GRID_SIZE * (GRID_SIZE + 1));
    for row in matrix.rows() {
        out.extend(row.iter().map(|&lit| if lit { '#' } else { '.' }));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bits_is_row_major() {
        let mut matrix = PixelMatrix::new();
        matrix.set(0, 1, true);
        matrix.set(1, 0, true);
        let bits = to_bits(&matrix);
        assert_eq!(bits.len(), CELL_COUNT);
        assert!(bits.bit(1));
        assert!(bits.bit(8));
        assert_eq!(bits.iter().filter(|&b| b).count(), 2);
    }

    #[test]
    fn test_from_bits_pads_short_input() {
        let bits = BitSequence::from_bytes(&[0xFF]);
        let matrix = from_bits(&bits);
        assert_eq!(matrix.rows()[0], [true; GRID_SIZE]);
        assert_eq!(matrix.lit_count(), GRID_SIZE);
    }

    #[test]
    fn test_from_bits_ignores_excess() {
        let bits = BitSequence::from_bytes(&[0xFF; 12]);
        assert_eq!(from_bits(&bits), PixelMatrix::all_lit());
    }

    #[test]
    fn test_to_bytes_matches_packed_bits() {
        let mut matrix = PixelMatrix::new();
        matrix.set(0, 0, true);
        matrix.set(3, 7, true);
        let bytes = to_bytes(&matrix);
        assert_eq!(bytes[0], 0x80);
        assert_eq!(bytes[3], 0x01);
        assert_eq!(bytes.to_vec(), to_bits(&matrix).to_bytes());
    }

    #[test]
    fn test_parse_grid() {
        let grid = "\
            #......#
            .#....#.
            ..#..#..
            ...##...
            ...11...
            ..X..x..
            .■....□.
            #......#
        ";
        let matrix = parse_grid(grid).unwrap();
        assert!(matrix.is_lit(0, 0));
        assert!(matrix.is_lit(0, 7));
        assert!(matrix.is_lit(6, 1));
        assert!(!matrix.is_lit(6, 6));
        assert_eq!(matrix.lit_count(), 15);
    }

    #[test]
    fn test_parse_grid_rejects_short_row() {
        let grid = "########\n#######\n";
        let err = parse_grid(grid).unwrap_err();
        assert!(matches!(err, SignError::GridParse { line: 2, .. }));
    }

    #[test]
    fn test_parse_grid_rejects_missing_rows() {
        let err = parse_grid("........\n").unwrap_err();
        assert!(format!("{err}").contains("expected 8 rows, found 1"));
    }

    #[test]
    fn test_parse_grid_rejects_unknown_cell() {
        let err = parse_grid("....?...").unwrap_err();
        assert!(format!("{err}").contains("unexpected cell '?'"));
    }

    #[test]
    fn test_format_grid_parses_back() {
        let mut matrix = PixelMatrix::new();
        matrix.set(4, 4, true);
        matrix.set(7, 0, true);
        let text = format_grid(&matrix);
        assert_eq!(text.lines().nth(4), Some("....#..."));
        assert_eq!(parse_grid(&text).unwrap(), matrix);
    }
}
