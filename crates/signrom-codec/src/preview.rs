//! Human-readable dump of the encoded planes.

use std::fmt;

use signrom_model::{ColumnPlane, EpromPlanes, GRID_SIZE, PixelMatrix, RowPlane};

const LIT: char = '■';
const UNLIT: char = '□';

/// Formatter for the two planes and the matrix they were built from.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    columns: &'a ColumnPlane,
    rows: &'a RowPlane,
    matrix: &'a PixelMatrix,
}

impl<'a> Preview<'a> {
    #[must_use]
    pub fn new(columns: &'a ColumnPlane, rows: &'a RowPlane, matrix: &'a PixelMatrix) -> Self {
        Self {
            columns,
            rows,
            matrix,
        }
    }
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "EPROM 1 (column select, '0' = driven):")?;
        writeln!(f)?;
        for (col, byte) in self.columns.iter().enumerate() {
            writeln!(f, "Col {col}: {byte:08b} (0x{byte:02X})")?;
        }

        writeln!(f)?;
        writeln!(f, "EPROM 2 (row select, '1' = off):")?;
        writeln!(f)?;
        for (col, byte) in self.rows.iter().enumerate() {
            writeln!(f, "Pos {col}: {byte:08b} (0x{byte:02X})")?;
        }

        writeln!(f)?;
        writeln!(f, "LED matrix ({LIT} = lit, {UNLIT} = off):")?;
        writeln!(f)?;
        let header: Vec<String> = (0..GRID_SIZE).map(|col| col.to_string()).collect();
        writeln!(f, "  {}  <- columns", header.join(" "))?;
        for (row, cells) in self.matrix.rows().iter().enumerate() {
            let cells: Vec<String> = cells
                .iter()
                .map(|&lit| (if lit { LIT } else { UNLIT }).to_string())
                .collect();
            writeln!(f, "{row} {}", cells.join(" "))?;
        }

        writeln!(f)?;
        writeln!(f, "Scan sequence:")?;
        writeln!(f, "• Columns are scanned one at a time")?;
        writeln!(f, "• EPROM 1 enables the scanned column (0 = active)")?;
        writeln!(f, "• EPROM 2 drives that column's LEDs by row (1 = off)")?;
        writeln!(f, "• Persistence of vision assembles the full image")
    }
}

/// Render the preview text.
#[must_use]
pub fn render(columns: &ColumnPlane, rows: &RowPlane, matrix: &PixelMatrix) -> String {
    Preview::new(columns, rows, matrix).to_string()
}

/// Render the preview text for a plane pair.
#[must_use]
pub fn render_planes(planes: &EpromPlanes, matrix: &PixelMatrix) -> String {
    render(&planes.columns, &planes.rows, matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::encode;

    #[test]
    fn test_plane_lines() {
        let matrix = PixelMatrix::all_lit();
        let text = render_planes(&encode(&matrix), &matrix);
        assert!(text.contains("Col 0: 11111110 (0xFE)"));
        assert!(text.contains("Col 7: 01111111 (0x7F)"));
        assert!(text.contains("Pos 3: 00000000 (0x00)"));
    }

    #[test]
    fn test_matrix_lines() {
        let mut matrix = PixelMatrix::new();
        matrix.set(2, 0, true);
        let text = render_planes(&encode(&matrix), &matrix);
        assert!(text.contains("  0 1 2 3 4 5 6 7  <- columns\n"));
        assert!(text.contains("\n2 ■ □ □ □ □ □ □ □\n"));
        assert!(text.contains("\n0 □ □ □ □ □ □ □ □\n"));
    }

    #[test]
    fn test_footer_always_present() {
        let matrix = PixelMatrix::new();
        let text = render_planes(&encode(&matrix), &matrix);
        assert!(text.ends_with("• Persistence of vision assembles the full image\n"));
    }
}
