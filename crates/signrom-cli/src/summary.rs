use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use signrom_codec::{COLUMN_IDLE, Decoded, EpromPlanes, GRID_SIZE, PixelMatrix, format_grid};

use crate::types::{EncodeResult, ImportResult, InspectResult};

pub fn print_encode(result: &EncodeResult, json: bool) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    println!("Source: {}", result.source);
    println!("Mode: {}", result.mode);
    println!("{}", plane_table(&result.planes));
    match (&result.columns_file, &result.rows_file) {
        (Some(columns), Some(rows)) => {
            println!("EPROM 1: {}", columns.display());
            println!("EPROM 2: {}", rows.display());
        }
        _ => println!("Dry run: no files written"),
    }
    Ok(())
}

pub fn print_import(result: &ImportResult) {
    println!("File: {}", result.file.display());
    println!("Mode: {}", result.mode);
    println!("Bytes: {} ({})", result.raw.len(), hex_dump(&result.raw));
    match &result.decoded {
        Decoded::Matrix(matrix) => {
            println!("Lit LEDs: {}", matrix.lit_count());
            print!("{}", format_grid(matrix));
        }
        Decoded::Text(text) => println!("Text: {text:?}"),
    }
}

pub fn print_inspect(result: &InspectResult) {
    println!("EPROM 1: {}", result.columns_file.display());
    println!("EPROM 2: {}", result.rows_file.display());
    println!("{}", plane_table(&result.planes));
    println!("Planes agree; reassembled grid:");
    print!("{}", grid_table(&result.matrix));
}

/// One row per scan position: column byte, row byte, and the LEDs lit.
fn plane_table(planes: &EpromPlanes) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Pos"),
        header_cell("EPROM 1"),
        header_cell("EPROM 2"),
        header_cell("Lit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (pos, (&column, &row)) in planes.columns.iter().zip(&planes.rows).enumerate() {
        let lit = row.count_zeros();
        table.add_row(vec![
            Cell::new(pos),
            byte_cell(column, column != COLUMN_IDLE),
            byte_cell(row, lit > 0),
            if lit > 0 { Cell::new(lit) } else { dim_cell(lit) },
        ]);
    }
    table
}

fn grid_table(matrix: &PixelMatrix) -> String {
    let mut table = Table::new();
    let mut header = vec![header_cell("")];
    header.extend((0..GRID_SIZE).map(|col| header_cell(&col.to_string())));
    table.set_header(header);
    apply_table_style(&mut table);
    for (r, row) in matrix.rows().iter().enumerate() {
        let mut cells = vec![header_cell(&r.to_string())];
        cells.extend(row.iter().map(|&lit| {
            if lit {
                Cell::new("■").fg(Color::Yellow)
            } else {
                dim_cell("□")
            }
        }));
        table.add_row(cells);
    }
    format!("{table}\n")
}

fn byte_cell(value: u8, active: bool) -> Cell {
    let text = format!("{value:08b} (0x{value:02X})");
    if active {
        Cell::new(text).add_attribute(Attribute::Bold)
    } else {
        dim_cell(text)
    }
}

fn hex_dump(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return "-".to_string();
    }
    hex::encode_upper(bytes)
        .as_bytes()
        .chunks(2)
        .map(|pair| String::from_utf8_lossy(pair).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_dump_groups_bytes() {
        assert_eq!(hex_dump(&[0x50, 0x48, 0x0A]), "50 48 0A");
        assert_eq!(hex_dump(&[]), "-");
    }

    #[test]
    fn plane_table_has_row_per_position() {
        let table = plane_table(&EpromPlanes::idle());
        assert_eq!(table.row_iter().count(), GRID_SIZE);
    }
}
