//! Property tests for the matrix codec, encoder and import path.

use proptest::prelude::*;

use signrom_codec::{
    Decoded, EditMode, GRID_SIZE, PixelMatrix, ValidationError, decode, encode, from_bits,
    rasterize, reassemble, to_bits, to_bytes, validate,
};

fn any_matrix() -> impl Strategy<Value = PixelMatrix> {
    any::<[[bool; GRID_SIZE]; GRID_SIZE]>().prop_map(PixelMatrix::from_rows)
}

proptest! {
    #[test]
    fn bits_round_trip(matrix in any_matrix()) {
        prop_assert_eq!(from_bits(&to_bits(&matrix)), matrix);
    }

    #[test]
    fn encode_is_deterministic(matrix in any_matrix()) {
        prop_assert_eq!(encode(&matrix), encode(&matrix));
    }

    #[test]
    fn column_plane_marks_only_own_column(matrix in any_matrix()) {
        let planes = encode(&matrix);
        for col in 0..GRID_SIZE {
            let byte = planes.columns[col];
            if matrix.column_is_active(col) {
                prop_assert_eq!(byte, !(1u8 << col));
                prop_assert_eq!(byte.count_zeros(), 1);
            } else {
                prop_assert_eq!(byte, 0xFF);
            }
        }
    }

    #[test]
    fn row_plane_clears_lit_rows(matrix in any_matrix()) {
        let planes = encode(&matrix);
        for col in 0..GRID_SIZE {
            for row in 0..GRID_SIZE {
                let bit_clear = planes.rows[col] & (1 << row) == 0;
                prop_assert_eq!(bit_clear, matrix.is_lit(row, col));
            }
        }
    }

    #[test]
    fn exported_planes_import_back(matrix in any_matrix()) {
        let planes = encode(&matrix);
        let buffer = to_bytes(&reassemble(&planes));
        prop_assert_eq!(decode(&buffer, EditMode::Draw), Ok(Decoded::Matrix(matrix)));
    }

    #[test]
    fn max_length_messages_accepted(text in "[A-Z0-9 ]{20}") {
        prop_assert!(validate(&text).is_ok());
    }

    #[test]
    fn over_length_messages_rejected(text in "[A-Z0-9 ]{21}") {
        prop_assert_eq!(
            validate(&text),
            Err(ValidationError::TooLong { length: 21, max: 20 })
        );
    }

    #[test]
    fn at_sign_always_invalid(prefix in "[A-Z0-9 ]{0,30}", suffix in "[A-Z0-9 ]{0,30}") {
        let candidate = format!("{prefix}@{suffix}");
        let err = validate(&candidate).unwrap_err();
        prop_assert_eq!(err.reason(), "invalid character set");
    }
}

#[test]
fn all_on_planes() {
    let planes = encode(&PixelMatrix::all_lit());
    assert_eq!(
        planes.columns,
        [0xFE, 0xFD, 0xFB, 0xF7, 0xEF, 0xDF, 0xBF, 0x7F]
    );
    assert_eq!(planes.rows, [0; 8]);
}

#[test]
fn all_off_planes() {
    let planes = encode(&PixelMatrix::new());
    assert_eq!(planes.columns, [0xFF; 8]);
    assert_eq!(planes.rows, [0xFF; 8]);
}

#[test]
fn letter_a_lands_on_first_row() {
    let bits = to_bits(&from_bits(&rasterize(&validate("A").unwrap())));
    let first: String = bits
        .iter()
        .take(8)
        .map(|b| if b { '1' } else { '0' })
        .collect();
    assert_eq!(first, format!("{:08b}", b'A'));
    assert!(bits.iter().skip(8).all(|b| !b));
}

#[test]
fn long_message_keeps_first_eight_characters() {
    let text = validate("PHARMACIE DE GARDE").unwrap();
    let bits = rasterize(&text);
    assert_eq!(bits.len(), 18 * 8);

    let matrix = from_bits(&bits);
    assert_eq!(to_bytes(&matrix), *b"PHARMACI");
}
