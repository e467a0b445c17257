use std::path::PathBuf;

use serde::Serialize;
use signrom_codec::{Decoded, EditMode, EpromPlanes, PixelMatrix, format_grid};

/// Outcome of `signrom encode`.
#[derive(Debug, Serialize)]
pub struct EncodeResult {
    pub source: String,
    pub mode: EditMode,
    pub columns_hex: String,
    pub rows_hex: String,
    pub grid: Vec<String>,
    pub columns_file: Option<PathBuf>,
    pub rows_file: Option<PathBuf>,
    #[serde(skip)]
    pub planes: EpromPlanes,
}

impl EncodeResult {
    pub fn new(source: String, mode: EditMode, planes: EpromPlanes, matrix: &PixelMatrix) -> Self {
        Self {
            source,
            mode,
            columns_hex: hex::encode_upper(planes.columns),
            rows_hex: hex::encode_upper(planes.rows),
            grid: grid_lines(matrix),
            columns_file: None,
            rows_file: None,
            planes,
        }
    }
}

#[derive(Debug)]
pub struct ImportResult {
    pub file: PathBuf,
    pub mode: EditMode,
    pub raw: Vec<u8>,
    pub decoded: Decoded,
}

#[derive(Debug)]
pub struct InspectResult {
    pub columns_file: PathBuf,
    pub rows_file: PathBuf,
    pub planes: EpromPlanes,
    pub matrix: PixelMatrix,
}

pub fn grid_lines(matrix: &PixelMatrix) -> Vec<String> {
    format_grid(matrix).lines().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use signrom_codec::{encode, find_predefined};

    #[test]
    fn encode_result_json_uses_hex_planes() {
        let plus = find_predefined("Plus").unwrap().matrix();
        let result = EncodeResult::new("pattern Plus".into(), EditMode::Draw, encode(&plus), &plus);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "draw");
        assert_eq!(json["rows_hex"], "E7E7E70000E7E7E7");
        assert_eq!(json["grid"][3], "########");
        assert!(json["columns_file"].is_null());
        assert!(json.get("planes").is_none());
    }
}
