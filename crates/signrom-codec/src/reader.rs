//! Reading import buffers and exported planes from disk.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use signrom_model::{EditMode, EpromPlanes, PLANE_LEN};
use tracing::debug;

use crate::decoder::{Decoded, check_consistency, decode};
use crate::error::{Result, SignError};

fn open(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(SignError::file_not_found(path));
    }
    Ok(BufReader::new(File::open(path)?))
}

/// Read a whole import file as raw bytes.
pub fn read_import(path: &Path) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    open(path)?.read_to_end(&mut bytes)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read import buffer");
    Ok(bytes)
}

/// Read an import file and decode it for `mode`.
pub fn import_file(path: &Path, mode: EditMode) -> Result<Decoded> {
    let raw = read_import(path)?;
    Ok(decode(&raw, mode)?)
}

/// Read one plane; the input must hold exactly [`PLANE_LEN`] bytes.
pub fn read_plane<R: Read>(mut reader: R) -> Result<[u8; PLANE_LEN]> {
    let mut bytes = Vec::with_capacity(PLANE_LEN);
    reader.read_to_end(&mut bytes)?;
    <[u8; PLANE_LEN]>::try_from(bytes.as_slice()).map_err(|_| SignError::PlaneLength {
        expected: PLANE_LEN,
        actual: bytes.len(),
    })
}

/// Read one plane file.
pub fn read_plane_file(path: &Path) -> Result<[u8; PLANE_LEN]> {
    read_plane(open(path)?)
}

/// Read an exported pair and check that the planes agree.
pub fn read_planes(columns: &Path, rows: &Path) -> Result<EpromPlanes> {
    let planes = EpromPlanes {
        columns: read_plane_file(columns)?,
        rows: read_plane_file(rows)?,
    };
    check_consistency(&planes)?;
    Ok(planes)
}
