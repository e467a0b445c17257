//! EPROM image writer.
//!
//! Each plane is written to its own file of exactly [`PLANE_LEN`] raw bytes:
//! no header, no checksum, no length prefix. Which file is which is carried
//! only by the file name:
//!
//! ```text
//! pharmacy-sign-{text|drawing}-eprom1-columns-{timestamp}.bin
//! pharmacy-sign-{text|drawing}-eprom2-rows-{timestamp}.bin
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use signrom_model::{EditMode, EpromPlanes, PLANE_LEN};
use tracing::{debug, info};

use crate::error::Result;

/// Common stem of exported file names.
pub const FILE_STEM: &str = "pharmacy-sign";

/// Label of the column-select file.
pub const COLUMNS_LABEL: &str = "eprom1-columns";

/// Label of the row-select file.
pub const ROWS_LABEL: &str = "eprom2-rows";

/// Extension of exported files.
pub const FILE_EXTENSION: &str = "bin";

/// Paths of a written plane pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub columns: PathBuf,
    pub rows: PathBuf,
}

/// Export timestamp: ISO-8601 UTC with `:` and `.` replaced by `-`.
#[must_use]
pub fn export_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

/// File name of the column-select plane.
#[must_use]
pub fn columns_file_name(mode: EditMode, timestamp: &str) -> String {
    file_name(mode, COLUMNS_LABEL, timestamp)
}

/// File name of the row-select plane.
#[must_use]
pub fn rows_file_name(mode: EditMode, timestamp: &str) -> String {
    file_name(mode, ROWS_LABEL, timestamp)
}

fn file_name(mode: EditMode, label: &str, timestamp: &str) -> String {
    format!(
        "{FILE_STEM}-{prefix}-{label}-{timestamp}.{FILE_EXTENSION}",
        prefix = mode.file_prefix()
    )
}

/// Write one plane to `writer`.
pub fn write_plane<W: Write>(writer: W, plane: &[u8; PLANE_LEN]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    writer.write_all(plane)?;
    writer.flush()?;
    Ok(())
}

/// Writes plane pairs into a directory.
#[derive(Debug, Clone)]
pub struct EpromWriter {
    dir: PathBuf,
    mode: EditMode,
    timestamp: String,
}

impl EpromWriter {
    /// Writer for `dir`, stamped with the current time.
    pub fn new(dir: impl Into<PathBuf>, mode: EditMode) -> Self {
        Self {
            dir: dir.into(),
            mode,
            timestamp: export_timestamp(Utc::now()),
        }
    }

    /// Override the timestamp used in file names.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Paths the pair will be written to.
    #[must_use]
    pub fn paths(&self) -> ExportPaths {
        ExportPaths {
            columns: self.dir.join(columns_file_name(self.mode, &self.timestamp)),
            rows: self.dir.join(rows_file_name(self.mode, &self.timestamp)),
        }
    }

    /// Write both planes. The directory is created if needed.
    pub fn write(&self, planes: &EpromPlanes) -> Result<ExportPaths> {
        std::fs::create_dir_all(&self.dir)?;
        let paths = self.paths();

        write_plane_file(&paths.columns, &planes.columns)?;
        write_plane_file(&paths.rows, &planes.rows)?;

        info!(
            mode = %self.mode,
            columns = %paths.columns.display(),
            rows = %paths.rows.display(),
            "wrote EPROM planes"
        );
        Ok(paths)
    }
}

fn write_plane_file(path: &Path, plane: &[u8; PLANE_LEN]) -> Result<()> {
    debug!(path = %path.display(), bytes = PLANE_LEN, "writing plane");
    write_plane(File::create(path)?, plane)
}

/// Write a plane pair into `dir` for `mode`, stamped with the current time.
pub fn write_planes(dir: &Path, mode: EditMode, planes: &EpromPlanes) -> Result<ExportPaths> {
    EpromWriter::new(dir, mode).write(planes)
}
