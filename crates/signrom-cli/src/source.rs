//! Image sources accepted on the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use signrom_codec::{EditMode, EditorSession, parse_grid};
use tracing::debug;

/// One of the three ways to describe an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Message rasterized in text mode.
    Text(String),
    /// Built-in pattern, loaded in draw mode.
    Pattern(String),
    /// Grid file, loaded in draw mode.
    Grid(PathBuf),
}

impl ImageSource {
    /// Edit mode the source is encoded under; picks the export file prefix.
    #[must_use]
    pub fn mode(&self) -> EditMode {
        match self {
            Self::Text(_) => EditMode::Text,
            Self::Pattern(_) | Self::Grid(_) => EditMode::Draw,
        }
    }

    /// Build an editor session holding this source.
    pub fn load_session(&self) -> Result<EditorSession> {
        let mut session = EditorSession::with_mode(self.mode());
        match self {
            Self::Text(text) => {
                session
                    .set_text(text)
                    .with_context(|| format!("rejected message {text:?}"))?;
            }
            Self::Pattern(name) => {
                session.load_predefined(name)?;
            }
            Self::Grid(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("read grid file {}", path.display()))?;
                let matrix = parse_grid(&contents)
                    .with_context(|| format!("parse grid file {}", path.display()))?;
                session.load_matrix(matrix);
            }
        }
        debug!(mode = %session.mode(), "loaded image source");
        Ok(session)
    }

    /// Short human label, used in summaries.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Text(text) => format!("text {:?}", text.to_uppercase()),
            Self::Pattern(name) => format!("pattern {name}"),
            Self::Grid(path) => format!("grid {}", path.display()),
        }
    }
}
