use serde::{Deserialize, Serialize};

use crate::matrix::PixelMatrix;

/// Named snapshot of a matrix.
///
/// Patterns are never edited after creation; loading one copies its matrix
/// into the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub name: String,
    pub matrix: PixelMatrix,
    /// Save time, `YYYY-MM-DDTHH-MM-SS` (UTC). `None` for built-in patterns.
    pub timestamp: Option<String>,
}

impl Pattern {
    #[must_use]
    pub fn new(name: impl Into<String>, matrix: PixelMatrix) -> Self {
        Self {
            name: name.into(),
            matrix,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}
