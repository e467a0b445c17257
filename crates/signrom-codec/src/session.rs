//! Editor session state.
//!
//! The session owns everything an editor front end mutates (mode, message,
//! grid, saved patterns) and calls the pure codec functions each time a
//! preview or export is requested. Nothing encoded is cached, so planes can
//! never go stale relative to the grid.

use chrono::{DateTime, Utc};
use signrom_model::{EditMode, EpromPlanes, Pattern, PixelMatrix};
use tracing::debug;

use crate::decoder::{decode_matrix, decode_text};
use crate::encoder::encode;
use crate::error::{Result, SignError, ValidationError};
use crate::library::{PatternLibrary, find_predefined};
use crate::matrix::from_bits;
use crate::preview::render_planes;
use crate::text::{rasterize, validate};

/// Mutable editor state for one user session.
#[derive(Debug, Clone, Default)]
pub struct EditorSession {
    mode: EditMode,
    text: String,
    rejection: Option<ValidationError>,
    matrix: PixelMatrix,
    saved: PatternLibrary,
    selected: Option<String>,
}

impl EditorSession {
    /// New session in text mode with an empty message and a blank grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// New session starting in `mode`.
    #[must_use]
    pub fn with_mode(mode: EditMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Current message as typed (upper-cased), valid or not.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rejection from the last text edit, if the message is currently invalid.
    #[must_use]
    pub fn rejection(&self) -> Option<&ValidationError> {
        self.rejection.as_ref()
    }

    /// The drawn grid.
    #[must_use]
    pub fn matrix(&self) -> &PixelMatrix {
        &self.matrix
    }

    /// Name of the pattern last loaded into the grid.
    #[must_use]
    pub fn selected_pattern(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    #[must_use]
    pub fn saved_patterns(&self) -> &PatternLibrary {
        &self.saved
    }

    /// Switch modes. The grid, message, rejection and selection are all reset;
    /// saved patterns are kept.
    pub fn switch_mode(&mut self, mode: EditMode) {
        debug!(from = %self.mode, to = %mode, "switching edit mode");
        self.mode = mode;
        self.text.clear();
        self.rejection = None;
        self.matrix = PixelMatrix::new();
        self.selected = None;
    }

    /// Replace the message. The candidate is stored upper-cased even when it
    /// is rejected, so the caller can keep showing what was typed.
    pub fn set_text(&mut self, candidate: &str) -> std::result::Result<(), ValidationError> {
        self.text = candidate.to_uppercase();
        match validate(candidate) {
            Ok(_) => {
                self.rejection = None;
                Ok(())
            }
            Err(err) => {
                debug!(reason = err.reason(), "text rejected");
                self.rejection = Some(err.clone());
                Err(err)
            }
        }
    }

    /// Flip one LED of the drawn grid.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<bool> {
        self.matrix.toggle(row, col)
    }

    /// Replace the whole grid.
    pub fn load_matrix(&mut self, matrix: PixelMatrix) {
        self.matrix = matrix;
        self.selected = None;
    }

    /// Copy a built-in pattern into the grid.
    pub fn load_predefined(&mut self, name: &str) -> Result<()> {
        let pattern = find_predefined(name).ok_or_else(|| SignError::unknown_pattern(name))?;
        self.matrix = pattern.matrix();
        self.selected = Some(pattern.name.to_string());
        Ok(())
    }

    /// Copy a saved pattern into the grid.
    pub fn load_saved(&mut self, name: &str) -> Result<()> {
        let pattern = self
            .saved
            .find(name)
            .ok_or_else(|| SignError::unknown_pattern(name))?;
        self.matrix = pattern.matrix;
        self.selected = Some(pattern.name.clone());
        Ok(())
    }

    /// Load a pattern by name, built-ins first.
    pub fn load_pattern(&mut self, name: &str) -> Result<()> {
        if find_predefined(name).is_some() {
            self.load_predefined(name)
        } else {
            self.load_saved(name)
        }
    }

    /// The matrix that preview and export would encode.
    ///
    /// In text mode this is the rasterized message folded into the grid; an
    /// empty or invalid message is an error.
    pub fn source_matrix(&self) -> Result<PixelMatrix> {
        match self.mode {
            EditMode::Draw => Ok(self.matrix),
            EditMode::Text => {
                if self.text.is_empty() {
                    return Err(SignError::EmptyText);
                }
                let text = validate(&self.text)?;
                Ok(from_bits(&rasterize(&text)))
            }
        }
    }

    /// Encode the current source into both planes.
    pub fn planes(&self) -> Result<EpromPlanes> {
        Ok(encode(&self.source_matrix()?))
    }

    /// Render the preview for the current source.
    pub fn preview(&self) -> Result<String> {
        let matrix = self.source_matrix()?;
        Ok(render_planes(&encode(&matrix), &matrix))
    }

    /// Save the current source as a new pattern stamped with `at`.
    pub fn save_current_at(&mut self, at: DateTime<Utc>) -> Result<Pattern> {
        let matrix = self.source_matrix()?;
        Ok(self.saved.save(matrix, at))
    }

    /// Save the current source as a new pattern.
    pub fn save_current(&mut self) -> Result<Pattern> {
        self.save_current_at(Utc::now())
    }

    /// Clear the active mode's input.
    pub fn clear(&mut self) {
        match self.mode {
            EditMode::Text => self.text.clear(),
            EditMode::Draw => {
                self.matrix.clear();
                self.selected = None;
            }
        }
        self.rejection = None;
    }

    /// Load an import buffer into the active mode.
    ///
    /// Draw mode replaces the grid. Text mode replaces the message with the
    /// decoded buffer and re-runs validation; if the buffer is not UTF-8 the
    /// session is left untouched.
    pub fn import(&mut self, raw: &[u8]) -> Result<()> {
        match self.mode {
            EditMode::Draw => {
                self.matrix = decode_matrix(raw);
                self.selected = None;
            }
            EditMode::Text => {
                let decoded = decode_text(raw)?;
                self.rejection = validate(&decoded).err();
                self.text = decoded;
            }
        }
        Ok(())
    }
}
