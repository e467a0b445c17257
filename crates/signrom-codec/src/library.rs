//! Built-in and saved patterns.

use chrono::{DateTime, Utc};
use signrom_model::{GRID_SIZE, Pattern, PixelMatrix};
use tracing::debug;

/// A built-in pattern, stored as a 0/1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedPattern {
    pub name: &'static str,
    pub table: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl PredefinedPattern {
    #[must_use]
    pub fn matrix(&self) -> PixelMatrix {
        PixelMatrix::from_table(&self.table)
    }

    #[must_use]
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name, self.matrix())
    }
}

/// The built-in pattern table.
pub static PREDEFINED_PATTERNS: [PredefinedPattern; 4] = [
    PredefinedPattern {
        name: "Cross",
        table: [
            [1, 1, 0, 0, 0, 0, 1, 1],
            [1, 1, 1, 0, 0, 1, 1, 1],
            [0, 1, 1, 1, 1, 1, 1, 0],
            [0, 0, 1, 1, 1, 1, 0, 0],
            [0, 0, 1, 1, 1, 1, 0, 0],
            [0, 1, 1, 1, 1, 1, 1, 0],
            [1, 1, 1, 0, 0, 1, 1, 1],
            [1, 1, 0, 0, 0, 0, 1, 1],
        ],
    },
    PredefinedPattern {
        name: "Plus",
        table: [
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
        ],
    },
    PredefinedPattern {
        name: "Star",
        table: [
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 1, 1, 1, 1, 0, 0],
            [0, 1, 1, 1, 1, 1, 1, 0],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [0, 1, 1, 1, 1, 1, 1, 0],
            [0, 0, 1, 1, 1, 1, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
        ],
    },
    PredefinedPattern {
        name: "Heart",
        table: [
            [0, 1, 1, 0, 0, 1, 1, 0],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [1, 1, 1, 1, 1, 1, 1, 1],
            [0, 1, 1, 1, 1, 1, 1, 0],
            [0, 0, 1, 1, 1, 1, 0, 0],
            [0, 0, 0, 1, 1, 0, 0, 0],
            [0, 0, 0, 0, 0, 0, 0, 0],
        ],
    },
];

/// Look up a built-in pattern by name, ignoring case.
#[must_use]
pub fn find_predefined(name: &str) -> Option<&'static PredefinedPattern> {
    let name = name.trim();
    PREDEFINED_PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
}

/// Timestamp attached to saved patterns (`YYYY-MM-DDTHH-MM-SS`, UTC).
#[must_use]
pub fn pattern_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%dT%H-%M-%S").to_string()
}

/// Append-only list of patterns saved during a session.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: Vec<Pattern>,
}

impl PatternLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Save a snapshot of `matrix` as `Pattern N`, stamped with `at`.
    /// Returns a copy of the stored entry.
    pub fn save(&mut self, matrix: PixelMatrix, at: DateTime<Utc>) -> Pattern {
        let name = format!("Pattern {}", self.patterns.len() + 1);
        debug!(pattern = name.as_str(), lit = matrix.lit_count(), "saving pattern");
        let pattern = Pattern::new(name, matrix).with_timestamp(pattern_timestamp(at));
        self.patterns.push(pattern.clone());
        pattern
    }

    /// Save a snapshot stamped with the current time.
    pub fn save_now(&mut self, matrix: PixelMatrix) -> Pattern {
        self.save(matrix, Utc::now())
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Pattern> {
        self.patterns.get(index)
    }

    /// Find a saved pattern by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|pattern| pattern.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
