//! Editor enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the sign image is authored.
///
/// The mode decides the export file prefix and how an imported buffer is
/// interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Image rendered from a short ASCII message.
    #[default]
    Text,
    /// Image drawn cell by cell or loaded from a pattern.
    Draw,
}

impl EditMode {
    /// Prefix used in exported file names.
    #[must_use]
    pub const fn file_prefix(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Draw => "drawing",
        }
    }

    /// Lowercase identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EditMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "draw" | "drawing" => Ok(Self::Draw),
            other => Err(format!("unknown edit mode: {other}")),
        }
    }
}
