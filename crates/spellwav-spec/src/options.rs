//! Render options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Content type attached to rendered output by default.
pub const DEFAULT_CONTENT_TYPE: &str = "audio/x-wav";

/// Where the capital-marker clip is spoken relative to an uppercase letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalPlacement {
    /// "capital b"
    #[default]
    Before,
    /// "b capital"
    After,
}

impl CapitalPlacement {
    /// Returns the placement as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapitalPlacement::Before => "before",
            CapitalPlacement::After => "after",
        }
    }
}

impl std::fmt::Display for CapitalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CapitalPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "before" => Ok(CapitalPlacement::Before),
            "after" => Ok(CapitalPlacement::After),
            _ => Err(format!("unknown capital placement: {}", s)),
        }
    }
}

/// Options controlling how text is rendered.
///
/// Every field has a default, so a JSON document only needs to name the
/// fields it changes:
///
/// ```
/// use spellwav_spec::{CapitalPlacement, RenderOptions};
///
/// let options = RenderOptions::from_json(r#"{ "capital": "after", "echo": true }"#).unwrap();
/// assert_eq!(options.capital, CapitalPlacement::After);
/// assert!(options.echo);
/// assert!(!options.distort);
/// assert!(options.fold_cases);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Directory holding one `.wav` clip per character.
    ///
    /// `None` leaves the choice to the caller (the CLI falls back to a
    /// platform data directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound_dir: Option<PathBuf>,
    /// Mix the spoken content with itself backwards.
    pub distort: bool,
    /// Add a 0.4 second feedback echo that plays into the trailing silence.
    pub echo: bool,
    /// Capital-marker placement.
    pub capital: CapitalPlacement,
    /// Look up letters case-insensitively ('A' and 'a' share a clip).
    pub fold_cases: bool,
    /// Media type to hand to the delivery layer.
    pub content_type: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sound_dir: None,
            distort: false,
            echo: false,
            capital: CapitalPlacement::Before,
            fold_cases: true,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl RenderOptions {
    /// Default options with both effects switched on.
    pub fn distorted() -> Self {
        Self {
            distort: true,
            echo: true,
            ..Self::default()
        }
    }

    /// Sets the clip directory.
    pub fn with_sound_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sound_dir = Some(dir.into());
        self
    }

    /// Sets the capital-marker placement.
    pub fn with_capital(mut self, capital: CapitalPlacement) -> Self {
        self.capital = capital;
        self
    }

    /// Sets case folding for clip lookup.
    pub fn with_fold_cases(mut self, fold_cases: bool) -> Self {
        self.fold_cases = fold_cases;
        self
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
