//! Scoring mode selection.
//!
//! The mode is a closed enum; string inputs are normalized exactly once at the
//! ingestion boundary instead of being compared ad hoc inside scoring code.
//! The historical alias `"descending"` and any unrecognized value both decode
//! to [`ScoringMode::Weighted`].

use serde::{Deserialize, Deserializer, Serialize};

/// Scoring strategy for a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoringMode {
    /// One point per exact positional match with the consensus order.
    Simple,
    /// Points proportional to closeness: `max_distance - total displacement`.
    #[default]
    Weighted,
}

impl ScoringMode {
    /// Normalize a raw mode string. Unknown values fall back to `Weighted`.
    pub fn normalize(value: &str) -> Self {
        match value {
            "simple" => Self::Simple,
            // "descending" was the pre-rename spelling of weighted.
            _ => Self::Weighted,
        }
    }

    /// Canonical string spelling, as serialized into share codes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Weighted => "weighted",
        }
    }
}

impl<'de> Deserialize<'de> for ScoringMode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::normalize(&raw))
    }
}
