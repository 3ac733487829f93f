use crate::config::ScoringParams;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Qualitative band for the distance between a ratio and φ.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Excellent,
    Good,
    Fair,
    NotClose,
}

impl Status {
    pub fn from_difference(difference: f64, params: &ScoringParams) -> Self {
        if difference < params.threshold_excellent {
            Self::Excellent
        } else if difference < params.threshold_good {
            Self::Good
        } else if difference < params.threshold_fair {
            Self::Fair
        } else {
            Self::NotClose
        }
    }

    /// Human-readable label shown next to the score.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent — very close to φ",
            Self::Good => "Good — moderately close to φ",
            Self::Fair => "Fair approximation",
            Self::NotClose => "Not close to φ",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of scoring one selection. Never mutated after construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub ratio: f64,
    pub long_side: u32,
    pub short_side: u32,
    pub difference: f64,
    pub score: u8,
    pub status: Status,
}
