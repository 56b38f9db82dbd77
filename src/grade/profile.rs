#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{GrammarStrategy, LengthStrategy, PurposeStrategy, UniformityStrategy};
use crate::document::SkipPolicy;

/// Named bundles of scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScoringPreset {
    /// Strict thresholds, word-count length.
    #[default]
    Classic,
    /// Lower thresholds, page layout length.
    Relaxed,
}

impl FromStr for ScoringPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "relaxed" => Ok(Self::Relaxed),
            other => Err(format!("unknown scoring preset `{other}`, expected classic or relaxed")),
        }
    }
}

impl fmt::Display for ScoringPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Relaxed => write!(f, "relaxed"),
        }
    }
}

/// Every parameter the rubric scorer needs, one strategy per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringProfile {
    /// Cover/TOC/bibliography trimming.
    pub skip:       SkipPolicy,
    /// Sentence uniformity.
    pub uniformity: UniformityStrategy,
    /// Clear purpose.
    pub purpose:    PurposeStrategy,
    /// Spelling and grammar.
    pub grammar:    GrammarStrategy,
    /// Length and format.
    pub length:     LengthStrategy,
}

impl From<ScoringPreset> for ScoringProfile {
    fn from(preset: ScoringPreset) -> Self {
        match preset {
            ScoringPreset::Classic => Self {
                skip:       SkipPolicy::classic(),
                uniformity: UniformityStrategy::classic(),
                purpose:    PurposeStrategy::classic(),
                grammar:    GrammarStrategy::classic(),
                length:     LengthStrategy::classic(),
            },
            ScoringPreset::Relaxed => Self {
                skip:       SkipPolicy::relaxed(),
                uniformity: UniformityStrategy::relaxed(),
                purpose:    PurposeStrategy::relaxed(),
                grammar:    GrammarStrategy::relaxed(),
                length:     LengthStrategy::relaxed(),
            },
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        ScoringPreset::Classic.into()
    }
}
