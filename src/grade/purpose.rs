#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use serde::{Deserialize, Serialize};

use super::{ScoringError, tfidf::TfidfVectorizer};
use crate::util::{population_std_dev, word_count};

/// How the TF-IDF vocabulary signal becomes a purpose score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PurposeStrategy {
    /// Share of a fixed term budget the document fills.
    VocabularyBreadth {
        /// Shorter documents score zero.
        min_words:    usize,
        /// Term budget; reaching it earns full marks.
        max_features: usize,
    },
    /// Spread of term weights; a few dominant terms signal a focused topic.
    WeightSpread {
        /// Shorter documents score zero.
        min_words: usize,
        /// Multiplier applied to the weight spread before dividing by 100.
        scale:     f64,
    },
}

impl PurposeStrategy {
    /// At least 50 words, 50-term budget.
    pub fn classic() -> Self {
        Self::VocabularyBreadth {
            min_words:    50,
            max_features: 50,
        }
    }

    /// At least 5 words, weight spread scaled by 1000.
    pub fn relaxed() -> Self {
        Self::WeightSpread {
            min_words: 5,
            scale:     1000.0,
        }
    }

    /// Documents shorter than this score zero.
    pub fn min_words(&self) -> usize {
        match *self {
            Self::VocabularyBreadth { min_words, .. } | Self::WeightSpread { min_words, .. } => {
                min_words
            }
        }
    }

    /// Scores `text` out of `weight`, clamped into `[0, weight]`.
    pub fn score(&self, text: &str, weight: f64) -> Result<f64, ScoringError> {
        if word_count(text) < self.min_words() {
            return Ok(0.0);
        }

        let raw = match *self {
            Self::VocabularyBreadth { max_features, .. } => {
                let terms = TfidfVectorizer::new()
                    .with_max_features(max_features)
                    .fit_transform(text)?;
                terms.len() as f64 / max_features.max(1) as f64 * weight
            }
            Self::WeightSpread { scale, .. } => {
                let terms = TfidfVectorizer::new().fit_transform(text)?;
                let weights: Vec<f64> = terms.into_iter().map(|(_, w)| w).collect();
                let spread = population_std_dev(&weights).unwrap_or_default();
                spread * scale / 100.0 * weight
            }
        };

        Ok(raw.clamp(0.0, weight))
    }
}

impl Default for PurposeStrategy {
    fn default() -> Self {
        Self::classic()
    }
}
