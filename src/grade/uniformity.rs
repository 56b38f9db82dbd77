#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Sentence-length uniformity: neither monotone nor erratic sentence lengths
//! read well, so the score peaks at a moderate spread of lengths.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::util::{population_std_dev, word_count};

/// Sentence terminators.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!]+").expect("sentence regex"));

/// Parameters of the uniformity score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformityStrategy {
    /// A sentence counts only when it has more than this many words.
    pub min_words:     usize,
    /// Fewer counted sentences than this scores zero.
    pub min_sentences: usize,
    /// Standard deviation of sentence lengths that earns full marks.
    pub target_stddev: f64,
    /// Points lost per unit of distance from the target.
    pub penalty:       f64,
}

impl UniformityStrategy {
    /// Sentences over three words, at least five of them, 0.3 per unit.
    pub fn classic() -> Self {
        Self {
            min_words:     3,
            min_sentences: 5,
            target_stddev: 10.0,
            penalty:       0.3,
        }
    }

    /// Any non-empty sentence, at least two of them, 0.1 per unit.
    pub fn relaxed() -> Self {
        Self {
            min_words:     0,
            min_sentences: 2,
            target_stddev: 10.0,
            penalty:       0.1,
        }
    }

    /// Word counts of the sentences that pass the length filter.
    pub fn sentence_lengths(&self, text: &str) -> Vec<usize> {
        SENTENCE_END
            .split(text)
            .map(word_count)
            .filter(|&n| n > self.min_words)
            .collect()
    }

    /// Scores `text` out of `weight`. Not enough sentences scores exactly 0.
    pub fn score(&self, text: &str, weight: f64) -> f64 {
        let lengths = self.sentence_lengths(text);
        if lengths.len() < self.min_sentences {
            return 0.0;
        }
        let lengths: Vec<f64> = lengths.into_iter().map(|n| n as f64).collect();
        let Some(std_dev) = population_std_dev(&lengths) else {
            return 0.0;
        };
        (weight - (std_dev - self.target_stddev).abs() * self.penalty).max(0.0)
    }
}

impl Default for UniformityStrategy {
    fn default() -> Self {
        Self::classic()
    }
}
