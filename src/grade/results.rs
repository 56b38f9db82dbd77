#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use bon::Builder;
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::{
    config::WeightConfig,
    constants::{GRAMMAR_REQ, LENGTH_REQ, PURPOSE_REQ, UNIFORMITY_REQ},
    util::round2,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Builder, Serialize, Deserialize)]
/// A struct representing a grade
pub struct Grade {
    /// The actual grade received
    pub grade:  f64,
    /// The maximum grade possible
    pub out_of: f64,
}

impl Grade {
    /// Creates a new grade -
    /// * `grade` - The actual grade received
    /// * `out_of` - The maximum grade possible
    pub fn new(grade: f64, out_of: f64) -> Self {
        Self { grade, out_of }
    }

    /// Creates a grade from a raw score, clamped into `[0, out_of]` and
    /// rounded to two decimals.
    pub fn bounded(raw: f64, out_of: f64) -> Self {
        let grade = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, out_of) };
        Self::new(round2(grade), out_of)
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}/{:.2}", self.grade, self.out_of)
    }
}

#[derive(Tabled, Clone, Debug, Default, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// A struct to store grading results and display them
pub struct GradeResult {
    #[tabled(rename = "Requirement")]
    /// * `requirement`: rubric category name
    pub(crate) requirement: String,
    #[tabled(rename = "Grade")]
    /// * `grade`: grade received for above category
    #[builder(default)]
    pub(crate) grade:       Grade,
    #[tabled(rename = "Reason")]
    /// * `reason`: why the category scored zero, if it failed
    #[builder(default)]
    pub(crate) reason:      String,
}

impl GradeResult {
    /// Returns the requirement name.
    pub fn requirement(&self) -> &str {
        &self.requirement
    }

    /// Returns the numeric grade value.
    pub fn grade_value(&self) -> f64 {
        self.grade.grade
    }

    /// Returns the numeric out-of value.
    pub fn out_of_value(&self) -> f64 {
        self.grade.out_of
    }

    /// Returns the reason attached to this result (empty when scored
    /// normally).
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The four rubric sub-scores of one document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RubricScores {
    /// Sentence-length uniformity.
    pub uniformity: GradeResult,
    /// Clear purpose.
    pub purpose:    GradeResult,
    /// Spelling and grammar.
    pub grammar:    GradeResult,
    /// Length and format.
    pub length:     GradeResult,
}

impl RubricScores {
    /// Assembles scores from four raw values; each is clamped into its weight.
    pub fn from_values(
        weights: &WeightConfig,
        uniformity: f64,
        purpose: f64,
        grammar: f64,
        length: f64,
    ) -> Self {
        let result = |req: &str, raw: f64, out_of: f64| {
            GradeResult::builder()
                .requirement(req)
                .grade(Grade::bounded(raw, out_of))
                .build()
        };
        Self {
            uniformity: result(UNIFORMITY_REQ, uniformity, weights.uniformity),
            purpose:    result(PURPOSE_REQ, purpose, weights.purpose),
            grammar:    result(GRAMMAR_REQ, grammar, weights.grammar),
            length:     result(LENGTH_REQ, length, weights.length),
        }
    }

    /// An all-zero rubric, every category carrying `reason`.
    pub fn zero(weights: &WeightConfig, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        let mut scores = Self::from_values(weights, 0.0, 0.0, 0.0, 0.0);
        for r in scores.results_mut() {
            r.reason = reason.clone();
        }
        scores
    }

    /// The four results in export order.
    pub fn results(&self) -> [&GradeResult; 4] {
        [&self.uniformity, &self.purpose, &self.grammar, &self.length]
    }

    /// Mutable access to the four results in export order.
    fn results_mut(&mut self) -> [&mut GradeResult; 4] {
        [&mut self.uniformity, &mut self.purpose, &mut self.grammar, &mut self.length]
    }

    /// Plain sum of the sub-scores.
    pub fn sum(&self) -> f64 {
        self.results().iter().map(|r| r.grade_value()).sum()
    }

    /// Rubric total: the sum rounded up to the next whole point. The sum is
    /// first rounded to two decimals so float noise never adds a point.
    pub fn total(&self) -> u32 {
        round2(self.sum()).ceil() as u32
    }
}
