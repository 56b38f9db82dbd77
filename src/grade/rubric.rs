#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::{GrammarChecker, RubricScores, ScoringError, ScoringProfile};
use crate::{config::WeightConfig, document::Document};

/// Runs the four rubric categories against one document.
pub struct RubricScorer<'a, G> {
    /// Strategy per category.
    profile: &'a ScoringProfile,
    /// Points per category.
    weights: &'a WeightConfig,
    /// Grammar service.
    checker: &'a G,
}

impl<'a, G: GrammarChecker> RubricScorer<'a, G> {
    /// Creates a scorer.
    pub fn new(profile: &'a ScoringProfile, weights: &'a WeightConfig, checker: &'a G) -> Self {
        Self {
            profile,
            weights,
            checker,
        }
    }

    /// Scores `doc`, whose body text is `text`. A category that fails scores
    /// zero and records why; the others are unaffected.
    pub async fn score(&self, doc: &Document, text: &str) -> RubricScores {
        let file = doc.file_name();
        let uniformity = self.profile.uniformity.score(text, self.weights.uniformity);

        let (purpose, purpose_reason) =
            recover("purpose", &file, self.profile.purpose.score(text, self.weights.purpose));

        let grammar = self
            .profile
            .grammar
            .score(self.checker, text, self.weights.grammar)
            .await;
        let (grammar, grammar_reason) = recover("grammar", &file, grammar);

        let length = self.profile.length.score(doc, text, self.weights.length);

        let mut scores =
            RubricScores::from_values(self.weights, uniformity, purpose, grammar, length);
        scores.purpose.reason = purpose_reason;
        scores.grammar.reason = grammar_reason;
        scores
    }
}

/// Zero plus a logged reason for a failed category.
fn recover(category: &str, file: &str, result: Result<f64, ScoringError>) -> (f64, String) {
    match result {
        Ok(v) => (v, String::new()),
        Err(e) => {
            tracing::warn!("{} score for {} set to 0: {}", category, file, e);
            (0.0, e.to_string())
        }
    }
}
