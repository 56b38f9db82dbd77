#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The four rubric categories and the scorer that combines them.

/// Spelling and grammar.
pub mod grammar;
/// Length and format.
pub mod length;
/// Preset bundles of strategies.
pub mod profile;
/// Clear purpose.
pub mod purpose;
/// Grade types.
pub mod results;
/// Combines the categories for one document.
pub mod rubric;
/// Single-document TF-IDF.
pub mod tfidf;
/// Sentence uniformity.
pub mod uniformity;

pub use grammar::{GrammarChecker, GrammarError, GrammarIssue, GrammarStrategy, LanguageToolClient};
pub use length::{LayoutRules, LengthStrategy};
pub use profile::{ScoringPreset, ScoringProfile};
pub use purpose::PurposeStrategy;
pub use results::{Grade, GradeResult, RubricScores};
pub use rubric::RubricScorer;
pub use tfidf::TfidfVectorizer;
pub use uniformity::UniformityStrategy;

/// A single category could not be scored; the category scores zero.
#[derive(thiserror::Error, Debug)]
pub enum ScoringError {
    /// Nothing but stop words.
    #[error("no terms left after stop-word removal")]
    EmptyVocabulary,
    /// The grammar service failed.
    #[error(transparent)]
    GrammarCheck(#[from] GrammarError),
}
