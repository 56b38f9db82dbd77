//! # docgrade
//!
//! Batch grader for written reports. Reads every PDF and Word document in a
//! folder, scores each against a four-part writing rubric (sentence
//! uniformity, clear purpose, spelling and grammar, length and format) and
//! exports the results as a spreadsheet, one row per student or per file.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Rubric weights, headers and defaults
pub mod constants;
/// Run configuration
pub mod config;
/// Reading reports and extracting body text
pub mod document;
/// For all things related to grading
pub mod grade;
/// Folder to rows
pub mod pipeline;
/// Spreadsheet, JSON and console output
pub mod report;
/// Group metadata
pub mod roster;
/// Utility functions for convenience
pub mod util;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use config::{GraderConfig, RowLayout, WeightConfig};
pub use document::{Document, DocumentKind, ExtractionError, Page, SkipPolicy, TextExtractor};
pub use grade::{GrammarChecker, LanguageToolClient, RubricScores, ScoringPreset, ScoringProfile};
pub use pipeline::{GradedFile, GradingPipeline, GradingSession};
pub use report::{ReportExporter, RubricRow};
pub use roster::{Roster, RosterEntry};

/// What a finished run produced.
#[derive(Debug, Clone)]
pub struct GradingReport {
    /// Exported rows, in spreadsheet order.
    pub rows:        Vec<RubricRow>,
    /// Where the spreadsheet was written.
    pub spreadsheet: PathBuf,
}

/// Grades every report in `folder` and writes the spreadsheet.
pub async fn grade<G: GrammarChecker>(
    folder: &Path,
    session: GradingSession<G>,
) -> Result<GradingReport> {
    let layout = session.config().layout();
    let output_dir = session.config().output_dir().cloned();
    let pipeline = GradingPipeline::new(session);

    let mut rows = pipeline.run(folder).await?;
    report::sort_rows(&mut rows, layout);

    let spreadsheet = report::output_path(folder, layout, output_dir.as_deref());
    ReportExporter::new(layout).write_xlsx(&rows, &spreadsheet)?;

    Ok(GradingReport { rows, spreadsheet })
}
