#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Folder in, rows out: discovery, extraction, scoring and roster fan-out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tabled::{Table, settings::Style};

use crate::{
    config::{GraderConfig, RowLayout},
    document::{Document, ExtractionError, TextExtractor},
    grade::{GrammarChecker, RubricScorer, RubricScores},
    report::RubricRow,
    roster::{Roster, RosterEntry, group_id_from_name},
    util::find_files,
};

/// Everything a run shares: configuration, roster and grammar service.
pub struct GradingSession<G> {
    /// Run configuration.
    config:  GraderConfig,
    /// Group metadata.
    roster:  Roster,
    /// Grammar service.
    checker: G,
}

impl<G: GrammarChecker> GradingSession<G> {
    /// Bundles a run's shared state.
    pub fn new(config: GraderConfig, roster: Roster, checker: G) -> Self {
        Self {
            config,
            roster,
            checker,
        }
    }

    /// Run configuration.
    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    /// Group metadata.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Grammar service.
    pub fn checker(&self) -> &G {
        &self.checker
    }
}

/// One scored file before fan-out.
#[derive(Debug, Clone, PartialEq)]
pub struct GradedFile {
    /// File name without directories.
    pub file_name: String,
    /// Digits found in the file name.
    pub group_id:  Option<String>,
    /// Roster entry for `group_id`.
    pub entry:     RosterEntry,
    /// Rubric scores.
    pub scores:    RubricScores,
}

impl GradedFile {
    /// Group id as a number; 0 when the name has no usable digits.
    pub fn numeric_group_id(&self) -> u64 {
        self.group_id
            .as_deref()
            .and_then(|id| id.parse().ok())
            .unwrap_or_default()
    }

    /// Rows for this file under `layout`: one per roster student, or one
    /// named after the file.
    pub fn rows(&self, layout: RowLayout) -> Vec<RubricRow> {
        let group_id = self.numeric_group_id();
        let row = |identifier: &str| {
            RubricRow::from_scores(identifier, group_id, &self.entry.topic, &self.scores)
        };
        match layout {
            RowLayout::Grouped => self.entry.students.iter().map(|s| row(s)).collect(),
            RowLayout::PerFile => vec![row(&self.file_name)],
        }
    }
}

/// Drives a grading run.
pub struct GradingPipeline<G> {
    /// Shared state.
    session:   GradingSession<G>,
    /// Reader, with the profile's page trimming.
    extractor: TextExtractor,
}

impl<G: GrammarChecker> GradingPipeline<G> {
    /// Creates a pipeline over `session`.
    pub fn new(session: GradingSession<G>) -> Self {
        let extractor = TextExtractor::new(session.config().scoring().skip);
        Self { session, extractor }
    }

    /// Shared state.
    pub fn session(&self) -> &GradingSession<G> {
        &self.session
    }

    /// Reports directly inside `folder`, sorted by name.
    pub fn discover(&self, folder: &Path) -> Result<Vec<PathBuf>> {
        if !folder.is_dir() {
            bail!("Input folder {} does not exist", folder.display());
        }
        find_files(self.session.config().extensions(), folder)
            .with_context(|| format!("Could not list files in {}", folder.display()))
    }

    /// Reads, scores and looks up one report.
    pub async fn grade_file(&self, path: &Path) -> Result<GradedFile, ExtractionError> {
        let doc = self.extractor.load(path)?;
        Ok(self.grade_document(&doc).await)
    }

    /// Scores an already loaded document.
    pub async fn grade_document(&self, doc: &Document) -> GradedFile {
        let config = self.session.config();
        let text = doc.body_text(self.extractor.skip_policy());
        let scores = RubricScorer::new(config.scoring(), config.weights(), self.session.checker())
            .score(doc, &text)
            .await;
        self.resolve(doc.file_name(), scores)
    }

    /// Attaches roster data to a file's scores. A digit run too long for a
    /// `u64` leaves the file unmatched.
    fn resolve(&self, file_name: String, scores: RubricScores) -> GradedFile {
        let group_id = group_id_from_name(&file_name).filter(|id| {
            let fits = id.parse::<u64>().is_ok();
            if !fits {
                tracing::warn!("group id {} in {} is too large, left unmatched", id, file_name);
            }
            fits
        });
        let entry = self.session.roster().resolve(group_id.as_deref());
        GradedFile {
            file_name,
            group_id,
            entry,
            scores,
        }
    }

    /// Grades every report in `folder`. Unreadable reports score zero; the
    /// run never stops early.
    pub async fn run(&self, folder: &Path) -> Result<Vec<RubricRow>> {
        let config = self.session.config();
        let files = self.discover(folder)?;
        tracing::info!("found {} reports in {}", files.len(), folder.display());

        let mut rows = Vec::new();
        for path in files {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            tracing::info!("grading file: {}", name);

            let graded = match self.grade_file(&path).await {
                Ok(graded) => graded,
                Err(e) => {
                    tracing::warn!("{} scored 0: {}", name, e);
                    self.resolve(name, RubricScores::zero(config.weights(), e.to_string()))
                }
            };

            tracing::debug!(
                "{}\n{}",
                graded.file_name,
                Table::new(graded.scores.results()).with(Style::modern())
            );

            let file_rows = graded.rows(config.layout());
            if file_rows.is_empty() {
                tracing::warn!("no roster students for {}, no rows written", graded.file_name);
            }
            rows.extend(file_rows);
        }

        Ok(rows)
    }
}
