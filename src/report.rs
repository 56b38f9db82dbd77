#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Rows, their ordering and the files they are written to.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bon::Builder;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Rows},
};

use crate::{
    config::RowLayout,
    constants::{
        GRAMMAR_REQ, GROUPED_EXPORT_SUFFIX, LENGTH_REQ, PER_FILE_EXPORT_SUFFIX, PURPOSE_REQ,
        TOTAL_HEADER, UNIFORMITY_REQ, WORKSHEET_NAME,
    },
    grade::RubricScores,
};

/// One exported line: a student (grouped) or a file (per-file).
#[derive(Tabled, Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct RubricRow {
    /// Student name or file name.
    #[tabled(rename = "Name")]
    pub identifier: String,
    /// Digits from the file name, 0 when there were none.
    #[tabled(rename = "Group ID")]
    pub group_id:   u64,
    /// Roster topic.
    #[tabled(rename = "Topic")]
    pub topic:      String,
    /// Sentence uniformity.
    #[tabled(rename = "Uniformity")]
    pub uniformity: f64,
    /// Clear purpose.
    #[tabled(rename = "Purpose")]
    pub purpose:    f64,
    /// Spelling and grammar.
    #[tabled(rename = "Grammar")]
    pub grammar:    f64,
    /// Length and format.
    #[tabled(rename = "Length")]
    pub length:     f64,
    /// Sum rounded up.
    #[tabled(rename = "Total")]
    pub total:      u32,
}

impl RubricRow {
    /// A row carrying `scores` under `identifier`.
    pub fn from_scores(
        identifier: &str,
        group_id: u64,
        topic: &str,
        scores: &RubricScores,
    ) -> Self {
        Self::builder()
            .identifier(identifier)
            .group_id(group_id)
            .topic(topic)
            .uniformity(scores.uniformity.grade_value())
            .purpose(scores.purpose.grade_value())
            .grammar(scores.grammar.grade_value())
            .length(scores.length.grade_value())
            .total(scores.total())
            .build()
    }
}

/// Orders rows for export: grouped rows by group id then name; per-file rows
/// stay in discovery order.
pub fn sort_rows(rows: &mut [RubricRow], layout: RowLayout) {
    if layout == RowLayout::Grouped {
        rows.sort_by(|a, b| {
            a.group_id
                .cmp(&b.group_id)
                .then_with(|| a.identifier.cmp(&b.identifier))
        });
    }
}

/// Spreadsheet path for a run over `folder`: next to the folder, or inside
/// `output_dir` when given, named after the folder.
pub fn output_path(folder: &Path, layout: RowLayout, output_dir: Option<&Path>) -> PathBuf {
    let name = folder
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "grades".to_string());
    let suffix = match layout {
        RowLayout::Grouped => GROUPED_EXPORT_SUFFIX,
        RowLayout::PerFile => PER_FILE_EXPORT_SUFFIX,
    };
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => folder.parent().map(Path::to_path_buf).unwrap_or_default(),
    };
    dir.join(format!("{name}{suffix}"))
}

/// Writes rows out.
#[derive(Debug, Clone, Copy)]
pub struct ReportExporter {
    /// Decides the first column's header.
    layout: RowLayout,
}

impl ReportExporter {
    /// An exporter for `layout`.
    pub fn new(layout: RowLayout) -> Self {
        Self { layout }
    }

    /// Spreadsheet headers, in column order.
    pub fn columns(&self) -> [&'static str; 8] {
        let first = match self.layout {
            RowLayout::Grouped => "Student Name",
            RowLayout::PerFile => "File Name",
        };
        [
            first,
            "Group ID",
            "Topic",
            UNIFORMITY_REQ,
            PURPOSE_REQ,
            GRAMMAR_REQ,
            LENGTH_REQ,
            TOTAL_HEADER,
        ]
    }

    /// Writes `rows` to a single-sheet workbook at `path` with a bold header.
    pub fn write_xlsx(&self, rows: &[RubricRow], path: &Path) -> Result<()> {
        let mut workbook = Workbook::new();
        let header = Format::new().set_bold();
        let sheet = workbook.add_worksheet();
        sheet.set_name(WORKSHEET_NAME)?;

        for (col, title) in self.columns().iter().enumerate() {
            sheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            sheet.write_string(r, 0, &row.identifier)?;
            sheet.write_number(r, 1, row.group_id as f64)?;
            sheet.write_string(r, 2, &row.topic)?;
            sheet.write_number(r, 3, row.uniformity)?;
            sheet.write_number(r, 4, row.purpose)?;
            sheet.write_number(r, 5, row.grammar)?;
            sheet.write_number(r, 6, row.length)?;
            sheet.write_number(r, 7, row.total)?;
        }

        workbook
            .save(path)
            .with_context(|| format!("Could not write spreadsheet {}", path.display()))?;
        tracing::debug!("wrote {} rows to {}", rows.len(), path.display());
        Ok(())
    }

    /// Writes `rows` as pretty JSON.
    pub fn write_json(&self, rows: &[RubricRow], path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(rows).context("Could not serialize rows")?;
        std::fs::write(path, json)
            .with_context(|| format!("Could not write JSON report {}", path.display()))
    }

    /// Console overview of `rows`.
    pub fn summary_table(&self, rows: &[RubricRow]) -> String {
        let mean = if rows.is_empty() {
            0.0
        } else {
            rows.iter().map(|r| r.total as f64).sum::<f64>() / rows.len() as f64
        };

        Table::new(rows)
            .with(Panel::header("Grading Overview"))
            .with(Panel::footer(format!("{} rows, mean total {mean:.2}/15", rows.len())))
            .with(
                Modify::new(Rows::first())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(
                Modify::new(Rows::last())
                    .with(Alignment::center())
                    .with(Alignment::center_vertical()),
            )
            .with(Style::modern())
            .to_string()
    }

    /// Writes the console overview of `rows` to `out`.
    pub fn print_summary(&self, rows: &[RubricRow], mut out: impl Write) -> Result<()> {
        writeln!(out, "{}", self.summary_table(rows)).context("Could not print summary table")
    }
}
