#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Length and format conformance.

use serde::{Deserialize, Serialize};

use crate::{
    document::{Document, DocumentKind, Page},
    util::{population_std_dev, word_count},
};

/// Word count that earns full marks under [`LengthStrategy::WordCount`].
pub const DEFAULT_TARGET_WORDS: usize = 1000;

/// Page-count and indentation rules for [`LengthStrategy::Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutRules {
    /// Documents with at least this many pages keep the whole page component.
    pub target_pages:   usize,
    /// Points lost per page short of the target.
    pub page_penalty:   f64,
    /// Front pages ignored when measuring indentation.
    pub body_skip_head: usize,
    /// Back pages ignored when measuring indentation.
    pub body_skip_tail: usize,
    /// Points lost per unit of indentation spread.
    pub indent_penalty: f64,
}

impl Default for LayoutRules {
    fn default() -> Self {
        Self {
            target_pages:   5,
            page_penalty:   0.5,
            body_skip_head: 1,
            body_skip_tail: 1,
            indent_penalty: 0.25,
        }
    }
}

impl LayoutRules {
    /// Half of `weight` for reaching the page target, minus the penalty per
    /// missing page.
    pub fn page_component(&self, page_count: usize, weight: f64) -> f64 {
        let half = weight / 2.0;
        let shortfall = self.target_pages.saturating_sub(page_count) as f64;
        (half - shortfall * self.page_penalty).max(0.0)
    }

    /// Pages whose lines are inspected for alignment. Head and tail are only
    /// skipped when something is left afterwards.
    pub fn measured_pages<'a>(&self, pages: &'a [Page]) -> &'a [Page] {
        if pages.len() > self.body_skip_head + self.body_skip_tail {
            &pages[self.body_skip_head..pages.len() - self.body_skip_tail]
        } else {
            pages
        }
    }

    /// Half of `weight`, minus the penalty per unit of spread in the leading
    /// whitespace of non-blank lines. Nothing measured scores 0.
    pub fn alignment_component(&self, pages: &[Page], weight: f64) -> f64 {
        let half = weight / 2.0;
        let indents: Vec<f64> = self
            .measured_pages(pages)
            .iter()
            .flat_map(|p| p.text().lines())
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.chars().take_while(|c| c.is_whitespace()).count() as f64)
            .collect();

        match population_std_dev(&indents) {
            Some(spread) => (half - spread * self.indent_penalty).max(0.0),
            None => 0.0,
        }
    }
}

/// How document length and layout become a score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LengthStrategy {
    /// Proportional to word count, full marks at `target_words`.
    WordCount {
        /// Words needed for full marks.
        target_words: usize,
    },
    /// Page count plus indentation consistency, for PDFs.
    Layout(LayoutRules),
}

impl LengthStrategy {
    /// Word count against a 1000 word target.
    pub fn classic() -> Self {
        Self::WordCount {
            target_words: DEFAULT_TARGET_WORDS,
        }
    }

    /// Page count and alignment with default layout rules.
    pub fn relaxed() -> Self {
        Self::Layout(LayoutRules::default())
    }

    /// Scores the word count of `text` against `target_words`.
    pub fn word_count_score(text: &str, target_words: usize, weight: f64) -> f64 {
        if target_words == 0 {
            return weight;
        }
        (word_count(text) as f64 / target_words as f64 * weight).min(weight)
    }

    /// Scores `doc`, whose body text is `text`, out of `weight`. Word documents
    /// have no page layout and fall back to the default word count rule.
    pub fn score(&self, doc: &Document, text: &str, weight: f64) -> f64 {
        match (self, doc.kind()) {
            (Self::WordCount { target_words }, _) => {
                Self::word_count_score(text, *target_words, weight)
            }
            (Self::Layout(_), DocumentKind::Word) => {
                Self::word_count_score(text, DEFAULT_TARGET_WORDS, weight)
            }
            (Self::Layout(rules), DocumentKind::Pdf) => {
                rules.page_component(doc.page_count(), weight)
                    + rules.alignment_component(doc.pages(), weight)
            }
        }
    }
}

impl Default for LengthStrategy {
    fn default() -> Self {
        Self::classic()
    }
}
