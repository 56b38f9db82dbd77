#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Reading student reports and pulling their body text out.

/// `.docx` paragraph extraction.
pub mod docx;
/// PDF page extraction.
pub mod pdf;

use std::path::{Path, PathBuf};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The two report formats the grader accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// A PDF; exposes page boundaries.
    Pdf,
    /// A Word `.docx`; exposes paragraphs only.
    Word,
}

impl DocumentKind {
    /// Picks the kind from a path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Word),
            _ => None,
        }
    }
}

/// One page of a document, with its raw text lines preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// 1-based page number.
    number: usize,
    /// Extracted text; empty when the page yielded nothing.
    text:   String,
}

impl Page {
    /// Creates a page.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// The page's raw text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Which pages count as cover/TOC/bibliography and are left out of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipPolicy {
    /// Trimming only happens when the page count is strictly above this.
    pub threshold: usize,
    /// Pages dropped from the front.
    pub leading:   usize,
    /// Pages dropped from the back.
    pub trailing:  usize,
}

impl SkipPolicy {
    /// Drops five front pages and the last page of documents longer than five
    /// pages.
    pub fn classic() -> Self {
        Self {
            threshold: 5,
            leading:   5,
            trailing:  1,
        }
    }

    /// Drops two front pages and the last page of documents longer than three
    /// pages.
    pub fn relaxed() -> Self {
        Self {
            threshold: 3,
            leading:   2,
            trailing:  1,
        }
    }

    /// Never drops anything.
    pub fn keep_all() -> Self {
        Self {
            threshold: usize::MAX,
            leading:   0,
            trailing:  0,
        }
    }

    /// Index range of the pages kept out of `page_count`.
    pub fn body_range(&self, page_count: usize) -> std::ops::Range<usize> {
        if page_count <= self.threshold {
            return 0..page_count;
        }
        let start = self.leading.min(page_count);
        let end = page_count.saturating_sub(self.trailing).max(start);
        start..end
    }
}

impl Default for SkipPolicy {
    fn default() -> Self {
        Self::classic()
    }
}

/// A parsed report. Immutable once read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Where the document was read from.
    path:  PathBuf,
    /// PDF or Word.
    kind:  DocumentKind,
    /// Every page, in order. Word documents hold exactly one.
    pages: Vec<Page>,
}

impl Document {
    /// Creates a document from already-extracted pages.
    pub fn new(path: impl Into<PathBuf>, kind: DocumentKind, pages: Vec<Page>) -> Self {
        Self {
            path: path.into(),
            kind,
            pages,
        }
    }

    /// Source path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name component of the source path, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// PDF or Word.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    /// All pages, cover and bibliography included.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Total number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Pages that count as body under `policy`. Word documents have no page
    /// boundaries and are never trimmed.
    pub fn body_pages(&self, policy: &SkipPolicy) -> &[Page] {
        match self.kind {
            DocumentKind::Pdf => &self.pages[policy.body_range(self.pages.len())],
            DocumentKind::Word => &self.pages,
        }
    }

    /// Body text: non-blank body pages joined with newlines.
    pub fn body_text(&self, policy: &SkipPolicy) -> String {
        self.body_pages(policy)
            .iter()
            .filter(|p| !p.text().is_empty())
            .map(Page::text)
            .join("\n")
    }
}

/// Reasons a report could not be read at all.
#[derive(thiserror::Error, Debug)]
pub enum ExtractionError {
    /// Extension is neither `.pdf` nor `.docx`.
    #[error("`{0}` is not a PDF or Word document")]
    Unsupported(String),
    /// The file could not be opened or read.
    #[error("could not read `{path}`: {source}")]
    Io {
        /// File being read.
        path:   String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// lopdf could not parse the file.
    #[error("could not parse PDF `{path}`: {reason}")]
    Pdf {
        /// File being read.
        path:   String,
        /// Parser message.
        reason: String,
    },
    /// docx-rs could not read the `.docx` package.
    #[error("could not open Word document `{path}`: {reason}")]
    Docx {
        /// File being read.
        path:   String,
        /// Reader message.
        reason: String,
    },
}

/// Loads reports and turns them into body text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor {
    /// Cover/TOC/bibliography trimming.
    skip: SkipPolicy,
}

impl TextExtractor {
    /// Creates an extractor that trims pages per `skip`.
    pub fn new(skip: SkipPolicy) -> Self {
        Self { skip }
    }

    /// The page trimming in effect.
    pub fn skip_policy(&self) -> &SkipPolicy {
        &self.skip
    }

    /// Opens and parses `path`, choosing the parser from its extension.
    pub fn load(&self, path: &Path) -> Result<Document, ExtractionError> {
        match DocumentKind::from_path(path) {
            Some(DocumentKind::Pdf) => pdf::load_pdf(path),
            Some(DocumentKind::Word) => docx::load_docx(path),
            None => Err(ExtractionError::Unsupported(path.display().to_string())),
        }
    }

    /// Body text of `path`. A document that cannot be read is logged and
    /// yields an empty string.
    pub fn extract(&self, path: &Path) -> String {
        match self.load(path) {
            Ok(doc) => doc.body_text(&self.skip),
            Err(e) => {
                tracing::warn!("error reading {}: {}", path.display(), e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf_with(pages: usize) -> Document {
        let pages = (1..=pages).map(|n| Page::new(n, format!("page {n}"))).collect();
        Document::new("report.pdf", DocumentKind::Pdf, pages)
    }

    #[test]
    fn classic_policy_drops_front_and_last_page() {
        let doc = pdf_with(8);
        let kept: Vec<usize> = doc
            .body_pages(&SkipPolicy::classic())
            .iter()
            .map(Page::number)
            .collect();
        assert_eq!(kept, vec![6, 7]);
    }

    #[test]
    fn short_documents_keep_every_page() {
        let doc = pdf_with(5);
        assert_eq!(doc.body_pages(&SkipPolicy::classic()).len(), 5);
        assert_eq!(doc.body_pages(&SkipPolicy::relaxed()).len(), 2);
    }

    #[test]
    fn six_page_document_under_classic_policy_has_no_body() {
        let doc = pdf_with(6);
        assert!(doc.body_text(&SkipPolicy::classic()).is_empty());
    }

    #[test]
    fn blank_pages_are_skipped_in_join() {
        let pages = vec![Page::new(1, "one"), Page::new(2, ""), Page::new(3, "three")];
        let doc = Document::new("r.pdf", DocumentKind::Pdf, pages);
        assert_eq!(doc.body_text(&SkipPolicy::keep_all()), "one\nthree");
    }

    #[test]
    fn word_documents_are_never_trimmed() {
        let doc = Document::new("r.docx", DocumentKind::Word, vec![Page::new(1, "all text")]);
        let policy = SkipPolicy {
            threshold: 0,
            leading:   1,
            trailing:  1,
        };
        assert_eq!(doc.body_text(&policy), "all text");
    }

    #[test]
    fn kind_follows_extension() {
        assert_eq!(DocumentKind::from_path(Path::new("a.PDF")), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_path(Path::new("a.docx")), Some(DocumentKind::Word));
        assert_eq!(DocumentKind::from_path(Path::new("a.doc")), None);
    }
}
