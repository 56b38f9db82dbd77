#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use super::{Document, DocumentKind, ExtractionError, Page};

/// Parses a PDF into pages with lopdf.
///
/// A page whose text cannot be extracted is kept as an empty page so the page
/// count stays accurate for the length check.
pub fn load_pdf(path: &Path) -> Result<Document, ExtractionError> {
    let pdf = lopdf::Document::load(path).map_err(|e| ExtractionError::Pdf {
        path:   path.display().to_string(),
        reason: e.to_string(),
    })?;

    let pages = pdf
        .get_pages()
        .into_keys()
        .map(|number| match pdf.extract_text(&[number]) {
            Ok(text) => Page::new(number as usize, text),
            Err(e) => {
                tracing::debug!("no text on page {} of {}: {}", number, path.display(), e);
                Page::new(number as usize, String::new())
            }
        })
        .collect();

    Ok(Document::new(path, DocumentKind::Pdf, pages))
}
