#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fs, path::Path};

use docx_rs::{DocumentChild, Paragraph, ParagraphChild, Run, RunChild, read_docx};

use super::{Document, DocumentKind, ExtractionError, Page};

/// Opens a Word document and returns it as a single page of newline-joined
/// paragraphs.
pub fn load_docx(path: &Path) -> Result<Document, ExtractionError> {
    let bytes = fs::read(path).map_err(|source| ExtractionError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let docx = read_docx(&bytes).map_err(|e| ExtractionError::Docx {
        path:   path.display().to_string(),
        reason: format!("{e:?}"),
    })?;

    let text = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(Document::new(path, DocumentKind::Word, vec![Page::new(1, text)]))
}

/// Text of one body paragraph. Empty paragraphs give an empty string.
pub fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_children(&para.children, &mut text);
    text
}

/// Appends the runs of `children`, descending into hyperlinks.
fn push_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => push_run(run, out),
            ParagraphChild::Hyperlink(link) => push_children(&link.children, out),
            _ => {}
        }
    }
}

/// Appends one run: text as is, tabs as `\t`, breaks as `\n`.
fn push_run(run: &Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            RunChild::Break(_) => out.push('\n'),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use docx_rs::{BreakType, Hyperlink, HyperlinkType};

    use super::*;

    #[test]
    fn runs_are_joined_within_a_paragraph() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("Hello"))
            .add_run(Run::new().add_text(" world").add_tab().add_text("col"));
        assert_eq!(paragraph_text(&para), "Hello world\tcol");
    }

    #[test]
    fn hyperlink_text_is_kept() {
        let para = Paragraph::new()
            .add_run(Run::new().add_text("see "))
            .add_hyperlink(
                Hyperlink::new("https://example.org", HyperlinkType::External)
                    .add_run(Run::new().add_text("the source")),
            );
        assert_eq!(paragraph_text(&para), "see the source");
    }

    #[test]
    fn breaks_become_newlines() {
        let run = Run::new()
            .add_text("line one")
            .add_break(BreakType::TextWrapping)
            .add_text("line two");
        let para = Paragraph::new().add_run(run);
        assert_eq!(paragraph_text(&para), "line one\nline two");
    }

    #[test]
    fn empty_paragraph_is_empty() {
        assert_eq!(paragraph_text(&Paragraph::new()), "");
    }
}
