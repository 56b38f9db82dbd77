#![allow(dead_code)]

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
};

use docgrade::grade::{GrammarChecker, GrammarError, GrammarIssue};
use lopdf::{
    Document, Object, Stream,
    content::{Content, Operation},
    dictionary,
};
use uuid::Uuid;
use zip::write::SimpleFileOptions;

pub fn temp_root(label: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("docgrade-{label}-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    root
}

/// Writes a PDF with one page per entry; each line of an entry is drawn as
/// its own text object.
pub fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut operations = Vec::new();
        for (i, line) in text.lines().enumerate() {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 11.into()]));
            operations.push(Operation::new("Td", vec![50.into(), (780 - 14 * i as i64).into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id =
            doc.add_object(Stream::new(dictionary! {}, content.encode().expect("encode content")));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).expect("save pdf");
}

/// Writes a minimal `.docx` whose body holds `paragraphs`.
pub fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| {
            let escaped = p.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;");
            format!(r#"<w:p><w:r><w:t xml:space="preserve">{escaped}</w:t></w:r></w:p>"#)
        })
        .collect();
    write_docx_body(path, &body);
}

/// Writes a `.docx` package around raw `<w:body>` contents.
pub fn write_docx_body(path: &Path, body: &str) {
    let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;
    let package_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;
    let document_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#;
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:v="urn:schemas-microsoft-com:vml" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><w:body>{body}</w:body></w:document>"#
    );
    write_zip(
        path,
        &[
            ("[Content_Types].xml", content_types),
            ("_rels/.rels", package_rels),
            ("word/_rels/document.xml.rels", document_rels),
            ("word/document.xml", &document),
        ],
    );
}

/// Writes a zip archive holding `entries`.
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).expect("create zip");
    let mut zip = zip::ZipWriter::new(file);
    for (name, contents) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("start zip entry");
        zip.write_all(contents.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish zip");
}

/// `n` sentences of `words` words each.
pub fn sentences(n: usize, words: usize) -> String {
    (0..n)
        .map(|i| {
            let body: Vec<String> = (0..words).map(|w| format!("topic{}word{}", i, w)).collect();
            format!("{}.", body.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reports `issues` problems on every call and counts calls.
#[derive(Debug, Default)]
pub struct StubChecker {
    pub issues: usize,
    pub calls:  AtomicUsize,
}

impl StubChecker {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn with_issues(issues: usize) -> Self {
        Self {
            issues,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GrammarChecker for StubChecker {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..self.issues)
            .map(|i| GrammarIssue {
                message: "stub issue".to_string(),
                offset:  i,
                length:  1,
                rule_id: "STUB".to_string(),
            })
            .collect())
    }
}

/// Always answers like a broken server.
#[derive(Debug, Default)]
pub struct DownChecker;

impl GrammarChecker for DownChecker {
    async fn check(&self, _text: &str) -> Result<Vec<GrammarIssue>, GrammarError> {
        Err(GrammarError::Status {
            status: 503,
            body:   "service unavailable".to_string(),
        })
    }
}

/// Reads one part, e.g. `xl/worksheets/sheet1.xml`, out of an `.xlsx`.
pub fn xlsx_part(path: &Path, part: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut archive = zip::ZipArchive::new(file).expect("read xlsx archive");
    let mut entry = archive.by_name(part).expect("part present");
    let mut xml = String::new();
    std::io::Read::read_to_string(&mut entry, &mut xml).expect("read part");
    xml
}

/// Number of `<row` elements in a worksheet.
pub fn row_count(sheet_xml: &str) -> usize {
    sheet_xml.matches("<row ").count()
}
