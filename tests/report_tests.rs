//! Tests for row ordering and spreadsheet export.

mod support;

use std::path::Path;

use docgrade::{
    RowLayout,
    report::{ReportExporter, RubricRow, output_path, sort_rows},
};
use support::{row_count, temp_root, xlsx_part};

fn row(name: &str, group_id: u64, total: u32) -> RubricRow {
    RubricRow::builder()
        .identifier(name)
        .group_id(group_id)
        .topic("Topic")
        .uniformity(3.0)
        .purpose(2.0)
        .grammar(1.5)
        .length(0.5)
        .total(total)
        .build()
}

#[test]
fn grouped_rows_sort_by_group_then_name() {
    let mut rows = vec![row("Zoe", 2, 7), row("Adam", 10, 7), row("Mia", 2, 7), row("Bo", 1, 7)];
    sort_rows(&mut rows, RowLayout::Grouped);
    let order: Vec<(&str, u64)> = rows.iter().map(|r| (r.identifier.as_str(), r.group_id)).collect();
    assert_eq!(order, vec![("Bo", 1), ("Mia", 2), ("Zoe", 2), ("Adam", 10)]);
}

#[test]
fn per_file_rows_keep_their_order() {
    let mut rows = vec![row("b.pdf", 2, 7), row("a.pdf", 1, 7)];
    sort_rows(&mut rows, RowLayout::PerFile);
    assert_eq!(rows[0].identifier, "b.pdf");
}

#[test]
fn output_path_sits_next_to_the_folder() {
    let folder = Path::new("/data/term1/reports");
    assert_eq!(
        output_path(folder, RowLayout::Grouped, None),
        Path::new("/data/term1/reports_individual_grades.xlsx")
    );
    assert_eq!(
        output_path(folder, RowLayout::PerFile, None),
        Path::new("/data/term1/reports.xlsx")
    );
    assert_eq!(
        output_path(folder, RowLayout::PerFile, Some(Path::new("/out"))),
        Path::new("/out/reports.xlsx")
    );
}

#[test]
fn spreadsheet_has_header_plus_one_row_per_entry() {
    let root = temp_root("report-xlsx");
    let path = root.join("grades.xlsx");
    let rows = vec![row("Ann", 1, 7), row("Bo", 1, 7), row("Cy", 3, 7)];

    ReportExporter::new(RowLayout::Grouped)
        .write_xlsx(&rows, &path)
        .expect("write xlsx");

    let sheet = xlsx_part(&path, "xl/worksheets/sheet1.xml");
    assert_eq!(row_count(&sheet), rows.len() + 1);
    let strings = xlsx_part(&path, "xl/sharedStrings.xml");
    for header in ReportExporter::new(RowLayout::Grouped).columns() {
        assert!(strings.contains(&header.replace('&', "&amp;")), "missing {header}");
    }
    let workbook = xlsx_part(&path, "xl/workbook.xml");
    assert!(workbook.contains("Grades"));
}

#[test]
fn empty_run_still_writes_the_header() {
    let root = temp_root("report-empty");
    let path = root.join("grades.xlsx");
    ReportExporter::new(RowLayout::PerFile).write_xlsx(&[], &path).unwrap();

    assert_eq!(row_count(&xlsx_part(&path, "xl/worksheets/sheet1.xml")), 1);
    assert!(xlsx_part(&path, "xl/sharedStrings.xml").contains("File Name"));
}

#[test]
fn json_dump_round_trips_rows() {
    let root = temp_root("report-json");
    let path = root.join("grades.json");
    let rows = vec![row("Ann", 1, 7)];

    ReportExporter::new(RowLayout::Grouped).write_json(&rows, &path).unwrap();
    let back: Vec<RubricRow> = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(back, rows);
}

#[test]
fn summary_table_lists_every_row() {
    let rows = vec![row("Ann", 1, 7), row("Bo", 2, 9)];
    let table = ReportExporter::new(RowLayout::Grouped).summary_table(&rows);
    assert!(table.contains("Grading Overview"));
    assert!(table.contains("Ann"));
    assert!(table.contains("Bo"));
    assert!(table.contains("mean total 8.00/15"));
}

#[test]
fn printed_summary_is_the_table_plus_newline() {
    let rows = vec![row("Ann", 1, 7)];
    let exporter = ReportExporter::new(RowLayout::Grouped);
    let mut out = Vec::new();
    exporter.print_summary(&rows, &mut out).expect("print");

    let printed = String::from_utf8(out).expect("utf8");
    assert_eq!(printed, format!("{}\n", exporter.summary_table(&rows)));
}
