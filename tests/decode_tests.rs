mod common;

use common::{HEADER, chart_cmd, sg, write_csv, write_legacy_csv};
use predicates::prelude::*;
use std::fs;

fn accented_rows() -> Vec<String> {
    vec![
        "Prod-01,Déploiement,Milestone,08/11/24 17:00,08/11/24 19:30,José".to_string(),
        "Prod-02,Revisión,Task,09/11/24 08:00,09/11/24 10:00,Müller".to_string(),
    ]
}

#[test]
fn test_utf8_and_legacy_encodings_yield_the_same_chart() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = accented_rows();

    let utf8_input = write_csv(dir.path(), "utf8", &rows);
    let legacy_input = write_legacy_csv(dir.path(), "legacy", &rows);
    let utf8_out = dir.path().join("utf8.html");
    let legacy_out = dir.path().join("legacy.html");

    chart_cmd(&utf8_input, &utf8_out).assert().success();
    chart_cmd(&legacy_input, &legacy_out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Failed to read CSV as utf-8"))
        .stdout(predicate::str::contains("CSV decoded as latin1"));

    let utf8_html = fs::read_to_string(&utf8_out).expect("read utf8 chart");
    let legacy_html = fs::read_to_string(&legacy_out).expect("read legacy chart");
    assert!(utf8_html.contains("José"));
    assert!(legacy_html.contains("José"));
    assert!(legacy_html.contains("Müller"));
    assert_eq!(utf8_html, legacy_html);
}

#[test]
fn test_unreadable_csv_exhausts_all_encodings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("ragged.csv");
    // One row with more fields than the header: a parse error in every
    // encoding, so the whole fallback list runs dry.
    let content = format!("{HEADER}\nProd-01,Deploy,Milestone,08/11/24 17:00,08/11/24 19:30,Alice,extra,fields\n");
    fs::write(&path, content).expect("write ragged csv");
    let out = dir.path().join("ragged.html");

    chart_cmd(&path, &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no encoding succeeded"));
}

#[test]
fn test_xlsx_workbook_decodes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("schedule.xlsx");

    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, name) in HEADER.split(',').enumerate() {
        worksheet
            .write_string(0, col as u16, name)
            .expect("write header cell");
    }
    let rows = [
        ["Prod-01", "Deploy backend", "Milestone", "08/11/24 17:00", "08/11/24 19:30", "Alice"],
        ["Prod-02", "Switch traffic", "Task", "09/11/24 08:00", "09/11/24 10:00", "Bob"],
    ];
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32 + 1, c as u16, *cell)
                .expect("write data cell");
        }
    }
    workbook.save(&path).expect("save xlsx fixture");

    let out = dir.path().join("schedule.html");
    chart_cmd(&path, &out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks selected: 2"));
    assert!(fs::read_to_string(&out).unwrap().contains("Prod-02"));
}

#[test]
fn test_unknown_extension_is_unsupported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("schedule.txt");
    fs::write(&path, "not a schedule").expect("write txt file");
    let out = dir.path().join("schedule.html");

    chart_cmd(&path, &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format: .txt"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("missing.html");

    chart_cmd(&dir.path().join("nope.csv"), &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    sg().args(["check", dir.path().join("nope.csv").to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
