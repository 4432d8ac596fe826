#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str =
    "Activity Number,Activity,Milestone/task,Start Date (CET),End Date (CET),Responsible Person";

pub const WINDOW_FROM: &str = "08/11/2024 17:00";
pub const WINDOW_TO: &str = "10/11/2024 23:59";

pub fn sg() -> Command {
    cargo_bin_cmd!("shiftgantt")
}

/// Five-row fixture: three Prod activities inside the November window plus
/// one unparsable start date and one unparsable end date.
pub fn sample_rows() -> Vec<String> {
    vec![
        "Prod-01,Deploy backend,Milestone,08/11/24 17:00,08/11/24 19:30,Alice".to_string(),
        "Prod-02,Switch traffic,Task,09/11/24 08:00,09/11/24 10:00,Bob".to_string(),
        "Prod-03,Smoke tests,Task,09/11/24 10:00,09/11/24 12:30,Alice".to_string(),
        "Prod-04,Cleanup,Task,not a date,09/11/24 13:00,Carol".to_string(),
        "Prod-05,Retro,Task,10/11/24 09:00,soon,Bob".to_string(),
    ]
}

pub fn csv_content(rows: &[String]) -> String {
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    content
}

pub fn write_csv(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(format!("{name}.csv"));
    fs::write(&path, csv_content(rows)).expect("write fixture csv");
    path
}

/// Same logical table, encoded as single-byte Latin-1 / CP1252 bytes
/// (both encodings agree on the accented-letter range used here).
pub fn write_legacy_csv(dir: &Path, name: &str, rows: &[String]) -> PathBuf {
    let path = dir.join(format!("{name}.csv"));
    let bytes: Vec<u8> = csv_content(rows)
        .chars()
        .map(|c| {
            let code = c as u32;
            assert!(code <= 0xFF, "legacy fixture must stay within Latin-1");
            code as u8
        })
        .collect();
    fs::write(&path, bytes).expect("write legacy fixture csv");
    path
}

/// Chart invocation against the standard November window.
pub fn chart_cmd(file: &Path, out: &Path) -> Command {
    let mut cmd = sg();
    cmd.args([
        "chart",
        file.to_str().unwrap(),
        "--from",
        WINDOW_FROM,
        "--to",
        WINDOW_TO,
        "--output",
        out.to_str().unwrap(),
    ]);
    cmd
}
