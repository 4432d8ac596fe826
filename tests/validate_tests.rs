mod common;

use common::{chart_cmd, sg, write_csv};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_all_missing_columns_are_reported_together() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("short.csv");
    fs::write(
        &path,
        "Activity Number,Milestone/task,Start Date (CET),End Date (CET)\n\
         Prod-01,Milestone,08/11/24 17:00,08/11/24 19:30\n",
    )
    .expect("write short csv");
    let out = dir.path().join("short.html");

    chart_cmd(&path, &out).assert().failure().stderr(predicate::str::contains(
        "Missing required columns: Activity, Responsible Person",
    ));
}

#[test]
fn test_fully_empty_rows_are_dropped() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = vec![
        "Prod-01,Deploy backend,Milestone,08/11/24 17:00,08/11/24 19:30,Alice".to_string(),
        ",,,,,".to_string(),
        "Prod-02,Switch traffic,Task,09/11/24 08:00,09/11/24 10:00,Bob".to_string(),
        ",,,,,".to_string(),
        "Prod-03,Smoke tests,Task,09/11/24 10:00,09/11/24 12:30,Alice".to_string(),
    ];
    let input = write_csv(dir.path(), "padded", &rows);

    sg().args(["check", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rows: 3"))
        .stdout(predicate::str::contains("3 of 3 rows carry two valid dates"));
}

#[test]
fn test_all_unparsable_dates_yield_empty_result() {
    let dir = tempfile::tempdir().expect("tempdir");
    let rows = vec![
        "Prod-01,Deploy backend,Milestone,today,tomorrow,Alice".to_string(),
        "Prod-02,Switch traffic,Task,08.11.2024,09.11.2024,Bob".to_string(),
    ];
    let input = write_csv(dir.path(), "unparsable", &rows);
    let out = dir.path().join("unparsable.html");

    chart_cmd(&input, &out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid data after cleaning"));
    assert!(!out.exists());
}

#[test]
fn test_extra_columns_are_tolerated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("extra.csv");
    fs::write(
        &path,
        "Activity Number,Activity,Milestone/task,Start Date (CET),End Date (CET),Responsible Person,Notes\n\
         Prod-01,Deploy backend,Milestone,08/11/24 17:00,08/11/24 19:30,Alice,ignore me\n",
    )
    .expect("write extra-column csv");
    let out = dir.path().join("extra.html");

    chart_cmd(&path, &out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks selected: 1"));
}
