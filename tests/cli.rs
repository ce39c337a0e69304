use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

use staff_report::read_report_rows;

const SAMPLE: &str = "\
Manager,1,Alice,5000,Eng
Employee,2,Bob,3000,1
Employee,3,Carol,,1
Employee,4,Dan,-50,1
Employee,5,Eve,3000,9
Manager,10,Olga,4000,Ops
Employee,11,Zed,4500,10
Employee,12,Amy,1200.5,10
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("staff.txt");
    fs::write(&path, SAMPLE).unwrap();
    path
}

fn cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_staff-report"))
}

#[test]
fn shows_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("staff-report"));
}

#[test]
fn prints_report_to_console() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let expected = "\
Eng
Manager,1,Alice,5000.0
Employee,2,Bob,3000.0
Employee,3,Carol,0.0
3, 2666.67
Ops
Manager,10,Olga,4000.0
Employee,12,Amy,1200.5
Employee,11,Zed,4500.0
3, 3233.50
Invalid data:
Employee,4,Dan,-50,1
Employee,5,Eve,3000,9
";

    cmd()
        .arg("--input")
        .arg(&input)
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn sorts_by_salary_descending() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    cmd()
        .arg("--input")
        .arg(&input)
        .args(["--sort=salary", "--order=desc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Manager,10,Olga,4000.0\nEmployee,11,Zed,4500.0\nEmployee,12,Amy,1200.5\n",
        ))
        .stdout(predicate::str::contains(
            "Manager,1,Alice,5000.0\nEmployee,2,Bob,3000.0\nEmployee,3,Carol,0.0\n",
        ));
}

#[test]
fn writes_report_file_with_invalid_section() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("report.txt");
    fs::write(&out, "stale contents\n").unwrap();

    cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output=file")
        .arg("--path")
        .arg(&out)
        .assert()
        .success()
        .stdout("");

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("Eng\nManager,1,Alice,5000.0\n"));
    assert!(!text.contains("stale contents"));
    assert!(text.ends_with(
        "3, 3233.50\n\nInvalid data:\nEmployee,4,Dan,-50,1\nEmployee,5,Eve,3000,9\n"
    ));
}

#[test]
fn report_file_rows_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("report.txt");

    cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output=file")
        .arg("--path")
        .arg(&out)
        .assert()
        .success();

    let rows = read_report_rows(fs::File::open(&out).unwrap()).unwrap();
    let summary: Vec<(i32, &str, f64)> = rows
        .iter()
        .map(|r| (r.id, r.name.as_str(), r.salary))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, "Alice", 5000.0),
            (2, "Bob", 3000.0),
            (3, "Carol", 0.0),
            (10, "Olga", 4000.0),
            (12, "Amy", 1200.5),
            (11, "Zed", 4500.0),
        ]
    );
}

#[test]
fn json_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let output = cmd()
        .arg("--input")
        .arg(&input)
        .arg("--format=json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["departments"].as_array().unwrap().len(), 2);
    assert_eq!(value["departments"][1]["name"], "Ops");
    assert_eq!(value["invalid_lines"][0], "Employee,4,Dan,-50,1");
}

#[test]
fn rejects_bad_sort_value() {
    cmd()
        .arg("--sort=age")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--sort"))
        .stdout("");
}

#[test]
fn rejects_bad_order_value() {
    cmd()
        .arg("--order=sideways")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--order"));
}

#[test]
fn file_output_requires_path() {
    cmd()
        .arg("--output=file")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--path"));
}

#[test]
fn path_without_file_output_is_rejected() {
    cmd()
        .args(["--path", "somewhere.txt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output=file"));
}

#[test]
fn missing_input_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--input")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Error reading input"));
}

#[test]
fn unwritable_output_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("no_such_dir").join("report.txt");

    cmd()
        .arg("--input")
        .arg(&input)
        .arg("--output=file")
        .arg("--path")
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::function(|err: &str| {
            err.matches("Error writing file").count() == 1
        }));
}
