use predicates::prelude::*;

use crate::common::{THREE_COUNTRIES, country_table, write_dataset};

#[test]
fn session_applies_commands_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), "three.json", THREE_COUNTRIES);

    let output = country_table()
        .arg("--data")
        .arg(&data)
        .args(["--interactive", "--format", "csv"])
        .write_stdin("continent AF\nsort name\nsort name\nquit\nreset\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let renders: Vec<&str> = text.split("id,name,name_un,code,continent,has_states\n").skip(1).collect();
    assert_eq!(renders.len(), 4);
    assert!(renders[1].starts_with("a,Chad"));
    assert!(renders[2].starts_with("c,Benin"));
    assert!(renders[3].starts_with("a,Chad"));
}

#[test]
fn unknown_command_reports_and_continues() {
    country_table()
        .args(["--interactive", "--format", "md"])
        .write_stdin("teleport\nstates yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: "))
        .stdout(predicate::str::contains("1–10 of 18"));
}

#[test]
fn narrowing_filter_on_late_page_returns_to_first_page() {
    let output = country_table()
        .args(["--interactive", "--format", "json"])
        .write_stdin("page 5\ncontinent OC\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let renders: Vec<serde_json::Value> = serde_json::Deserializer::from_slice(&output.stdout)
        .into_iter()
        .collect::<Result<_, _>>()
        .expect("every render is a JSON document");
    assert_eq!(renders.len(), 3);
    assert_eq!(renders[1]["view"]["page"], 5);

    let last = &renders[2];
    assert_eq!(last["view"]["continent"], "OC");
    assert_eq!(last["view"]["page"], 1);
    assert_eq!(last["total"], 14);
    assert_eq!(last["rows"].as_array().map(Vec::len), Some(10));
}

#[test]
fn end_of_input_ends_session() {
    country_table()
        .args(["--interactive", "--ascii"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("1–10 of 194"));
}

#[test]
fn help_lists_commands() {
    country_table()
        .arg("-i")
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("continent <code|name|all>"));
}
