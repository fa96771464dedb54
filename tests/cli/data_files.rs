use predicates::prelude::*;

use crate::common::{THREE_COUNTRIES, country_table, json_stdout, write_dataset};

#[test]
fn custom_dataset_is_filtered_and_sorted() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(dir.path(), "three.json", THREE_COUNTRIES);

    let output = country_table()
        .arg("--data")
        .arg(&data)
        .args(["--continent", "AF", "--sort", "name", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value = json_stdout(&output);
    assert_eq!(value["total"], 2);
    let names: Vec<&str> = value["rows"].as_array().unwrap().iter().map(|r| r["nameUn"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Benin", "Chad"]);
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_dataset_is_detected_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "one.yaml",
        "- { id: x, name: Peru, nameUn: Peru, code: PE, continent: SA, hasStates: false }\n",
    );

    country_table()
        .arg("--data")
        .arg(&data)
        .args(["--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x,Peru,Peru,PE,SA,false"));
}

#[test]
fn unknown_continent_code_in_dataset_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = write_dataset(
        dir.path(),
        "bad.json",
        r#"[{ "id": "1", "name": "Atlantis", "nameUn": "Atlantis", "code": "AT", "continent": "XX", "hasStates": false }]"#,
    );

    country_table()
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown continent code 'XX'"));
}

#[test]
fn duplicate_ids_in_dataset_fail() {
    let dir = tempfile::tempdir().unwrap();
    let body = THREE_COUNTRIES.replace("\"id\": \"c\"", "\"id\": \"a\"");
    let data = write_dataset(dir.path(), "dup.json", &body);

    country_table()
        .arg("--data")
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate id 'a'"));
}

#[test]
fn missing_dataset_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    country_table()
        .arg("--data")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn output_flag_writes_file_not_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.tsv");

    country_table()
        .args(["--has-states", "yes", "--format", "tsv", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("id\tname\tname_un\tcode\tcontinent\thas_states\n"));
    assert_eq!(text.lines().count(), 11);
    assert!(text.lines().skip(1).all(|l| l.ends_with("\ttrue")));
}
